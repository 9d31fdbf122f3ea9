use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use ns_mesh::slice::{TRIANGLE_INDICES, VERTEX_COUNT, adjust_margins_for_scale, vertices_and_uvs};

use crate::components::{MeshVersion, NineSliceSettings};

const OPAQUE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Builds a fresh panel mesh: 4x4 vertex grid, opaque white vertex colors and
/// the fixed 54-entry triangulation. Colors are initialized here and never
/// touched again.
pub fn build_slice_mesh(settings: &NineSliceSettings) -> Mesh {
    let (positions, uvs) = vertices_and_uvs(settings.geometry_margins, settings.uv_margins);
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, vec![OPAQUE_WHITE; VERTEX_COUNT]);
    mesh.insert_indices(Indices::U32(TRIANGLE_INDICES.to_vec()));
    mesh
}

/// Overwrites the position/UV attributes for the given world scale and bumps
/// the version counter. Geometry margins are compensated for scale so the
/// rendered inset keeps its size; UV margins are written as-is.
pub fn refresh_slice_mesh(
    mesh: &mut Mesh,
    settings: &NineSliceSettings,
    world_scale: Vec3,
    version: &mut MeshVersion,
) {
    let adjusted = adjust_margins_for_scale(settings.geometry_margins, world_scale);
    let (positions, uvs) = vertices_and_uvs(adjusted, settings.uv_margins);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    version.bump();
}

/// Spawns a complete nine-slice panel entity and returns it.
pub fn spawn_nine_slice(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: Handle<StandardMaterial>,
    settings: NineSliceSettings,
    transform: Transform,
) -> Entity {
    let mesh = meshes.add(build_slice_mesh(&settings));
    commands
        .spawn((
            Name::new("NineSlicePanel"),
            Mesh3d(mesh),
            MeshMaterial3d(material),
            settings,
            MeshVersion::default(),
            transform,
            GlobalTransform::default(),
            Visibility::Visible,
            InheritedVisibility::default(),
            ViewVisibility::default(),
        ))
        .id()
}
