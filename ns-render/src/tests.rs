use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;

use super::{
    MeshVersion, NineSliceSettings, ScaleCache, build_slice_mesh, evict_despawned_panels,
    update_nine_slice_meshes,
};

fn test_app() -> App {
    let mut app = App::new();
    app.insert_resource(Assets::<Mesh>::default())
        .init_resource::<ScaleCache>()
        .add_systems(
            Update,
            (
                update_nine_slice_meshes,
                evict_despawned_panels.after(update_nine_slice_meshes),
            ),
        );
    app
}

fn spawn_panel(
    app: &mut App,
    settings: NineSliceSettings,
    transform: Option<GlobalTransform>,
) -> (Entity, Handle<Mesh>) {
    let handle = app
        .world_mut()
        .resource_mut::<Assets<Mesh>>()
        .add(build_slice_mesh(&settings));
    let mut panel = app
        .world_mut()
        .spawn((Mesh3d(handle.clone()), settings, MeshVersion::default()));
    if let Some(transform) = transform {
        panel.insert(transform);
    }
    (panel.id(), handle)
}

fn positions(app: &App, handle: &Handle<Mesh>) -> Vec<[f32; 3]> {
    let meshes = app.world().resource::<Assets<Mesh>>();
    let mesh = meshes.get(handle).unwrap();
    match mesh.attribute(Mesh::ATTRIBUTE_POSITION).unwrap() {
        VertexAttributeValues::Float32x3(values) => values.clone(),
        _ => panic!("unexpected position attribute format"),
    }
}

fn uvs(app: &App, handle: &Handle<Mesh>) -> Vec<[f32; 2]> {
    let meshes = app.world().resource::<Assets<Mesh>>();
    let mesh = meshes.get(handle).unwrap();
    match mesh.attribute(Mesh::ATTRIBUTE_UV_0).unwrap() {
        VertexAttributeValues::Float32x2(values) => values.clone(),
        _ => panic!("unexpected uv attribute format"),
    }
}

fn version(app: &App, entity: Entity) -> u32 {
    app.world().get::<MeshVersion>(entity).unwrap().0
}

fn assert_row0_x(positions: &[[f32; 3]], expected: [f32; 4]) {
    for (i, expected) in expected.iter().enumerate() {
        assert!(
            (positions[i][0] - expected).abs() < 1e-3,
            "vertex {i} x: {} != {expected}",
            positions[i][0]
        );
    }
}

#[test]
fn built_mesh_has_full_attribute_set() {
    let mesh = build_slice_mesh(&NineSliceSettings::default());
    assert_eq!(mesh.count_vertices(), 16);
    assert_eq!(mesh.indices().unwrap().len(), 54);

    match mesh.attribute(Mesh::ATTRIBUTE_COLOR).unwrap() {
        VertexAttributeValues::Float32x4(colors) => {
            assert_eq!(colors.len(), 16);
            assert!(colors.iter().all(|c| *c == [1.0, 1.0, 1.0, 1.0]));
        }
        _ => panic!("unexpected color attribute format"),
    }
}

#[test]
fn unchanged_scale_is_a_cache_hit() {
    let mut app = test_app();
    let settings = NineSliceSettings::uniform(0.5, 0.5);
    let (entity, _) = spawn_panel(
        &mut app,
        settings,
        Some(GlobalTransform::from(Transform::from_scale(Vec3::ONE))),
    );

    app.update();
    assert_eq!(version(&app, entity), 1);

    // Second tick with the same scale must not rewrite anything.
    app.update();
    assert_eq!(version(&app, entity), 1);
}

#[test]
fn scale_change_triggers_single_recompute() {
    let mut app = test_app();
    let settings = NineSliceSettings::uniform(0.5, 0.5);
    let (entity, handle) = spawn_panel(
        &mut app,
        settings,
        Some(GlobalTransform::from(Transform::from_scale(Vec3::ONE))),
    );
    app.update();
    assert_eq!(version(&app, entity), 1);

    let stretched = Vec3::new(4.0, 2.0, 2.0);
    app.world_mut()
        .entity_mut(entity)
        .insert(GlobalTransform::from(Transform::from_scale(stretched)));
    app.update();
    assert_eq!(version(&app, entity), 2);
    assert_eq!(
        app.world().resource::<ScaleCache>().last_scale(entity),
        Some(stretched)
    );

    // Compensated X margins 0.5 / 4 = 0.125; UVs stay at the raw margins.
    assert_row0_x(&positions(&app, &handle), [0.0, 0.125, 0.875, 1.0]);
    let uvs = uvs(&app, &handle);
    assert!((uvs[1][0] - 0.5).abs() < 1e-3);
    assert!((uvs[2][0] - 0.5).abs() < 1e-3);

    app.update();
    assert_eq!(version(&app, entity), 2);
}

#[test]
fn missing_transform_means_unit_scale() {
    let mut app = test_app();
    let (entity, handle) = spawn_panel(&mut app, NineSliceSettings::uniform(0.5, 0.5), None);

    app.update();
    assert_eq!(version(&app, entity), 1);
    assert_eq!(
        app.world().resource::<ScaleCache>().last_scale(entity),
        Some(Vec3::ONE)
    );
    assert_row0_x(&positions(&app, &handle), [0.0, 0.5, 0.5, 1.0]);
}

#[test]
fn despawn_evicts_cache_entry() {
    let mut app = test_app();
    let (entity, _) = spawn_panel(&mut app, NineSliceSettings::default(), None);

    app.update();
    assert_eq!(app.world().resource::<ScaleCache>().len(), 1);

    app.world_mut().despawn(entity);
    app.update();
    assert!(app.world().resource::<ScaleCache>().is_empty());
}
