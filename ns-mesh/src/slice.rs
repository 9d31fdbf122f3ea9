use bevy::prelude::{Vec3, Vec4};

/// A nine-sliced panel is always a 4x4 vertex grid, row-major (`y * 4 + x`).
pub const VERTEX_COUNT: usize = 16;

/// Fixed triangulation over the 3x3 cell grid: two triangles per cell,
/// consistent winding, vertices referenced as `row * 4 + col`. Identical for
/// every panel, never regenerated.
pub const TRIANGLE_INDICES: [u32; 54] = [
    0, 1, 4, 4, 1, 5, 1, 2, 5, 5, 2, 6, 2, 3, 6, 6, 3, 7, //
    4, 5, 8, 8, 5, 9, 5, 6, 9, 9, 6, 10, 6, 7, 10, 10, 7, 11, //
    8, 9, 12, 12, 9, 13, 9, 10, 13, 13, 10, 14, 10, 11, 14, 14, 11, 15,
];

/// Writes the 16 grid positions and UVs for the given margins.
///
/// Margin lanes are `x = left, y = right, z = top, w = bottom`, normalized to
/// the unit quad. Each axis collapses to four coordinates
/// `[0, near, 1 - far, 1]`; the grid is their cartesian product with Z = 0.
/// Out-of-range margins are not rejected, they just produce overlapping or
/// inverted bands.
pub fn write_vertices_and_uvs(
    geometry_margins: Vec4,
    uv_margins: Vec4,
    positions: &mut [[f32; 3]],
    uvs: &mut [[f32; 2]],
) {
    let x_vertex = [0.0, geometry_margins.x, 1.0 - geometry_margins.y, 1.0];
    let y_vertex = [0.0, geometry_margins.z, 1.0 - geometry_margins.w, 1.0];
    let x_uv = [0.0, uv_margins.x, 1.0 - uv_margins.y, 1.0];
    let y_uv = [0.0, uv_margins.z, 1.0 - uv_margins.w, 1.0];
    for index in 0..VERTEX_COUNT {
        let x = index % 4;
        let y = index / 4;
        positions[index] = [x_vertex[x], y_vertex[y], 0.0];
        uvs[index] = [x_uv[x], y_uv[y]];
    }
}

/// Allocating wrapper around [`write_vertices_and_uvs`], in the buffer shape
/// mesh attributes take.
pub fn vertices_and_uvs(
    geometry_margins: Vec4,
    uv_margins: Vec4,
) -> (Vec<[f32; 3]>, Vec<[f32; 2]>) {
    let mut positions = vec![[0.0; 3]; VERTEX_COUNT];
    let mut uvs = vec![[0.0; 2]; VERTEX_COUNT];
    write_vertices_and_uvs(geometry_margins, uv_margins, &mut positions, &mut uvs);
    (positions, uvs)
}

/// Divides geometry margins by the world scale of their axis so the rendered
/// inset keeps a constant on-screen size when the panel is stretched.
///
/// Left/right ride on X, top/bottom on Y. UV margins are never adjusted.
/// A zero scale component yields non-finite margins, which flow unmodified
/// into the vertex positions.
pub fn adjust_margins_for_scale(geometry_margins: Vec4, world_scale: Vec3) -> Vec4 {
    Vec4::new(
        geometry_margins.x / world_scale.x,
        geometry_margins.y / world_scale.x,
        geometry_margins.z / world_scale.y,
        geometry_margins.w / world_scale.y,
    )
}
