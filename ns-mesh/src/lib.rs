//! Geometry core for nine-sliced panel meshes.
//!
//! Pure functions only: margins go in, vertex/UV buffers come out. The ECS
//! integration lives in `ns-render`.

pub mod slice;


pub use slice::{
    TRIANGLE_INDICES, VERTEX_COUNT, adjust_margins_for_scale, vertices_and_uvs,
    write_vertices_and_uvs,
};
