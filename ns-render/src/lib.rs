use bevy::prelude::*;

mod cache;
mod components;
mod mesh;
mod systems;

#[cfg(test)]
mod tests;

pub use cache::ScaleCache;
pub use components::{MeshVersion, NineSliceSettings};
pub use mesh::{build_slice_mesh, refresh_slice_mesh, spawn_nine_slice};
pub use systems::{evict_despawned_panels, update_nine_slice_meshes};

pub struct NineSlicePlugin;

impl Plugin for NineSlicePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScaleCache>().add_systems(
            Update,
            (
                update_nine_slice_meshes,
                evict_despawned_panels.after(update_nine_slice_meshes),
            ),
        );
    }
}
