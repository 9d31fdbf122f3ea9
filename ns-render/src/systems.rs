use bevy::prelude::*;
use tracing::debug;

use crate::cache::ScaleCache;
use crate::components::{MeshVersion, NineSliceSettings};
use crate::mesh::refresh_slice_mesh;

/// Regenerates panel geometry for every entity whose world scale changed
/// since the last tick. Panels without a `GlobalTransform` are treated as
/// unscaled.
pub fn update_nine_slice_meshes(
    mut meshes: ResMut<Assets<Mesh>>,
    mut cache: ResMut<ScaleCache>,
    mut panels: Query<(
        Entity,
        &Mesh3d,
        &NineSliceSettings,
        &mut MeshVersion,
        Option<&GlobalTransform>,
    )>,
) {
    for (entity, mesh_handle, settings, mut version, transform) in panels.iter_mut() {
        // Missing asset: leave the cache untouched so the first tick where
        // it exists still regenerates.
        if !meshes.contains(&mesh_handle.0) {
            debug!("panel {entity}: mesh asset not available, skipping");
            continue;
        }
        let world_scale = match transform {
            Some(transform) => transform.compute_transform().scale,
            None => Vec3::ONE,
        };
        if !cache.observe(entity, world_scale) {
            continue;
        }
        // get_mut marks the asset modified, so it is only fetched on the
        // changed path.
        let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
            continue;
        };
        refresh_slice_mesh(mesh, settings, world_scale, &mut version);
        debug!(
            "panel {entity}: regenerated at scale {world_scale}, version {}",
            version.0
        );
    }
}

/// Drops cache entries for panels that lost their settings component or were
/// despawned, so the cache only ever holds live panels.
pub fn evict_despawned_panels(
    mut cache: ResMut<ScaleCache>,
    mut removed: RemovedComponents<NineSliceSettings>,
) {
    for entity in removed.read() {
        cache.evict(entity);
        debug!("panel {entity}: evicted scale cache entry");
    }
}
