use std::collections::HashMap;

use bevy::prelude::*;

/// Last world scale seen per panel entity. Geometry is only regenerated when
/// the observed scale differs from the cached one.
#[derive(Resource, Default)]
pub struct ScaleCache {
    last_scales: HashMap<Entity, Vec3>,
}

impl ScaleCache {
    /// Records `scale` for `entity` and reports whether it differs from the
    /// previously cached value. A first observation counts as changed.
    /// Comparison is exact component equality, not epsilon-based.
    pub fn observe(&mut self, entity: Entity, scale: Vec3) -> bool {
        match self.last_scales.insert(entity, scale) {
            Some(previous) => previous != scale,
            None => true,
        }
    }

    pub fn last_scale(&self, entity: Entity) -> Option<Vec3> {
        self.last_scales.get(&entity).copied()
    }

    pub fn evict(&mut self, entity: Entity) {
        self.last_scales.remove(&entity);
    }

    pub fn len(&self) -> usize {
        self.last_scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_scales.is_empty()
    }
}
