use bevy::prelude::*;

/// Slicing parameters of one panel. Margin lanes are
/// `x = left, y = right, z = top, w = bottom`, normalized to the unit quad.
///
/// Opposing margins are expected to sum to at most 1; nothing enforces this,
/// a violation just produces overlapping bands.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct NineSliceSettings {
    /// Cut positions in local mesh space, before scale compensation.
    pub geometry_margins: Vec4,
    /// Cut positions in texture space. Never scale-compensated.
    pub uv_margins: Vec4,
}

impl NineSliceSettings {
    pub fn new(geometry_margins: Vec4, uv_margins: Vec4) -> Self {
        Self {
            geometry_margins,
            uv_margins,
        }
    }

    /// Same margin on all four edges, geometry and UV separately.
    pub fn uniform(geometry: f32, uv: f32) -> Self {
        Self::new(Vec4::splat(geometry), Vec4::splat(uv))
    }
}

impl Default for NineSliceSettings {
    fn default() -> Self {
        Self::uniform(1.0 / 3.0, 1.0 / 3.0)
    }
}

/// Bumped whenever the panel's vertex/UV data is rewritten, so host code
/// knows the geometry needs re-syncing.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshVersion(pub u32);

impl MeshVersion {
    pub fn bump(&mut self) {
        self.0 += 1;
    }
}
