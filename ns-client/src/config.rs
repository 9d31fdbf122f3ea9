use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;
use tracing::warn;

use ns_render::NineSliceSettings;

/// Demo panel layout, loaded from TOML. Any problem with the file falls back
/// to the built-in layout.
#[derive(Resource, Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub panels: Vec<PanelConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub name: String,
    /// `[left, right, top, bottom]`, normalized.
    pub geometry_margins: [f32; 4],
    pub uv_margins: [f32; 4],
    pub translation: [f32; 3],
    pub scale: [f32; 3],
    pub pulse: Option<PulseConfig>,
}

/// Oscillates the panel's X scale over time so the regeneration path is
/// visible in a running demo.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PulseConfig {
    pub amplitude: f32,
    pub rate: f32,
}

impl PanelConfig {
    pub fn settings(&self) -> NineSliceSettings {
        NineSliceSettings::new(
            Vec4::from_array(self.geometry_margins),
            Vec4::from_array(self.uv_margins),
        )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.translation))
            .with_scale(Vec3::from_array(self.scale))
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            name: "panel".to_string(),
            geometry_margins: [1.0 / 3.0; 4],
            uv_margins: [1.0 / 3.0; 4],
            translation: [0.0; 3],
            scale: [1.0; 3],
            pulse: None,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        let framed = PanelConfig {
            name: "framed".to_string(),
            geometry_margins: [0.25; 4],
            ..PanelConfig::default()
        };
        let stretched = PanelConfig {
            name: "stretched".to_string(),
            geometry_margins: [0.25; 4],
            translation: [1.5, 0.0, 0.0],
            scale: [3.0, 1.0, 1.0],
            ..PanelConfig::default()
        };
        let pulsing = PanelConfig {
            name: "pulsing".to_string(),
            geometry_margins: [0.25; 4],
            translation: [0.0, 1.5, 0.0],
            pulse: Some(PulseConfig {
                amplitude: 0.5,
                rate: 1.0,
            }),
            ..PanelConfig::default()
        };
        Self {
            panels: vec![framed, stretched, pulsing],
        }
    }
}

pub fn load_config(path: &Path) -> DemoConfig {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("could not read {}: {err}, using built-in panels", path.display());
            return DemoConfig::default();
        }
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            warn!("failed to parse {}: {err}, using built-in panels", path.display());
            DemoConfig::default()
        }
    }
}
