use bevy::prelude::*;
use tracing::{debug, info};

use ns_render::{MeshVersion, spawn_nine_slice};

use crate::config::DemoConfig;

/// Drives a panel's X scale with a sine wave so the tracker has something to
/// react to.
#[derive(Component)]
pub struct ScalePulse {
    pub base_scale: Vec3,
    pub amplitude: f32,
    pub rate: f32,
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<DemoConfig>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(1.5, 1.0, 6.0).looking_at(Vec3::new(1.5, 0.75, 0.0), Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.85, 0.9),
        unlit: true,
        ..default()
    });

    for panel in &config.panels {
        let entity = spawn_nine_slice(
            &mut commands,
            &mut meshes,
            material.clone(),
            panel.settings(),
            panel.transform(),
        );
        commands.entity(entity).insert(Name::new(panel.name.clone()));
        if let Some(pulse) = panel.pulse {
            commands.entity(entity).insert(ScalePulse {
                base_scale: Vec3::from_array(panel.scale),
                amplitude: pulse.amplitude,
                rate: pulse.rate,
            });
        }
        info!("spawned panel '{}' ({entity})", panel.name);
    }
}

pub fn pulse_panel_scale(time: Res<Time>, mut panels: Query<(&mut Transform, &ScalePulse)>) {
    for (mut transform, pulse) in panels.iter_mut() {
        let factor = 1.0 + pulse.amplitude * (time.elapsed_secs() * pulse.rate).sin();
        transform.scale = pulse.base_scale * Vec3::new(factor, 1.0, 1.0);
    }
}

pub fn log_version_bumps(panels: Query<(&Name, &MeshVersion), Changed<MeshVersion>>) {
    for (name, version) in panels.iter() {
        debug!("{name}: geometry version {}", version.0);
    }
}
