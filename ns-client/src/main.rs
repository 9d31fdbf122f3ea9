use std::path::PathBuf;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use tracing::info;

use ns_render::NineSlicePlugin;

mod config;
mod scene;


#[derive(Parser)]
#[command(name = "ns-client", about = "Nine-slice panel demo")]
struct Args {
    /// Panel layout definition, TOML.
    #[arg(long, default_value = "ns-client/panels.toml")]
    config: PathBuf,
}

fn main() {
    tracing_subscriber::fmt().without_time().compact().init();

    let args = Args::parse();
    let config = config::load_config(&args.config);
    info!("starting with {} panels", config.panels.len());

    App::new()
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_plugins(NineSlicePlugin)
        .insert_resource(config)
        .add_systems(Startup, scene::setup_scene)
        .add_systems(Update, (scene::pulse_panel_scale, scene::log_version_bumps))
        .run();
}
