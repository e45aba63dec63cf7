use ants_hunt::{ConfigError, Presentation, SimConfig, SimulationPlugin};
use bevy::{
    log::{Level, LogPlugin},
    prelude::*,
};
use clap::Parser;

/// Ants hunting spiders and leaves in pairs
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the scatter placements
    #[arg(long)]
    seed: Option<u64>,

    /// Total number of ants, half of them big
    #[arg(long)]
    ants: Option<usize>,

    /// Spiders on screen at start
    #[arg(long)]
    spiders: Option<usize>,

    /// Leaves on screen at start
    #[arg(long)]
    leaves: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> SimConfig {
        let defaults = SimConfig::default();
        SimConfig {
            seed: self.seed,
            ant_count: self.ants.unwrap_or(defaults.ant_count),
            spider_count: self.spiders.unwrap_or(defaults.spider_count),
            leaf_count: self.leaves.unwrap_or(defaults.leaf_count),
            ..defaults
        }
    }
}

fn main() -> Result<(), ConfigError> {
    let args = Args::parse();
    let config = args.config();
    config.validate()?;

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Ants Hunt".into(),
                        resolution: (config.screen_width, config.screen_height).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin { level, ..default() }),
        )
        .insert_resource(Time::<Fixed>::from_hz(config.fps))
        .add_plugins((SimulationPlugin { config }, Presentation))
        .run();

    Ok(())
}
