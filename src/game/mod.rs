use bevy::prelude::*;

use crate::core::{config::SimConfig, rng::SimRng, zones::Zones};

pub mod ants;
pub mod colony;
pub mod physix;
pub mod render;
pub mod targets;

use colony::{PointerPress, Squads, coordinate_squads, setup_colony, spawn_from_clicks};

/// The hunt itself: resources, start-up spawn and the per-tick chain.
/// Rendering and input live in `render::Presentation`.
pub struct SimulationPlugin {
    pub config: SimConfig,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let rng = SimRng::from_seed_or_random(self.config.seed);
        info!("Simulation seed: {}", rng.seed);

        app.insert_resource(self.config.clone())
            .insert_resource(Zones::from_config(&self.config))
            .insert_resource(rng)
            .init_resource::<Squads>()
            .add_event::<PointerPress>()
            .add_systems(Startup, setup_colony)
            // Input first, then targets, then ants, then the pairing pass.
            .add_systems(
                FixedUpdate,
                (
                    spawn_from_clicks,
                    targets::animate_targets,
                    ants::animate_ants,
                    coordinate_squads,
                )
                    .chain(),
            );
    }
}
