#![allow(dead_code)]

use std::{collections::HashSet, time::Duration};

use ants_hunt::{
    SimConfig, SimulationPlugin,
    game::{
        ants::Ant,
        colony::{Squad, Squads},
        physix::Pose,
        targets::Target,
    },
};
use bevy::prelude::*;

pub const FRAME: f32 = 1.0 / 30.0;

/// Simulation without window or renderer. Time is advanced by `tick`.
pub fn headless_app(config: SimConfig) -> App {
    let mut app = App::new();
    app.insert_resource(Time::<()>::default());
    app.add_plugins(SimulationPlugin { config });
    app.world_mut().run_schedule(Startup);
    app
}

pub fn tick(app: &mut App, delta: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(delta));
    app.world_mut().run_schedule(FixedUpdate);
}

pub fn squads(app: &App) -> Squads {
    app.world().resource::<Squads>().clone()
}

pub fn target(app: &App, entity: Entity) -> Target {
    app.world()
        .get::<Target>(entity)
        .cloned()
        .expect("target entity exists")
}

pub fn ant(app: &App, entity: Entity) -> Ant {
    app.world()
        .get::<Ant>(entity)
        .cloned()
        .expect("ant entity exists")
}

pub fn pose(app: &App, entity: Entity) -> Pose {
    *app.world().get::<Pose>(entity).expect("entity has a pose")
}

/// Ants whose current job is `target`.
pub fn ants_on(app: &App, squad: &Squad, target: Entity) -> Vec<Entity> {
    squad
        .ants
        .iter()
        .copied()
        .filter(|entity| ant(app, *entity).mode.target() == Some(target))
        .collect()
}

/// Counter, pairing and pool invariants that must hold after every tick.
pub fn check_invariants(app: &App) {
    let squads = squads(app);
    for squad in [&squads.hunters, &squads.gatherers] {
        for &entity in &squad.targets {
            let t = target(app, entity);
            assert!(t.hit_count <= 2, "{entity:?} hit {} times", t.hit_count);
            assert!(
                t.hit_count <= t.lock_count,
                "{entity:?} hit {} > lock {}",
                t.hit_count,
                t.lock_count
            );
            assert!(
                t.lock_count == 0 || t.lock_count == 2,
                "{entity:?} lock count {}",
                t.lock_count
            );
            assert!(ants_on(app, squad, entity).len() <= 2);
            assert_eq!(squad.fresh.contains(&entity), t.is_fresh());
        }

        let idle: HashSet<Entity> = squad.idle.iter().copied().collect();
        assert_eq!(idle.len(), squad.idle.len(), "idle pool has duplicates");
        for &entity in &squad.ants {
            let a = ant(app, entity);
            assert_eq!(a.mode.is_idle(), a.mode.target().is_none());
            assert_eq!(idle.contains(&entity), a.mode.is_idle());
        }
    }
}
