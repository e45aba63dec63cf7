use bevy::prelude::*;

use crate::{
    core::{
        config::SimConfig, constants::{LAUNCH_OFFSET_Y, SCATTER_FRACTION}, geometry::scatter,
        rng::SimRng, zones::Zones,
    },
    game::{
        ants::{Ant, AntSize, idle_roam},
        physix::Pose,
        targets::{Target, TargetKind, initial_leaf_positions, initial_spider_positions, target_bundle},
    },
};

/// Pointer press in sim space (origin bottom-left, y up).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerPress {
    pub position: Vec2,
    pub button: MouseButton,
}

/// Ants of one size and the targets they hunt.
#[derive(Debug, Default, Clone)]
pub struct Squad {
    pub ants: Vec<Entity>,
    /// Ants in `AntMode::Idle`, in the order they became idle.
    pub idle: Vec<Entity>,
    pub targets: Vec<Entity>,
    /// Targets not yet claimed by a full pair, oldest first.
    pub fresh: Vec<Entity>,
}

impl Squad {
    fn add_target(&mut self, target: Entity) {
        self.targets.push(target);
        self.fresh.push(target);
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct Squads {
    /// Big ants and spiders.
    pub hunters: Squad,
    /// Small ants and leaves.
    pub gatherers: Squad,
}

impl Squads {
    pub fn squad(&self, kind: TargetKind) -> &Squad {
        match kind {
            TargetKind::Spider => &self.hunters,
            TargetKind::Leaf => &self.gatherers,
        }
    }

    pub fn squad_mut(&mut self, kind: TargetKind) -> &mut Squad {
        match kind {
            TargetKind::Spider => &mut self.hunters,
            TargetKind::Leaf => &mut self.gatherers,
        }
    }
}

pub fn setup_colony(
    mut commands: Commands,
    config: Res<SimConfig>,
    zones: Res<Zones>,
    mut rng: ResMut<SimRng>,
    mut squads: ResMut<Squads>,
) {
    for position in initial_leaf_positions(&config) {
        let leaf = commands
            .spawn(target_bundle(TargetKind::Leaf, position, &config, &zones))
            .id();
        squads.gatherers.add_target(leaf);
    }

    for position in initial_spider_positions(&config) {
        let spider = commands
            .spawn(target_bundle(TargetKind::Spider, position, &config, &zones))
            .id();
        squads.hunters.add_target(spider);
    }

    let home_range = SCATTER_FRACTION * zones.nest.radius;
    for n in 0..config.ant_count {
        let (size, speed) = if n < config.big_ant_count() {
            (AntSize::Big, config.big_ant_speed)
        } else {
            (AntSize::Small, config.small_ant_speed)
        };
        let position = scatter(zones.nest.center, home_range, &mut rng.rng);
        let ant = commands
            .spawn((Ant::new(size, speed), Pose::at(position), idle_roam(&zones)))
            .id();
        let squad = squads.squad_mut(size.prey());
        squad.ants.push(ant);
        squad.idle.push(ant);
    }

    info!(
        "Colony ready: {} big ants, {} small ants, {} spiders, {} leaves (seed {})",
        squads.hunters.ants.len(),
        squads.gatherers.ants.len(),
        squads.hunters.targets.len(),
        squads.gatherers.targets.len(),
        rng.seed,
    );
}

// Spawns a target for every press left of the hunting edge.
pub fn spawn_from_clicks(
    mut commands: Commands,
    mut presses: EventReader<PointerPress>,
    config: Res<SimConfig>,
    zones: Res<Zones>,
    mut squads: ResMut<Squads>,
) {
    for press in presses.read() {
        if press.position.x > zones.hunting_edge() {
            continue;
        }
        let kind = match press.button {
            MouseButton::Left => TargetKind::Spider,
            _ => TargetKind::Leaf,
        };
        let target = commands
            .spawn(target_bundle(kind, press.position, &config, &zones))
            .id();
        squads.squad_mut(kind).add_target(target);
        info!("Spawned {:?} {:?} at {:?}", kind, target, press.position);
    }
}

/// Assignment and pursuit for both squads, spiders first.
pub fn coordinate_squads(
    time: Res<Time>,
    config: Res<SimConfig>,
    zones: Res<Zones>,
    mut rng: ResMut<SimRng>,
    mut squads: ResMut<Squads>,
    mut ants: Query<(&mut Ant, &mut Pose), Without<Target>>,
    mut targets: Query<(&mut Target, &mut Pose), Without<Ant>>,
) {
    let delta = time.delta_secs();
    for kind in TargetKind::ALL {
        let squad = squads.squad_mut(kind);
        sense_fresh_target(squad, delta, &config, &zones, &mut ants, &mut targets);
        drive_ants(squad, &zones, &mut rng, &mut ants, &mut targets);
        refresh_idle(squad, &ants);
        squad
            .fresh
            .retain(|target| targets.get(*target).is_ok_and(|(t, _)| t.is_fresh()));
    }
}

/// Once the oldest fresh target has waited out the sensing delay, the first
/// two idle ants lock onto it together.
fn sense_fresh_target(
    squad: &mut Squad,
    delta: f32,
    config: &SimConfig,
    zones: &Zones,
    ants: &mut Query<(&mut Ant, &mut Pose), Without<Target>>,
    targets: &mut Query<(&mut Target, &mut Pose), Without<Ant>>,
) {
    if squad.idle.len() < 2 {
        return;
    }
    let Some(&handle) = squad.fresh.first() else {
        return;
    };
    let Ok((mut target, _)) = targets.get_mut(handle) else {
        return;
    };

    target.sensing += delta;
    if target.sensing <= config.sensing_delay_secs {
        return;
    }
    target.sensing = 0.0;

    for (n, &ant_entity) in squad.idle.iter().take(2).enumerate() {
        let Ok((mut ant, mut pose)) = ants.get_mut(ant_entity) else {
            continue;
        };
        ant.launch(handle);
        let dy = if n > 0 { LAUNCH_OFFSET_Y } else { -LAUNCH_OFFSET_Y };
        pose.position = zones.nest.center + Vec2::new(0.0, dy);
    }
    // Both ants are committed in the same step.
    target.lock_count += 2;
    info!(
        "{:?} {:?} sensed, pair locked (lock count {})",
        target.kind, handle, target.lock_count
    );
}

fn drive_ants(
    squad: &Squad,
    zones: &Zones,
    rng: &mut SimRng,
    ants: &mut Query<(&mut Ant, &mut Pose), Without<Target>>,
    targets: &mut Query<(&mut Target, &mut Pose), Without<Ant>>,
) {
    for &ant_entity in &squad.ants {
        let Ok((mut ant, mut pose)) = ants.get_mut(ant_entity) else {
            continue;
        };
        let Some(handle) = ant.mode.target() else {
            continue;
        };
        let Ok((mut target, mut target_pose)) = targets.get_mut(handle) else {
            warn!("{:?} ant {:?} lost its target {:?}", ant.size, ant_entity, handle);
            continue;
        };
        if target.lock_count > 1 {
            ant.chase(
                &mut pose,
                &mut target,
                &mut target_pose,
                zones,
                &mut rng.rng,
            );
        }
    }
}

/// Busy ants leave the idle pool, newly idle ones join at the back.
fn refresh_idle(squad: &mut Squad, ants: &Query<(&mut Ant, &mut Pose), Without<Target>>) {
    let is_idle = |entity: &Entity| ants.get(*entity).is_ok_and(|(ant, _)| ant.mode.is_idle());

    squad.idle.retain(is_idle);
    for ant in &squad.ants {
        if is_idle(ant) && !squad.idle.contains(ant) {
            squad.idle.push(*ant);
        }
    }
}
