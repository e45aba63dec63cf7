use bevy::prelude::*;

use crate::{
    core::{config::SimConfig, zones::Zones},
    game::physix::{EdgeRule, Pose, Roam, Squiggle},
};

const SPIDER_VELOCITY: Vec2 = Vec2::new(2.0, 3.5);
const SPIDER_TILT_STEP: f32 = 0.5;
const LEAF_VELOCITY: Vec2 = Vec2::new(1.0, -0.9);
const LEAF_TILT_STEP: f32 = 0.2;
const LEAF_SWAY: f32 = 30.0; // Horizontal half-range around the spawn x

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Spider,
    Leaf,
}

impl TargetKind {
    pub const ALL: [TargetKind; 2] = [TargetKind::Spider, TargetKind::Leaf];
}

/// Something the ants hunt. `lock_count` and `hit_count` are the only
/// coordination between the two ants of a pair.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Target {
    pub kind: TargetKind,
    /// Ants committed to this target.
    pub lock_count: u32,
    /// Ants that have reached it.
    pub hit_count: u32,
    /// Time spent waiting at the head of the fresh pool.
    pub sensing: f32,
    pub squiggle: Squiggle,
}

impl Target {
    pub fn new(kind: TargetKind) -> Self {
        let tilt_step = match kind {
            TargetKind::Spider => SPIDER_TILT_STEP,
            TargetKind::Leaf => LEAF_TILT_STEP,
        };
        Self {
            kind,
            lock_count: 0,
            hit_count: 0,
            sensing: 0.0,
            squiggle: Squiggle::new(tilt_step),
        }
    }

    /// Not yet claimed by a full pair.
    pub fn is_fresh(&self) -> bool {
        self.lock_count <= 1
    }

    /// Ants are carrying it, free movement is over.
    pub fn is_captured(&self) -> bool {
        self.hit_count > 0
    }
}

/// Spider that bounces around the whole hunting ground.
pub fn spider_bundle(position: Vec2, config: &SimConfig, zones: &Zones) -> (Target, Pose, Roam) {
    (
        Target::new(TargetKind::Spider),
        Pose::at(position),
        Roam::bouncing(
            SPIDER_VELOCITY,
            Vec2::ZERO,
            Vec2::new(zones.hunting_edge(), config.screen_height),
        ),
    )
}

/// Leaf that sways around its spawn column while falling, and comes back in
/// at the top once it drops off the bottom.
pub fn leaf_bundle(position: Vec2, config: &SimConfig) -> (Target, Pose, Roam) {
    (
        Target::new(TargetKind::Leaf),
        Pose::at(position),
        Roam {
            velocity: LEAF_VELOCITY,
            min: Vec2::new(position.x - LEAF_SWAY, 0.0),
            max: Vec2::new(position.x + LEAF_SWAY, config.screen_height),
            x_edge: EdgeRule::Bounce,
            y_edge: EdgeRule::Wrap,
        },
    )
}

pub fn target_bundle(
    kind: TargetKind,
    position: Vec2,
    config: &SimConfig,
    zones: &Zones,
) -> (Target, Pose, Roam) {
    match kind {
        TargetKind::Spider => spider_bundle(position, config, zones),
        TargetKind::Leaf => leaf_bundle(position, config),
    }
}

/// Initial spider positions: a column along the left edge.
pub fn initial_spider_positions(config: &SimConfig) -> Vec<Vec2> {
    if config.spider_count == 0 {
        return Vec::new();
    }
    let spacing = (config.screen_height - 40.0) / config.spider_count as f32;
    (0..config.spider_count)
        .map(|n| Vec2::new(20.0, 20.0 + n as f32 * spacing))
        .collect()
}

/// Initial leaf positions: a row along the top edge, clear of the nest.
pub fn initial_leaf_positions(config: &SimConfig) -> Vec<Vec2> {
    if config.leaf_count == 0 {
        return Vec::new();
    }
    let x_range = config.screen_width - 2.0 * config.nest_radius - 100.0;
    let spacing = (x_range - 50.0) / config.leaf_count as f32;
    (0..config.leaf_count)
        .map(|n| Vec2::new(50.0 + n as f32 * spacing, config.screen_height))
        .collect()
}

// Free movement of every target not yet reached by an ant.
pub fn animate_targets(mut targets: Query<(&mut Target, &mut Pose, &mut Roam)>) {
    for (mut target, mut pose, mut roam) in targets.iter_mut() {
        if target.is_captured() {
            continue;
        }
        pose.angle += target.squiggle.advance();
        roam.step(&mut pose.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn initial_batches_follow_the_screen() {
        let config = SimConfig::default();

        let spiders = initial_spider_positions(&config);
        assert_eq!(
            spiders,
            vec![
                Vec2::new(20.0, 20.0),
                Vec2::new(20.0, 150.0),
                Vec2::new(20.0, 280.0),
                Vec2::new(20.0, 410.0),
            ]
        );

        let leaves = initial_leaf_positions(&config);
        assert_eq!(leaves.len(), 4);
        assert_eq!(leaves[0], Vec2::new(50.0, 560.0));
        assert_eq!(leaves[1], Vec2::new(152.5, 560.0));
    }

    #[test]
    fn empty_batches() {
        let config = SimConfig {
            spider_count: 0,
            leaf_count: 0,
            ..SimConfig::default()
        };
        assert!(initial_spider_positions(&config).is_empty());
        assert!(initial_leaf_positions(&config).is_empty());
    }

    #[test]
    fn captured_target_stays_put() {
        let config = SimConfig::default();
        let zones = Zones::from_config(&config);
        let mut world = World::new();
        let free = world.spawn(spider_bundle(Vec2::new(100.0, 100.0), &config, &zones)).id();
        let mut bundle = spider_bundle(Vec2::new(200.0, 200.0), &config, &zones);
        bundle.0.hit_count = 1;
        let caught = world.spawn(bundle).id();

        world.run_system_once(animate_targets).unwrap();

        let free_pose = world.get::<Pose>(free).unwrap();
        assert_eq!(free_pose.position, Vec2::new(102.0, 103.5));
        assert_eq!(free_pose.angle, 0.5);
        let caught_pose = world.get::<Pose>(caught).unwrap();
        assert_eq!(caught_pose.position, Vec2::new(200.0, 200.0));
        assert_eq!(caught_pose.angle, 0.0);
    }
}
