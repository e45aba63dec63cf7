use bevy::prelude::*;
use rand::Rng;

use crate::{
    core::{
        constants::{DRAG_OFFSET, HIT_OFFSET, RETURN_BOOST, SCATTER_FRACTION},
        geometry::{distance, heading, scatter, velocity_from_angle},
        zones::Zones,
    },
    game::{
        physix::{Pose, Roam, Squiggle},
        targets::{Target, TargetKind},
    },
};

const ANT_TILT_STEP: f32 = 0.5;
const IDLE_DRIFT: Vec2 = Vec2::new(0.3, 0.3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AntSize {
    /// Hunts spiders.
    Big,
    /// Gathers leaves.
    Small,
}

impl AntSize {
    pub fn prey(self) -> TargetKind {
        match self {
            AntSize::Big => TargetKind::Spider,
            AntSize::Small => TargetKind::Leaf,
        }
    }
}

/// Where an ant is in its hunting cycle. Every non-idle mode carries the
/// target it works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntMode {
    Idle,
    Outbound(Entity),
    Dragging(Entity),
    Returning(Entity),
}

impl AntMode {
    pub fn target(self) -> Option<Entity> {
        match self {
            AntMode::Idle => None,
            AntMode::Outbound(target) | AntMode::Dragging(target) | AntMode::Returning(target) => {
                Some(target)
            }
        }
    }

    pub fn is_idle(self) -> bool {
        self == AntMode::Idle
    }
}

/// Order in which the two ants of a pair reached their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitRank {
    #[default]
    Unranked,
    First,
    Second,
}

impl HitRank {
    fn from_hit_count(hit_count: u32) -> Self {
        match hit_count {
            0 => HitRank::Unranked,
            1 => HitRank::First,
            _ => HitRank::Second,
        }
    }
}

/// Step multiplier on the way to a target: the closer, the faster.
pub fn approach_boost(span: f32) -> f32 {
    if span < 100.0 {
        12.0
    } else if span < 200.0 {
        6.0
    } else if span < 300.0 {
        3.0
    } else {
        1.0
    }
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Ant {
    pub size: AntSize,
    /// Length of `velocity` whenever the ant is steering.
    pub speed: f32,
    pub velocity: Vec2,
    pub mode: AntMode,
    pub hit_rank: HitRank,
    pub squiggle: Squiggle,
}

impl Ant {
    pub fn new(size: AntSize, speed: f32) -> Self {
        Self {
            size,
            speed,
            velocity: Vec2::ZERO,
            mode: AntMode::Idle,
            hit_rank: HitRank::Unranked,
            squiggle: Squiggle::new(ANT_TILT_STEP),
        }
    }

    /// Commits the ant to `target`. Movement starts once the partner is in.
    pub fn launch(&mut self, target: Entity) {
        self.mode = AntMode::Outbound(target);
    }

    /// Points the ant at `dest` and sets its velocity and rotation from that.
    pub fn steer(&mut self, pose: &mut Pose, dest: Vec2) {
        let angle = heading(pose.position, dest);
        self.velocity = velocity_from_angle(angle, self.speed);
        pose.angle = angle.to_degrees();
    }

    fn destination(&self, target: &Target, target_pose: &Pose, zones: &Zones) -> Option<Vec2> {
        match self.mode {
            AntMode::Idle => None,
            AntMode::Outbound(_) => Some(target_pose.position),
            AntMode::Dragging(_) => Some(zones.holding_for(target.kind).center),
            AntMode::Returning(_) => Some(zones.nest.center),
        }
    }

    fn boost(&self, span: f32) -> f32 {
        match self.mode {
            AntMode::Returning(_) => RETURN_BOOST,
            _ => approach_boost(span),
        }
    }

    /// Pair gate: both ants must be locked before leaving and must both have
    /// hit before dragging. The way home is never gated.
    fn may_advance(&self, target: &Target) -> bool {
        match self.mode {
            AntMode::Idle => false,
            AntMode::Outbound(_) => target.lock_count > 1,
            AntMode::Dragging(_) => target.hit_count > 1,
            AntMode::Returning(_) => true,
        }
    }

    /// One tick of pursuit, drag or return against the ant's resolved target.
    /// Does nothing for an idle ant.
    pub fn chase<R: Rng + ?Sized>(
        &mut self,
        pose: &mut Pose,
        target: &mut Target,
        target_pose: &mut Pose,
        zones: &Zones,
        rng: &mut R,
    ) {
        let Some(dest) = self.destination(target, target_pose, zones) else {
            return;
        };

        let span = distance(pose.position, dest);
        let step = self.velocity * self.boost(span);

        // Arrived once this tick's step would reach or overshoot.
        if span <= step.length() {
            pose.position = dest;
            self.arrive(pose, target, target_pose, zones, rng);
        } else if self.may_advance(target) {
            pose.position += step;
            if let AntMode::Dragging(_) = self.mode {
                target_pose.position = pose.position + Vec2::splat(DRAG_OFFSET);
            }
        }

        // Keep re-aiming at a target that may still be moving.
        if let AntMode::Outbound(_) = self.mode {
            self.steer(pose, dest);
        }
    }

    fn arrive<R: Rng + ?Sized>(
        &mut self,
        pose: &mut Pose,
        target: &mut Target,
        target_pose: &mut Pose,
        zones: &Zones,
        rng: &mut R,
    ) {
        match self.mode {
            AntMode::Idle => {}
            AntMode::Outbound(handle) => {
                target.hit_count += 1;
                if self.hit_rank == HitRank::Unranked {
                    self.hit_rank = HitRank::from_hit_count(target.hit_count);
                }

                // Keep the pair from stacking on the same spot.
                let offset = match self.hit_rank {
                    HitRank::Second => HIT_OFFSET,
                    _ => -HIT_OFFSET,
                };
                pose.position = target_pose.position + Vec2::splat(offset);

                let holding = zones.holding_for(target.kind);
                self.steer(pose, holding.center);
                self.mode = AntMode::Dragging(handle);
                debug!(
                    "{:?} ant hit {:?} {:?} as {:?}",
                    self.size, target.kind, handle, self.hit_rank
                );
            }
            AntMode::Dragging(handle) => {
                let holding = zones.holding_for(target.kind);
                target_pose.position = scatter(holding.center, SCATTER_FRACTION * holding.radius, rng);

                self.steer(pose, zones.nest.center);
                self.mode = AntMode::Returning(handle);
                info!(
                    "{:?} {:?} delivered at {:?}",
                    target.kind, handle, target_pose.position
                );
            }
            AntMode::Returning(handle) => {
                self.velocity = Vec2::ZERO;
                self.hit_rank = HitRank::Unranked;
                pose.position = scatter(
                    zones.nest.center,
                    SCATTER_FRACTION * zones.nest.radius,
                    rng,
                );
                self.mode = AntMode::Idle;
                debug!("{:?} ant back home from {:?}", self.size, handle);
            }
        }
    }
}

/// Idle drift box: a square of side 1.4 R centered on the nest.
pub fn idle_roam(zones: &Zones) -> Roam {
    let half = Vec2::splat(SCATTER_FRACTION * zones.nest.radius);
    Roam::bouncing(IDLE_DRIFT, zones.nest.center - half, zones.nest.center + half)
}

// Squiggle for every ant, drift inside the nest for idle ones.
pub fn animate_ants(mut ants: Query<(&mut Ant, &mut Pose, &mut Roam)>) {
    for (mut ant, mut pose, mut roam) in ants.iter_mut() {
        pose.angle += ant.squiggle.advance();
        if ant.mode.is_idle() {
            roam.step(&mut pose.position);
        }
    }
}
