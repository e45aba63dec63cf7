use bevy::prelude::*;

use crate::core::constants::{TILT_MAX, TILT_MIN};

/// Sim-space position (origin bottom-left, y up) and rotation in degrees.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub position: Vec2,
    pub angle: f32,
}

impl Pose {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            angle: 0.0,
        }
    }
}

/// Small back-and-forth tilt added to the rotation every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Squiggle {
    pub tilt: f32,
    pub step: f32,
    pub min: f32,
    pub max: f32,
}

impl Squiggle {
    pub fn new(step: f32) -> Self {
        Self {
            tilt: 0.0,
            step,
            min: TILT_MIN,
            max: TILT_MAX,
        }
    }

    /// Steps the tilt, reversing at the bounds, and returns it.
    pub fn advance(&mut self) -> f32 {
        self.tilt += self.step;
        if self.tilt > self.max {
            self.step = -self.step;
            self.tilt = self.max;
        }
        if self.tilt < self.min {
            self.step = -self.step;
            self.tilt = self.min;
        }
        self.tilt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRule {
    /// Clamp to the crossed bound and reverse along that axis.
    Bounce,
    /// Reappear at the opposite bound.
    Wrap,
}

/// Constant-velocity drift inside a rectangle.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Roam {
    pub velocity: Vec2,
    pub min: Vec2,
    pub max: Vec2,
    pub x_edge: EdgeRule,
    pub y_edge: EdgeRule,
}

impl Roam {
    pub fn bouncing(velocity: Vec2, min: Vec2, max: Vec2) -> Self {
        Self {
            velocity,
            min,
            max,
            x_edge: EdgeRule::Bounce,
            y_edge: EdgeRule::Bounce,
        }
    }

    pub fn step(&mut self, position: &mut Vec2) {
        position.x += self.velocity.x;
        apply_edge(
            &mut position.x,
            &mut self.velocity.x,
            self.min.x,
            self.max.x,
            self.x_edge,
        );

        position.y += self.velocity.y;
        apply_edge(
            &mut position.y,
            &mut self.velocity.y,
            self.min.y,
            self.max.y,
            self.y_edge,
        );
    }
}

fn apply_edge(coord: &mut f32, velocity: &mut f32, min: f32, max: f32, rule: EdgeRule) {
    match rule {
        EdgeRule::Bounce => {
            if *coord > max {
                *velocity = -*velocity;
                *coord = max;
            }
            if *coord < min {
                *velocity = -*velocity;
                *coord = min;
            }
        }
        EdgeRule::Wrap => {
            if *coord < min {
                *coord = max;
            } else if *coord > max {
                *coord = min;
            }
        }
    }
}
