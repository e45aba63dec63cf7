use bevy::ecs::resource::Resource;
use glam::Vec2;

use crate::{
    core::{
        config::SimConfig,
        constants::{HUNTING_EDGE_GAP, ZONE_MARGIN},
    },
    game::targets::TargetKind,
};

/// Fixed circular area on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub center: Vec2,
    pub radius: f32,
}

impl Zone {
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }
}

/// Nest, store and prison, stacked vertically along the right edge.
/// Derived once from `SimConfig` and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct Zones {
    pub nest: Zone,
    pub store: Zone,
    pub prison: Zone,
}

impl Zones {
    pub fn from_config(config: &SimConfig) -> Self {
        let nest_radius = config.nest_radius;
        let holding_radius = config.holding_radius();
        let nest_center = Vec2::new(
            config.screen_width - nest_radius - ZONE_MARGIN,
            config.screen_height / 2.0,
        );
        let stack_gap = Vec2::new(0.0, nest_radius + holding_radius);

        Self {
            nest: Zone {
                center: nest_center,
                radius: nest_radius,
            },
            store: Zone {
                center: nest_center + stack_gap,
                radius: holding_radius,
            },
            prison: Zone {
                center: nest_center - stack_gap,
                radius: holding_radius,
            },
        }
    }

    /// Where captured targets of the given kind are delivered.
    pub fn holding_for(&self, kind: TargetKind) -> Zone {
        match kind {
            TargetKind::Spider => self.prison,
            TargetKind::Leaf => self.store,
        }
    }

    /// Right edge of the spider hunting ground. Clicks right of it are ignored.
    pub fn hunting_edge(&self) -> f32 {
        self.nest.center.x - self.nest.radius - HUNTING_EDGE_GAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_screen() {
        let zones = Zones::from_config(&SimConfig::default());

        assert_eq!(zones.nest.center, Vec2::new(670.0, 280.0));
        assert_eq!(zones.store.center, Vec2::new(670.0, 477.5));
        assert_eq!(zones.prison.center, Vec2::new(670.0, 82.5));
        assert_eq!(zones.store.radius, 77.5);
        assert_eq!(zones.hunting_edge(), 450.0);
    }

    #[test]
    fn zones_do_not_overlap() {
        let zones = Zones::from_config(&SimConfig::default());
        let gap = |a: Zone, b: Zone| a.center.distance(b.center) - a.radius - b.radius;

        assert!(gap(zones.nest, zones.store) >= 0.0);
        assert!(gap(zones.nest, zones.prison) >= 0.0);
        assert!(zones.prison.center.y - zones.prison.radius >= 0.0);
    }

    #[test]
    fn targets_go_to_their_own_holding_zone() {
        let zones = Zones::from_config(&SimConfig::default());

        assert_eq!(zones.holding_for(TargetKind::Spider), zones.prison);
        assert_eq!(zones.holding_for(TargetKind::Leaf), zones.store);
    }
}
