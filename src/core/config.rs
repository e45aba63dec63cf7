use bevy::ecs::resource::Resource;
use thiserror::Error;

use crate::core::constants::{
    DEFAULT_ANT_COUNT, DEFAULT_BIG_ANT_SPEED, DEFAULT_FPS, DEFAULT_LEAF_COUNT,
    DEFAULT_NEST_RADIUS, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_SENSING_DELAY_SECS,
    DEFAULT_SMALL_ANT_SPEED, DEFAULT_SPIDER_COUNT, HUNTING_EDGE_GAP, ZONE_MARGIN,
};

/// Start-up configuration of the hunt. Fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Resource)]
pub struct SimConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: f64,
    /// Total ant count. The first half is big, the rest small.
    pub ant_count: usize,
    pub spider_count: usize,
    pub leaf_count: usize,
    pub big_ant_speed: f32,
    pub small_ant_speed: f32,
    pub nest_radius: f32,
    pub sensing_delay_secs: f32,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            fps: DEFAULT_FPS,
            ant_count: DEFAULT_ANT_COUNT,
            spider_count: DEFAULT_SPIDER_COUNT,
            leaf_count: DEFAULT_LEAF_COUNT,
            big_ant_speed: DEFAULT_BIG_ANT_SPEED,
            small_ant_speed: DEFAULT_SMALL_ANT_SPEED,
            nest_radius: DEFAULT_NEST_RADIUS,
            sensing_delay_secs: DEFAULT_SENSING_DELAY_SECS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("screen dimensions must be positive, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },
    #[error("frame rate must be positive, got {0}")]
    InvalidFps(f64),
    #[error("screen height {height} leaves no room for store and prison around a nest of radius {nest_radius}")]
    ZonesDoNotFit { height: f32, nest_radius: f32 },
    #[error("screen width {width} leaves no hunting ground left of a nest of radius {nest_radius}")]
    NoHuntingGround { width: f32, nest_radius: f32 },
    #[error("ant speeds must be positive, got big {big} and small {small}")]
    InvalidSpeed { big: f32, small: f32 },
    #[error("ants hunt in pairs: need at least 2 of each size, got {0} ants in total")]
    TooFewAnts(usize),
    #[error("sensing delay must be positive, got {0}")]
    InvalidSensingDelay(f32),
}

impl SimConfig {
    pub fn big_ant_count(&self) -> usize {
        self.ant_count / 2
    }

    pub fn small_ant_count(&self) -> usize {
        self.ant_count - self.big_ant_count()
    }

    /// Radius shared by the leaf store and the spider prison.
    pub fn holding_radius(&self) -> f32 {
        (self.screen_height - ZONE_MARGIN - 2.0 * self.nest_radius) / 4.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !(self.fps > 0.0) {
            return Err(ConfigError::InvalidFps(self.fps));
        }
        if !(self.holding_radius() > 0.0) || !(self.nest_radius > 0.0) {
            return Err(ConfigError::ZonesDoNotFit {
                height: self.screen_height,
                nest_radius: self.nest_radius,
            });
        }
        let hunting_edge =
            self.screen_width - self.nest_radius - ZONE_MARGIN - self.nest_radius - HUNTING_EDGE_GAP;
        if !(hunting_edge > 0.0) {
            return Err(ConfigError::NoHuntingGround {
                width: self.screen_width,
                nest_radius: self.nest_radius,
            });
        }
        if !(self.big_ant_speed > 0.0 && self.small_ant_speed > 0.0) {
            return Err(ConfigError::InvalidSpeed {
                big: self.big_ant_speed,
                small: self.small_ant_speed,
            });
        }
        if self.big_ant_count() < 2 || self.small_ant_count() < 2 {
            return Err(ConfigError::TooFewAnts(self.ant_count));
        }
        if !(self.sensing_delay_secs > 0.0) {
            return Err(ConfigError::InvalidSensingDelay(self.sensing_delay_secs));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.big_ant_count(), 4);
        assert_eq!(config.small_ant_count(), 4);
        assert_eq!(config.holding_radius(), 77.5);
    }

    #[test]
    fn odd_ant_count_gives_the_extra_ant_to_the_small_ones() {
        let config = SimConfig {
            ant_count: 9,
            ..SimConfig::default()
        };
        assert_eq!(config.big_ant_count(), 4);
        assert_eq!(config.small_ant_count(), 5);
    }

    #[test]
    fn rejects_a_lone_ant_per_size() {
        let config = SimConfig {
            ant_count: 3,
            ..SimConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooFewAnts(3)));
    }

    #[test]
    fn rejects_screen_too_short_for_zones() {
        let config = SimConfig {
            screen_height: 240.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZonesDoNotFit { .. })
        ));
    }

    #[test]
    fn rejects_screen_without_hunting_ground() {
        let config = SimConfig {
            screen_width: 300.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoHuntingGround { .. })
        ));
    }

    #[test]
    fn rejects_nan_speed() {
        let config = SimConfig {
            big_ant_speed: f32::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeed { .. })
        ));
    }
}
