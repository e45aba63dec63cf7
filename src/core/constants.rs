// Defaults for `SimConfig` and fixed tuning values of the hunt.

pub const DEFAULT_SCREEN_WIDTH: f32 = 800.0;
pub const DEFAULT_SCREEN_HEIGHT: f32 = 560.0;
pub const DEFAULT_FPS: f64 = 30.0; // Frames per sec

pub const DEFAULT_ANT_COUNT: usize = 8; // Half big, half small
pub const DEFAULT_SPIDER_COUNT: usize = 4;
pub const DEFAULT_LEAF_COUNT: usize = 4;

pub const DEFAULT_BIG_ANT_SPEED: f32 = 3.0; // Units per tick
pub const DEFAULT_SMALL_ANT_SPEED: f32 = 2.5;

pub const DEFAULT_NEST_RADIUS: f32 = 120.0;
pub const DEFAULT_SENSING_DELAY_SECS: f32 = 1.5;

pub const ZONE_MARGIN: f32 = 10.0; // Gap between the nest and the screen edge
pub const HUNTING_EDGE_GAP: f32 = 100.0; // Keep-out band left of the nest

// Fraction of a zone radius used when scattering entities inside it.
pub const SCATTER_FRACTION: f32 = 0.7;

pub const TILT_MIN: f32 = -2.5; // degrees
pub const TILT_MAX: f32 = 2.5;

pub const LAUNCH_OFFSET_Y: f32 = 20.0; // Pair separation when leaving the nest
pub const HIT_OFFSET: f32 = 5.0; // Pair separation around a captured target
pub const DRAG_OFFSET: f32 = 5.0; // Target offset from the dragging ant

pub const RETURN_BOOST: f32 = 4.0;
