//! Ants hunting in pairs: big ants capture spiders and drag them to the
//! prison, small ants collect leaves for the store.

pub mod core;
pub mod game;

pub use crate::core::config::{ConfigError, SimConfig};
pub use crate::game::{SimulationPlugin, colony::PointerPress, render::Presentation};
