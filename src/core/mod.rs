pub mod config;
pub mod constants;
pub mod geometry;
pub mod rng;
pub mod zones;
