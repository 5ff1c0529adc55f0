//! Core garage model and allocation engine

pub mod allocator;
pub mod config;
pub mod error;
pub mod garage;
pub mod layout;
pub mod spot;
pub mod vehicle;

pub use garage::{CategoryCount, Garage, OccupancyStats};
