//! # Parking Garage - Multi-Level Spot Allocation
//!
//! `parking-garage` models a parking facility as levels of rows of spots and
//! decides where incoming vehicles may park:
//!
//! - **Motorcycles** fit any spot
//! - **Cars** fit compact and large spots
//! - **Buses** need a large spot with at least four free large neighbours in
//!   the same row
//!
//! Parking is first-fit: spots are tried in row-major order and the first one
//! that accepts the vehicle is taken.
//!
//! ## Quick Start
//!
//! ```rust
//! use parking_garage::{GarageBuilder, Result, Vehicle};
//!
//! # fn main() -> Result<()> {
//! let mut garage = GarageBuilder::new()
//!     .levels(3)
//!     .rows_per_level(5)
//!     .spots_per_row(10)
//!     .seed(42)
//!     .build()?;
//!
//! let parked = garage.park(Vehicle::motorcycle());
//! assert!(parked);
//! # Ok(())
//! # }
//! ```
//!
//! ## Explicit Layouts
//!
//! ```rust
//! use parking_garage::{Garage, SpotCategory::*, Vehicle};
//!
//! # fn main() -> parking_garage::Result<()> {
//! let mut garage = Garage::from_layout(vec![vec![vec![Compact, Large, Large, Large, Large, Large]]])?;
//!
//! assert_eq!(garage.park_at(Vehicle::bus()), Some(1));
//! assert_eq!(garage.park_at(Vehicle::car()), Some(0));
//! # Ok(())
//! # }
//! ```

pub mod core;

// Re-export core modules internally so crate:: paths in core still work
#[allow(unused_imports)]
pub(crate) use crate::core::{allocator, config, error, garage, layout, spot, vehicle};

pub use crate::core::{
    allocator::{run::SpotRun, BUS_SPOT_COUNT},
    config::GarageConfig,
    error::{GarageError, Result},
    garage::{CategoryCount, Garage, OccupancyStats},
    layout::{Dimensions, Level, Row},
    spot::{Spot, SpotCategory, SpotPosition},
    vehicle::{Vehicle, VehicleCategory},
};

use tracing::debug;

/// Builder for customizing Garage creation
///
/// # Examples
///
/// ```rust
/// use parking_garage::GarageBuilder;
///
/// # fn main() -> parking_garage::Result<()> {
/// let garage = GarageBuilder::new()
///     .levels(2)
///     .rows_per_level(4)
///     .spots_per_row(8)
///     .seed(7) // Optional: reproducible layout
///     .build()?;
///
/// assert_eq!(garage.spot_count(), 64);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GarageBuilder {
    levels: usize,
    rows_per_level: usize,
    spots_per_row: usize,
    seed: Option<u64>,
}

impl GarageBuilder {
    /// Create a new GarageBuilder with all dimensions at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    pub fn rows_per_level(mut self, rows_per_level: usize) -> Self {
        self.rows_per_level = rows_per_level;
        self
    }

    pub fn spots_per_row(mut self, spots_per_row: usize) -> Self {
        self.spots_per_row = spots_per_row;
        self
    }

    /// Seed the spot layout (defaults to thread randomness)
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the Garage instance
    pub fn build(self) -> Result<Garage> {
        let dimensions = Dimensions::new(self.levels, self.rows_per_level, self.spots_per_row)?;

        let garage = match self.seed {
            Some(seed) => {
                debug!("Building seeded garage (seed {})", seed);
                Garage::seeded(dimensions, seed)
            }
            None => Garage::new(dimensions),
        };

        Ok(garage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_empty() {
        let garage = GarageBuilder::new().build().unwrap();
        assert_eq!(garage.spot_count(), 0);
    }

    #[test]
    fn test_builder_dimensions() {
        let garage = GarageBuilder::new()
            .levels(2)
            .rows_per_level(3)
            .spots_per_row(4)
            .build()
            .unwrap();

        let dims = garage.dimensions();
        assert_eq!((dims.levels(), dims.rows_per_level(), dims.spots_per_row()), (2, 3, 4));
        assert_eq!(garage.all_spots().count(), 24);
    }

    #[test]
    fn test_builder_overflow() {
        let result = GarageBuilder::new()
            .levels(usize::MAX)
            .rows_per_level(usize::MAX)
            .spots_per_row(1)
            .build();
        assert!(matches!(result, Err(GarageError::InvalidDimensions { .. })));
    }
}
