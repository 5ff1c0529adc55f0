//! Vehicles and the category rule table
//!
//! A vehicle is nothing more than a category tag. The pure compatibility
//! table between vehicle and spot categories lives here as well, so it can be
//! inspected without a garage.

use crate::error::{GarageError, Result};
use crate::spot::SpotCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of vehicle requesting a spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VehicleCategory {
    Motorcycle,
    Car,
    Bus,
}

impl VehicleCategory {
    /// All categories in declaration order
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Motorcycle,
        VehicleCategory::Car,
        VehicleCategory::Bus,
    ];

    /// Canonical display name
    pub fn name(self) -> &'static str {
        match self {
            VehicleCategory::Motorcycle => "Motorcycle",
            VehicleCategory::Car => "Car",
            VehicleCategory::Bus => "Bus",
        }
    }

    /// Whether a vehicle of this category may ever use a spot of `spot`'s category
    ///
    /// Ignores occupancy and, for buses, the adjacency requirement. Those depend
    /// on garage state and are checked by the garage itself.
    pub fn fits(self, spot: SpotCategory) -> bool {
        match (self, spot) {
            (VehicleCategory::Motorcycle, _) => true,
            (VehicleCategory::Car, SpotCategory::Motorcycle) => false,
            (VehicleCategory::Car, _) => true,
            (VehicleCategory::Bus, SpotCategory::Large) => true,
            (VehicleCategory::Bus, _) => false,
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleCategory {
    type Err = GarageError;

    fn from_str(s: &str) -> Result<Self> {
        VehicleCategory::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GarageError::UnknownCategory(s.to_string()))
    }
}

/// A vehicle asking to be parked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    pub category: VehicleCategory,
}

impl Vehicle {
    pub fn new(category: VehicleCategory) -> Self {
        Vehicle { category }
    }

    pub fn motorcycle() -> Self {
        Vehicle::new(VehicleCategory::Motorcycle)
    }

    pub fn car() -> Self {
        Vehicle::new(VehicleCategory::Car)
    }

    pub fn bus() -> Self {
        Vehicle::new(VehicleCategory::Bus)
    }
}

impl From<VehicleCategory> for Vehicle {
    fn from(category: VehicleCategory) -> Self {
        Vehicle::new(category)
    }
}
