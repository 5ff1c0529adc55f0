//! Parking spots
//!
//! A spot is the leaf of the garage tree. Its occupancy is derived from the
//! occupant it holds, so a spot can never claim to be occupied while holding
//! no vehicle (or the reverse).

use crate::error::{GarageError, Result};
use crate::vehicle::Vehicle;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size class of a parking spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpotCategory {
    Motorcycle,
    Compact,
    Large,
}

impl SpotCategory {
    /// All categories in declaration order
    pub const ALL: [SpotCategory; 3] = [
        SpotCategory::Motorcycle,
        SpotCategory::Compact,
        SpotCategory::Large,
    ];

    /// Canonical display name
    pub fn name(self) -> &'static str {
        match self {
            SpotCategory::Motorcycle => "Motorcycle",
            SpotCategory::Compact => "Compact",
            SpotCategory::Large => "Large",
        }
    }

    /// Draw a category uniformly at random
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for SpotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpotCategory {
    type Err = GarageError;

    fn from_str(s: &str) -> Result<Self> {
        SpotCategory::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GarageError::UnknownCategory(s.to_string()))
    }
}

/// Physical coordinate of a spot inside the garage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpotPosition {
    /// Level index
    pub level: usize,
    /// Row index within the level
    pub row: usize,
    /// Position within the row
    pub index: usize,
}

impl SpotPosition {
    pub fn new(level: usize, row: usize, index: usize) -> Self {
        SpotPosition { level, row, index }
    }
}

/// A single parking cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spot {
    number: usize,
    position: SpotPosition,
    category: SpotCategory,
    row_spots_count: usize,
    occupant: Option<Vehicle>,
}

impl Spot {
    /// Create an empty spot
    pub fn new(
        number: usize,
        position: SpotPosition,
        category: SpotCategory,
        row_spots_count: usize,
    ) -> Self {
        Spot {
            number,
            position,
            category,
            row_spots_count,
            occupant: None,
        }
    }

    /// Global row-major spot number
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn position(&self) -> SpotPosition {
        self.position
    }

    pub fn category(&self) -> SpotCategory {
        self.category
    }

    /// Length of the row this spot belongs to
    pub fn row_spots_count(&self) -> usize {
        self.row_spots_count
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    /// Large and empty, i.e. usable as part of a bus run
    pub fn is_free_large(&self) -> bool {
        self.category == SpotCategory::Large && !self.is_occupied()
    }

    /// Place a vehicle in this spot
    ///
    /// Returns false and leaves the spot untouched if it is already taken.
    pub(crate) fn occupy(&mut self, vehicle: Vehicle) -> bool {
        if self.is_occupied() {
            return false;
        }
        self.occupant = Some(vehicle);
        true
    }
}
