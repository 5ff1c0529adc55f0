//! The garage: owner of the spot tree and entry point for parking
//!
//! Spots are reached top-down (garage → level → row → spot). Parking is a
//! first-fit scan over all spots in row-major order with no backtracking.

use crate::allocator::{self, run::SpotRun};
use crate::error::{GarageError, Result};
use crate::layout::{Dimensions, Level, Row};
use crate::spot::{Spot, SpotCategory, SpotPosition};
use crate::vehicle::{Vehicle, VehicleCategory};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

/// Multi-level parking garage
#[derive(Debug, Clone, Serialize)]
pub struct Garage {
    dimensions: Dimensions,
    levels: Vec<Level>,
}

impl Garage {
    /// Create a garage with categories drawn from the thread-local generator
    pub fn new(dimensions: Dimensions) -> Self {
        Self::with_rng(dimensions, &mut rand::thread_rng())
    }

    /// Create a garage whose layout is fully determined by `seed`
    pub fn seeded(dimensions: Dimensions, seed: u64) -> Self {
        Self::with_rng(dimensions, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create a garage drawing each spot category uniformly from `rng`
    pub fn with_rng<R: Rng>(dimensions: Dimensions, rng: &mut R) -> Self {
        let levels = (0..dimensions.levels())
            .map(|level| Level::generate(&dimensions, level, &mut *rng))
            .collect();

        info!(
            "Created garage: {} levels x {} rows x {} spots ({} spots total)",
            dimensions.levels(),
            dimensions.rows_per_level(),
            dimensions.spots_per_row(),
            dimensions.spot_count()
        );

        Garage { dimensions, levels }
    }

    /// Create a garage from an explicit category grid (levels → rows → spots)
    ///
    /// Every level must have the same number of rows and every row the same
    /// number of spots. An empty grid gives an empty garage.
    ///
    /// # Errors
    ///
    /// Returns `IrregularLayout` if the grid is not rectangular.
    pub fn from_layout(layout: Vec<Vec<Vec<SpotCategory>>>) -> Result<Self> {
        let rows_per_level = layout.first().map_or(0, Vec::len);
        let spots_per_row = layout
            .first()
            .and_then(|rows| rows.first())
            .map_or(0, Vec::len);

        for (level_idx, rows) in layout.iter().enumerate() {
            if rows.len() != rows_per_level {
                return Err(GarageError::IrregularLayout(format!(
                    "level {} has {} rows, expected {}",
                    level_idx,
                    rows.len(),
                    rows_per_level
                )));
            }
            for (row_idx, spots) in rows.iter().enumerate() {
                if spots.len() != spots_per_row {
                    return Err(GarageError::IrregularLayout(format!(
                        "level {} row {} has {} spots, expected {}",
                        level_idx,
                        row_idx,
                        spots.len(),
                        spots_per_row
                    )));
                }
            }
        }

        let dimensions = Dimensions::new(layout.len(), rows_per_level, spots_per_row)?;
        let levels = layout
            .into_iter()
            .enumerate()
            .map(|(level_idx, rows)| {
                Level::from_rows(
                    rows.into_iter()
                        .enumerate()
                        .map(|(row_idx, categories)| {
                            Row::from_categories(&dimensions, level_idx, row_idx, categories)
                        })
                        .collect(),
                )
            })
            .collect();

        debug!(
            "Created garage from layout ({} spots)",
            dimensions.spot_count()
        );

        Ok(Garage { dimensions, levels })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn spot_count(&self) -> usize {
        self.dimensions.spot_count()
    }

    /// Every spot in row-major order (ascending spot number)
    pub fn all_spots(&self) -> impl Iterator<Item = &Spot> + '_ {
        self.levels
            .iter()
            .flat_map(|level| level.rows())
            .flat_map(|row| row.spots())
    }

    /// Look up a spot by its global number
    pub fn spot(&self, number: usize) -> Option<&Spot> {
        let position = self.dimensions.position_of(number)?;
        self.levels
            .get(position.level)?
            .rows()
            .get(position.row)?
            .get(position.index)
    }

    fn row_mut(&mut self, position: SpotPosition) -> Option<&mut Row> {
        self.levels.get_mut(position.level)?.row_mut(position.row)
    }

    fn locate(&self, number: usize) -> Result<SpotPosition> {
        self.dimensions
            .position_of(number)
            .ok_or(GarageError::SpotNotFound(number))
    }

    /// Run of free large spots around spot `number`, confined to its row
    ///
    /// # Errors
    ///
    /// Returns `SpotNotFound` if `number` is outside the garage.
    pub fn large_run_around(&self, number: usize) -> Result<SpotRun> {
        let position = self.locate(number)?;
        self.levels[position.level].rows()[position.row]
            .large_run_around(position.index)
            .ok_or(GarageError::SpotNotFound(number))
    }

    /// Whether spot `number` has enough free large neighbours in its row for a bus
    ///
    /// Only the neighbours are inspected; the candidate's own category and
    /// occupancy are checked by [`Garage::assign_vehicle`].
    ///
    /// # Errors
    ///
    /// Returns `SpotNotFound` if `number` is outside the garage.
    pub fn is_room_for_bus(&self, number: usize) -> Result<bool> {
        let position = self.locate(number)?;
        let row = &self.levels[position.level].rows()[position.row];
        Ok(allocator::room_for_bus(row, position.index))
    }

    /// Try to place `vehicle` in spot `number`
    ///
    /// Returns `Ok(false)` when the spot is occupied or incompatible; the spot
    /// is then left untouched. Does not look at any other candidate.
    ///
    /// # Errors
    ///
    /// Returns `SpotNotFound` if `number` is outside the garage.
    pub fn assign_vehicle(&mut self, number: usize, vehicle: Vehicle) -> Result<bool> {
        let position = self.locate(number)?;
        let row = self
            .row_mut(position)
            .ok_or(GarageError::SpotNotFound(number))?;

        let assigned = allocator::try_assign(row, position.index, vehicle);
        trace!(
            "Assign {} to spot {}: {}",
            vehicle.category,
            number,
            if assigned { "accepted" } else { "refused" }
        );
        Ok(assigned)
    }

    /// Park `vehicle` in the first spot that accepts it
    ///
    /// Returns the number of the spot used, or `None` if every spot refused.
    pub fn park_at(&mut self, vehicle: Vehicle) -> Option<usize> {
        for number in 0..self.spot_count() {
            if let Ok(true) = self.assign_vehicle(number, vehicle) {
                debug!("Parked {} in spot {}", vehicle.category, number);
                return Some(number);
            }
        }

        debug!("No spot available for {}", vehicle.category);
        None
    }

    /// Park `vehicle` in the first spot that accepts it
    pub fn park(&mut self, vehicle: Vehicle) -> bool {
        self.park_at(vehicle).is_some()
    }

    /// Summary of capacity and occupancy
    pub fn occupancy_stats(&self) -> OccupancyStats {
        let mut stats = OccupancyStats {
            total_spots: self.spot_count(),
            ..OccupancyStats::default()
        };

        for spot in self.all_spots() {
            let category = stats.by_category.entry(spot.category()).or_default();
            category.total += 1;

            match spot.occupant() {
                Some(vehicle) => {
                    stats.occupied_spots += 1;
                    *stats.parked.entry(vehicle.category).or_default() += 1;
                }
                None => {
                    stats.free_spots += 1;
                    category.free += 1;
                }
            }
        }

        stats
    }
}

/// Per-category capacity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub total: usize,
    pub free: usize,
}

/// Snapshot of garage occupancy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OccupancyStats {
    pub total_spots: usize,
    pub occupied_spots: usize,
    pub free_spots: usize,
    pub by_category: BTreeMap<SpotCategory, CategoryCount>,
    pub parked: BTreeMap<VehicleCategory, usize>,
}
