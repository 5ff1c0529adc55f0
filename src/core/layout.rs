//! Garage geometry: dimensions, levels and rows
//!
//! Spots are numbered densely in row-major order (level, then row, then
//! position in row). [`Dimensions`] owns that arithmetic in both directions so
//! the rest of the crate never recomputes it by hand.

use crate::allocator::run::{scan_free_large, SpotRun};
use crate::error::{GarageError, Result};
use crate::spot::{Spot, SpotCategory, SpotPosition};
use rand::Rng;
use serde::Serialize;

/// Fixed shape of a garage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    levels: usize,
    rows_per_level: usize,
    spots_per_row: usize,
    spot_count: usize,
}

impl Dimensions {
    /// Create validated dimensions
    ///
    /// Zero counts are allowed and describe an empty garage.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the total spot count overflows `usize`.
    pub fn new(levels: usize, rows_per_level: usize, spots_per_row: usize) -> Result<Self> {
        let spot_count = levels
            .checked_mul(rows_per_level)
            .and_then(|rows| rows.checked_mul(spots_per_row))
            .ok_or(GarageError::InvalidDimensions {
                levels,
                rows_per_level,
                spots_per_row,
            })?;

        Ok(Dimensions {
            levels,
            rows_per_level,
            spots_per_row,
            spot_count,
        })
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    pub fn rows_per_level(&self) -> usize {
        self.rows_per_level
    }

    pub fn spots_per_row(&self) -> usize {
        self.spots_per_row
    }

    /// Total number of spots (`levels * rows_per_level * spots_per_row`)
    pub fn spot_count(&self) -> usize {
        self.spot_count
    }

    fn spots_per_level(&self) -> usize {
        self.rows_per_level * self.spots_per_row
    }

    /// Global number of the spot at `position`
    pub fn spot_number(&self, position: SpotPosition) -> usize {
        position.level * self.spots_per_level()
            + position.row * self.spots_per_row
            + position.index
    }

    /// Inverse of [`Dimensions::spot_number`]
    ///
    /// Returns `None` for numbers outside `[0, spot_count)`.
    pub fn position_of(&self, number: usize) -> Option<SpotPosition> {
        if number >= self.spot_count {
            return None;
        }

        // spot_count > 0 here, so every divisor is non-zero
        let per_level = self.spots_per_level();
        let within_level = number % per_level;
        Some(SpotPosition::new(
            number / per_level,
            within_level / self.spots_per_row,
            within_level % self.spots_per_row,
        ))
    }
}

/// An ordered sequence of spots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    spots: Vec<Spot>,
}

impl Row {
    /// Build row `row` of level `level` from explicit categories
    pub(crate) fn from_categories(
        dims: &Dimensions,
        level: usize,
        row: usize,
        categories: impl IntoIterator<Item = SpotCategory>,
    ) -> Self {
        let spots = categories
            .into_iter()
            .enumerate()
            .map(|(index, category)| {
                let position = SpotPosition::new(level, row, index);
                Spot::new(
                    dims.spot_number(position),
                    position,
                    category,
                    dims.spots_per_row(),
                )
            })
            .collect();

        Row { spots }
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Spot> {
        self.spots.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Spot> {
        self.spots.get_mut(index)
    }

    /// Maximal run of Large, unoccupied spots around `index`
    ///
    /// The spot at `index` is always inside the returned run; its own
    /// category and occupancy are not inspected. Returns `None` if `index`
    /// is outside the row.
    pub fn large_run_around(&self, index: usize) -> Option<SpotRun> {
        scan_free_large(&self.spots, index)
    }
}

/// An ordered sequence of rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Level {
    rows: Vec<Row>,
}

impl Level {
    /// Generate level `level` with randomly drawn spot categories
    pub(crate) fn generate<R: Rng>(dims: &Dimensions, level: usize, rng: &mut R) -> Self {
        let rows = (0..dims.rows_per_level())
            .map(|row| {
                let categories: Vec<SpotCategory> = (0..dims.spots_per_row())
                    .map(|_| SpotCategory::random(&mut *rng))
                    .collect();
                Row::from_categories(dims, level, row, categories)
            })
            .collect();

        Level { rows }
    }

    pub(crate) fn from_rows(rows: Vec<Row>) -> Self {
        Level { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> Option<&mut Row> {
        self.rows.get_mut(row)
    }
}
