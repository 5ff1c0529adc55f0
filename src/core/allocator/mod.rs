//! Spot assignment rules
//!
//! Rules are applied in priority order:
//! 1. An occupied spot refuses every vehicle
//! 2. A car never takes a motorcycle spot
//! 3. A motorcycle takes any spot
//! 4. A car takes a compact or large spot
//! 5. A bus takes a large spot only when at least [`BUS_SPOT_COUNT`] - 1
//!    free large neighbours extend it to a contiguous run in the same row
//!
//! Only the candidate spot is marked occupied; the neighbours that satisfied
//! rule 5 stay free.

pub mod run;

use crate::layout::Row;
use crate::vehicle::{Vehicle, VehicleCategory};

/// Number of contiguous large spots a bus needs, counting its own spot
pub const BUS_SPOT_COUNT: usize = 5;

/// Whether the spot at `index` has enough free large neighbours for a bus
///
/// Returns false for an index outside the row.
pub fn room_for_bus(row: &Row, index: usize) -> bool {
    row.large_run_around(index)
        .map_or(false, |run| run.neighbours() >= BUS_SPOT_COUNT - 1)
}

/// Try to place `vehicle` in the spot at `index` of `row`
///
/// Returns true if the spot was free and compatible, in which case it is now
/// occupied by `vehicle`. On false the row is unchanged.
pub fn try_assign(row: &mut Row, index: usize, vehicle: Vehicle) -> bool {
    let Some(spot) = row.get(index) else {
        return false;
    };

    if spot.is_occupied() || !vehicle.category.fits(spot.category()) {
        return false;
    }

    if vehicle.category == VehicleCategory::Bus && !room_for_bus(row, index) {
        return false;
    }

    row.get_mut(index)
        .map_or(false, |spot| spot.occupy(vehicle))
}
