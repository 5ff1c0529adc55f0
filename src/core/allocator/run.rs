//! Contiguous runs of spots within a row
//!
//! A run is a half-open range of positions `[start, start + len)` inside a
//! single row. Runs never span two rows.

use crate::spot::Spot;
use serde::{Deserialize, Serialize};

/// A contiguous range of positions inside one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotRun {
    /// First position in the row
    pub start: usize,
    /// Number of contiguous spots
    pub len: usize,
}

impl SpotRun {
    pub fn new(start: usize, len: usize) -> Self {
        SpotRun { start, len }
    }

    /// One past the last position
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check if this run covers a position
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }

    /// Spots in the run other than the one it was grown from
    pub fn neighbours(&self) -> usize {
        self.len.saturating_sub(1)
    }
}

/// Grow a run of Large, unoccupied spots outwards from `index`
///
/// The scan stops at the row bounds and at the first spot that is not Large
/// or is already taken, in each direction. The spot at `index` seeds the run
/// and is not inspected.
pub fn scan_free_large(spots: &[Spot], index: usize) -> Option<SpotRun> {
    if index >= spots.len() {
        return None;
    }

    let left = spots[..index]
        .iter()
        .rev()
        .take_while(|spot| spot.is_free_large())
        .count();
    let right = spots[index + 1..]
        .iter()
        .take_while(|spot| spot.is_free_large())
        .count();

    Some(SpotRun::new(index - left, left + 1 + right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spot::{SpotCategory, SpotPosition};
    use crate::vehicle::Vehicle;
    use SpotCategory::{Compact as C, Large as L, Motorcycle as M};

    fn row(categories: &[SpotCategory]) -> Vec<Spot> {
        categories
            .iter()
            .enumerate()
            .map(|(i, &category)| {
                Spot::new(i, SpotPosition::new(0, 0, i), category, categories.len())
            })
            .collect()
    }

    #[test]
    fn test_run_bounds() {
        let run = SpotRun::new(3, 4); // 3-6
        assert_eq!(run.end(), 7);
        assert!(!run.contains(2));
        assert!(run.contains(3));
        assert!(run.contains(6));
        assert!(!run.contains(7));
        assert_eq!(run.neighbours(), 3);
    }

    #[test]
    fn test_scan_whole_row() {
        let spots = row(&[L, L, L, L, L]);
        assert_eq!(scan_free_large(&spots, 2), Some(SpotRun::new(0, 5)));
        assert_eq!(scan_free_large(&spots, 0), Some(SpotRun::new(0, 5)));
        assert_eq!(scan_free_large(&spots, 4), Some(SpotRun::new(0, 5)));
    }

    #[test]
    fn test_scan_stops_at_other_categories() {
        let spots = row(&[L, C, L, L, L, M, L]);
        assert_eq!(scan_free_large(&spots, 3), Some(SpotRun::new(2, 3)));
        assert_eq!(scan_free_large(&spots, 0), Some(SpotRun::new(0, 1)));
        assert_eq!(scan_free_large(&spots, 6), Some(SpotRun::new(6, 1)));
    }

    #[test]
    fn test_scan_seed_is_not_inspected() {
        let spots = row(&[L, L, C, L, L]);
        // Seeded from a Compact spot, neighbours still count
        assert_eq!(scan_free_large(&spots, 2), Some(SpotRun::new(0, 5)));
    }

    #[test]
    fn test_scan_stops_at_occupied() {
        let mut spots = row(&[L, L, L, L, L]);
        assert!(spots[1].occupy(Vehicle::car()));

        assert_eq!(scan_free_large(&spots, 3), Some(SpotRun::new(2, 3)));
    }

    #[test]
    fn test_scan_out_of_range() {
        let spots = row(&[L, L]);
        assert_eq!(scan_free_large(&spots, 2), None);
        assert_eq!(scan_free_large(&[], 0), None);
    }
}
