//! Bus placement over contiguous large spots
//!
//! A bus needs a large spot plus at least four free large neighbours in the
//! same row; only the candidate spot is marked occupied.

use parking_garage::SpotCategory::{Compact as C, Large as L, Motorcycle as M};
use parking_garage::{Garage, SpotCategory, SpotRun, Vehicle, BUS_SPOT_COUNT};

fn occupied(garage: &Garage) -> Vec<usize> {
    garage
        .all_spots()
        .filter(|spot| spot.is_occupied())
        .map(|spot| spot.number())
        .collect()
}

fn one_row(categories: Vec<SpotCategory>) -> Garage {
    Garage::from_layout(vec![vec![categories]]).unwrap()
}

fn two_rows(first: Vec<SpotCategory>, second: Vec<SpotCategory>) -> Garage {
    Garage::from_layout(vec![vec![first, second]]).unwrap()
}

#[test]
fn test_bus_parks_on_five_consecutive_large_spots() {
    let mut garage = one_row(vec![C, C, L, C, C, L, L, L, L, L]);

    assert_eq!(garage.park_at(Vehicle::bus()), Some(5));
    assert_eq!(occupied(&garage), vec![5]);
}

#[test]
fn test_bus_parks_when_run_fills_a_whole_row() {
    let mut garage = two_rows(vec![C, C, L, C, C], vec![L, L, L, L, L]);

    assert!(garage.park(Vehicle::bus()));
    let taken = occupied(&garage);
    assert_eq!(taken.len(), 1);
    assert!((5..10).contains(&taken[0]));
}

#[test]
fn test_bus_refused_without_five_consecutive_large_spots() {
    let mut garage = one_row(vec![C, C, L, C, C, L, L, C, L, L]);

    assert!(!garage.park(Vehicle::bus()));
    assert!(occupied(&garage).is_empty());

    let mut split = two_rows(vec![C, C, L, C, C], vec![L, L, C, L, L]);
    assert!(!split.park(Vehicle::bus()));
    assert!(occupied(&split).is_empty());
}

#[test]
fn test_bus_run_never_spans_rows() {
    // Flattened, spots 3..=7 are five consecutive large spots
    let mut garage = two_rows(vec![C, C, C, L, L], vec![L, L, L, C, C]);

    for number in [3, 4, 5, 6, 7] {
        assert!(!garage.is_room_for_bus(number).unwrap());
    }
    assert!(!garage.park(Vehicle::bus()));
    assert!(occupied(&garage).is_empty());
}

#[test]
fn test_four_large_spots_are_not_enough() {
    let mut garage = one_row(vec![C, L, L, L, L, C]);
    assert_eq!(garage.large_run_around(1).unwrap(), SpotRun::new(1, 4));
    assert!(!garage.is_room_for_bus(1).unwrap());
    assert!(!garage.park(Vehicle::bus()));

    let mut exact = one_row(vec![C, L, L, L, L, L, C]);
    assert_eq!(exact.large_run_around(3).unwrap().len, BUS_SPOT_COUNT);
    assert_eq!(exact.park_at(Vehicle::bus()), Some(1));
}

#[test]
fn test_occupied_neighbours_break_the_run() {
    let mut garage = one_row(vec![L, L, L, L, L, L, L, L, L]);

    assert!(garage.assign_vehicle(4, Vehicle::car()).unwrap());
    assert!(!garage.is_room_for_bus(0).unwrap());
    assert!(!garage.is_room_for_bus(8).unwrap());
    assert!(!garage.park(Vehicle::bus()));
}

#[test]
fn test_second_bus_needs_its_own_room() {
    let mut garage = one_row(vec![L; 10]);

    // First bus takes spot 0, the rest of the row stays free
    assert_eq!(garage.park_at(Vehicle::bus()), Some(0));
    // Spot 1 now has one occupied neighbour on the left and eight free on the right
    assert_eq!(garage.park_at(Vehicle::bus()), Some(1));
    assert_eq!(occupied(&garage), vec![0, 1]);
}

#[test]
fn test_bus_skips_row_without_room() {
    let mut garage = Garage::from_layout(vec![
        vec![vec![L, L, L, L, M], vec![M, M, M, M, M]],
        vec![vec![C, C, C, C, C], vec![L, L, L, L, L]],
    ])
    .unwrap();

    assert_eq!(garage.park_at(Vehicle::bus()), Some(15));
}

#[test]
fn test_bus_on_non_large_candidate_is_refused() {
    let mut garage = one_row(vec![L, L, C, L, L]);
    // Neighbours alone would qualify
    assert!(garage.is_room_for_bus(2).unwrap());
    assert!(!garage.assign_vehicle(2, Vehicle::bus()).unwrap());
    assert!(occupied(&garage).is_empty());
}
