//! Grid layout tests: placement rules, reset, random generation.

use citysim_core::{
    config::CityConfig,
    error::SimError,
    game_state::GameState,
    grid_layout::GridLayout,
    rng::{LedgerSlot, RngBank},
    types::ZoneCode,
};

/// Placing on an empty in-bounds cell sets it and records exactly one placement.
#[test]
fn place_on_empty_cell_records_one_placement() {
    let mut grid = GridLayout::new(10, 10);

    let placed = grid.place_building(3, 4, ZoneCode::Residential).unwrap();

    assert_eq!((placed.x, placed.y, placed.zone), (3, 4, ZoneCode::Residential));
    assert_eq!(grid.zone_at(3, 4), Some(ZoneCode::Residential));
    assert_eq!(grid.placements().len(), 1, "Expected exactly one placement record");
}

/// Every in-bounds cell accepts exactly one building.
#[test]
fn every_cell_accepts_one_building_then_rejects() {
    let mut grid = GridLayout::new(4, 3);

    for y in 0..3 {
        for x in 0..4 {
            grid.place_building(x, y, ZoneCode::Commercial)
                .unwrap_or_else(|e| panic!("({x}, {y}) should accept a building: {e}"));
        }
    }
    assert_eq!(grid.placements().len(), 12);

    let before = grid.clone();
    for y in 0..3 {
        for x in 0..4 {
            let err = grid.place_building(x, y, ZoneCode::Industrial).unwrap_err();
            assert!(
                matches!(err, SimError::OccupiedCell { zone: ZoneCode::Commercial, .. }),
                "({x}, {y}) expected OccupiedCell, got {err:?}"
            );
        }
    }
    assert_eq!(grid, before, "Rejected placements must not change the grid");
}

/// Out-of-bounds coordinates are rejected and the grid is unchanged.
#[test]
fn out_of_bounds_placement_is_rejected() {
    let mut grid = GridLayout::new(10, 10);
    grid.place_building(0, 0, ZoneCode::Residential).unwrap();
    let before = grid.clone();

    for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 10), (10, 10), (i64::MAX, 2), (i64::MIN, 2)] {
        let err = grid.place_building(x, y, ZoneCode::Residential).unwrap_err();
        assert!(
            matches!(err, SimError::OutOfBounds { width: 10, height: 10, .. }),
            "({x}, {y}) expected OutOfBounds, got {err:?}"
        );
    }
    assert_eq!(grid, before, "Out-of-bounds placements must not change the grid");
}

/// Placing an Empty zone would break the placement invariant.
#[test]
fn placing_empty_zone_is_rejected() {
    let mut grid = GridLayout::new(5, 5);
    let err = grid.place_building(1, 1, ZoneCode::Empty).unwrap_err();
    assert!(matches!(err, SimError::InvalidZone { x: 1, y: 1 }), "got {err:?}");
    assert!(grid.placements().is_empty());
}

/// Reset empties every cell and clears placement records.
#[test]
fn reset_clears_cells_and_placements() {
    let mut grid = GridLayout::new(6, 6);
    grid.place_building(2, 2, ZoneCode::Industrial).unwrap();
    grid.place_building(5, 0, ZoneCode::Commercial).unwrap();

    grid.reset();

    assert_eq!(grid.count(ZoneCode::Empty), 36);
    assert!(grid.placements().is_empty());
    assert_eq!((grid.width(), grid.height()), (6, 6));
}

/// Random generation fills every cell with a valid code, uses all four codes
/// on a reasonably sized grid, and discards placement records.
#[test]
fn generate_random_fills_grid_and_drops_placements() {
    let mut grid = GridLayout::new(10, 10);
    grid.place_building(1, 1, ZoneCode::Residential).unwrap();

    let mut rng = RngBank::new(0xC17E).for_ledger_at_draw(LedgerSlot::Grid, 0);
    grid.generate_random(20, 20, &mut rng);

    assert_eq!((grid.width(), grid.height()), (20, 20));
    assert!(grid.placements().is_empty(), "Generation must discard placements");
    let total: usize = ZoneCode::ALL.iter().map(|&z| grid.count(z)).sum();
    assert_eq!(total, 400);
    for zone in ZoneCode::ALL {
        assert!(grid.count(zone) > 0, "{zone} never generated on a 20x20 grid");
    }
    assert!(grid.validate().is_ok());
}

/// The text rendering is one row per line, digits separated by spaces.
#[test]
fn display_renders_rows_of_digits() {
    let mut grid = GridLayout::new(3, 2);
    grid.place_building(1, 0, ZoneCode::Commercial).unwrap();
    grid.place_building(2, 1, ZoneCode::Industrial).unwrap();

    assert_eq!(grid.to_string(), "0 2 0\n0 0 3\n");
}

/// A new game produces a generated grid of the configured size.
#[test]
fn new_game_generates_configured_grid() {
    let config = CityConfig { width: 7, height: 4, ..CityConfig::default() };
    let mut state = GameState::new(&config);
    assert_eq!(state.grid.count(ZoneCode::Empty), 28, "Fresh state starts empty");

    state.start_new_game(&config, 99);

    assert_eq!((state.grid.width(), state.grid.height()), (7, 4));
    assert!(state.grid.count(ZoneCode::Empty) < 28, "Generated grid should not be all empty");
}
