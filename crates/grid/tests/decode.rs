use gridstate_grid::{
    GRID_COLUMNS, GridConfig, GridCoord, GridError, bin_state_to_grid_coordinates,
    bin_state_to_grid_coordinates_with, parse_binary_state,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random binary string of length `1..=max_len`.
fn random_state(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.random_range(1..=max_len);
    (0..len)
        .map(|_| if rng.random_bool(0.5) { '1' } else { '0' })
        .collect()
}

#[test]
fn row_times_width_plus_col_is_value() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        let state = random_state(&mut rng, 63);
        let value = parse_binary_state(&state).unwrap();
        let GridCoord { row, col } = bin_state_to_grid_coordinates(&state).unwrap();
        assert!(col < GRID_COLUMNS, "state {state}: col {col}");
        assert_eq!(
            row * GRID_COLUMNS as u128 + col as u128,
            value,
            "state {state}"
        );
    }
}

#[test]
fn agrees_with_std_radix_parse() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let state = random_state(&mut rng, 40);
        let expected = u64::from_str_radix(&state, 2).unwrap() as u128;
        let coord = bin_state_to_grid_coordinates(&state).unwrap();
        assert_eq!(coord, GridCoord::from_index(expected, 3).unwrap(), "state {state}");
        assert_eq!(coord.index(3), Some(expected));
    }
}

#[test]
fn every_cell_of_three_by_three_grid() {
    for value in 0..9usize {
        let state = format!("{value:04b}");
        let coord = bin_state_to_grid_coordinates(&state).unwrap();
        assert_eq!(coord.into_tuple(), ((value / 3) as u128, value % 3));
        assert!(GridConfig::new().with_rows(Some(3)).contains(coord));
    }
}

#[test]
fn wider_grids_keep_the_decomposition() {
    let mut rng = StdRng::seed_from_u64(3);
    for columns in 1..=8 {
        let cfg = GridConfig::new().with_columns(columns);
        for _ in 0..100 {
            let state = random_state(&mut rng, 32);
            let value = parse_binary_state(&state).unwrap();
            let coord = bin_state_to_grid_coordinates_with(&state, &cfg).unwrap();
            assert!(coord.col < columns);
            assert_eq!(
                coord.index(columns),
                Some(value),
                "state {state}, columns {columns}"
            );
        }
    }
}

#[test]
fn malformed_states_fail_without_partial_result() {
    assert!(matches!(
        bin_state_to_grid_coordinates(""),
        Err(GridError::EmptyState)
    ));
    assert!(matches!(
        bin_state_to_grid_coordinates("01a1"),
        Err(GridError::InvalidDigit {
            digit: 'a',
            position: 2
        })
    ));
    assert!(matches!(
        bin_state_to_grid_coordinates("１"),
        Err(GridError::InvalidDigit { position: 0, .. })
    ));
}

#[test]
fn full_width_states_decode_and_index() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..500 {
        let state = random_state(&mut rng, 128);
        let value = parse_binary_state(&state).unwrap();
        let coord = bin_state_to_grid_coordinates(&state).unwrap();
        assert!(coord.col < GRID_COLUMNS, "state {state}");
        assert_eq!(coord.index(GRID_COLUMNS), Some(value), "state {state}");
    }

    // 65 bits: the value no longer fits in a 64-bit usize.
    let state = "1".repeat(65);
    let coord = bin_state_to_grid_coordinates(&state).unwrap();
    assert_eq!(coord.index(3), Some((1u128 << 65) - 1));
}

#[test]
fn states_past_128_significant_bits_overflow() {
    let state = "1".repeat(129);
    assert!(matches!(
        bin_state_to_grid_coordinates(&state),
        Err(GridError::Overflow { len: 129 })
    ));
}
