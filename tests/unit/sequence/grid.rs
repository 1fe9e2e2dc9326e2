//! Tests for grid derivation and truncating division

#[cfg(test)]
mod tests {
    use tilereveal::sequence::grid::GridSpec;

    // Tests truncating division drops remainder pixels
    // Verified by switching to rounding division
    #[test]
    fn test_grid_dimensions_truncate() {
        let grid = GridSpec::new(100, 60, 8);

        assert_eq!(grid.columns(), 12);
        assert_eq!(grid.rows(), 7);
        assert_eq!(grid.block_count(), 84);
    }

    // Tests exact-fit dimensions leave nothing uncovered
    // Verified by off-by-one in the divisor
    #[test]
    fn test_exact_fit_grid() {
        let grid = GridSpec::new(24, 16, 8);

        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.block_count(), 6);
    }

    // Tests grids smaller than one tile are empty
    // Verified by clamping dimensions to one
    #[test]
    fn test_grid_smaller_than_tile_is_empty() {
        let grid = GridSpec::new(7, 3, 8);

        assert_eq!(grid.columns(), 0);
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.block_count(), 0);
    }

    // Tests zero tile size degenerates to an empty grid instead of dividing by zero
    // Verified by replacing checked division with plain division
    #[test]
    fn test_zero_tile_size_degenerates() {
        let grid = GridSpec::new(64, 64, 0);

        assert_eq!(grid.columns(), 0);
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.block_count(), 0);
    }

    // Tests one dimension degenerating while the other holds
    // Verified by coupling the two divisions
    #[test]
    fn test_single_row_grid() {
        let grid = GridSpec::new(24, 10, 8);

        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.block_count(), 3);
    }
}
