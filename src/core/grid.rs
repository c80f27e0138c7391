use more_asserts::assert_gt;

/// Character used for a cell that belongs to the fractal.
pub const FILLED_SYMBOL: char = '#';

/// Character used for every cell that was never marked.
pub const BACKGROUND_SYMBOL: char = ' ';

/**
 * Square buffer of cells, each either filled or empty. The data is stored in a
 * single contiguous row-major vector, indexed by `row * side_length + col`.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side_length: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Allocates a `side_length x side_length` grid with every cell empty.
    ///
    /// Panics if the side length is zero or if the buffer cannot be allocated.
    /// Neither condition is something the caller can recover from.
    pub fn new(side_length: usize) -> Grid {
        assert_gt!(side_length, 0, "`side_length` must be positive!");
        let cell_count = side_length
            .checked_mul(side_length)
            .unwrap_or_else(|| panic!("Memory allocation failed: {side_length}^2 cells"));

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(cell_count)
            .unwrap_or_else(|err| panic!("Memory allocation failed: {err}"));
        cells.resize(cell_count, false);

        Grid { side_length, cells }
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.side_length && col < self.side_length,
            "cell ({row}, {col}) is outside of a {0}x{0} grid",
            self.side_length
        );
        row * self.side_length + col
    }

    pub fn set(&mut self, row: usize, col: usize, filled: bool) {
        let index = self.index(row, col);
        self.cells[index] = filled;
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// @return: the number of cells that are currently filled
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /**
     * Converts the grid to text, one string per row (row zero first). Each string
     * holds exactly `side_length` characters.
     */
    pub fn render(&self) -> Vec<String> {
        self.cells
            .chunks(self.side_length)
            .map(|row| {
                row.iter()
                    .map(|&filled| {
                        if filled {
                            FILLED_SYMBOL
                        } else {
                            BACKGROUND_SYMBOL
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
