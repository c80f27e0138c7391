use std::io::Write;

use serde::Serialize;

use crate::core::grid::Grid;

use super::{
    common::{is_valid_height, FractalKind},
    subdivision::subdivide,
};

/**
 * A single fractal request: its kind, its recursion depth (height), and the
 * side length of the square it is drawn in. Immutable once built.
 */
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractalShape {
    kind: FractalKind,
    height: u32,
    side_length: usize,
}

impl FractalShape {
    /**
     * Builds the shape and derives `side_length = basic_side_size^height`.
     *
     * An out-of-range height only produces a warning on stderr. Range checking
     * is the job of `factory::create_fractal`, which never passes one through.
     */
    pub fn new(kind: FractalKind, height: u32) -> FractalShape {
        if !is_valid_height(height) {
            eprintln!("Warning:  Invalid height of fractal: {height}");
        }
        let side_length = kind
            .basic_side_size()
            .checked_pow(height)
            .unwrap_or_else(|| panic!("side length of {kind:?} overflows at height {height}"));
        FractalShape {
            kind,
            height,
            side_length,
        }
    }

    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Allocates a grid and runs the full recursive fill on it.
    pub fn build_grid(&self) -> Grid {
        let mut grid = Grid::new(self.side_length);
        subdivide(self.kind, self.height, self.side_length, 0, 0, &mut grid);
        grid
    }

    pub fn render_lines(&self) -> Vec<String> {
        self.build_grid().render()
    }

    /// Writes the rendered grid, one row per line, followed by a blank line.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write_lines(&self.render_lines(), writer)
    }
}

/// Writes rows that were rendered ahead of time, followed by a blank separator line.
pub fn write_lines<W: Write>(lines: &[String], writer: &mut W) -> std::io::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writeln!(writer)
}
