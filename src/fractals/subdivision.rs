// Recursive fill for each fractal kind. The recursion is bounded by the
// height of the shape, so the stack depth never exceeds `MAX_FRACTAL_HEIGHT`
// for shapes built by the factory.

use crate::core::grid::Grid;

use super::common::FractalKind;

/**
 * Marks the filled cells of the sub-square with side `curr_size`, anchored at
 * `(row, col)`, at recursion depth `curr_height`.
 *
 * At depth zero the single cell at the anchor is filled. Otherwise the square
 * is split into `basic_side_size x basic_side_size` sub-squares of side
 * `curr_size / basic_side_size`, and a kind-specific subset of them recurses.
 * `curr_size` must be `basic_side_size^curr_height` for every access to stay
 * inside the grid.
 */
pub fn subdivide(
    kind: FractalKind,
    curr_height: u32,
    curr_size: usize,
    row: usize,
    col: usize,
    grid: &mut Grid,
) {
    if curr_height == 0 {
        grid.set(row, col, true);
        return;
    }
    let new_size = curr_size / kind.basic_side_size();
    match kind {
        FractalKind::Carpet => carpet(curr_height, new_size, row, col, grid),
        FractalKind::Sieve => sieve(curr_height, new_size, row, col, grid),
        FractalKind::Dust => dust(curr_height, new_size, row, col, grid),
    }
}

// Every sub-square except the center one.
fn carpet(curr_height: u32, new_size: usize, row: usize, col: usize, grid: &mut Grid) {
    let n = FractalKind::Carpet.basic_side_size();
    for i in 0..n {
        for j in 0..n {
            if i == 1 && j == 1 {
                continue;
            }
            subdivide(
                FractalKind::Carpet,
                curr_height - 1,
                new_size,
                row + i * new_size,
                col + j * new_size,
                grid,
            );
        }
    }
}

// Top-left, bottom-left and top-right; the bottom-right quadrant stays empty.
fn sieve(curr_height: u32, new_size: usize, row: usize, col: usize, grid: &mut Grid) {
    let next = curr_height - 1;
    subdivide(FractalKind::Sieve, next, new_size, row, col, grid);
    subdivide(FractalKind::Sieve, next, new_size, row + new_size, col, grid);
    subdivide(FractalKind::Sieve, next, new_size, row, col + new_size, grid);
}

// The four corners, stepping over the middle third in both directions.
fn dust(curr_height: u32, new_size: usize, row: usize, col: usize, grid: &mut Grid) {
    let next = curr_height - 1;
    let stride = 2 * new_size;
    subdivide(FractalKind::Dust, next, new_size, row, col, grid);
    subdivide(FractalKind::Dust, next, new_size, row + stride, col, grid);
    subdivide(FractalKind::Dust, next, new_size, row, col + stride, grid);
    subdivide(FractalKind::Dust, next, new_size, row + stride, col + stride, grid);
}
