use serde::{Deserialize, Serialize};

/// Smallest recursion depth that the factory accepts.
pub const MIN_FRACTAL_HEIGHT: u32 = 1;

/// Largest recursion depth that the factory accepts. At this height the
/// biggest grid is `3^6 = 729` cells on a side.
pub const MAX_FRACTAL_HEIGHT: u32 = 6;

pub fn is_valid_height(height: u32) -> bool {
    (MIN_FRACTAL_HEIGHT..=MAX_FRACTAL_HEIGHT).contains(&height)
}

/**
 * The closed set of self-similar patterns that can be drawn. Each kind fixes
 * the branching factor of its subdivision ("basic side size") and which of the
 * sub-squares are visited at every level of the recursion.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FractalKind {
    /// Sierpinski carpet
    Carpet,
    /// Sierpinski sieve (triangle)
    Sieve,
    /// Cantor dust
    Dust,
}

impl FractalKind {
    pub const ALL: [FractalKind; 3] = [FractalKind::Carpet, FractalKind::Sieve, FractalKind::Dust];

    pub fn basic_side_size(&self) -> usize {
        match self {
            FractalKind::Carpet => 3,
            FractalKind::Sieve => 2,
            FractalKind::Dust => 3,
        }
    }

    /// Number of sub-squares that recurse at each level, so a shape of height
    /// `h` has exactly `branch_count^h` filled cells.
    pub fn branch_count(&self) -> usize {
        match self {
            FractalKind::Carpet => 8,
            FractalKind::Sieve => 3,
            FractalKind::Dust => 4,
        }
    }

    /// Type codes as they appear in the input records: 1, 2, 3.
    pub fn from_type_code(type_code: u32) -> Option<FractalKind> {
        match type_code {
            1 => Some(FractalKind::Carpet),
            2 => Some(FractalKind::Sieve),
            3 => Some(FractalKind::Dust),
            _ => None,
        }
    }

    pub fn type_code(&self) -> u32 {
        match self {
            FractalKind::Carpet => 1,
            FractalKind::Sieve => 2,
            FractalKind::Dust => 3,
        }
    }
}
