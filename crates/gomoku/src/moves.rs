use serde::{Deserialize, Serialize};
use std::fmt;

/// A stone placement at `(row, col)`, both zero-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct GomokuMove {
    pub row: u8,
    pub col: u8,
}

impl GomokuMove {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major cell index on a board of the given size.
    #[inline]
    pub fn index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }
}

impl fmt::Display for GomokuMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
