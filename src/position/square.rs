use std::fmt;

use crate::error::EngineError;
use crate::position::BOARD_SIZE;

/// A signed displacement between two cells, used to walk lanes during a shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardVector {
    pub dx: i8,
    pub dy: i8,
}

impl CardVector {
    pub const fn new(dx: i8, dy: i8) -> Self {
        CardVector { dx, dy }
    }

    pub const fn reverse(self) -> Self {
        CardVector {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// A cell on the board. Always lies within the 4x4 grid, and can be used to index a `Board`.
/// `x` is the column, `y` the row, with `(0, 0)` in the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CardPosition {
    x: u8,
    y: u8,
}

impl CardPosition {
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside the board. Use `try_new` for unchecked input.
    pub const fn new(x: u8, y: u8) -> Self {
        assert!((x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE);
        CardPosition { x, y }
    }

    /// Checked constructor for coordinates coming from outside the engine.
    pub fn try_new(x: usize, y: usize) -> Result<Self, EngineError> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Ok(CardPosition {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(EngineError::InvalidPosition { x, y })
        }
    }

    /// # Panics
    ///
    /// Panics if `index` is 16 or more.
    pub const fn from_index(index: usize) -> Self {
        assert!(index < BOARD_SIZE * BOARD_SIZE);
        CardPosition {
            x: (index % BOARD_SIZE) as u8,
            y: (index / BOARD_SIZE) as u8,
        }
    }

    pub const fn x(self) -> usize {
        self.x as usize
    }

    pub const fn y(self) -> usize {
        self.y as usize
    }

    pub const fn index(self) -> usize {
        self.x as usize + self.y as usize * BOARD_SIZE
    }

    /// Do a known valid jump of `len` steps along `vector`.
    /// If the jump leaves the board, the function panics.
    pub const fn jump_valid(self, vector: CardVector, len: u8) -> Self {
        let x = self.x as i8 + vector.dx * len as i8;
        let y = self.y as i8 + vector.dy * len as i8;
        debug_assert!(x >= 0 && y >= 0);
        CardPosition::new(x as u8, y as u8)
    }
}

impl fmt::Display for CardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Iterates over all cells, row by row.
pub fn positions_iterator() -> impl Iterator<Item = CardPosition> {
    (0..BOARD_SIZE * BOARD_SIZE).map(CardPosition::from_index)
}
