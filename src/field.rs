use crate::{Coords, TermInt};
use crate::error::GameError;

use rand::Rng;

/// True modulo: always in `[0, m)`, also for negative `n`. Requires `m > 0`.
pub fn wrap(n: i32, m: i32) -> i32 {
    n.rem_euclid(m)
}

/// The playing field, sized once from the terminal at startup.
///
/// Movement wraps around its edges, but the outermost ring of cells is
/// fatal to the snake, see [`Field::is_border`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Field {
    width: i32,
    height: i32,
}

impl Field {
    pub fn new(width: TermInt, height: TermInt) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::EmptyField { width, height });
        }

        Ok(Field { width: width as i32, height: height as i32 })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, pos: Coords) -> bool {
        (0..self.width).contains(&pos.0) && (0..self.height).contains(&pos.1)
    }

    pub fn advance(&self, pos: Coords, delta: (i32, i32)) -> Coords {
        (wrap(pos.0 + delta.0, self.width), wrap(pos.1 + delta.1, self.height))
    }

    pub fn is_border(&self, pos: Coords) -> bool {
        pos.0 == 0 || pos.1 == 0 || pos.0 == self.width - 1 || pos.1 == self.height - 1
    }

    pub fn random_coords<R: Rng + ?Sized>(&self, rng: &mut R) -> Coords {
        (rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }
}
