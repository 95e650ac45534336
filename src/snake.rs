use crate::Coords;
use crate::field::Field;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit vector for this heading. Screen coordinates, so `Up` is -y.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// A single-cell snake. It never grows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    pos: Coords,
    direction: Direction,
}

impl Snake {
    pub fn new(pos: Coords, direction: Direction) -> Self {
        Snake { pos, direction }
    }

    pub fn pos(&self) -> Coords {
        self.pos
    }

    pub fn move_step(&mut self, field: &Field) -> Coords {
        self.pos = field.advance(self.pos, self.direction.delta());
        self.pos
    }

    /// Overwrites the heading. Turning straight back is allowed.
    pub fn set_direction(&mut self, new_direction: Direction) {
        self.direction = new_direction;
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }
}
