use crate::Coords;
use crate::field::Field;
use crate::snake::{Direction, Snake};

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConsumableKind {
    Apple,
    Energy,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Consumable {
    kind: ConsumableKind,
    pos: Coords,
}

impl Consumable {
    pub fn new(kind: ConsumableKind, pos: Coords) -> Self {
        Consumable { kind, pos }
    }

    pub fn spawn<R: Rng + ?Sized>(kind: ConsumableKind, field: &Field, rng: &mut R) -> Self {
        Consumable::new(kind, field.random_coords(rng))
    }

    pub fn kind(&self) -> ConsumableKind {
        self.kind
    }

    pub fn pos(&self) -> Coords {
        self.pos
    }

    /// Respawns anywhere on the field if the snake sits on this consumable.
    /// The new spot may be the snake's cell, the other consumable's, or the
    /// old one again.
    pub fn check_consumption<R: Rng + ?Sized>(self, actor: Coords, field: &Field, rng: &mut R) -> Self {
        if self.pos == actor {
            Consumable::spawn(self.kind, field, rng)
        } else {
            self
        }
    }
}

/// Everything the game loop mutates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Consumable,
    pub energy: Consumable,
    pub field: Field,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(field: Field, rng: &mut R) -> Self {
        let snake = Snake::new(field.random_coords(rng), Direction::Right);
        let apple = Consumable::spawn(ConsumableKind::Apple, &field, rng);
        let energy = Consumable::spawn(ConsumableKind::Energy, &field, rng);

        GameState { snake, apple, energy, field }
    }

    pub fn is_border_crash(&self) -> bool {
        self.field.is_border(self.snake.pos())
    }

    pub fn advance(&mut self) -> Coords {
        let pos = self.snake.move_step(&self.field);
        debug_assert!(self.field.contains(pos));
        pos
    }

    /// Runs the consumption check for the apple, then the energy pellet.
    /// Returns the kinds that were eaten.
    pub fn check_consumption<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<ConsumableKind> {
        let actor = self.snake.pos();
        let mut eaten = vec![];

        for consumable in [&mut self.apple, &mut self.energy] {
            if consumable.pos() == actor {
                eaten.push(consumable.kind());
            }
            *consumable = consumable.check_consumption(actor, &self.field, rng);
        }

        eaten
    }
}
