use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::field::Field;
use crate::input::KeyInput;
use crate::render;
use crate::state::GameState;
use crate::term::Surface;

use rand::Rng;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Key(KeyInput),
    Tick,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    Quit,
    BorderCrash,
}

/// The event loop. It is the only writer of the game state.
pub struct SnakeGame<S: Surface, R: Rng> {
    surface: S,
    rng: R,
    config: GameConfig,
    state: GameState,
}

impl<S: Surface, R: Rng> SnakeGame<S, R> {
    pub fn new(surface: S, mut rng: R, config: GameConfig) -> Result<Self> {
        let (w, h) = surface.size()?;
        let field = Field::new(w, h)?;
        let state = GameState::new(field, &mut rng);

        info!(
            width = field.width(),
            height = field.height(),
            tick_ms = config.tick_interval.as_millis() as u64,
            "game initialized"
        );
        Ok(SnakeGame { surface, rng, config, state })
    }

    /// Waits on whichever source is ready first until the game ends.
    ///
    /// When both have an item ready, which one is served first is up to
    /// `select!`. Items from one source are always served in order.
    pub async fn play<K, T>(&mut self, mut keys: K, mut ticks: T) -> Result<Termination>
    where
        K: Stream<Item = KeyInput> + Unpin,
        T: Stream + Unpin,
    {
        loop {
            let event = tokio::select! {
                Some(key) = keys.next() => GameEvent::Key(key),
                Some(_) = ticks.next() => GameEvent::Tick,
                else => return Err(GameError::SourcesClosed),
            };

            if let Some(reason) = self.step(event)? {
                info!(?reason, pos = ?self.state.snake.pos(), "game ended");
                return Ok(reason);
            }
        }
    }

    /// Services one event. Every iteration that doesn't end the game finishes
    /// with a consumption check, whatever woke it up.
    pub fn step(&mut self, event: GameEvent) -> Result<Option<Termination>> {
        match event {
            GameEvent::Key(KeyInput::Quit) => return Ok(Some(Termination::Quit)),
            GameEvent::Key(KeyInput::Direction(dir)) => {
                debug!(from = ?self.state.snake.get_direction(), to = ?dir, "heading changed");
                self.state.snake.set_direction(dir);
            }
            GameEvent::Key(KeyInput::Other) => {}
            GameEvent::Tick => {
                if self.state.is_border_crash() {
                    return Ok(Some(Termination::BorderCrash));
                }
                self.state.advance();
                render::draw(&mut self.surface, &self.state, &self.config)?;
            }
        }

        for kind in self.state.check_consumption(&mut self.rng) {
            debug!(?kind, pos = ?self.state.snake.pos(), "consumable eaten");
        }

        Ok(None)
    }

    pub fn show_game_over(&mut self) -> Result<()> {
        render::game_over(&mut self.surface, &self.state.field, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::{Direction::*, Snake};
    use crate::state::{Consumable, ConsumableKind};
    use crate::term::testing::{Call, RecordingSurface};
    use rand::{rngs::StdRng, SeedableRng};

    type TestGame = SnakeGame<RecordingSurface, StdRng>;

    fn game() -> TestGame {
        let surface = RecordingSurface::new(10, 10);
        SnakeGame::new(surface, StdRng::seed_from_u64(11), GameConfig::default()).unwrap()
    }

    fn place(game: &mut TestGame, actor: (i32, i32), dir: crate::snake::Direction) {
        game.state.snake = Snake::new(actor, dir);
        game.state.apple = Consumable::new(ConsumableKind::Apple, (8, 8));
        game.state.energy = Consumable::new(ConsumableKind::Energy, (8, 1));
    }

    fn ticks(n: usize) -> impl Stream<Item = ()> + Unpin {
        tokio_stream::iter(vec![(); n])
    }

    fn keys(items: Vec<KeyInput>) -> impl Stream<Item = KeyInput> + Unpin {
        tokio_stream::iter(items)
    }

    #[test]
    fn field_comes_from_surface_size() {
        let surface = RecordingSurface::new(30, 12);
        let game = SnakeGame::new(surface, StdRng::seed_from_u64(0), GameConfig::default()).unwrap();
        assert_eq!((game.state.field.width(), game.state.field.height()), (30, 12));
    }

    #[test]
    fn zero_sized_surface_is_fatal() {
        let surface = RecordingSurface::new(0, 12);
        let res = SnakeGame::new(surface, StdRng::seed_from_u64(0), GameConfig::default());
        assert!(matches!(res, Err(GameError::EmptyField { .. })));
    }

    #[test]
    fn tick_moves_and_redraws() {
        let mut game = game();
        place(&mut game, (5, 5), Right);

        assert_eq!(game.step(GameEvent::Tick).unwrap(), None);

        assert_eq!(game.state.snake.pos(), (6, 5));
        assert!(!game.state.is_border_crash());
        assert_eq!(game.surface.flushes(), 1);
        assert!(game.surface.cells().contains(&(6, 5, '&')));
    }

    #[test]
    fn crash_is_checked_before_moving() {
        let mut game = game();
        place(&mut game, (1, 3), Left);

        assert_eq!(game.step(GameEvent::Tick).unwrap(), None);
        assert_eq!(game.state.snake.pos(), (0, 3));

        assert_eq!(game.step(GameEvent::Tick).unwrap(), Some(Termination::BorderCrash));
        assert_eq!(game.state.snake.pos(), (0, 3));
        assert_eq!(game.surface.flushes(), 1);
    }

    #[test]
    fn direction_key_overwrites_heading_without_moving() {
        let mut game = game();
        place(&mut game, (5, 5), Right);

        assert_eq!(game.step(GameEvent::Key(KeyInput::Direction(Left))).unwrap(), None);

        assert_eq!(game.state.snake.get_direction(), Left);
        assert_eq!(game.state.snake.pos(), (5, 5));
        assert!(game.surface.calls.is_empty());
    }

    #[test]
    fn key_events_also_check_consumption() {
        let mut game = game();
        place(&mut game, (4, 4), Right);
        game.state.apple = Consumable::new(ConsumableKind::Apple, (4, 4));
        let mut replay = game.rng.clone();

        game.step(GameEvent::Key(KeyInput::Other)).unwrap();

        assert_eq!(game.state.apple.pos(), game.state.field.random_coords(&mut replay));
        assert_eq!(game.state.snake.pos(), (4, 4));
    }

    #[test]
    fn quit_skips_consumption() {
        let mut game = game();
        place(&mut game, (4, 4), Right);
        game.state.apple = Consumable::new(ConsumableKind::Apple, (4, 4));

        assert_eq!(game.step(GameEvent::Key(KeyInput::Quit)).unwrap(), Some(Termination::Quit));
        assert_eq!(game.state.apple.pos(), (4, 4));
        assert_eq!(game.state.snake.pos(), (4, 4));
    }

    #[test]
    fn crash_skips_consumption() {
        let mut game = game();
        place(&mut game, (0, 4), Right);
        game.state.energy = Consumable::new(ConsumableKind::Energy, (0, 4));

        assert_eq!(game.step(GameEvent::Tick).unwrap(), Some(Termination::BorderCrash));
        assert_eq!(game.state.energy.pos(), (0, 4));
    }

    #[test]
    fn tick_eats_what_it_lands_on() {
        let mut game = game();
        place(&mut game, (3, 4), Right);
        game.state.apple = Consumable::new(ConsumableKind::Apple, (4, 4));
        let mut replay = game.rng.clone();

        game.step(GameEvent::Tick).unwrap();

        assert_eq!(game.state.apple.pos(), game.state.field.random_coords(&mut replay));
    }

    #[tokio::test]
    async fn quit_key_ends_play() {
        let mut game = game();
        place(&mut game, (5, 5), Right);

        let keys = keys(vec![KeyInput::Direction(Up), KeyInput::Other, KeyInput::Quit]);
        let res = game.play(keys, tokio_stream::pending::<()>()).await.unwrap();

        assert_eq!(res, Termination::Quit);
        assert_eq!(game.state.snake.get_direction(), Up);
        assert_eq!(game.state.snake.pos(), (5, 5));
    }

    #[tokio::test]
    async fn keys_are_served_in_order() {
        let mut game = game();
        place(&mut game, (5, 5), Right);

        let keys = keys(vec![KeyInput::Direction(Up), KeyInput::Direction(Down), KeyInput::Quit]);
        game.play(keys, tokio_stream::pending::<()>()).await.unwrap();

        assert_eq!(game.state.snake.get_direction(), Down);
    }

    #[tokio::test]
    async fn ticks_run_until_border_crash() {
        let mut game = game();
        place(&mut game, (5, 5), Right);

        let res = game.play(tokio_stream::pending(), ticks(100)).await.unwrap();

        // (5,5) -> (9,5) takes four moves; the fifth tick sees the crash
        assert_eq!(res, Termination::BorderCrash);
        assert_eq!(game.state.snake.pos(), (9, 5));
        assert_eq!(game.surface.flushes(), 4);
    }

    #[tokio::test]
    async fn closed_sources_are_an_error() {
        let mut game = game();
        place(&mut game, (5, 5), Right);

        let res = game.play(keys(vec![KeyInput::Other]), ticks(2)).await;

        assert!(matches!(res, Err(GameError::SourcesClosed)));
        assert_eq!(game.state.snake.pos(), (7, 5));
    }

    #[tokio::test]
    async fn mixed_sources_keep_per_source_order() {
        let mut game = game();
        place(&mut game, (5, 5), Right);

        // Whatever the interleaving, two ticks can't reach the border from
        // the centre and the last direction key wins.
        let keys = keys(vec![KeyInput::Direction(Up), KeyInput::Direction(Left)]);
        let res = game.play(keys, ticks(2)).await;

        assert!(matches!(res, Err(GameError::SourcesClosed)));
        assert_eq!(game.state.snake.get_direction(), Left);
        assert_eq!(game.surface.flushes(), 2);
        assert!(!game.surface.calls.contains(&Call::Close));
    }
}
