use std::time::Duration;

use crossterm::style::Color;

pub const TICK_INTERVAL: Duration = Duration::from_millis(70);

/// How long the game-over screen stays up before the process exits.
pub const CRASH_EXIT_DELAY: Duration = Duration::from_secs(70);

pub const GAME_OVER_TEXT: &str = "GAME OVER";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Glyph {
    pub const fn new(ch: char, fg: Color, bg: Color) -> Self {
        Glyph { ch, fg, bg }
    }
}

/// Fixed game settings. There is no runtime override.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub tick_interval: Duration,
    pub crash_exit_delay: Duration,
    pub snake: Glyph,
    pub apple: Glyph,
    pub energy: Glyph,
    pub message_fg: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tick_interval: TICK_INTERVAL,
            crash_exit_delay: CRASH_EXIT_DELAY,
            snake: Glyph::new('&', Color::Red, Color::Reset),
            apple: Glyph::new('O', Color::Green, Color::Reset),
            energy: Glyph::new('E', Color::Blue, Color::Reset),
            message_fg: Color::White,
        }
    }
}
