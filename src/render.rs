use crate::{Coords, TermInt};
use crate::config::{GameConfig, Glyph, GAME_OVER_TEXT};
use crate::error::Result;
use crate::field::Field;
use crate::state::GameState;
use crate::term::Surface;

use crossterm::style::Color;

/// Redraws the whole frame: clear, then the consumables, then the snake on top.
pub fn draw<S: Surface>(surface: &mut S, state: &GameState, config: &GameConfig) -> Result<()> {
    surface.clear(config.snake.fg, config.snake.bg)?;
    print_at(surface, state.apple.pos(), &config.apple)?;
    print_at(surface, state.energy.pos(), &config.energy)?;
    print_at(surface, state.snake.pos(), &config.snake)?;
    surface.flush()
}

pub fn game_over<S: Surface>(surface: &mut S, field: &Field, config: &GameConfig) -> Result<()> {
    let (cx, cy) = field.center();
    let x = (cx - GAME_OVER_TEXT.chars().count() as i32 / 2).max(0);
    write_text(surface, (x, cy), GAME_OVER_TEXT, config.message_fg, Color::Reset)?;
    surface.flush()
}

/// Writes `s` left to right starting at `pos`, one cell per char.
pub fn write_text<S: Surface>(surface: &mut S, pos: Coords, s: &str, fg: Color, bg: Color) -> Result<()> {
    for (i, ch) in s.chars().enumerate() {
        let x = pos.0 + i as i32;
        surface.set_cell(x as TermInt, pos.1 as TermInt, ch, fg, bg)?;
    }

    Ok(())
}

fn print_at<S: Surface>(surface: &mut S, pos: Coords, glyph: &Glyph) -> Result<()> {
    surface.set_cell(pos.0 as TermInt, pos.1 as TermInt, glyph.ch, glyph.fg, glyph.bg)
}
