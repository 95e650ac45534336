use crate::TermInt;
use crate::error::{GameError, Result};
use std::io::{Stdout, Write, stdout};
use std::thread;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, read};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::warn;

/// What the game needs from the terminal.
pub trait Surface {
    fn size(&self) -> Result<(TermInt, TermInt)>;
    fn clear(&mut self, fg: Color, bg: Color) -> Result<()>;
    fn set_cell(&mut self, x: TermInt, y: TermInt, ch: char, fg: Color, bg: Color) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> Result<(TermInt, TermInt)> {
        (**self).size()
    }

    fn clear(&mut self, fg: Color, bg: Color) -> Result<()> {
        (**self).clear(fg, bg)
    }

    fn set_cell(&mut self, x: TermInt, y: TermInt, ch: char, fg: Color, bg: Color) -> Result<()> {
        (**self).set_cell(x, y, ch, fg, bg)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).map_err(GameError::terminal("enter alt screen"))?;
        terminal::enable_raw_mode().map_err(GameError::terminal("enable raw mode"))?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
            .map_err(GameError::terminal("hide cursor"))?;
        Ok(())
    }
}

impl Surface for TermManager {
    fn size(&self) -> Result<(TermInt, TermInt)> {
        terminal::size().map_err(GameError::terminal("read terminal size"))
    }

    fn clear(&mut self, fg: Color, bg: Color) -> Result<()> {
        queue!(
            self.stdout,
            style::SetForegroundColor(fg),
            style::SetBackgroundColor(bg),
            terminal::Clear(ClearType::All)
        )
        .map_err(GameError::terminal("clear screen"))
    }

    fn set_cell(&mut self, x: TermInt, y: TermInt, ch: char, fg: Color, bg: Color) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            style::SetForegroundColor(fg),
            style::SetBackgroundColor(bg),
            style::Print(ch),
            style::ResetColor
        )
        .map_err(GameError::terminal("draw cell"))
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush().map_err(GameError::terminal("flush"))
    }

    fn close(&mut self) -> Result<()> {
        // Every step is attempted even if an earlier one fails
        let raw = terminal::disable_raw_mode();
        let cursor = execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking);
        let screen = execute!(self.stdout, LeaveAlternateScreen);

        raw.map_err(GameError::terminal("disable raw mode"))?;
        cursor.map_err(GameError::terminal("show cursor"))?;
        screen.map_err(GameError::terminal("leave alt screen"))
    }
}

/// Forwards raw terminal events, in arrival order, from a dedicated thread.
///
/// The thread blocks in `read()` and is never joined. It ends on its own once
/// the receiver is gone or reading fails.
pub fn spawn_input_reader() -> UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn(move || loop {
        match read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(err) => {
                warn!(?err, "terminal input reader stopped");
                break;
            }
        }
    });

    rx
}
