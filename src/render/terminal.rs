//! Terminal setup and teardown.
//!
//! Raw mode, alternate screen, and cursor visibility via crossterm. The
//! guard restores the terminal on drop so a panic or early return never
//! leaves the user's shell in raw mode.

use std::io::{self, Write};

use crossterm::{cursor, execute, terminal};

use super::ansi;
use super::output::OutputBuffer;

/// RAII guard over the terminal state.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode + alternate screen, hide the cursor, set the title.
    pub fn enter(title: &str) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;

        let mut out = OutputBuffer::new();
        ansi::set_title(&mut out, title)?;
        out.flush_stdout()?;

        Ok(Self { active: true })
    }

    /// Current terminal size as (columns, rows).
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Restore the terminal explicitly. Also called by drop.
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        io::stdout().flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}
