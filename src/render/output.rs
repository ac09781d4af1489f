//! Output buffering and stateful cell emission.
//!
//! Terminal writes are batched into one buffer and flushed in a single
//! syscall per frame. The cell renderer tracks the escape-code state the
//! terminal is already in (cursor position, colors, attributes) and only
//! emits what changed.

use std::io::{self, Write};

use crate::types::{Attr, Cell, Rgba};

use super::ansi;

// =============================================================================
// OutputBuffer
// =============================================================================

/// Accumulates terminal output for batch writing.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a buffer with a frame-sized default capacity.
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(16 * 1024),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear the buffer without deallocating.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Append a string.
    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Append a single character.
    #[inline]
    pub fn push_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    /// Append a unicode codepoint; invalid codepoints are dropped.
    #[inline]
    pub fn push_codepoint(&mut self, cp: u32) {
        if let Some(c) = char::from_u32(cp) {
            self.push_char(c);
        }
    }

    /// Flush the buffer to stdout in one write.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.data)?;
        stdout.flush()?;
        self.data.clear();
        Ok(())
    }

    /// The accumulated bytes (for tests).
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Buffering only; the real flush is flush_stdout.
        Ok(())
    }
}

// =============================================================================
// StatefulCellRenderer
// =============================================================================

/// Renders cells while tracking terminal state to minimize output.
///
/// Tracks the last cursor position, colors, and attributes; a cell only
/// costs escape codes for the state it actually changes.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    last_x: i32,
    last_y: i32,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    /// Forget all tracked state. Call at the start of each frame.
    pub fn reset(&mut self) {
        self.last_x = -1;
        self.last_y = -1;
        self.last_fg = None;
        self.last_bg = None;
        self.last_attrs = Attr::NONE;
    }

    /// Emit a single cell, skipping redundant escape codes.
    pub fn render_cell(&mut self, output: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) {
        // Continuation half of a wide character: track position, emit nothing.
        if cell.glyph == 0 {
            self.last_x = x as i32;
            self.last_y = y as i32;
            return;
        }

        // Cursor move only when not sequential.
        if y as i32 != self.last_y || x as i32 != self.last_x + 1 {
            ansi::cursor_to(output, x, y).ok();
        }

        // Attribute change resets everything, so colors must re-emit.
        if cell.attrs != self.last_attrs {
            ansi::reset(output).ok();
            if !cell.attrs.is_empty() {
                ansi::attrs(output, cell.attrs).ok();
            }
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }

        if self.last_fg.is_none_or(|c| c != cell.fg) {
            ansi::fg(output, cell.fg).ok();
            self.last_fg = Some(cell.fg);
        }
        if self.last_bg.is_none_or(|c| c != cell.bg) {
            ansi::bg(output, cell.bg).ok();
            self.last_bg = Some(cell.bg);
        }

        output.push_codepoint(cell.glyph);

        self.last_x = x as i32;
        self.last_y = y as i32;
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
