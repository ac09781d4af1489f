//! Differential frame renderer.
//!
//! Compares each frame against the previous one and only emits cells that
//! changed, wrapped in a synchronized-output block so the terminal applies
//! the update atomically. A resize invalidates the previous frame and the
//! next render repaints everything.

use std::io;

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

/// Diff renderer holding the previously rendered frame.
pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true when at least one cell was emitted.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;

        ansi::begin_sync(&mut self.output)?;
        self.cell_renderer.reset();

        let width = buffer.width();
        let height = buffer.height();
        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|p| p.width() == width && p.height() == height);

        for y in 0..height {
            for x in 0..width {
                let cell = match buffer.get(x, y) {
                    Some(c) => c,
                    None => continue,
                };
                let changed = if same_size {
                    self.previous
                        .as_ref()
                        .and_then(|p| p.get(x, y))
                        .is_none_or(|prev| prev != cell)
                } else {
                    true
                };
                if changed {
                    has_changes = true;
                    self.cell_renderer.render_cell(&mut self.output, x, y, cell);
                }
            }
        }

        ansi::end_sync(&mut self.output)?;
        self.output.flush_stdout()?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Drop the previous frame; the next render repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Whether a previous frame exists to diff against.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}
