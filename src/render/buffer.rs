//! FrameBuffer and drawing primitives.
//!
//! A flat row-major grid of [`Cell`]s representing what the terminal should
//! show. The app paints into it; the diff renderer reads it. Wide characters
//! occupy two cells, the second being a continuation marker (`glyph == 0`).

use unicode_width::UnicodeWidthChar;

use crate::types::{Attr, Cell, Rgba};

/// A 2D buffer of terminal cells with row-major flat storage.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference, None when out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference, None when out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Fill the whole buffer with blank cells of one background.
    pub fn fill(&mut self, bg: Rgba) {
        self.cells.fill(Cell::blank(bg));
    }

    /// Fill a rectangular region with blank cells of one background.
    ///
    /// Out-of-bounds parts are clipped.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, bg: Rgba) {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                let idx = self.index(col, row);
                self.cells[idx] = Cell::blank(bg);
            }
        }
    }

    /// Draw text at (x, y), preserving the background already in each cell.
    ///
    /// Handles wide characters with continuation cells and clips at the
    /// right edge. Returns the column after the last drawn cell.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Rgba, attrs: Attr) -> u16 {
        let mut col = x;
        if y >= self.height {
            return col;
        }

        for ch in text.chars() {
            let ch_width = ch.width().unwrap_or(0) as u16;
            if ch_width == 0 {
                continue;
            }
            // Never split a wide character across the right edge.
            if col + ch_width > self.width {
                break;
            }

            let idx = self.index(col, y);
            let bg = self.cells[idx].bg;
            self.cells[idx] = Cell {
                glyph: ch as u32,
                fg,
                bg,
                attrs,
            };

            if ch_width == 2 {
                let cont = self.index(col + 1, y);
                self.cells[cont] = Cell {
                    glyph: 0,
                    fg,
                    bg,
                    attrs,
                };
            }

            col += ch_width;
        }
        col
    }

    /// Draw a horizontal bar: `filled` cells of `fill_glyph`, the rest of
    /// `track_width` as `track_glyph`.
    ///
    /// Used by the skill cards. The fill never exceeds the track.
    pub fn draw_hbar(
        &mut self,
        x: u16,
        y: u16,
        track_width: u16,
        filled: u16,
        fill_fg: Rgba,
        track_fg: Rgba,
    ) {
        if y >= self.height {
            return;
        }
        let filled = filled.min(track_width);
        for i in 0..track_width {
            let col = x + i;
            if col >= self.width {
                break;
            }
            let idx = self.index(col, y);
            let bg = self.cells[idx].bg;
            let (glyph, fg) = if i < filled {
                ('█', fill_fg)
            } else {
                ('░', track_fg)
            };
            self.cells[idx] = Cell {
                glyph: glyph as u32,
                fg,
                bg,
                attrs: Attr::NONE,
            };
        }
    }

    /// Set the background of a full row without disturbing glyphs.
    pub fn tint_row(&mut self, y: u16, bg: Rgba) {
        if y >= self.height {
            return;
        }
        let start = self.index(0, y);
        let end = start + self.width as usize;
        for cell in &mut self.cells[start..end] {
            cell.bg = bg;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_default_cells() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 3);
        assert_eq!(fb.get(3, 2), Some(&Cell::default()));
        assert_eq!(fb.get(4, 0), None);
        assert_eq!(fb.get(0, 3), None);
    }

    #[test]
    fn test_draw_text_basic() {
        let mut fb = FrameBuffer::new(10, 2);
        let end = fb.draw_text(1, 0, "hi", Rgba::WHITE, Attr::BOLD);
        assert_eq!(end, 3);
        assert_eq!(fb.get(1, 0).unwrap().glyph, 'h' as u32);
        assert_eq!(fb.get(2, 0).unwrap().glyph, 'i' as u32);
        assert_eq!(fb.get(2, 0).unwrap().attrs, Attr::BOLD);
        // Untouched cell stays default.
        assert_eq!(fb.get(3, 0), Some(&Cell::default()));
    }

    #[test]
    fn test_draw_text_clips_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        let end = fb.draw_text(2, 0, "abcdef", Rgba::WHITE, Attr::NONE);
        assert_eq!(end, 4);
        assert_eq!(fb.get(3, 0).unwrap().glyph, 'b' as u32);
    }

    #[test]
    fn test_draw_text_off_screen_row() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.draw_text(0, 5, "abc", Rgba::WHITE, Attr::NONE);
        assert_eq!(fb.get(0, 0), Some(&Cell::default()));
    }

    #[test]
    fn test_wide_char_gets_continuation() {
        let mut fb = FrameBuffer::new(6, 1);
        let end = fb.draw_text(0, 0, "日x", Rgba::WHITE, Attr::NONE);
        assert_eq!(end, 3);
        assert_eq!(fb.get(0, 0).unwrap().glyph, '日' as u32);
        assert_eq!(fb.get(1, 0).unwrap().glyph, 0);
        assert_eq!(fb.get(2, 0).unwrap().glyph, 'x' as u32);
    }

    #[test]
    fn test_wide_char_never_split_at_edge() {
        let mut fb = FrameBuffer::new(3, 1);
        // 'a' fits at 0, '日' would need columns 1-2... fits. '日' at col 1 ok,
        // then 'b' at col 3 clipped.
        let end = fb.draw_text(0, 0, "a日b", Rgba::WHITE, Attr::NONE);
        assert_eq!(end, 3);

        // Now the wide char lands on the last column and must be dropped.
        let mut fb = FrameBuffer::new(2, 1);
        let end = fb.draw_text(1, 0, "日", Rgba::WHITE, Attr::NONE);
        assert_eq!(end, 1);
        assert!(fb.get(1, 0).unwrap().is_blank());
    }

    #[test]
    fn test_draw_text_preserves_background() {
        let mut fb = FrameBuffer::new(4, 1);
        let bg = Rgba::rgb(20, 20, 40);
        fb.fill(bg);
        fb.draw_text(0, 0, "ok", Rgba::WHITE, Attr::NONE);
        assert_eq!(fb.get(0, 0).unwrap().bg, bg);
        assert_eq!(fb.get(1, 0).unwrap().bg, bg);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut fb = FrameBuffer::new(4, 4);
        let bg = Rgba::rgb(1, 2, 3);
        fb.fill_rect(2, 2, 10, 10, bg);
        assert_eq!(fb.get(3, 3).unwrap().bg, bg);
        assert_eq!(fb.get(1, 1).unwrap().bg, Rgba::TERMINAL_DEFAULT);
    }

    #[test]
    fn test_hbar_fill_and_track() {
        let mut fb = FrameBuffer::new(10, 1);
        fb.draw_hbar(0, 0, 8, 3, Rgba::WHITE, Rgba::GRAY);
        assert_eq!(fb.get(0, 0).unwrap().glyph, '█' as u32);
        assert_eq!(fb.get(2, 0).unwrap().glyph, '█' as u32);
        assert_eq!(fb.get(3, 0).unwrap().glyph, '░' as u32);
        assert_eq!(fb.get(7, 0).unwrap().glyph, '░' as u32);
        // Past the track untouched.
        assert!(fb.get(8, 0).unwrap().is_blank());
    }

    #[test]
    fn test_hbar_fill_clamped_to_track() {
        let mut fb = FrameBuffer::new(10, 1);
        fb.draw_hbar(0, 0, 4, 99, Rgba::WHITE, Rgba::GRAY);
        assert_eq!(fb.get(3, 0).unwrap().glyph, '█' as u32);
        assert!(fb.get(4, 0).unwrap().is_blank());
    }

    #[test]
    fn test_tint_row() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.draw_text(0, 1, "ab", Rgba::WHITE, Attr::NONE);
        let bg = Rgba::rgb(5, 5, 5);
        fb.tint_row(1, bg);
        assert_eq!(fb.get(0, 1).unwrap().glyph, 'a' as u32);
        assert_eq!(fb.get(0, 1).unwrap().bg, bg);
        assert_eq!(fb.get(2, 1).unwrap().bg, bg);
        // Other row untouched.
        assert_eq!(fb.get(0, 0).unwrap().bg, Rgba::TERMINAL_DEFAULT);
    }
}
