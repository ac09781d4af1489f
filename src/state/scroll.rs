//! Scroll viewport over the composed document.

/// A window of `height` lines over a document of `total_lines`.
///
/// The offset is always clamped to `[0, max_offset]`, so callers can scroll
/// by any delta without bounds checks. Smooth jumps run through a glide
/// target stepped by the event loop.
#[derive(Debug, Clone)]
pub struct Viewport {
    offset: usize,
    height: usize,
    total_lines: usize,
    glide_target: Option<usize>,
}

impl Viewport {
    pub fn new(height: usize, total_lines: usize) -> Self {
        Self {
            offset: 0,
            height: height.max(1),
            total_lines,
            glide_target: None,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Largest valid offset: the document's last line sits on the bottom row.
    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height)
    }

    /// Document lines currently on screen, as `start..end`.
    pub fn visible(&self) -> std::ops::Range<usize> {
        self.offset..(self.offset + self.height).min(self.total_lines)
    }

    /// Scroll by a signed delta. Returns true if the offset changed.
    /// Any manual scroll cancels an in-flight glide.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        self.glide_target = None;
        let target = self.offset.saturating_add_signed(delta).min(self.max_offset());
        let moved = target != self.offset;
        self.offset = target;
        moved
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll_by(self.height as isize - 1)
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll_by(-(self.height as isize - 1))
    }

    pub fn to_top(&mut self) -> bool {
        self.scroll_by(isize::MIN)
    }

    pub fn to_bottom(&mut self) -> bool {
        self.scroll_by(isize::MAX)
    }

    /// Start a glide toward `line` (clamped). Jumps land the target line on
    /// the top row.
    pub fn glide_to(&mut self, line: usize) {
        let target = line.min(self.max_offset());
        if target == self.offset {
            self.glide_target = None;
        } else {
            self.glide_target = Some(target);
        }
    }

    pub fn gliding(&self) -> bool {
        self.glide_target.is_some()
    }

    /// Step the glide: a quarter of the remaining distance, at least one
    /// line, per tick. Returns true if the offset moved.
    pub fn tick_glide(&mut self) -> bool {
        let Some(target) = self.glide_target else {
            return false;
        };
        let remaining = target.abs_diff(self.offset);
        let step = (remaining / 4).max(1);
        if target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        if self.offset == target {
            self.glide_target = None;
        }
        true
    }

    /// Re-clamp after the terminal or the document changed size.
    pub fn resize(&mut self, height: usize, total_lines: usize) {
        self.height = height.max(1);
        self.total_lines = total_lines;
        self.offset = self.offset.min(self.max_offset());
        if let Some(target) = self.glide_target {
            self.glide_target = Some(target.min(self.max_offset()));
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
    fn test_offset_clamps_both_ends() {
        let mut vp = Viewport::new(10, 100);
        assert!(!vp.scroll_by(-5));
        assert_eq!(vp.offset(), 0);

        assert!(vp.scroll_by(1000));
        assert_eq!(vp.offset(), 90);
        assert!(!vp.scroll_by(1));
    }

    #[test]
    fn test_short_document_never_scrolls() {
        let mut vp = Viewport::new(40, 12);
        assert_eq!(vp.max_offset(), 0);
        assert!(!vp.scroll_by(5));
        assert_eq!(vp.visible(), 0..12);
    }

    #[test]
    fn test_paging_overlaps_one_line() {
        let mut vp = Viewport::new(10, 100);
        vp.page_down();
        assert_eq!(vp.offset(), 9);
        vp.page_up();
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_glide_quarter_remaining_min_one() {
        let mut vp = Viewport::new(10, 200);
        vp.glide_to(100);
        assert!(vp.gliding());

        assert!(vp.tick_glide());
        assert_eq!(vp.offset(), 25);
        assert!(vp.tick_glide());
        assert_eq!(vp.offset(), 43); // 25 + 75/4

        // Drains all the way and self-cancels.
        let mut guard = 0;
        while vp.tick_glide() {
            guard += 1;
            assert!(guard < 100);
        }
        assert_eq!(vp.offset(), 100);
        assert!(!vp.gliding());
    }

    #[test]
    fn test_glide_backward() {
        let mut vp = Viewport::new(10, 200);
        vp.scroll_by(150);
        vp.glide_to(0);
        vp.tick_glide();
        assert!(vp.offset() < 150);
        while vp.tick_glide() {}
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_manual_scroll_cancels_glide() {
        let mut vp = Viewport::new(10, 200);
        vp.glide_to(100);
        vp.scroll_by(1);
        assert!(!vp.gliding());
        assert!(!vp.tick_glide());
        assert_eq!(vp.offset(), 1);
    }

    #[test]
    fn test_resize_reclamps() {
        let mut vp = Viewport::new(10, 100);
        vp.to_bottom();
        assert_eq!(vp.offset(), 90);

        vp.resize(50, 100);
        assert_eq!(vp.offset(), 50);

        vp.resize(50, 40);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_home_end() {
        let mut vp = Viewport::new(10, 100);
        vp.to_bottom();
        assert_eq!(vp.offset(), vp.max_offset());
        vp.to_top();
        assert_eq!(vp.offset(), 0);
    }
}
