//! One-shot reveal tracking.
//!
//! Sections and skill bars start hidden and latch to revealed the first time
//! enough of them is inside the viewport. The latch is one-way: scrolling a
//! target back out never un-reveals it, and a skill bar's fill width is
//! computed exactly once, at the moment its latch flips.

/// Fraction of a section that must be visible to reveal it.
pub const SECTION_THRESHOLD: f32 = 0.1;

/// Fraction of a skill bar row group that must be visible to fill it.
pub const SKILL_BAR_THRESHOLD: f32 = 0.5;

/// What kind of thing a target reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Section,
    SkillBar { proficiency: u8 },
}

/// One revealable region of the document.
#[derive(Debug, Clone)]
pub struct RevealTarget {
    pub kind: TargetKind,
    /// First document line of the region.
    pub start: usize,
    /// Region height in lines, at least 1.
    pub height: usize,
    pub revealed: bool,
    /// Bar fill in columns. Written once when the latch flips; never
    /// recomputed, even if proficiency or bar width would give a different
    /// answer later.
    pub fill: Option<u16>,
}

impl RevealTarget {
    pub fn new(kind: TargetKind, start: usize, height: usize) -> Self {
        Self {
            kind,
            start,
            height: height.max(1),
            revealed: false,
            fill: None,
        }
    }

    fn threshold(&self) -> f32 {
        match self.kind {
            TargetKind::Section => SECTION_THRESHOLD,
            TargetKind::SkillBar { .. } => SKILL_BAR_THRESHOLD,
        }
    }

    /// Lines of this target inside `[viewport_start, viewport_start + viewport_height)`.
    fn overlap(&self, viewport_start: usize, viewport_height: usize) -> usize {
        let end = self.start + self.height;
        let vp_end = viewport_start + viewport_height;
        end.min(vp_end).saturating_sub(self.start.max(viewport_start))
    }
}

/// All reveal targets for one composed document.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    targets: Vec<RevealTarget>,
    /// Indices still unrevealed, so observe() skips latched targets.
    pending: Vec<usize>,
}

impl RevealSet {
    pub fn new(targets: Vec<RevealTarget>) -> Self {
        let pending = (0..targets.len()).collect();
        Self { targets, pending }
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    pub fn all_revealed(&self) -> bool {
        self.pending.is_empty()
    }

    /// Latch every pending target whose visible fraction meets its threshold.
    ///
    /// The comparison is inclusive: exactly 10% of a section (or 50% of a
    /// bar) in view reveals it. Skill bars compute their fill from
    /// `bar_width` at latch time. Returns how many targets flipped.
    pub fn observe(&mut self, viewport_start: usize, viewport_height: usize, bar_width: u16) -> usize {
        let mut flipped = 0;
        self.pending.retain(|&i| {
            let target = &mut self.targets[i];
            let overlap = target.overlap(viewport_start, viewport_height);
            let fraction = overlap as f32 / target.height as f32;
            if fraction >= target.threshold() {
                target.revealed = true;
                if let TargetKind::SkillBar { proficiency } = target.kind {
                    let fill = proficiency as u32 * bar_width as u32 / 100;
                    target.fill = Some(fill as u16);
                }
                flipped += 1;
                false
            } else {
                true
            }
        });
        flipped
    }

    /// Replace geometry after a recompose, keeping latches and fills.
    ///
    /// Matching is positional: a resize reflows line numbers but never
    /// reorders or renumbers targets, so target `i` before is target `i`
    /// after. A target that was revealed stays revealed with its original
    /// fill.
    pub fn rebuild(&mut self, new_targets: Vec<RevealTarget>) {
        let mut targets = new_targets;
        for (i, target) in targets.iter_mut().enumerate() {
            if let Some(old) = self.targets.get(i) {
                if old.revealed {
                    target.revealed = true;
                    target.fill = old.fill;
                }
            }
        }
        self.pending = targets
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.revealed)
            .map(|(i, _)| i)
            .collect();
        self.targets = targets;
    }

    /// Whether the target covering document line `line` has revealed.
    /// Lines outside any target count as revealed.
    pub fn line_revealed(&self, line: usize) -> bool {
        self.targets
            .iter()
            .filter(|t| line >= t.start && line < t.start + t.height)
            .all(|t| t.revealed)
    }
}

// =============================================================================
// Tests
// =============================================================================
