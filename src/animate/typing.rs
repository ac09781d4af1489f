//! Typing banner state machine.
//!
//! Cycles through a phrase sequence forever: type a phrase grapheme by
//! grapheme, hold the complete phrase, delete it, move to the next, wrap
//! around after the last. Instead of self-rescheduling timer callbacks the
//! machine is a value plus one pure transition, [`advance`]: each call
//! returns the next state, the text to show, and how long to wait before
//! the next call. The caller owns the clock, so exactly one step is ever
//! pending and tests can drive the cycle without waiting.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Error, Result};

/// How long the fully-typed phrase holds before deletion starts.
pub const HOLD_MS: u64 = 2000;

/// Cursor marker appended to the rendered prefix.
pub const CURSOR_MARKER: &str = "▌";

// =============================================================================
// PhraseSequence
// =============================================================================

/// Ordered, non-empty sequence of display phrases.
///
/// Non-emptiness is enforced here so the state machine never has to handle
/// an undefined phrase at index 0. `*emphasis*` markers are stripped at
/// construction; the banner renders plain text.
#[derive(Debug, Clone)]
pub struct PhraseSequence {
    phrases: Vec<String>,
    /// Grapheme count per phrase, precomputed: the cursor steps clusters,
    /// not bytes or chars.
    lengths: Vec<usize>,
}

impl PhraseSequence {
    pub fn new(raw: Vec<String>) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::EmptyPhraseSequence);
        }
        let phrases: Vec<String> = raw
            .iter()
            .map(|p| crate::view::strip_emphasis(p))
            .collect();
        let lengths = phrases.iter().map(|p| p.graphemes(true).count()).collect();
        Ok(Self { phrases, lengths })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        // Unrepresentable, but keep the pair for clippy's sake.
        false
    }

    /// Grapheme length of phrase `i`.
    pub fn grapheme_len(&self, i: usize) -> usize {
        self.lengths[i % self.lengths.len()]
    }

    /// The first `cursor` graphemes of phrase `i`.
    pub fn prefix(&self, i: usize, cursor: usize) -> &str {
        let phrase = &self.phrases[i % self.phrases.len()];
        match phrase.grapheme_indices(true).nth(cursor) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }
}

// =============================================================================
// State machine
// =============================================================================

/// Whether the cursor is growing or shrinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingMode {
    Typing,
    Deleting,
}

/// Position in the cycle. Invariant: `cursor <= grapheme_len(phrase)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingState {
    pub phrase: usize,
    pub cursor: usize,
    pub mode: TypingMode,
}

impl Default for TypingState {
    fn default() -> Self {
        Self {
            phrase: 0,
            cursor: 0,
            mode: TypingMode::Typing,
        }
    }
}

/// Step intervals, injected at construction.
#[derive(Debug, Clone, Copy)]
pub struct TypingConfig {
    pub type_ms: u64,
    pub delete_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_ms: 90,
            delete_ms: 45,
        }
    }
}

/// One transition's output: the state entered, what to show for it, and how
/// long to wait before the next [`advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: TypingState,
    pub rendered: String,
    pub delay: Duration,
}

/// Render the banner text for a state: typed prefix plus cursor marker.
pub fn rendered(seq: &PhraseSequence, state: &TypingState) -> String {
    let mut out = seq.prefix(state.phrase, state.cursor).to_string();
    out.push_str(CURSOR_MARKER);
    out
}

/// Advance the machine by one step.
///
/// Typing grows the cursor to the full phrase, which holds for [`HOLD_MS`];
/// the next step enters Deleting, which shrinks back to zero; the step after
/// that starts Typing the next phrase (wrapping after the last). A
/// single-phrase sequence cycles against itself indefinitely.
pub fn advance(seq: &PhraseSequence, cfg: &TypingConfig, state: TypingState) -> Step {
    let len = seq.grapheme_len(state.phrase);

    let (next, delay_ms) = match state.mode {
        TypingMode::Typing if state.cursor < len => {
            let next = TypingState {
                cursor: state.cursor + 1,
                ..state
            };
            // The completed phrase holds before deletion begins.
            let delay = if next.cursor == len { HOLD_MS } else { cfg.type_ms };
            (next, delay)
        }
        TypingMode::Typing => {
            // Cursor sits at the full phrase (or the phrase is empty).
            if len == 0 {
                (next_phrase(seq, state.phrase), cfg.type_ms)
            } else {
                (
                    TypingState {
                        cursor: state.cursor - 1,
                        mode: TypingMode::Deleting,
                        ..state
                    },
                    cfg.delete_ms,
                )
            }
        }
        TypingMode::Deleting if state.cursor > 0 => (
            TypingState {
                cursor: state.cursor - 1,
                ..state
            },
            cfg.delete_ms,
        ),
        TypingMode::Deleting => (next_phrase(seq, state.phrase), cfg.type_ms),
    };

    Step {
        rendered: rendered(seq, &next),
        state: next,
        delay: Duration::from_millis(delay_ms),
    }
}

fn next_phrase(seq: &PhraseSequence, current: usize) -> TypingState {
    TypingState {
        phrase: (current + 1) % seq.len(),
        cursor: 0,
        mode: TypingMode::Typing,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(phrases: &[&str]) -> PhraseSequence {
        PhraseSequence::new(phrases.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn trace(seq: &PhraseSequence, steps: usize) -> Vec<(TypingMode, usize, usize)> {
        let cfg = TypingConfig::default();
        let mut state = TypingState::default();
        let mut out = vec![(state.mode, state.phrase, state.cursor)];
        for _ in 0..steps {
            let step = advance(seq, &cfg, state);
            state = step.state;
            out.push((state.mode, state.phrase, state.cursor));
        }
        out
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(matches!(
            PhraseSequence::new(vec![]),
            Err(Error::EmptyPhraseSequence)
        ));
    }

    #[test]
    fn test_markers_stripped_at_construction() {
        let s = seq(&["do *it* now"]);
        assert_eq!(s.prefix(0, 9), "do it now");
        assert_eq!(s.grapheme_len(0), 9);
    }

    #[test]
    fn test_spec_trace_for_ab() {
        // Contract trace: Typing@0, Typing@1, Typing@2 (hold), Deleting@1,
        // Deleting@0, then Typing@0 again.
        use TypingMode::*;
        let s = seq(&["ab"]);
        assert_eq!(
            trace(&s, 5),
            vec![
                (Typing, 0, 0),
                (Typing, 0, 1),
                (Typing, 0, 2),
                (Deleting, 0, 1),
                (Deleting, 0, 0),
                (Typing, 0, 0),
            ]
        );
    }

    #[test]
    fn test_hold_delay_after_full_phrase() {
        let s = seq(&["ab"]);
        let cfg = TypingConfig::default();
        let mut state = TypingState::default();

        let step1 = advance(&s, &cfg, state);
        assert_eq!(step1.delay, Duration::from_millis(cfg.type_ms));
        state = step1.state;

        // Entering the full phrase holds.
        let step2 = advance(&s, &cfg, state);
        assert_eq!(step2.state.cursor, 2);
        assert_eq!(step2.delay, Duration::from_millis(HOLD_MS));
        state = step2.state;

        // Deletion steps at the delete interval.
        let step3 = advance(&s, &cfg, state);
        assert_eq!(step3.state.mode, TypingMode::Deleting);
        assert_eq!(step3.delay, Duration::from_millis(cfg.delete_ms));
    }

    #[test]
    fn test_rendered_prefix_and_marker() {
        let s = seq(&["hey"]);
        let cfg = TypingConfig::default();
        let step = advance(&s, &cfg, TypingState::default());
        assert_eq!(step.rendered, format!("h{CURSOR_MARKER}"));

        let step2 = advance(&s, &cfg, step.state);
        assert_eq!(step2.rendered, format!("he{CURSOR_MARKER}"));
    }

    #[test]
    fn test_cursor_always_in_bounds() {
        let s = seq(&["one", "", "日本語", "a"]);
        let cfg = TypingConfig::default();
        let mut state = TypingState::default();
        for _ in 0..500 {
            let step = advance(&s, &cfg, state);
            state = step.state;
            assert!(state.phrase < s.len());
            assert!(
                state.cursor <= s.grapheme_len(state.phrase),
                "cursor {} out of bounds for phrase {}",
                state.cursor,
                state.phrase
            );
        }
    }

    #[test]
    fn test_cycle_closure_across_phrases() {
        let s = seq(&["ab", "xyz", "q"]);
        let cfg = TypingConfig::default();
        let mut state = TypingState::default();
        let mut completions = Vec::new();

        for _ in 0..200 {
            let prev_phrase = state.phrase;
            let step = advance(&s, &cfg, state);
            state = step.state;
            if state.phrase != prev_phrase || (state.cursor == 0 && state.mode == TypingMode::Typing && step.rendered == CURSOR_MARKER)
            {
                if state.phrase != prev_phrase || s.len() == 1 {
                    completions.push(state.phrase);
                }
            }
        }

        // Each full type+delete of phrase i lands on (i+1) mod N.
        assert!(completions.len() >= 6);
        for (i, phrase) in completions.iter().enumerate() {
            assert_eq!(*phrase, (i + 1) % s.len());
        }
        // After N complete cycles we're back at phrase 0.
        assert_eq!(completions[s.len() - 1], 0);
    }

    #[test]
    fn test_single_phrase_never_wedges() {
        let s = seq(&["loop"]);
        let cfg = TypingConfig::default();
        let mut state = TypingState::default();
        let mut returns_to_start = 0;
        for _ in 0..100 {
            let step = advance(&s, &cfg, state);
            state = step.state;
            if state == TypingState::default() {
                returns_to_start += 1;
            }
        }
        // 4 typed + 4 deleted + restart = 9 advances per cycle.
        assert!(returns_to_start >= 9, "cycled {returns_to_start} times");
    }

    #[test]
    fn test_graphemes_not_bytes() {
        // Two graphemes: a combining-accent cluster and a CJK char.
        let s = seq(&["é日"]);
        assert_eq!(s.grapheme_len(0), 2);
        let cfg = TypingConfig::default();
        let step = advance(&s, &cfg, TypingState::default());
        assert_eq!(step.rendered, format!("é{CURSOR_MARKER}"));
    }

    #[test]
    fn test_empty_phrase_is_skipped_not_wedged() {
        let s = seq(&["", "ok"]);
        let cfg = TypingConfig::default();
        let mut state = TypingState::default();
        // First advance moves straight to the next phrase.
        let step = advance(&s, &cfg, state);
        assert_eq!(step.state.phrase, 1);
        assert_eq!(step.state.mode, TypingMode::Typing);
        state = step.state;
        let step = advance(&s, &cfg, state);
        assert_eq!(step.rendered, format!("o{CURSOR_MARKER}"));
    }
}
