//! Progressive UI decoration: the typing banner and the one-shot reveal.
//!
//! Both are explicit state machines driven by the app's deadline loop, so
//! they test deterministically with a hand-stepped clock instead of real
//! timers.

pub mod reveal;
pub mod typing;

pub use reveal::{RevealSet, RevealTarget, TargetKind, SECTION_THRESHOLD, SKILL_BAR_THRESHOLD};
pub use typing::{advance, PhraseSequence, Step, TypingConfig, TypingMode, TypingState, HOLD_MS};
