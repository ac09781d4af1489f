//! # termfolio
//!
//! A single-page personal portfolio for the terminal.
//!
//! The page is composed once into a column of styled lines, then scrolled
//! inside a viewport. Everything animated (the typing banner, the one-shot
//! reveals, the particle background, the simulated contact-form send) is an
//! explicit state machine advanced by one deadline-driven event loop; frames
//! are diffed against the previous one so only changed cells reach the
//! terminal.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Attr, Cell)
//! - [`content`] - The portfolio view model, loaded from TOML
//! - [`view`] - Styled spans, wrapping, and page composition
//! - [`animate`] - Typing banner and reveal state machines
//! - [`state`] - Viewport, navigation, and contact form
//! - [`fx`] - Background particle presets
//! - [`theme`] - Palettes, light/dark pairs, presets
//! - [`render`] - Frame buffer, ANSI encoding, diff rendering
//! - [`app`] - Event loop and painting

pub mod animate;
pub mod app;
pub mod content;
pub mod error;
pub mod fx;
pub mod render;
pub mod state;
pub mod theme;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use types::{Attr, Cell, Rgba};

pub use animate::{
    advance, PhraseSequence, RevealSet, RevealTarget, Step, TargetKind, TypingConfig, TypingMode,
    TypingState, HOLD_MS, SECTION_THRESHOLD, SKILL_BAR_THRESHOLD,
};

pub use app::{run, App, Options};

pub use content::Portfolio;

pub use error::{Error, Result};

pub use fx::{ParticleField, FRAME_MS};

pub use render::{DiffRenderer, FrameBuffer, OutputBuffer, StatefulCellRenderer, TerminalGuard};

pub use state::{ContactForm, Field, Navigation, Phase, Viewport};

pub use theme::{
    preset, preset_names, ColorRole, Theme, ThemeColor, ThemeManager, ThemeMode, ThemePair,
};

pub use view::{compose, Block, BlockKind, Document, Line, SectionId, Span};
