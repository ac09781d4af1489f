//! Terminal rendering pipeline.
//!
//! The flow is: the app paints a [`FrameBuffer`], the [`DiffRenderer`]
//! compares it against the previous frame and emits only changed cells
//! through a [`StatefulCellRenderer`] into one batched [`OutputBuffer`]
//! write. [`TerminalGuard`] owns raw mode and the alternate screen.

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod output;
pub mod terminal;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
pub use terminal::TerminalGuard;
