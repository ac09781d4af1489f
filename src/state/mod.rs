//! Interactive state: the scroll viewport, section navigation, and the
//! contact form.
//!
//! Everything here is plain data with pure-ish methods; the app's event
//! loop owns the clock and feeds `Instant`s in, so the form's timed phases
//! test without sleeping.

pub mod form;
pub mod nav;
pub mod scroll;

pub use form::{ContactForm, Field, Phase, BANNER_MS, SEND_DELAY_MS};
pub use nav::Navigation;
pub use scroll::Viewport;
