//! Theme system.
//!
//! Semantic color slots resolved to [`Rgba`] at paint time. Each preset is a
//! paired dark/light palette; [`ThemeManager`] owns the pair and the current
//! mode, and `toggle()` is the only mutation entry point. Nothing is
//! persisted: the mode lives in process memory for the page session.

use crate::types::Rgba;

pub mod presets;

pub use presets::{preset, preset_names};

// =============================================================================
// ThemeColor
// =============================================================================

/// A theme color slot.
///
/// - `Default`: the terminal's own color
/// - `Ansi(n)`: ANSI palette index (0-255)
/// - `Rgb(c)`: explicit RGB
/// - `Str(s)`: parsed lazily (hex or oklch), magenta on parse failure
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeColor {
    Default,
    Ansi(u8),
    Rgb(Rgba),
    Str(String),
}

impl ThemeColor {
    /// Resolve to a concrete [`Rgba`], parsing strings as needed.
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
            Self::Str(s) => Rgba::parse(s).unwrap_or(Rgba::MAGENTA),
        }
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self::Default
    }
}

impl From<u32> for ThemeColor {
    fn from(rgb: u32) -> Self {
        Self::Rgb(Rgba::from_rgb_int(rgb))
    }
}

impl From<&str> for ThemeColor {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

// =============================================================================
// Theme
// =============================================================================

/// A complete palette: main colors, semantic feedback, text and surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Preset name this palette belongs to.
    pub name: String,

    // Main palette
    pub primary: ThemeColor,
    pub secondary: ThemeColor,
    pub accent: ThemeColor,

    // Semantic
    pub success: ThemeColor,
    pub error: ThemeColor,

    // Text
    pub text: ThemeColor,
    pub text_muted: ThemeColor,
    pub text_bright: ThemeColor,

    // Surfaces
    pub background: ThemeColor,
    pub surface: ThemeColor,

    // Chrome
    pub border: ThemeColor,
}

/// A named role a span can carry, resolved against the active theme when
/// painting. Keeps the view layer free of concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Text,
    Muted,
    Bright,
    Primary,
    Secondary,
    Accent,
    Success,
    Error,
    Border,
}

impl Theme {
    /// Resolve a role to a concrete color.
    pub fn role(&self, role: ColorRole) -> Rgba {
        match role {
            ColorRole::Text => self.text.resolve(),
            ColorRole::Muted => self.text_muted.resolve(),
            ColorRole::Bright => self.text_bright.resolve(),
            ColorRole::Primary => self.primary.resolve(),
            ColorRole::Secondary => self.secondary.resolve(),
            ColorRole::Accent => self.accent.resolve(),
            ColorRole::Success => self.success.resolve(),
            ColorRole::Error => self.error.resolve(),
            ColorRole::Border => self.border.resolve(),
        }
    }
}

// =============================================================================
// ThemeManager
// =============================================================================

/// Light or dark variant of the active preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// A preset's paired palettes.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemePair {
    pub dark: Theme,
    pub light: Theme,
}

/// Owns the active preset pair and the current mode.
///
/// The mode changes only through [`ThemeManager::toggle`]; reads go through
/// [`ThemeManager::current`]. In-memory only, created once at startup.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    pair: ThemePair,
    mode: ThemeMode,
}

impl ThemeManager {
    pub fn new(pair: ThemePair, mode: ThemeMode) -> Self {
        Self { pair, mode }
    }

    /// Flip between dark and light; returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        self.mode
    }

    /// The palette for the current mode.
    pub fn current(&self) -> &Theme {
        match self.mode {
            ThemeMode::Dark => &self.pair.dark,
            ThemeMode::Light => &self.pair.light,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_color_resolve() {
        assert!(ThemeColor::Default.resolve().is_terminal_default());
        assert_eq!(ThemeColor::Ansi(12).resolve(), Rgba::ansi(12));
        assert_eq!(
            ThemeColor::from(0xff0000u32).resolve(),
            Rgba::rgb(255, 0, 0)
        );
        assert_eq!(
            ThemeColor::from("#00ff00").resolve(),
            Rgba::rgb(0, 255, 0)
        );
        // Unparseable strings fall back to magenta, never panic.
        assert_eq!(ThemeColor::from("bogus").resolve(), Rgba::MAGENTA);
    }

    #[test]
    fn test_toggle_is_the_only_mutation() {
        let pair = presets::preset("midnight").unwrap();
        let mut mgr = ThemeManager::new(pair, ThemeMode::Dark);

        assert_eq!(mgr.mode(), ThemeMode::Dark);
        let dark_bg = mgr.current().background.clone();

        assert_eq!(mgr.toggle(), ThemeMode::Light);
        assert_eq!(mgr.mode(), ThemeMode::Light);
        assert_ne!(mgr.current().background, dark_bg);

        assert_eq!(mgr.toggle(), ThemeMode::Dark);
        assert_eq!(mgr.current().background, dark_bg);
    }

    #[test]
    fn test_role_resolution() {
        let pair = presets::preset("midnight").unwrap();
        let theme = pair.dark;
        assert_eq!(theme.role(ColorRole::Primary), theme.primary.resolve());
        assert_eq!(theme.role(ColorRole::Error), theme.error.resolve());
    }
}
