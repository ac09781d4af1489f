//! Built-in theme presets.
//!
//! Each preset is a paired dark/light palette so the theme toggle always has
//! somewhere to go. `midnight` is the default; `terminal` defers to the
//! user's own terminal colors wherever possible.

use super::{Theme, ThemeColor, ThemePair};

/// Look up a preset pair by name.
pub fn preset(name: &str) -> Option<ThemePair> {
    match name {
        "midnight" => Some(midnight()),
        "terminal" => Some(terminal()),
        "dracula" => Some(dracula()),
        "nord" => Some(nord()),
        "gruvbox" => Some(gruvbox()),
        "solarized" => Some(solarized()),
        _ => None,
    }
}

/// All preset names, default first.
pub fn preset_names() -> &'static [&'static str] {
    &[
        "midnight",
        "terminal",
        "dracula",
        "nord",
        "gruvbox",
        "solarized",
    ]
}

// =============================================================================
// Midnight (default)
// =============================================================================

/// House palette: deep blue dark side, warm paper light side.
pub fn midnight() -> ThemePair {
    ThemePair {
        dark: Theme {
            name: "midnight".to_string(),
            primary: "oklch(0.78 0.12 250)".into(),
            secondary: "oklch(0.75 0.14 300)".into(),
            accent: "oklch(0.85 0.14 85)".into(),
            success: "oklch(0.78 0.16 150)".into(),
            error: "oklch(0.68 0.2 25)".into(),
            text: 0xd6dbe5u32.into(),
            text_muted: 0x6b7487u32.into(),
            text_bright: 0xf5f7fau32.into(),
            background: 0x11151cu32.into(),
            surface: 0x1a2029u32.into(),
            border: 0x313a49u32.into(),
        },
        light: Theme {
            name: "midnight".to_string(),
            primary: "oklch(0.52 0.14 250)".into(),
            secondary: "oklch(0.52 0.16 300)".into(),
            accent: "oklch(0.6 0.13 70)".into(),
            success: "oklch(0.55 0.15 150)".into(),
            error: "oklch(0.55 0.2 25)".into(),
            text: 0x2b3240u32.into(),
            text_muted: 0x8a92a3u32.into(),
            text_bright: 0x10131au32.into(),
            background: 0xf4f2ecu32.into(),
            surface: 0xe9e6ddu32.into(),
            border: 0xc9c4b6u32.into(),
        },
    }
}

// =============================================================================
// Terminal
// =============================================================================

/// Respects the terminal's own palette via ANSI indices.
pub fn terminal() -> ThemePair {
    let base = Theme {
        name: "terminal".to_string(),
        primary: ThemeColor::Ansi(12),
        secondary: ThemeColor::Ansi(13),
        accent: ThemeColor::Ansi(11),
        success: ThemeColor::Ansi(2),
        error: ThemeColor::Ansi(1),
        text: ThemeColor::Default,
        text_muted: ThemeColor::Ansi(8),
        text_bright: ThemeColor::Ansi(15),
        background: ThemeColor::Default,
        surface: ThemeColor::Default,
        border: ThemeColor::Ansi(7),
    };
    // A terminal can't flip itself; the light side swaps to the darker
    // non-bright palette half so the toggle still does something visible.
    let light = Theme {
        primary: ThemeColor::Ansi(4),
        secondary: ThemeColor::Ansi(5),
        accent: ThemeColor::Ansi(3),
        text_bright: ThemeColor::Ansi(0),
        ..base.clone()
    };
    ThemePair { dark: base, light }
}

// =============================================================================
// Dracula
// =============================================================================

pub fn dracula() -> ThemePair {
    ThemePair {
        dark: Theme {
            name: "dracula".to_string(),
            primary: 0xbd93f9u32.into(),
            secondary: 0xff79c6u32.into(),
            accent: 0xf1fa8cu32.into(),
            success: 0x50fa7bu32.into(),
            error: 0xff5555u32.into(),
            text: 0xf8f8f2u32.into(),
            text_muted: 0x6272a4u32.into(),
            text_bright: 0xffffffu32.into(),
            background: 0x282a36u32.into(),
            surface: 0x343746u32.into(),
            border: 0x6272a4u32.into(),
        },
        light: Theme {
            name: "dracula".to_string(),
            primary: 0x644ac9u32.into(),
            secondary: 0xa3144du32.into(),
            accent: 0x836e15u32.into(),
            success: 0x14710au32.into(),
            error: 0xcb3a2au32.into(),
            text: 0x1f1f1fu32.into(),
            text_muted: 0x635d97u32.into(),
            text_bright: 0x000000u32.into(),
            background: 0xf8f8f2u32.into(),
            surface: 0xe8e8e2u32.into(),
            border: 0xcfcfdeu32.into(),
        },
    }
}

// =============================================================================
// Nord
// =============================================================================

pub fn nord() -> ThemePair {
    ThemePair {
        dark: Theme {
            name: "nord".to_string(),
            primary: 0x88c0d0u32.into(),
            secondary: 0x81a1c1u32.into(),
            accent: 0xd08770u32.into(),
            success: 0xa3be8cu32.into(),
            error: 0xbf616au32.into(),
            text: 0xd8dee9u32.into(),
            text_muted: 0x4c566au32.into(),
            text_bright: 0xeceff4u32.into(),
            background: 0x2e3440u32.into(),
            surface: 0x3b4252u32.into(),
            border: 0x4c566au32.into(),
        },
        light: Theme {
            name: "nord".to_string(),
            primary: 0x3b6ea8u32.into(),
            secondary: 0x5272a0u32.into(),
            accent: 0xa4512eu32.into(),
            success: 0x4f7032u32.into(),
            error: 0x99324bu32.into(),
            text: 0x2e3440u32.into(),
            text_muted: 0x7b88a1u32.into(),
            text_bright: 0x242933u32.into(),
            background: 0xeceff4u32.into(),
            surface: 0xe5e9f0u32.into(),
            border: 0xd8dee9u32.into(),
        },
    }
}

// =============================================================================
// Gruvbox
// =============================================================================

pub fn gruvbox() -> ThemePair {
    ThemePair {
        dark: Theme {
            name: "gruvbox".to_string(),
            primary: 0x83a598u32.into(),
            secondary: 0xd3869bu32.into(),
            accent: 0xfabd2fu32.into(),
            success: 0xb8bb26u32.into(),
            error: 0xfb4934u32.into(),
            text: 0xebdbb2u32.into(),
            text_muted: 0x928374u32.into(),
            text_bright: 0xfbf1c7u32.into(),
            background: 0x282828u32.into(),
            surface: 0x3c3836u32.into(),
            border: 0x504945u32.into(),
        },
        light: Theme {
            name: "gruvbox".to_string(),
            primary: 0x076678u32.into(),
            secondary: 0x8f3f71u32.into(),
            accent: 0xb57614u32.into(),
            success: 0x79740eu32.into(),
            error: 0x9d0006u32.into(),
            text: 0x3c3836u32.into(),
            text_muted: 0x928374u32.into(),
            text_bright: 0x282828u32.into(),
            background: 0xfbf1c7u32.into(),
            surface: 0xebdbb2u32.into(),
            border: 0xd5c4a1u32.into(),
        },
    }
}

// =============================================================================
// Solarized
// =============================================================================

pub fn solarized() -> ThemePair {
    ThemePair {
        dark: Theme {
            name: "solarized".to_string(),
            primary: 0x268bd2u32.into(),
            secondary: 0x6c71c4u32.into(),
            accent: 0xb58900u32.into(),
            success: 0x859900u32.into(),
            error: 0xdc322fu32.into(),
            text: 0x839496u32.into(),
            text_muted: 0x586e75u32.into(),
            text_bright: 0xfdf6e3u32.into(),
            background: 0x002b36u32.into(),
            surface: 0x073642u32.into(),
            border: 0x586e75u32.into(),
        },
        light: Theme {
            name: "solarized".to_string(),
            primary: 0x268bd2u32.into(),
            secondary: 0x6c71c4u32.into(),
            accent: 0xb58900u32.into(),
            success: 0x859900u32.into(),
            error: 0xdc322fu32.into(),
            text: 0x657b83u32.into(),
            text_muted: 0x93a1a1u32.into(),
            text_bright: 0x002b36u32.into(),
            background: 0xfdf6e3u32.into(),
            surface: 0xeee8d5u32.into(),
            border: 0x93a1a1u32.into(),
        },
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_resolve() {
        for name in preset_names() {
            let pair = preset(name).unwrap_or_else(|| panic!("missing preset {name}"));
            assert_eq!(pair.dark.name, *name);
            assert_eq!(pair.light.name, *name);
        }
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(preset("neon-zebra").is_none());
    }

    #[test]
    fn test_pairs_actually_differ() {
        for name in preset_names() {
            let pair = preset(name).unwrap();
            assert_ne!(
                pair.dark, pair.light,
                "{name}: toggle must change something"
            );
        }
    }

    #[test]
    fn test_palette_colors_parse_cleanly() {
        use crate::types::Rgba;
        // No preset slot may hit the magenta parse-failure fallback.
        for name in preset_names() {
            let pair = preset(name).unwrap();
            for theme in [&pair.dark, &pair.light] {
                for color in [
                    &theme.primary,
                    &theme.secondary,
                    &theme.accent,
                    &theme.success,
                    &theme.error,
                    &theme.text,
                    &theme.text_muted,
                    &theme.text_bright,
                    &theme.background,
                    &theme.surface,
                    &theme.border,
                ] {
                    if let super::ThemeColor::Str(s) = color {
                        assert!(
                            Rgba::parse(s).is_some(),
                            "{name}: unparseable slot {s:?}"
                        );
                    }
                }
            }
        }
    }
}
