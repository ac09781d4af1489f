//! Core types for termfolio.
//!
//! Everything the renderer understands is defined here: colors, cell
//! attributes, and the terminal cell itself. The rest of the crate computes
//! these, the renderer outputs them.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels stored as integers for exact comparison.
///
/// Two special encodings ride on the `r` channel:
/// - `r == -1`: terminal default (let the terminal pick)
/// - `r == -2`: ANSI palette color, index stored in `g`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque color from a packed 0xRRGGBB integer.
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        )
    }

    /// Terminal default color (let the terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Create an ANSI palette color (0-255).
    ///
    /// - 0-7: standard colors
    /// - 8-15: bright colors
    /// - 16-231: 6x6x6 RGB cube
    /// - 232-255: grayscale ramp
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if this is an ANSI palette color.
    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// ANSI palette index (only meaningful when `is_ansi()`).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    /// Dim the color by a factor (0.0 = black, 1.0 = unchanged).
    ///
    /// Terminal-default falls back to gray; ANSI palette colors cannot be
    /// dimmed and are returned unchanged.
    #[inline]
    pub fn dim(self, factor: f32) -> Self {
        if self.is_terminal_default() {
            return Self::GRAY;
        }
        if self.is_ansi() {
            return self;
        }
        Self {
            r: (self.r as f32 * factor).clamp(0.0, 255.0) as i16,
            g: (self.g as f32 * factor).clamp(0.0, 255.0) as i16,
            b: (self.b as f32 * factor).clamp(0.0, 255.0) as i16,
            a: self.a,
        }
    }

    /// Create a color from OKLCH (perceptually uniform color space).
    ///
    /// - `l`: lightness (0.0 = black, 1.0 = white)
    /// - `c`: chroma (0.0 = gray, ~0.37 practical max)
    /// - `h`: hue in degrees
    pub fn oklch(l: f32, c: f32, h: f32, a: u8) -> Self {
        let h_rad = h.to_radians();
        let lab_a = c * h_rad.cos();
        let lab_b = c * h_rad.sin();

        // OKLab -> linear sRGB via LMS
        let l_ = l + 0.3963377774 * lab_a + 0.2158037573 * lab_b;
        let m_ = l - 0.1055613458 * lab_a - 0.0638541728 * lab_b;
        let s_ = l - 0.0894841775 * lab_a - 1.2914855480 * lab_b;

        let l3 = l_ * l_ * l_;
        let m3 = m_ * m_ * m_;
        let s3 = s_ * s_ * s_;

        let r_lin = 4.0767416621 * l3 - 3.3077115913 * m3 + 0.2309699292 * s3;
        let g_lin = -1.2684380046 * l3 + 2.6097574011 * m3 - 0.3413193965 * s3;
        let b_lin = -0.0041960863 * l3 - 0.7034186147 * m3 + 1.7076147010 * s3;

        fn linear_to_srgb(x: f32) -> f32 {
            if x <= 0.0031308 {
                x * 12.92
            } else {
                1.055 * x.powf(1.0 / 2.4) - 0.055
            }
        }

        Self::new(
            (linear_to_srgb(r_lin) * 255.0).clamp(0.0, 255.0) as u8,
            (linear_to_srgb(g_lin) * 255.0).clamp(0.0, 255.0) as u8,
            (linear_to_srgb(b_lin) * 255.0).clamp(0.0, 255.0) as u8,
            a,
        )
    }

    /// Parse a hex color: `#RGB`, `#RRGGBB`, or `#RRGGBBAA`.
    pub fn from_hex(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Parse an `oklch(l c h)` function string.
    fn from_oklch_str(input: &str) -> Option<Self> {
        let inner = input
            .trim()
            .strip_prefix("oklch(")
            .or_else(|| input.trim().strip_prefix("OKLCH("))?
            .strip_suffix(')')?;

        let parts: Vec<&str> = inner.split_whitespace().collect();
        if parts.len() < 3 {
            return None;
        }

        let l = if let Some(pct) = parts[0].strip_suffix('%') {
            pct.parse::<f32>().ok()? / 100.0
        } else {
            parts[0].parse::<f32>().ok()?
        };
        let c = parts[1].parse::<f32>().ok()?;
        let h = if let Some(deg) = parts[2].strip_suffix("deg") {
            deg.parse::<f32>().ok()?
        } else {
            parts[2].parse::<f32>().ok()?
        };

        if l.is_nan() || c.is_nan() || h.is_nan() {
            return None;
        }

        Some(Self::oklch(l.clamp(0.0, 1.0), c.max(0.0), h, 255))
    }

    /// Parse any supported color format.
    ///
    /// Supports hex (`#RGB`, `#RRGGBB`, `#RRGGBBAA`), `oklch(...)`, and the
    /// `default` keyword for the terminal default.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let lower = input.to_lowercase();
        if lower == "default" {
            return Some(Self::TERMINAL_DEFAULT);
        }
        if input.starts_with('#') {
            return Self::from_hex(input);
        }
        if lower.starts_with("oklch(") {
            return Self::from_oklch_str(input);
        }
        None
    }
}

// =============================================================================
// Cell attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for cheap storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
        const STRIKETHROUGH = 1 << 5;
    }
}

// =============================================================================
// Cell - the atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
///
/// The whole pipeline computes these and the renderer outputs them.
/// `glyph == 0` marks the continuation half of a wide character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space, 0 for wide-char continuation).
    pub glyph: u32,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Attribute flags.
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

impl Cell {
    /// A blank cell with the given background.
    pub const fn blank(bg: Rgba) -> Self {
        Self {
            glyph: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg,
            attrs: Attr::NONE,
        }
    }

    /// Whether this cell still shows only background (space, no styling text).
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.glyph == b' ' as u32
    }
}

// =============================================================================
// Tests
// =============================================================================
