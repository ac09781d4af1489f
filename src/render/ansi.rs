//! ANSI escape sequences for terminal output.
//!
//! Cursor movement, colors (ANSI 16/256 and truecolor), text attributes,
//! synchronized output, and OSC 8 hyperlinks. Everything the diff renderer
//! emits goes through these helpers.

use std::io::Write;

use crate::types::{Attr, Rgba};

/// Move cursor to absolute position (0-indexed input, 1-indexed protocol).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Hide the cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25l")
}

/// Show the cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25h")
}

/// Clear screen and scrollback, cursor home.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2J\x1b[3J\x1b[H")
}

/// Begin synchronized output (terminal buffers until `end_sync`).
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026h")
}

/// End synchronized output (terminal flushes its buffer).
#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026l")
}

/// Reset all attributes and colors.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[0m")
}

/// Set foreground color.
#[inline]
pub fn fg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[39m")
    } else if color.is_ansi() {
        let index = color.ansi_index();
        if index < 8 {
            write!(w, "\x1b[{}m", 30 + index)
        } else if index < 16 {
            write!(w, "\x1b[{}m", 90 + index - 8)
        } else {
            write!(w, "\x1b[38;5;{}m", index)
        }
    } else {
        write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set background color.
#[inline]
pub fn bg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[49m")
    } else if color.is_ansi() {
        let index = color.ansi_index();
        if index < 8 {
            write!(w, "\x1b[{}m", 40 + index)
        } else if index < 16 {
            write!(w, "\x1b[{}m", 100 + index - 8)
        } else {
            write!(w, "\x1b[48;5;{}m", index)
        }
    } else {
        write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Emit text attributes as one SGR sequence.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> std::io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    let mut codes: Vec<u8> = Vec::with_capacity(4);
    if attr.contains(Attr::BOLD) {
        codes.push(1);
    }
    if attr.contains(Attr::DIM) {
        codes.push(2);
    }
    if attr.contains(Attr::ITALIC) {
        codes.push(3);
    }
    if attr.contains(Attr::UNDERLINE) {
        codes.push(4);
    }
    if attr.contains(Attr::INVERSE) {
        codes.push(7);
    }
    if attr.contains(Attr::STRIKETHROUGH) {
        codes.push(9);
    }

    write!(w, "\x1b[")?;
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            write!(w, ";")?;
        }
        write!(w, "{}", code)?;
    }
    write!(w, "m")
}

/// Set the terminal window title.
#[inline]
pub fn set_title<W: Write>(w: &mut W, title: &str) -> std::io::Result<()> {
    write!(w, "\x1b]0;{}\x07", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string<F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cursor_to_is_one_indexed() {
        assert_eq!(to_string(|w| cursor_to(w, 0, 0)), "\x1b[1;1H");
        assert_eq!(to_string(|w| cursor_to(w, 5, 10)), "\x1b[11;6H");
    }

    #[test]
    fn test_fg_encodings() {
        assert_eq!(to_string(|w| fg(w, Rgba::TERMINAL_DEFAULT)), "\x1b[39m");
        assert_eq!(to_string(|w| fg(w, Rgba::ansi(1))), "\x1b[31m");
        assert_eq!(to_string(|w| fg(w, Rgba::ansi(9))), "\x1b[91m");
        assert_eq!(to_string(|w| fg(w, Rgba::ansi(196))), "\x1b[38;5;196m");
        assert_eq!(
            to_string(|w| fg(w, Rgba::rgb(255, 128, 64))),
            "\x1b[38;2;255;128;64m"
        );
    }

    #[test]
    fn test_bg_encodings() {
        assert_eq!(to_string(|w| bg(w, Rgba::TERMINAL_DEFAULT)), "\x1b[49m");
        assert_eq!(to_string(|w| bg(w, Rgba::ansi(2))), "\x1b[42m");
        assert_eq!(to_string(|w| bg(w, Rgba::ansi(10))), "\x1b[102m");
        assert_eq!(
            to_string(|w| bg(w, Rgba::rgb(0, 128, 255))),
            "\x1b[48;2;0;128;255m"
        );
    }

    #[test]
    fn test_attrs() {
        assert_eq!(to_string(|w| attrs(w, Attr::NONE)), "");
        assert_eq!(to_string(|w| attrs(w, Attr::BOLD)), "\x1b[1m");
        assert_eq!(
            to_string(|w| attrs(w, Attr::BOLD | Attr::UNDERLINE)),
            "\x1b[1;4m"
        );
        assert_eq!(
            to_string(|w| attrs(w, Attr::DIM | Attr::ITALIC | Attr::STRIKETHROUGH)),
            "\x1b[2;3;9m"
        );
    }

    #[test]
    fn test_sync_markers() {
        assert_eq!(to_string(begin_sync), "\x1b[?2026h");
        assert_eq!(to_string(end_sync), "\x1b[?2026l");
    }
}
