// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal emulator styling.
//!
//! The window background is painted with OSC escape sequences so that the
//! theme colour reaches the edges of the terminal, not only the cells ratatui
//! draws. Terminals without OSC 11/111 support ignore the sequences.

use std::io::{self, Write};

use ratatui::style::Color;

/// Paints the terminal background while alive and restores the emulator's
/// own background when dropped.
pub(crate) struct BackgroundGuard;

impl BackgroundGuard {
    /// # Errors
    ///
    /// Returns an error if the escape sequence cannot be written to `stdout`.
    pub(crate) fn paint(colour: Color) -> io::Result<Self> {
        if let Some(hex) = to_hex(colour) {
            let mut stdout = io::stdout();
            write!(stdout, "\x1b]11;{}\x07", hex)?;
            stdout.flush()?;
        }
        Ok(Self)
    }
}

impl Drop for BackgroundGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        write!(stdout, "\x1b]111\x07").ok();
        stdout.flush().ok();
    }
}

/// CSS-style hex for RGB colours; other colour kinds have no hex form.
pub(crate) fn to_hex(colour: Color) -> Option<String> {
    match colour {
        Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
        _ => None,
    }
}
