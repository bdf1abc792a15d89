//! SGR mode and color tables and the [`Style`] builder.

use std::fmt;

/// Terminal output mode (SGR attribute).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No attribute.
    Normal = 0,
    /// Bright.
    Bold = 1,
    /// Faint.
    Dim = 2,
    /// Italic.
    Italic = 3,
    /// Underlined.
    Underline = 4,
    /// Swapped foreground and background.
    Reverse = 5,
    /// Concealed.
    Hidden = 6,
}

/// Text (foreground) color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Color {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Purple = 35,
    Cyan = 36,
    White = 37,
}

/// Background color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Bg {
    Black = 40,
    Red = 41,
    Green = 42,
    Yellow = 43,
    Blue = 44,
    Purple = 45,
    Cyan = 46,
    White = 47,
}

/// The escape sequence restoring default terminal attributes.
pub const RESET: &str = "\x1b[0m";

/// A mode plus optional foreground and background colors.
///
/// Displays as the corresponding SGR escape sequence; anything printed
/// after it takes the style until [`RESET`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    mode: Mode,
    fg: Option<Color>,
    bg: Option<Bg>,
}

impl Style {
    /// Normal mode, default colors.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Normal,
            fg: None,
            bg: None,
        }
    }

    /// Set the mode.
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the text color.
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub const fn bg(mut self, bg: Bg) -> Self {
        self.bg = Some(bg);
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}", self.mode as u8)?;
        if let Some(fg) = self.fg {
            write!(f, ";{}", fg as u8)?;
        }
        if let Some(bg) = self.bg {
            write!(f, ";{}", bg as u8)?;
        }
        write!(f, "m")
    }
}

/// Wrap `text` in `style` followed by [`RESET`].
pub fn paint(text: &str, style: Style) -> String {
    format!("{style}{text}{RESET}")
}
