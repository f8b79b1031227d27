//! ANSI color codes for terminal output.
//!
//! Semantic colors with an orthogonal dim modifier:
//! - Blue: rule names, token kinds
//! - Green: successful matches, lexemes
//! - Red: failed expectations
//! - Dim: offsets, widths, backtracking
//! - Reset: Return to default

/// ANSI color palette for CLI and trace output.
///
/// Uses only standard 16-color ANSI codes (no RGB) so traces stay readable
/// in both light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
