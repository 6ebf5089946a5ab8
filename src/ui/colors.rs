//! ui::colors
//!
//! Terminal color capability.
//!
//! Formatters take `&dyn Colors` so output styling follows the embedder's
//! terminal capabilities; [`PlainColors`] keeps tests and non-tty output
//! free of escape codes.

/// Styling capability for display output.
pub trait Colors {
    /// Emphasized text (section headings).
    fn bold(&self, text: &str) -> String;
    /// De-emphasized text (hints, defaults).
    fn dim(&self, text: &str) -> String;
    /// Highlighted text (command and flag names).
    fn yellow(&self, text: &str) -> String;
}

/// No-op styling: returns text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainColors;

impl Colors for PlainColors {
    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn yellow(&self, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI escape-code styling for capable terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiColors;

impl Colors for AnsiColors {
    fn bold(&self, text: &str) -> String {
        format!("\x1b[1m{}\x1b[0m", text)
    }

    fn dim(&self, text: &str) -> String {
        format!("\x1b[2m{}\x1b[0m", text)
    }

    fn yellow(&self, text: &str) -> String {
        format!("\x1b[33m{}\x1b[0m", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_is_identity() {
        assert_eq!(PlainColors.bold("x"), "x");
        assert_eq!(PlainColors.dim("x"), "x");
        assert_eq!(PlainColors.yellow("x"), "x");
    }

    #[test]
    fn ansi_wraps_with_reset() {
        assert_eq!(AnsiColors.bold("x"), "\x1b[1mx\x1b[0m");
        assert!(AnsiColors.yellow("x").ends_with("\x1b[0m"));
    }
}
