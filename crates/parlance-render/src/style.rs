//! Fixed ANSI styles for rendered output.
//!
//! Each [`TextStyle`] maps to a fixed SGR escape pair. The pairs are part of
//! the output contract (golden-byte tested by embedders), so they are plain
//! constants rather than composed attribute sets. When color is disabled,
//! [`TextStyle::paint`] returns the input text with genuinely absent escape
//! bytes, never empty prefix/suffix escapes.
//!
//! # Example
//!
//! ```rust
//! use parlance_render::TextStyle;
//!
//! assert_eq!(TextStyle::Ok.paint("OK", true), "\x1b[32;1mOK\x1b[0m");
//! assert_eq!(TextStyle::Ok.paint("OK", false), "OK");
//! ```

/// Style applied to a rendered segment.
///
/// `Warning` carries no escape codes: warnings are distinguished by being
/// routed to the error stream, not by color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// No styling.
    Plain,
    /// Bold, used for substituted values in emphasized text.
    Bold,
    /// Bold, used for whole header lines.
    Header,
    /// Cyan bold, used to highlight substituted values distinctly from bold.
    Flavor,
    /// Green bold, used for the "OK" status literal.
    Ok,
    /// Red bold, used for the "FAILED" status literal.
    Error,
    /// Unstyled; warning lines go to the error stream instead.
    Warning,
}

impl TextStyle {
    /// Returns the SGR prefix/suffix pair for this style.
    pub const fn sgr_pair(self) -> (&'static str, &'static str) {
        match self {
            TextStyle::Bold | TextStyle::Header => ("\x1b[1m", "\x1b[0m"),
            TextStyle::Ok => ("\x1b[32;1m", "\x1b[0m"),
            TextStyle::Error => ("\x1b[31;1m", "\x1b[0m"),
            TextStyle::Flavor => ("\x1b[36;1m", "\x1b[0m"),
            TextStyle::Plain | TextStyle::Warning => ("", ""),
        }
    }

    /// Wraps `text` in this style's escape pair.
    ///
    /// With `color_enabled` false (or for styles with no codes) the result
    /// is exactly `text`.
    pub fn paint(self, text: &str, color_enabled: bool) -> String {
        if !color_enabled {
            return text.to_string();
        }
        let (prefix, suffix) = self.sgr_pair();
        if prefix.is_empty() {
            return text.to_string();
        }
        format!("{prefix}{text}{suffix}")
    }
}
