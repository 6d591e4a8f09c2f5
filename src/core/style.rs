//! Terminal styling
//!
//! Fields are wrapped in SGR ("select graphic rendition") escape sequences.
//! Stripping them must give back the plain report byte for byte.

const ESC: char = '\x1b';

/// Emphasis applied to a report field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// No escape sequences
    Normal,
    Bold,
    BoldCyan,
    DimGray,
}

impl Style {
    /// SGR parameters for this style
    pub fn sgr(self) -> Option<&'static str> {
        match self {
            Style::Normal => None,
            Style::Bold => Some("1"),
            Style::BoldCyan => Some("1;36"),
            Style::DimGray => Some("2;90"),
        }
    }

    /// Wrap `text` in this style, or return it untouched when `enabled` is false.
    pub fn paint(self, text: &str, enabled: bool) -> String {
        match self.sgr() {
            Some(sgr) if enabled => format!("{ESC}[{sgr}m{text}{ESC}[0m"),
            _ => text.to_string(),
        }
    }
}

/// Remove every SGR sequence (`ESC [ ... m`) from `text`.
pub fn strip_sgr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESC && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
