use serde::{Deserialize, Serialize};

/// Indentation used when prettifying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub indent_char: char,
    pub indent_size: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            indent_char: ' ',
            indent_size: 2,
        }
    }
}

/// `true`/`false`, or explicit indentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prettify {
    Enabled(bool),
    Format(FormatOptions),
}

impl Default for Prettify {
    fn default() -> Self {
        Prettify::Enabled(false)
    }
}

impl Prettify {
    /// `(indent_char, indent_size)` for the writer, or `None` for compact output.
    /// Indent characters outside ASCII fall back to a space.
    pub fn indent(&self) -> Option<(u8, usize)> {
        match self {
            Prettify::Enabled(false) => None,
            Prettify::Enabled(true) => {
                let format = FormatOptions::default();
                Some((b' ', format.indent_size))
            }
            Prettify::Format(format) => {
                let ch = if format.indent_char.is_ascii() {
                    format.indent_char as u8
                } else {
                    b' '
                };
                Some((ch, format.indent_size))
            }
        }
    }
}

/// Options of one conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Emit the XML declaration.
    pub header: bool,
    pub prettify: Prettify,
    /// Log the compact markup at debug level before prettifying.
    pub debug: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            header: true,
            prettify: Prettify::default(),
            debug: false,
        }
    }
}
