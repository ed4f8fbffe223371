use serde::{Deserialize, Serialize};

use crate::models::colors::Color;
use crate::models::layout::ManualLayout;
use crate::models::property::Property;
use crate::models::shape_properties::ShapeProperties;

/// Character formatting of a run (or the default run formatting of a block).
/// If properties are unset, they are inherited from the chart style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    /// Font size in points.
    pub size: Property<f64>,
    pub bold: Property<bool>,
    pub italic: Property<bool>,
    pub underline: Property<bool>,
    pub strikethrough: Property<bool>,
    /// Vertical offset as a fraction of the font size; positive is superscript.
    pub baseline: Property<f64>,
    pub color: Property<Color>,
    /// Latin typeface name.
    pub font_family: Property<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextDirection {
    Horizontal,
    Vertical,
    Vertical270,
    Stacked,
}

/// Block-level text formatting: rotation, direction and the default run style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextFormat {
    /// Rotation in degrees.
    pub rotation: Property<f64>,
    pub direction: Property<TextDirection>,
    pub style: TextStyle,
}

/// A contiguous piece of text sharing one style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    /// Default formatting for runs in this paragraph.
    pub style: TextStyle,
}

/// Formatted text owned by the chart (as opposed to text read from a cell).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichText {
    pub paragraphs: Vec<Paragraph>,
    pub format: TextFormat,
}

impl RichText {
    /// Single paragraph, single unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        RichText {
            paragraphs: vec![Paragraph {
                runs: vec![TextRun {
                    text: text.into(),
                    style: TextStyle::default(),
                }],
                style: TextStyle::default(),
            }],
            format: TextFormat::default(),
        }
    }
}

/// A cell reference with the value it resolved to at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringReference {
    pub formula: String,
    #[serde(default)]
    pub cached: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TitleText {
    Rich(RichText),
    Reference(StringReference),
}

/// Chart or axis title.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Title {
    /// `None` lets the consumer generate the title (e.g. from the series name).
    pub text: Option<TitleText>,
    pub overlay: Property<bool>,
    pub layout: Option<ManualLayout>,
    pub shape: ShapeProperties,
    pub format: TextFormat,
}

impl Title {
    pub fn plain(text: impl Into<String>) -> Self {
        Title {
            text: Some(TitleText::Rich(RichText::plain(text))),
            ..Title::default()
        }
    }
}
