use serde::{Deserialize, Serialize};

use crate::models::property::Property;
use crate::models::shape_properties::ShapeProperties;
use crate::models::text::TextFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelPosition {
    BestFit,
    Bottom,
    Center,
    InsideBase,
    InsideEnd,
    Left,
    OutsideEnd,
    Right,
    Top,
}

impl LabelPosition {
    pub fn as_token(self) -> &'static str {
        match self {
            LabelPosition::BestFit => "bestFit",
            LabelPosition::Bottom => "b",
            LabelPosition::Center => "ctr",
            LabelPosition::InsideBase => "inBase",
            LabelPosition::InsideEnd => "inEnd",
            LabelPosition::Left => "l",
            LabelPosition::OutsideEnd => "outEnd",
            LabelPosition::Right => "r",
            LabelPosition::Top => "t",
        }
    }
}

/// Number format of labels or axis tick labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormat {
    pub code: String,
    /// Follow the format of the source cells instead of `code`.
    #[serde(default)]
    pub source_linked: bool,
}

/// Data label settings. Used both as the chart-type wide default and per series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataLabels {
    pub number_format: Property<NumberFormat>,
    pub shape: ShapeProperties,
    pub format: TextFormat,
    pub position: Property<LabelPosition>,
    pub show_legend_key: Property<bool>,
    pub show_value: Property<bool>,
    pub show_category_name: Property<bool>,
    pub show_series_name: Property<bool>,
    pub show_percent: Property<bool>,
    pub show_bubble_size: Property<bool>,
    pub separator: Property<String>,
    pub show_leader_lines: Property<bool>,
}

impl DataLabels {
    /// True when at least one of the content flags resolves to shown.
    pub fn any_shown(&self) -> bool {
        [
            &self.show_legend_key,
            &self.show_value,
            &self.show_category_name,
            &self.show_series_name,
            &self.show_percent,
            &self.show_bubble_size,
        ]
        .iter()
        .any(|flag| flag.get() == Some(&true))
    }
}
