use serde::{Deserialize, Serialize};

use crate::models::axis::Axis;
use crate::models::chart_type::ChartType;
use crate::models::layout::ManualLayout;
use crate::models::property::Property;
use crate::models::shape_properties::ShapeProperties;
use crate::models::text::{TextFormat, Title};

/// How empty cells are plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlankMode {
    Gap,
    Span,
    Zero,
}

impl BlankMode {
    pub fn as_token(self) -> &'static str {
        match self {
            BlankMode::Gap => "gap",
            BlankMode::Span => "span",
            BlankMode::Zero => "zero",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendPosition {
    Bottom,
    Left,
    Right,
    Top,
    TopRight,
}

impl LegendPosition {
    pub fn as_token(self) -> &'static str {
        match self {
            LegendPosition::Bottom => "b",
            LegendPosition::Left => "l",
            LegendPosition::Right => "r",
            LegendPosition::Top => "t",
            LegendPosition::TopRight => "tr",
        }
    }
}

/// Formatting or removal of one legend entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegendEntry {
    pub index: u32,
    pub deleted: bool,
    pub format: TextFormat,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Legend {
    pub position: Property<LegendPosition>,
    pub entries: Vec<LegendEntry>,
    pub layout: Option<ManualLayout>,
    pub overlay: Property<bool>,
    pub shape: ShapeProperties,
    pub format: TextFormat,
}

/// The plotting region: chart type groups and the axes they are drawn on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotArea {
    pub layout: Option<ManualLayout>,
    pub chart_types: Vec<ChartType>,
    /// Horizontal (category or x value) axes, referenced by `ChartType::x_axis`.
    pub x_axes: Vec<Axis>,
    /// Vertical (value) axes, referenced by `ChartType::y_axis`.
    pub y_axes: Vec<Axis>,
    pub shape: ShapeProperties,
}

/// The root of a chart model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartSpace {
    /// Built-in chart style number (1–48).
    pub style: Property<u32>,
    pub rounded_corners: Property<bool>,
    pub title: Option<Title>,
    pub auto_title_deleted: Property<bool>,
    pub plot_area: PlotArea,
    pub legend: Option<Legend>,
    pub plot_visible_only: Property<bool>,
    pub display_blanks_as: Property<BlankMode>,
    pub show_labels_over_max: Property<bool>,
    pub show_na_as_blank: Property<bool>,
    pub shape: ShapeProperties,
    pub format: TextFormat,
}
