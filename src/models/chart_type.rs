use serde::{Deserialize, Serialize};

use crate::models::axis::ChartLines;
use crate::models::data_labels::DataLabels;
use crate::models::property::Property;
use crate::models::series::Series;

/// The chart type of a series group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartTypeKind {
    /// Horizontal bars.
    Bar,
    /// Vertical bars.
    #[default]
    Column,
    Line,
    Area,
    Pie,
    Doughnut,
    Scatter,
    Bubble,
}

impl ChartTypeKind {
    /// Pie and doughnut charts have no axes.
    pub fn has_axes(self) -> bool {
        !matches!(self, ChartTypeKind::Pie | ChartTypeKind::Doughnut)
    }

    /// Scatter and bubble charts plot values against values.
    pub fn is_xy(self) -> bool {
        matches!(self, ChartTypeKind::Scatter | ChartTypeKind::Bubble)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Grouping {
    Standard,
    Clustered,
    Stacked,
    PercentStacked,
}

impl Grouping {
    pub fn as_token(self) -> &'static str {
        match self {
            Grouping::Standard => "standard",
            Grouping::Clustered => "clustered",
            Grouping::Stacked => "stacked",
            Grouping::PercentStacked => "percentStacked",
        }
    }

    pub fn is_stacked(self) -> bool {
        matches!(self, Grouping::Stacked | Grouping::PercentStacked)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScatterStyle {
    None,
    Line,
    LineMarker,
    Marker,
    Smooth,
    SmoothMarker,
}

impl ScatterStyle {
    pub fn as_token(self) -> &'static str {
        match self {
            ScatterStyle::None => "none",
            ScatterStyle::Line => "line",
            ScatterStyle::LineMarker => "lineMarker",
            ScatterStyle::Marker => "marker",
            ScatterStyle::Smooth => "smooth",
            ScatterStyle::SmoothMarker => "smoothMarker",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeRepresents {
    Area,
    Width,
}

impl SizeRepresents {
    pub fn as_token(self) -> &'static str {
        match self {
            SizeRepresents::Area => "area",
            SizeRepresents::Width => "w",
        }
    }
}

/// A group of series drawn with one chart type on one pair of axes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartType {
    #[serde(rename = "type")]
    pub chart_type: ChartTypeKind,
    pub grouping: Property<Grouping>,
    pub vary_colors: Property<bool>,
    pub series: Vec<Series>,
    pub data_labels: Option<DataLabels>,
    /// Bar charts: space between clusters, percent of bar width.
    pub gap_width: Property<u32>,
    /// Bar charts: overlap of bars in a cluster, -100..=100.
    pub overlap: Property<i32>,
    pub drop_lines: Option<ChartLines>,
    pub high_low_lines: Option<ChartLines>,
    /// Line charts: draw markers.
    pub show_markers: Property<bool>,
    pub smooth: Property<bool>,
    /// Pie and doughnut charts, degrees.
    pub first_slice_angle: Property<f64>,
    /// Doughnut charts, percent of the radius.
    pub hole_size: Property<u32>,
    pub scatter_style: Property<ScatterStyle>,
    pub bubble_3d: Property<bool>,
    /// Bubble charts, percent of the default size.
    pub bubble_scale: Property<u32>,
    pub show_negative_bubbles: Property<bool>,
    pub size_represents: Property<SizeRepresents>,
    /// Index into the plot area's `x_axes`.
    pub x_axis: usize,
    /// Index into the plot area's `y_axes`.
    pub y_axis: usize,
}

impl ChartType {
    pub fn new(chart_type: ChartTypeKind) -> Self {
        ChartType {
            chart_type,
            ..ChartType::default()
        }
    }
}
