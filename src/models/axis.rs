use serde::{Deserialize, Serialize};

use crate::models::data_labels::NumberFormat;
use crate::models::property::Property;
use crate::models::shape_properties::ShapeProperties;
use crate::models::text::{TextFormat, Title};

/// The kind of an axis, which decides the element it serializes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisKind {
    #[default]
    Value,
    /// Ordinal (category) axis.
    Category,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisPosition {
    Bottom,
    Left,
    Right,
    Top,
}

impl AxisPosition {
    pub fn as_token(self) -> &'static str {
        match self {
            AxisPosition::Bottom => "b",
            AxisPosition::Left => "l",
            AxisPosition::Right => "r",
            AxisPosition::Top => "t",
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, AxisPosition::Left | AxisPosition::Right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TickMark {
    Cross,
    Inside,
    None,
    Outside,
}

impl TickMark {
    pub fn as_token(self) -> &'static str {
        match self {
            TickMark::Cross => "cross",
            TickMark::Inside => "in",
            TickMark::None => "none",
            TickMark::Outside => "out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TickLabelPosition {
    High,
    Low,
    NextTo,
    None,
}

impl TickLabelPosition {
    pub fn as_token(self) -> &'static str {
        match self {
            TickLabelPosition::High => "high",
            TickLabelPosition::Low => "low",
            TickLabelPosition::NextTo => "nextTo",
            TickLabelPosition::None => "none",
        }
    }
}

/// Where the perpendicular axis crosses this one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Crosses {
    AutoZero,
    Min,
    Max,
    At(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CrossBetween {
    /// The value axis crosses between categories.
    Between,
    /// The value axis crosses at the midpoint of a category.
    MidCategory,
}

impl CrossBetween {
    pub fn as_token(self) -> &'static str {
        match self {
            CrossBetween::Between => "between",
            CrossBetween::MidCategory => "midCat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelAlignment {
    Center,
    Left,
    Right,
}

impl LabelAlignment {
    pub fn as_token(self) -> &'static str {
        match self {
            LabelAlignment::Center => "ctr",
            LabelAlignment::Left => "l",
            LabelAlignment::Right => "r",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeUnit {
    Days,
    Months,
    Years,
}

impl TimeUnit {
    pub fn as_token(self) -> &'static str {
        match self {
            TimeUnit::Days => "days",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuiltInUnit {
    Hundreds,
    Thousands,
    TenThousands,
    HundredThousands,
    Millions,
    TenMillions,
    HundredMillions,
    Billions,
    Trillions,
}

impl BuiltInUnit {
    pub fn as_token(self) -> &'static str {
        match self {
            BuiltInUnit::Hundreds => "hundreds",
            BuiltInUnit::Thousands => "thousands",
            BuiltInUnit::TenThousands => "tenThousands",
            BuiltInUnit::HundredThousands => "hundredThousands",
            BuiltInUnit::Millions => "millions",
            BuiltInUnit::TenMillions => "tenMillions",
            BuiltInUnit::HundredMillions => "hundredMillions",
            BuiltInUnit::Billions => "billions",
            BuiltInUnit::Trillions => "trillions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayUnit {
    BuiltIn(BuiltInUnit),
    /// Arbitrary divisor.
    Custom(f64),
}

/// Scales the values shown on a value axis, optionally with a unit label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayUnits {
    pub unit: DisplayUnit,
    #[serde(default)]
    pub show_label: bool,
}

/// Gridlines, drop lines and high-low lines: a line with only formatting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartLines {
    pub shape: ShapeProperties,
}

/// A chart axis. Value, category and date axes share this structure; settings that
/// do not apply to the axis kind are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Axis {
    pub kind: AxisKind,
    pub shown: Property<bool>,
    pub position: Property<AxisPosition>,
    pub reversed: Property<bool>,
    pub log_base: Property<f64>,
    pub min: Property<f64>,
    pub max: Property<f64>,
    pub major_gridlines: Option<ChartLines>,
    pub minor_gridlines: Option<ChartLines>,
    pub title: Option<Title>,
    pub number_format: Property<NumberFormat>,
    pub major_tick_mark: Property<TickMark>,
    pub minor_tick_mark: Property<TickMark>,
    pub label_position: Property<TickLabelPosition>,
    pub shape: ShapeProperties,
    pub format: TextFormat,
    pub crosses: Property<Crosses>,
    pub cross_between: Property<CrossBetween>,
    pub major_unit: Property<f64>,
    pub minor_unit: Property<f64>,
    pub display_units: Option<DisplayUnits>,
    // Category and date axes.
    pub auto: Property<bool>,
    pub label_alignment: Property<LabelAlignment>,
    /// Distance of labels from the axis, percent (0–1000).
    pub label_offset: Property<u32>,
    pub tick_label_skip: Property<u32>,
    pub tick_mark_skip: Property<u32>,
    pub no_multi_level_labels: Property<bool>,
    // Date axes.
    pub base_time_unit: Property<TimeUnit>,
    pub major_time_unit: Property<TimeUnit>,
    pub minor_time_unit: Property<TimeUnit>,
}

impl Axis {
    pub fn new(kind: AxisKind) -> Self {
        Axis {
            kind,
            ..Axis::default()
        }
    }

    /// Hidden axes keep their settings but render nothing.
    pub fn is_hidden(&self) -> bool {
        self.shown.get() == Some(&false)
    }
}
