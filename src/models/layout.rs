use serde::{Deserialize, Serialize};

use crate::models::property::Property;

/// Whether a layout position is relative to the chart edge or an offset from the
/// default position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutMode {
    Edge,
    Factor,
}

impl LayoutMode {
    pub fn as_token(self) -> &'static str {
        match self {
            LayoutMode::Edge => "edge",
            LayoutMode::Factor => "factor",
        }
    }
}

/// Which rectangle of the plot area a manual layout positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutTarget {
    Inner,
    Outer,
}

impl LayoutTarget {
    pub fn as_token(self) -> &'static str {
        match self {
            LayoutTarget::Inner => "inner",
            LayoutTarget::Outer => "outer",
        }
    }
}

/// User-positioned element. Coordinates are fractions of the chart size.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManualLayout {
    pub target: Property<LayoutTarget>,
    pub x_mode: Property<LayoutMode>,
    pub y_mode: Property<LayoutMode>,
    pub x: Property<f64>,
    pub y: Property<f64>,
    pub width: Property<f64>,
    pub height: Property<f64>,
}
