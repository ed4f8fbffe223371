use serde::{Deserialize, Serialize};

use crate::models::data_labels::DataLabels;
use crate::models::property::Property;
use crate::models::shape_properties::ShapeProperties;
use crate::models::text::StringReference;

/// A resolved cell value. Serialized untagged: JSON numbers, strings and booleans map
/// directly onto the variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl CellValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    /// The text written into a `c:v` element.
    pub fn to_markup_text(&self) -> String {
        match self {
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(true) => "TRUE".to_string(),
            CellValue::Bool(false) => "FALSE".to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

/// One resolved cell: its value (absent for blank cells) and number format.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cell {
    pub value: Option<CellValue>,
    pub format_code: Option<String>,
}

impl Cell {
    pub fn number(value: f64) -> Self {
        Cell {
            value: Some(CellValue::Number(value)),
            format_code: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Cell {
            value: Some(CellValue::Text(value.into())),
            format_code: None,
        }
    }

    pub fn blank() -> Self {
        Cell::default()
    }

    pub fn with_format(mut self, code: impl Into<String>) -> Self {
        self.format_code = Some(code.into());
        self
    }
}

/// One data point of a cell-backed range. `cells` holds one cell per category level,
/// outermost grouping first; a single cell is the common, single-level case.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangePoint {
    pub cells: Vec<Cell>,
    /// Points in hidden rows/columns are not rendered.
    pub hidden: bool,
}

impl RangePoint {
    pub fn single(cell: Cell) -> Self {
        RangePoint {
            cells: vec![cell],
            hidden: false,
        }
    }

    pub fn levels(cells: Vec<Cell>) -> Self {
        RangePoint {
            cells,
            hidden: false,
        }
    }
}

/// Values feeding a series dimension (categories, values, x/y, bubble sizes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesData {
    /// Values stored in the chart itself.
    Literal {
        values: Vec<Cell>,
        #[serde(default)]
        format_code: Option<String>,
    },
    /// Values read from a worksheet range, already resolved by the workbook.
    Reference {
        formula: String,
        #[serde(default)]
        points: Vec<RangePoint>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesTitle {
    Reference(StringReference),
    Literal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerSymbol {
    None,
    Auto,
    Circle,
    Dash,
    Diamond,
    Dot,
    Picture,
    Plus,
    Square,
    Star,
    Triangle,
    X,
}

impl MarkerSymbol {
    pub fn as_token(self) -> &'static str {
        match self {
            MarkerSymbol::None => "none",
            MarkerSymbol::Auto => "auto",
            MarkerSymbol::Circle => "circle",
            MarkerSymbol::Dash => "dash",
            MarkerSymbol::Diamond => "diamond",
            MarkerSymbol::Dot => "dot",
            MarkerSymbol::Picture => "picture",
            MarkerSymbol::Plus => "plus",
            MarkerSymbol::Square => "square",
            MarkerSymbol::Star => "star",
            MarkerSymbol::Triangle => "triangle",
            MarkerSymbol::X => "x",
        }
    }
}

/// Point marker of a line or scatter series. Size in points (2–72).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Marker {
    pub symbol: Property<MarkerSymbol>,
    pub size: Property<u32>,
    pub shape: ShapeProperties,
}

/// Formatting override for a single data point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataPoint {
    pub index: u32,
    pub invert_if_negative: Property<bool>,
    pub marker: Option<Marker>,
    pub bubble_3d: Property<bool>,
    /// Pie slice explosion, percent of the radius.
    pub explosion: Property<u32>,
    pub shape: ShapeProperties,
}

/// A data series. The same structure serves bar, line, area, pie, scatter and bubble
/// charts; dimensions that a chart type does not use are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Series {
    /// Series index; falls back to the position across the whole chart.
    pub index: Property<u32>,
    pub title: Option<SeriesTitle>,
    pub shape: ShapeProperties,
    pub invert_if_negative: Property<bool>,
    pub marker: Option<Marker>,
    pub points: Vec<DataPoint>,
    pub data_labels: Option<DataLabels>,
    pub categories: Option<SeriesData>,
    pub values: Option<SeriesData>,
    pub x_values: Option<SeriesData>,
    pub y_values: Option<SeriesData>,
    pub bubble_sizes: Option<SeriesData>,
    pub smooth: Property<bool>,
    pub explosion: Property<u32>,
    pub bubble_3d: Property<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_values_untagged() {
        let cells: Vec<Cell> = serde_json::from_str(
            r#"[{"value": 1.5, "formatCode": "0.00"}, {"value": "East"}, {"value": true}, {}]"#,
        )
        .unwrap();
        assert_eq!(cells[0], Cell::number(1.5).with_format("0.00"));
        assert_eq!(cells[1], Cell::text("East"));
        assert_eq!(cells[2].value, Some(CellValue::Bool(true)));
        assert_eq!(cells[3], Cell::blank());
    }

    #[test]
    fn test_series_data_reference() {
        let data: SeriesData = serde_json::from_str(
            r#"{"reference": {"formula": "Sheet1!$B$2:$B$3",
                "points": [{"cells": [{"value": 3}]}, {"cells": [{"value": 4}], "hidden": true}]}}"#,
        )
        .unwrap();
        match data {
            SeriesData::Reference { formula, points } => {
                assert_eq!(formula, "Sheet1!$B$2:$B$3");
                assert_eq!(points.len(), 2);
                assert!(points[1].hidden);
            }
            other => panic!("expected reference, got {other:?}"),
        }
    }

    #[test]
    fn test_markup_text() {
        assert_eq!(CellValue::Number(2.0).to_markup_text(), "2");
        assert_eq!(CellValue::Number(0.25).to_markup_text(), "0.25");
        assert_eq!(CellValue::Bool(false).to_markup_text(), "FALSE");
    }
}
