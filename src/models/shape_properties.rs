use serde::{Deserialize, Serialize};

use crate::models::colors::Color;
use crate::models::property::Property;

// --- Fills ---

/// A rectangle expressed as insets from each edge, as fractions of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelativeRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// One stop of a gradient. `position` is a fraction in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    pub position: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PathShadeKind {
    Circle,
    Rect,
    Shape,
}

/// How the gradient stops are laid out over the filled area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GradientShade {
    /// Straight gradient; `angle` in degrees, clockwise from the x axis.
    Linear {
        angle: f64,
        #[serde(default)]
        scaled: bool,
    },
    /// Gradient following a path, optionally focused into a rectangle.
    Path {
        path: PathShadeKind,
        #[serde(default)]
        fill_to_rect: Option<RelativeRect>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientFill {
    pub stops: Vec<GradientStop>,
    #[serde(default)]
    pub shade: Option<GradientShade>,
    /// Repeating region; absent means the gradient is not tiled.
    #[serde(default)]
    pub tile_rect: Option<RelativeRect>,
    #[serde(default)]
    pub rotate_with_shape: Option<bool>,
}

/// A two-color pattern. `preset` is an `ST_PresetPatternVal` token such as `pct5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFill {
    pub preset: String,
    pub foreground: Color,
    pub background: Color,
}

/// A picture fill. The converter does not embed images; see the fill serializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFill {
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Fill {
    None,
    Solid(Color),
    Gradient(GradientFill),
    Pattern(PatternFill),
    Image(ImageFill),
}

// --- Outlines ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineCap {
    Round,
    Square,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompoundLine {
    Single,
    Double,
    ThickThin,
    ThinThick,
    Triple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PenAlignment {
    Center,
    Inset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineJoin {
    Round,
    Bevel,
    Miter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresetDash {
    Solid,
    Dot,
    Dash,
    LongDash,
    DashDot,
    LongDashDot,
    LongDashDotDot,
    SystemDash,
    SystemDot,
    SystemDashDot,
    SystemDashDotDot,
}

/// Dash pattern of a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DashStyle {
    Preset(PresetDash),
    /// Alternating dash and gap lengths, as multiples of the line width.
    /// A trailing dash without a gap is ignored.
    Custom(Vec<f64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArrowKind {
    None,
    Triangle,
    Stealth,
    Diamond,
    Oval,
    Arrow,
}

/// Arrow head at one end of a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowHead {
    pub kind: ArrowKind,
    /// Packed `"<width>-<length>"` code, each part `1` (small), `2` (medium) or `3` (large).
    #[serde(default)]
    pub size: Option<String>,
}

/// Line (stroke) properties. Width is in points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Outline {
    pub fill: Property<Fill>,
    pub width: Property<f64>,
    pub cap: Property<LineCap>,
    pub compound: Property<CompoundLine>,
    pub alignment: Property<PenAlignment>,
    pub dash: Property<DashStyle>,
    pub join: Property<LineJoin>,
    pub head_end: Property<ArrowHead>,
    pub tail_end: Property<ArrowHead>,
}

// --- Effects ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RectanglePosition {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

/// Outer shadow. Lengths in points, direction in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: Color,
    #[serde(default)]
    pub blur: f64,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub direction: f64,
    #[serde(default)]
    pub alignment: Option<RectanglePosition>,
    #[serde(default)]
    pub rotate_with_shape: Option<bool>,
}

/// Fill, outline and effects of any chart element that has a surface.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeProperties {
    pub fill: Property<Fill>,
    pub outline: Option<Outline>,
    pub shadow: Property<Shadow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::colors::SchemeColor;

    #[test]
    fn test_shape_properties_from_json() {
        let props: ShapeProperties = serde_json::from_str(
            r#"{
                "fill": {"solid": {"scheme": "accent1"}},
                "outline": {"width": 0.75, "dash": {"preset": "dashDot"}, "fill": "none"}
            }"#,
        )
        .unwrap();
        assert_eq!(
            props.fill.get(),
            Some(&Fill::Solid(Color::scheme(SchemeColor::Accent1)))
        );
        let outline = props.outline.unwrap();
        assert_eq!(outline.width.get(), Some(&0.75));
        assert_eq!(
            outline.dash.get(),
            Some(&DashStyle::Preset(PresetDash::DashDot))
        );
        assert_eq!(outline.fill.get(), Some(&Fill::None));
        assert!(props.shadow.get().is_none());
    }
}
