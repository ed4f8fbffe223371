use serde::{Deserialize, Serialize};

/// Theme color slots. The theme maps each slot to a concrete color; resolving that
/// mapping is the model's job, the converter writes the slot name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemeColor {
    /// First background color.
    Background1,
    /// First text color.
    Text1,
    /// Second background color.
    Background2,
    /// Second text color.
    Text2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    /// Hyperlink color.
    Hyperlink,
    /// Visited hyperlink color.
    FollowedHyperlink,
    Dark1,
    Light1,
    Dark2,
    Light2,
}

impl SchemeColor {
    /// The `ST_SchemeColorVal` token for this slot.
    pub fn as_token(self) -> &'static str {
        match self {
            SchemeColor::Background1 => "bg1",
            SchemeColor::Text1 => "tx1",
            SchemeColor::Background2 => "bg2",
            SchemeColor::Text2 => "tx2",
            SchemeColor::Accent1 => "accent1",
            SchemeColor::Accent2 => "accent2",
            SchemeColor::Accent3 => "accent3",
            SchemeColor::Accent4 => "accent4",
            SchemeColor::Accent5 => "accent5",
            SchemeColor::Accent6 => "accent6",
            SchemeColor::Hyperlink => "hlink",
            SchemeColor::FollowedHyperlink => "folHlink",
            SchemeColor::Dark1 => "dk1",
            SchemeColor::Light1 => "lt1",
            SchemeColor::Dark2 => "dk2",
            SchemeColor::Light2 => "lt2",
        }
    }
}

/// The base of a color: either a literal RGB value or a theme slot.
/// The JSON representation uses the field name ("rgb" or "scheme") as the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorKind {
    /// Six hex digits, with or without a leading `#`.
    Rgb(String),
    Scheme(SchemeColor),
}

/// A color plus the modifiers DrawingML applies on top of it.
/// Modifier fractions are in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    /// The specific color choice. Uses flatten to represent the union based on JSON key.
    #[serde(flatten)]
    pub kind: ColorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lum_mod: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lum_off: Option<f64>,
    /// Opacity; `None` means fully opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl Color {
    pub fn rgb(hex: impl Into<String>) -> Self {
        Self::from_kind(ColorKind::Rgb(hex.into()))
    }

    pub fn scheme(slot: SchemeColor) -> Self {
        Self::from_kind(ColorKind::Scheme(slot))
    }

    fn from_kind(kind: ColorKind) -> Self {
        Color {
            kind,
            tint: None,
            shade: None,
            lum_mod: None,
            lum_off: None,
            alpha: None,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_luminance(mut self, lum_mod: f64, lum_off: f64) -> Self {
        self.lum_mod = Some(lum_mod);
        self.lum_off = Some(lum_off);
        self
    }
}
