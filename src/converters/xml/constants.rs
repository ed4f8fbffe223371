//! Defines constants used throughout the chart markup conversion.

// Conversion factors
pub const PT_PER_INCH: f64 = 72.0;
pub const EMU_PER_INCH: f64 = 914400.0;
// EMU (English Metric Unit) per Point (standard 72 DPI)
pub const EMU_PER_PT: f64 = EMU_PER_INCH / PT_PER_INCH; // 12700
/// Angles are stored in 60000ths of a degree.
pub const ANGLE_UNITS_PER_DEGREE: f64 = 60000.0;
/// Percentages are stored in 1000ths of a percent (100000 = 100%).
pub const PERCENT_UNITS: f64 = 100000.0;
/// Font sizes are stored in 100ths of a point.
pub const FONT_SIZE_UNITS_PER_PT: f64 = 100.0;

// Namespaces declared on the root element.
pub const NS_CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_CHART_2015: &str = "http://schemas.microsoft.com/office/drawing/2015/06/chart";

// Namespaces declared locally on compatibility and extension blocks.
pub const NS_MARKUP_COMPATIBILITY: &str =
    "http://schemas.openxmlformats.org/markup-compatibility/2006";
pub const NS_CHART_2007: &str = "http://schemas.microsoft.com/office/drawing/2007/8/2/chart";
pub const NS_CHART_2014: &str = "http://schemas.microsoft.com/office/drawing/2014/chart";
pub const NS_CHART_2017: &str = "http://schemas.microsoft.com/office/drawing/2017/03/chart";

/// Extension carrying the per-series unique id.
pub const EXT_SERIES_UNIQUE_ID: &str = "{C3380CC4-5D6E-409C-BE32-E72D297353CC}";
/// Extension carrying the "show #N/A as blank" display option.
pub const EXT_DATA_DISPLAY_OPTIONS: &str = "{56B9EC1D-385E-4148-901F-78D8002777C0}";
/// Fixed tail of generated series unique ids; the counter fills the first group.
pub const SERIES_UNIQUE_ID_SUFFIX: &str = "-0001-4C2B-9F3A-5D1E2C7B8A90";

/// `c14:style` is the chart style id offset by this constant.
pub const STYLE_ID_OFFSET: u32 = 100;
pub const DEFAULT_STYLE_ID: u32 = 2;
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_FORMAT_CODE: &str = "General";

/// Page margins written into the print settings block, in inches.
pub const PAGE_MARGINS: [(&str, &str); 6] = [
    ("b", "0.75"),
    ("l", "0.7"),
    ("r", "0.7"),
    ("t", "0.75"),
    ("header", "0.3"),
    ("footer", "0.3"),
];

/// Axis ids are allocated from this inclusive window.
pub const AXIS_ID_FIRST: u32 = 10_000;
pub const AXIS_ID_LAST: u32 = 99_999;

/// Nesting limit for visitor recursion.
pub const MAX_VISIT_DEPTH: usize = 64;
