//! Registry mapping model kinds to visitor functions.
//!
//! The registry is filled once and only read during conversions; contexts borrow it.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use super::context::{ConversionContext, Frame};
use super::visitors;

/// The kind of a model object, used to select its visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    ChartSpace,
    PlotArea,
    ChartTitle,
    AxisTitle,
    Legend,
    SeriesTitle,
    /// Rich text body (`c:rich`).
    Text,
    TextRun,
    Layout,
    /// All chart type groups; the visitor branches on the group's type.
    ChartType,
    Series,
    DataLabels,
    Marker,
    ValueAxis,
    CategoryAxis,
    DateAxis,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::ChartSpace => "chart-space",
            Kind::PlotArea => "plot-area",
            Kind::ChartTitle => "chart-title",
            Kind::AxisTitle => "axis-title",
            Kind::Legend => "legend",
            Kind::SeriesTitle => "series-title-text",
            Kind::Text => "generic-text",
            Kind::TextRun => "text-run",
            Kind::Layout => "manual-layout",
            Kind::ChartType => "chart-type",
            Kind::Series => "series",
            Kind::DataLabels => "data-label-set",
            Kind::Marker => "series-marker",
            Kind::ValueAxis => "value-axis",
            Kind::CategoryAxis => "ordinal-axis",
            Kind::DateAxis => "date-axis",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the children and attributes of `frame.node` from `frame.model`.
pub type Visitor = fn(&mut ConversionContext<'_>, &Frame<'_>);

/// Registry of visitors, keyed by [`Kind`].
///
/// # Examples
///
/// ```ignore
/// let mut registry = VisitorRegistry::with_defaults();
/// registry.register(Kind::Legend, my_legend_visitor);
/// assert!(registry.has(Kind::Legend));
/// ```
#[derive(Clone)]
pub struct VisitorRegistry {
    visitors: HashMap<Kind, Visitor>,
}

impl VisitorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        VisitorRegistry {
            visitors: HashMap::new(),
        }
    }

    /// Register a visitor. An existing visitor for the same kind is replaced.
    pub fn register(&mut self, kind: Kind, visitor: Visitor) {
        self.visitors.insert(kind, visitor);
    }

    pub fn get(&self, kind: Kind) -> Option<Visitor> {
        self.visitors.get(&kind).copied()
    }

    pub fn has(&self, kind: Kind) -> bool {
        self.visitors.contains_key(&kind)
    }

    /// Create a registry with the built-in visitors
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Kind::ChartSpace, visitors::chart_space::visit_chart_space);
        registry.register(Kind::PlotArea, visitors::plot_area::visit_plot_area);
        registry.register(Kind::ChartTitle, visitors::title::visit_title);
        registry.register(Kind::AxisTitle, visitors::title::visit_title);
        registry.register(Kind::Legend, visitors::legend::visit_legend);
        registry.register(Kind::SeriesTitle, visitors::series::visit_series_title);
        registry.register(Kind::Text, visitors::text::visit_rich_text);
        registry.register(Kind::TextRun, visitors::text::visit_text_run);
        registry.register(Kind::Layout, visitors::layout::visit_manual_layout);
        registry.register(Kind::ChartType, visitors::chart_type::visit_chart_type);
        registry.register(Kind::Series, visitors::series::visit_series);
        registry.register(Kind::DataLabels, visitors::data_labels::visit_data_labels);
        registry.register(Kind::Marker, visitors::marker::visit_marker);
        registry.register(Kind::ValueAxis, visitors::axis::visit_axis);
        registry.register(Kind::CategoryAxis, visitors::axis::visit_axis);
        registry.register(Kind::DateAxis, visitors::axis::visit_axis);
        registry
    }

    /// The shared default registry, built on first use.
    pub fn shared() -> &'static VisitorRegistry {
        static DEFAULT: OnceLock<VisitorRegistry> = OnceLock::new();
        DEFAULT.get_or_init(VisitorRegistry::with_defaults)
    }
}

impl Default for VisitorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
