//! Converts a chart model into DrawingML chart markup (a `c:chartSpace` document).
//!
//! The conversion walks the model with per-construct visitors looked up in a
//! [`VisitorRegistry`]. Each visitor writes its own element into an in-memory
//! [`Document`](document::Document); elements left empty are dropped, and a property
//! is written only when its copy predicate accepts it, so that anything not set by
//! the user is left to the consumer's defaults and theme.
//!
//! # Current Features & Limitations:
//! *   Bar, column, line, area, pie, doughnut, scatter and bubble chart groups.
//! *   Value, category and date axes with automatic id allocation.
//! *   Literal and cell-reference series data, including multi-level categories.
//! *   Solid, gradient and pattern fills; outlines with dashes and arrows.
//! *   Image fills, 3-D charts, pivot and external data are not written.
//!
//! Recoverable problems in the model never fail a conversion; they are logged and
//! returned as [`ConversionWarning`]s next to the markup.

pub mod constants;
pub mod context;
pub mod copy;
pub mod document;
mod error;
pub mod fill;
pub mod options;
pub mod registry;
pub mod series_data;
pub mod units;
pub mod visitors;

pub use context::{AxisIdAllocator, AxisIds, ConversionContext, Frame, ModelRef, SharedAxisIdAllocator};
pub use error::{ConversionError, ConversionWarning, Result};
pub use options::{ConvertOptions, FormatOptions, Prettify};
pub use registry::{Kind, Visitor, VisitorRegistry};

use log::debug;

use crate::models::chart_space::ChartSpace;

/// XML declaration written before the root when `ConvertOptions::header` is set.
pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// The markup of one chart and the warnings raised while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartXml {
    pub xml: String,
    pub warnings: Vec<ConversionWarning>,
}

impl ChartXml {
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

/// Converts `chart_space` with the default visitors and a fresh axis id allocator.
///
/// # Arguments
/// * `chart_space` - The chart model to convert.
/// * `options` - Header and formatting settings.
///
/// # Returns
/// The chart markup, or a `ConversionError` if serialization fails. Problems in the
/// model itself are reported through `ChartXml::warnings`.
pub fn convert(chart_space: &ChartSpace, options: &ConvertOptions) -> Result<ChartXml> {
    convert_with(VisitorRegistry::shared(), AxisIds::default(), chart_space, options)
}

/// Converts `chart_space` with a custom registry and axis id source.
///
/// Pass `AxisIds::Shared` to draw axis ids for several charts from one sequence.
pub fn convert_with(
    registry: &VisitorRegistry,
    axis_ids: AxisIds,
    chart_space: &ChartSpace,
    options: &ConvertOptions,
) -> Result<ChartXml> {
    let mut ctx = ConversionContext::with_axis_ids(registry, axis_ids);
    ctx.visit_root(ModelRef::ChartSpace(chart_space));
    let (doc, warnings) = ctx.into_parts();

    if options.debug {
        debug!("Compact chart markup: {}", doc.write(None)?);
    }
    let body = doc.write(options.prettify.indent())?;
    let xml = if options.header {
        format!("{}\n{}", XML_HEADER, body)
    } else {
        body
    };
    debug!(
        "Converted chart: {} bytes, {} warnings",
        xml.len(),
        warnings.len()
    );
    Ok(ChartXml { xml, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chart_type::{ChartType, ChartTypeKind};

    #[test]
    fn test_header_and_compact_output() {
        let chart_space = ChartSpace::default();
        let result = convert(&chart_space, &ConvertOptions::default()).unwrap();
        assert!(result.xml.starts_with(XML_HEADER));
        assert!(result.xml.contains("<c:chartSpace "));
        // Compact output: only the header line break.
        assert_eq!(result.xml.lines().count(), 2);
        assert_eq!(result.warning_count(), 0);
    }

    #[test]
    fn test_prettified_without_header() {
        let options = ConvertOptions {
            header: false,
            prettify: Prettify::Enabled(true),
            debug: true,
        };
        let result = convert(&ChartSpace::default(), &options).unwrap();
        assert!(result.xml.starts_with("<c:chartSpace"));
        assert!(result.xml.contains("\n  <c:date1904 val=\"0\"/>"));
    }

    #[test]
    fn test_empty_registry_warns() {
        let registry = VisitorRegistry::new();
        let result = convert_with(
            &registry,
            AxisIds::default(),
            &ChartSpace::default(),
            &ConvertOptions::default(),
        )
        .unwrap();
        assert_eq!(
            result.warnings,
            vec![ConversionWarning::UnresolvedVisitor(Kind::ChartSpace)]
        );
        assert_eq!(result.xml, format!("{}\n", XML_HEADER));
    }

    #[test]
    fn test_shared_allocator_spans_charts() {
        let mut chart_space = ChartSpace::default();
        chart_space.plot_area.chart_types = vec![ChartType::new(ChartTypeKind::Line)];
        chart_space.plot_area.x_axes = vec![crate::models::Axis::new(crate::models::AxisKind::Category)];
        chart_space.plot_area.y_axes = vec![crate::models::Axis::new(crate::models::AxisKind::Value)];

        let shared = AxisIdAllocator::shared();
        let registry = VisitorRegistry::shared();
        let options = ConvertOptions::default();
        let first = convert_with(registry, AxisIds::Shared(shared.clone()), &chart_space, &options).unwrap();
        let second = convert_with(registry, AxisIds::Shared(shared), &chart_space, &options).unwrap();
        assert!(first.xml.contains("<c:axId val=\"10000\"/>"));
        assert!(!second.xml.contains("<c:axId val=\"10000\"/>"));
        assert!(second.xml.contains("<c:axId val=\"10002\"/>"));
    }
}
