//! Per-conversion state: the output document, traversal frames, axis id and extension
//! id allocation, and the collected warnings.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use log::{debug, warn};

use super::constants::*;
use super::document::{Document, NodeId};
use super::error::ConversionWarning;
use super::registry::{Kind, Visitor, VisitorRegistry};
use crate::models::axis::{Axis, AxisKind};
use crate::models::chart_space::{ChartSpace, Legend, PlotArea};
use crate::models::chart_type::{ChartType, ChartTypeKind};
use crate::models::data_labels::DataLabels;
use crate::models::layout::ManualLayout;
use crate::models::series::{Marker, Series, SeriesTitle};
use crate::models::text::{RichText, TextRun, Title};

/// A borrowed model object tagged with its kind.
#[derive(Debug, Clone, Copy)]
pub enum ModelRef<'a> {
    ChartSpace(&'a ChartSpace),
    PlotArea(&'a PlotArea),
    ChartTitle(&'a Title),
    AxisTitle(&'a Title),
    Legend(&'a Legend),
    SeriesTitle(&'a SeriesTitle),
    Text(&'a RichText),
    TextRun(&'a TextRun),
    Layout(&'a ManualLayout),
    ChartType(&'a ChartType),
    Series(&'a Series),
    DataLabels(&'a DataLabels),
    Marker(&'a Marker),
    Axis(&'a Axis),
}

impl<'a> ModelRef<'a> {
    pub fn kind(&self) -> Kind {
        match self {
            ModelRef::ChartSpace(_) => Kind::ChartSpace,
            ModelRef::PlotArea(_) => Kind::PlotArea,
            ModelRef::ChartTitle(_) => Kind::ChartTitle,
            ModelRef::AxisTitle(_) => Kind::AxisTitle,
            ModelRef::Legend(_) => Kind::Legend,
            ModelRef::SeriesTitle(_) => Kind::SeriesTitle,
            ModelRef::Text(_) => Kind::Text,
            ModelRef::TextRun(_) => Kind::TextRun,
            ModelRef::Layout(_) => Kind::Layout,
            ModelRef::ChartType(_) => Kind::ChartType,
            ModelRef::Series(_) => Kind::Series,
            ModelRef::DataLabels(_) => Kind::DataLabels,
            ModelRef::Marker(_) => Kind::Marker,
            ModelRef::Axis(axis) => match axis.kind {
                AxisKind::Value => Kind::ValueAxis,
                AxisKind::Category => Kind::CategoryAxis,
                AxisKind::Date => Kind::DateAxis,
            },
        }
    }

    /// The element a visit creates when the caller does not name one.
    pub fn default_tag(&self) -> &'static str {
        match self {
            ModelRef::ChartSpace(_) => "c:chartSpace",
            ModelRef::PlotArea(_) => "c:plotArea",
            ModelRef::ChartTitle(_) | ModelRef::AxisTitle(_) => "c:title",
            ModelRef::Legend(_) => "c:legend",
            ModelRef::SeriesTitle(_) => "c:tx",
            ModelRef::Text(_) => "c:rich",
            ModelRef::TextRun(_) => "a:r",
            ModelRef::Layout(_) => "c:manualLayout",
            ModelRef::ChartType(chart_type) => match chart_type.chart_type {
                ChartTypeKind::Bar | ChartTypeKind::Column => "c:barChart",
                ChartTypeKind::Line => "c:lineChart",
                ChartTypeKind::Area => "c:areaChart",
                ChartTypeKind::Pie => "c:pieChart",
                ChartTypeKind::Doughnut => "c:doughnutChart",
                ChartTypeKind::Scatter => "c:scatterChart",
                ChartTypeKind::Bubble => "c:bubbleChart",
            },
            ModelRef::Series(_) => "c:ser",
            ModelRef::DataLabels(_) => "c:dLbls",
            ModelRef::Marker(_) => "c:marker",
            ModelRef::Axis(axis) => match axis.kind {
                AxisKind::Value => "c:valAx",
                AxisKind::Category => "c:catAx",
                AxisKind::Date => "c:dateAx",
            },
        }
    }
}

/// One level of the traversal: the output node being built, the model object it is
/// built from, and the enclosing frame. Only the root frame has no parent.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub node: NodeId,
    pub model: ModelRef<'a>,
    pub parent: Option<&'a Frame<'a>>,
}

impl<'a> Frame<'a> {
    /// The enclosing model object, or this frame's own at the root.
    pub fn parent_model(&self) -> ModelRef<'a> {
        self.parent.map_or(self.model, |parent| parent.model)
    }

    /// The enclosing output node, or this frame's own at the root.
    pub fn parent_node(&self) -> NodeId {
        self.parent.map_or(self.node, |parent| parent.node)
    }

    /// Enclosing frames, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &'a Frame<'a>> {
        std::iter::successors(self.parent, |frame| frame.parent)
    }

    /// The nearest enclosing chart type group.
    pub fn chart_type(&self) -> Option<&'a ChartType> {
        self.ancestors().find_map(|frame| match frame.model {
            ModelRef::ChartType(chart_type) => Some(chart_type),
            _ => None,
        })
    }

    pub fn plot_area(&self) -> Option<&'a PlotArea> {
        self.ancestors().find_map(|frame| match frame.model {
            ModelRef::PlotArea(plot_area) => Some(plot_area),
            _ => None,
        })
    }
}

// --- Axis ids ---

/// Hands out axis ids from `AXIS_ID_FIRST..=AXIS_ID_LAST`, wrapping back to the floor
/// when the window is exhausted.
#[derive(Debug, Clone)]
pub struct AxisIdAllocator {
    next: u32,
}

/// An allocator shared between conversions, so that several charts draw ids from one
/// sequence.
pub type SharedAxisIdAllocator = Arc<Mutex<AxisIdAllocator>>;

impl Default for AxisIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisIdAllocator {
    pub fn new() -> Self {
        AxisIdAllocator {
            next: AXIS_ID_FIRST,
        }
    }

    /// Starts allocation at `id`, clamped into the window.
    pub fn starting_at(id: u32) -> Self {
        AxisIdAllocator {
            next: id.clamp(AXIS_ID_FIRST, AXIS_ID_LAST),
        }
    }

    pub fn shared() -> SharedAxisIdAllocator {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Allocates the next id for which `in_use` is false. Returns the id and whether
    /// allocation wrapped past the ceiling.
    pub fn allocate(&mut self, in_use: impl Fn(u32) -> bool) -> (u32, bool) {
        let mut wrapped = false;
        let mut candidate = self.next;
        for _ in AXIS_ID_FIRST..=AXIS_ID_LAST {
            if candidate > AXIS_ID_LAST {
                candidate = AXIS_ID_FIRST;
                wrapped = true;
            }
            if !in_use(candidate) {
                break;
            }
            candidate += 1;
        }
        self.next = candidate.saturating_add(1);
        (candidate, wrapped)
    }
}

/// Where a context takes its axis ids from.
#[derive(Debug, Clone)]
pub enum AxisIds {
    /// Fresh allocator owned by the context.
    Local(AxisIdAllocator),
    Shared(SharedAxisIdAllocator),
}

impl Default for AxisIds {
    fn default() -> Self {
        AxisIds::Local(AxisIdAllocator::new())
    }
}

impl AxisIds {
    fn allocate(&mut self, in_use: impl Fn(u32) -> bool) -> (u32, bool) {
        match self {
            AxisIds::Local(allocator) => allocator.allocate(in_use),
            AxisIds::Shared(shared) => {
                let mut allocator = shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                allocator.allocate(in_use)
            }
        }
    }
}

// --- Context ---

/// State of one conversion. Created by `convert()` and dropped when it returns.
pub struct ConversionContext<'r> {
    pub doc: Document,
    registry: &'r VisitorRegistry,
    axis_ids: AxisIds,
    /// Axis identity (address) to allocated id.
    axis_table: HashMap<usize, u32>,
    allocated_axis_ids: HashSet<u32>,
    extension_counter: u32,
    series_counter: u32,
    current_series: u32,
    warnings: Vec<ConversionWarning>,
    depth: usize,
}

impl<'r> ConversionContext<'r> {
    pub fn new(registry: &'r VisitorRegistry) -> Self {
        Self::with_axis_ids(registry, AxisIds::default())
    }

    pub fn with_axis_ids(registry: &'r VisitorRegistry, axis_ids: AxisIds) -> Self {
        ConversionContext {
            doc: Document::new(),
            registry,
            axis_ids,
            axis_table: HashMap::new(),
            allocated_axis_ids: HashSet::new(),
            extension_counter: 0,
            series_counter: 0,
            current_series: 0,
            warnings: Vec::new(),
            depth: 0,
        }
    }

    // --- Visiting ---

    /// Visits the root object: its node becomes the document root.
    pub fn visit_root(&mut self, model: ModelRef<'_>) -> Option<NodeId> {
        let visitor = self.resolve_visitor(model.kind(), None)?;
        let node = self.doc.create_node(model.default_tag());
        self.doc.set_root(node);
        let frame = Frame {
            node,
            model,
            parent: None,
        };
        self.depth += 1;
        visitor(self, &frame);
        self.depth -= 1;
        Some(node)
    }

    /// Visits `model` into a new element (named `tag`, or the model's default tag) and
    /// appends it to `parent_node` if the visitor left it non-empty.
    ///
    /// `visitor` overrides the registry lookup. Returns the appended node.
    pub fn visit<'p>(
        &mut self,
        parent: Option<&'p Frame<'p>>,
        parent_node: NodeId,
        model: ModelRef<'p>,
        tag: Option<&str>,
        visitor: Option<Visitor>,
    ) -> Option<NodeId> {
        let kind = model.kind();
        let visitor = self.resolve_visitor(kind, visitor)?;
        if self.depth >= MAX_VISIT_DEPTH {
            self.warn(ConversionWarning::DepthExceeded(MAX_VISIT_DEPTH));
            return None;
        }

        let node = self.doc.create_node(tag.unwrap_or(model.default_tag()));
        let frame = Frame {
            node,
            model,
            parent,
        };
        self.depth += 1;
        visitor(self, &frame);
        self.depth -= 1;

        if self.doc.append_non_empty_child_node(parent_node, node) {
            Some(node)
        } else {
            debug!("Dropped empty '{}' for {}", tag.unwrap_or(model.default_tag()), kind);
            None
        }
    }

    fn resolve_visitor(&mut self, kind: Kind, visitor: Option<Visitor>) -> Option<Visitor> {
        let resolved = visitor.or_else(|| self.registry.get(kind));
        if resolved.is_none() {
            self.warn(ConversionWarning::UnresolvedVisitor(kind));
        }
        resolved
    }

    // --- Warnings ---

    pub fn warn(&mut self, warning: ConversionWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Records that a visitor for `expected` was handed another kind of object.
    pub fn model_mismatch(&mut self, expected: Kind, actual: &ModelRef<'_>) {
        self.warn(ConversionWarning::ModelMismatch {
            expected,
            actual: actual.kind(),
        });
    }

    pub fn warnings(&self) -> &[ConversionWarning] {
        &self.warnings
    }

    pub fn into_parts(self) -> (Document, Vec<ConversionWarning>) {
        (self.doc, self.warnings)
    }

    // --- Identifiers ---

    /// The id of `axis`, allocated on first request. Ids are keyed by identity, so
    /// two equal axes still get distinct ids.
    pub fn axis_id(&mut self, axis: &Axis) -> u32 {
        let key = axis as *const Axis as usize;
        if let Some(id) = self.axis_table.get(&key) {
            return *id;
        }
        let allocated = &self.allocated_axis_ids;
        let (id, wrapped) = self.axis_ids.allocate(|candidate| allocated.contains(&candidate));
        if wrapped {
            self.warn(ConversionWarning::AxisIdsWrapped(id));
        }
        self.axis_table.insert(key, id);
        self.allocated_axis_ids.insert(id);
        debug!("Allocated axis id {}", id);
        id
    }

    /// Next extension GUID, e.g. `{00000001-0001-4C2B-9F3A-5D1E2C7B8A90}`.
    pub fn next_extension_guid(&mut self) -> String {
        self.extension_counter += 1;
        format!("{{{:08X}{}}}", self.extension_counter, SERIES_UNIQUE_ID_SUFFIX)
    }

    /// Starts the next series: returns its ordinal across the whole chart.
    pub fn begin_series(&mut self) -> u32 {
        self.current_series = self.series_counter;
        self.series_counter += 1;
        self.current_series
    }

    /// Ordinal of the series being visited.
    pub fn current_series(&self) -> u32 {
        self.current_series
    }
}
