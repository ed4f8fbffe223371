//! Rich text bodies, text runs and text property blocks (`c:txPr`).

use log::debug;

use super::axis::axis_position;
use crate::converters::xml::constants::DEFAULT_LANGUAGE;
use crate::converters::xml::context::{ConversionContext, Frame, ModelRef};
use crate::converters::xml::copy::{copy_value, default_copy, set_attr};
use crate::converters::xml::document::NodeId;
use crate::converters::xml::fill::write_color;
use crate::converters::xml::registry::Kind;
use crate::converters::xml::units::{font_size, to_angle, to_percentage};
use crate::models::text::{Paragraph, TextDirection, TextFormat, TextStyle};

/// Rotation of titles on vertical axes when none is set.
const VERTICAL_TITLE_ROTATION: i64 = -5_400_000;

fn direction_token(direction: &TextDirection) -> String {
    match direction {
        TextDirection::Horizontal => "horz",
        TextDirection::Vertical => "vert",
        TextDirection::Vertical270 => "vert270",
        TextDirection::Stacked => "wordArtVert",
    }
    .to_string()
}

fn flag(value: &bool) -> String {
    if *value { "1" } else { "0" }.to_string()
}

/// Writes `style` as a character properties element (`a:rPr`, `a:defRPr`, `a:endParaRPr`).
/// Only explicit values are written. The element is appended even when empty.
pub fn write_run_properties(
    ctx: &mut ConversionContext<'_>,
    parent: NodeId,
    tag: &str,
    style: &TextStyle,
) -> NodeId {
    let node = ctx.doc.create_child_node(parent, tag);
    let doc = &mut ctx.doc;
    copy_value(doc, &style.size, node, "", set_attr("sz", |pt: &f64| font_size(*pt).to_string()), default_copy);
    copy_value(doc, &style.bold, node, "", set_attr("b", flag), default_copy);
    copy_value(doc, &style.italic, node, "", set_attr("i", flag), default_copy);
    copy_value(
        doc,
        &style.underline,
        node,
        "",
        set_attr("u", |on: &bool| if *on { "sng" } else { "none" }.to_string()),
        default_copy,
    );
    copy_value(
        doc,
        &style.strikethrough,
        node,
        "",
        set_attr("strike", |on: &bool| if *on { "sngStrike" } else { "noStrike" }.to_string()),
        default_copy,
    );
    copy_value(
        doc,
        &style.baseline,
        node,
        "",
        set_attr("baseline", |fraction: &f64| to_percentage(*fraction).to_string()),
        default_copy,
    );

    if let (true, Some(color)) = (style.color.is_explicit(), style.color.get()) {
        let fill = ctx.doc.create_child_node(node, "a:solidFill");
        write_color(ctx, fill, color);
    }
    if let (true, Some(family)) = (style.font_family.is_explicit(), style.font_family.get()) {
        let latin = ctx.doc.create_child_node(node, "a:latin");
        ctx.doc.set_attribute(latin, "typeface", family.as_str());
    }
    node
}

/// Appends `a:bodyPr` for `format`. `default_rotation` applies when no rotation is set.
fn write_body_properties(
    ctx: &mut ConversionContext<'_>,
    parent: NodeId,
    format: &TextFormat,
    default_rotation: Option<i64>,
) -> NodeId {
    let body = ctx.doc.create_child_node(parent, "a:bodyPr");
    let rotated = copy_value(
        &mut ctx.doc,
        &format.rotation,
        body,
        "",
        set_attr("rot", |deg: &f64| to_angle(*deg).to_string()),
        default_copy,
    );
    if !rotated {
        if let Some(rotation) = default_rotation {
            ctx.doc.set_attribute(body, "rot", rotation.to_string());
            ctx.doc.set_attribute(body, "vert", "horz");
        }
    }
    copy_value(&mut ctx.doc, &format.direction, body, "", set_attr("vert", direction_token), default_copy);
    body
}

/// The rotation to apply to a title's text: titles of vertical axes read bottom-up.
pub(crate) fn title_default_rotation<'a>(frame: &'a Frame<'a>) -> Option<i64> {
    let title_frame = std::iter::once(frame)
        .chain(frame.ancestors())
        .find(|f| matches!(f.model, ModelRef::ChartTitle(_) | ModelRef::AxisTitle(_)))?;
    if !matches!(title_frame.model, ModelRef::AxisTitle(_)) {
        return None;
    }
    let axis_frame = title_frame.parent?;
    let ModelRef::Axis(axis) = axis_frame.model else {
        return None;
    };
    axis_position(axis, axis_frame)
        .is_vertical()
        .then_some(VERTICAL_TITLE_ROTATION)
}

/// Writes a `c:txPr` block for `format` when it sets anything.
pub fn write_text_properties(
    ctx: &mut ConversionContext<'_>,
    parent: NodeId,
    format: &TextFormat,
    default_rotation: Option<i64>,
) -> Option<NodeId> {
    let tx_pr = ctx.doc.create_node("c:txPr");
    let body = write_body_properties(ctx, tx_pr, format, default_rotation);
    ctx.doc.create_child_node(tx_pr, "a:lstStyle");
    let p = ctx.doc.create_child_node(tx_pr, "a:p");
    let p_pr = ctx.doc.create_child_node(p, "a:pPr");
    let def = write_run_properties(ctx, p_pr, "a:defRPr", &format.style);
    let end = ctx.doc.create_child_node(p, "a:endParaRPr");
    ctx.doc.set_attribute(end, "lang", DEFAULT_LANGUAGE);

    if ctx.doc.is_empty(body) && ctx.doc.is_empty(def) {
        return None;
    }
    ctx.doc.append_child_node(parent, tx_pr, true);
    Some(tx_pr)
}

fn write_paragraph<'a>(ctx: &mut ConversionContext<'_>, frame: &Frame<'a>, paragraph: &'a Paragraph) {
    let p = ctx.doc.create_child_node(frame.node, "a:p");
    let p_pr = ctx.doc.create_node("a:pPr");
    let def = write_run_properties(ctx, p_pr, "a:defRPr", &paragraph.style);
    if !ctx.doc.is_empty(def) {
        ctx.doc.append_child_node(p, p_pr, true);
    }
    for run in &paragraph.runs {
        ctx.visit(Some(frame), p, ModelRef::TextRun(run), None, None);
    }
    let end = ctx.doc.create_child_node(p, "a:endParaRPr");
    ctx.doc.set_attribute(end, "lang", DEFAULT_LANGUAGE);
}

/// Visitor for rich text (`c:rich`): body properties, list style, paragraphs.
pub fn visit_rich_text(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let ModelRef::Text(rich) = frame.model else {
        ctx.model_mismatch(Kind::Text, &frame.model);
        return;
    };
    let rotation = title_default_rotation(frame);
    write_body_properties(ctx, frame.node, &rich.format, rotation);
    ctx.doc.create_child_node(frame.node, "a:lstStyle");
    for paragraph in &rich.paragraphs {
        write_paragraph(ctx, frame, paragraph);
    }
    debug!("Wrote rich text with {} paragraphs", rich.paragraphs.len());
}

/// Visitor for a text run (`a:r`).
pub fn visit_text_run(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let ModelRef::TextRun(run) = frame.model else {
        ctx.model_mismatch(Kind::TextRun, &frame.model);
        return;
    };
    let r_pr = write_run_properties(ctx, frame.node, "a:rPr", &run.style);
    ctx.doc.set_attribute(r_pr, "lang", DEFAULT_LANGUAGE);
    let t = ctx.doc.create_child_node(frame.node, "a:t");
    ctx.doc.set_text(t, &run.text);
}
