//! Fill, outline and effect serialization (`c:spPr` and its DrawingML content).

use log::debug;

use super::context::ConversionContext;
use super::copy::{copy_value, default_copy, set_attr};
use super::document::NodeId;
use super::error::ConversionWarning;
use super::units::{pt_to_emu, to_percentage, to_positive_angle};
use crate::models::colors::{Color, ColorKind};
use crate::models::shape_properties::{
    ArrowHead, ArrowKind, CompoundLine, DashStyle, Fill, GradientFill, GradientShade, LineCap,
    LineJoin, Outline, PathShadeKind, PenAlignment, PresetDash, RectanglePosition, RelativeRect,
    ShapeProperties, Shadow,
};

// --- Tokens ---

fn cap_token(cap: &LineCap) -> String {
    match cap {
        LineCap::Round => "rnd",
        LineCap::Square => "sq",
        LineCap::Flat => "flat",
    }
    .to_string()
}

fn compound_token(compound: &CompoundLine) -> String {
    match compound {
        CompoundLine::Single => "sng",
        CompoundLine::Double => "dbl",
        CompoundLine::ThickThin => "thickThin",
        CompoundLine::ThinThick => "thinThick",
        CompoundLine::Triple => "tri",
    }
    .to_string()
}

fn alignment_token(alignment: &PenAlignment) -> String {
    match alignment {
        PenAlignment::Center => "ctr",
        PenAlignment::Inset => "in",
    }
    .to_string()
}

fn preset_dash_token(dash: PresetDash) -> &'static str {
    match dash {
        PresetDash::Solid => "solid",
        PresetDash::Dot => "dot",
        PresetDash::Dash => "dash",
        PresetDash::LongDash => "lgDash",
        PresetDash::DashDot => "dashDot",
        PresetDash::LongDashDot => "lgDashDot",
        PresetDash::LongDashDotDot => "lgDashDotDot",
        PresetDash::SystemDash => "sysDash",
        PresetDash::SystemDot => "sysDot",
        PresetDash::SystemDashDot => "sysDashDot",
        PresetDash::SystemDashDotDot => "sysDashDotDot",
    }
}

fn arrow_token(kind: ArrowKind) -> &'static str {
    match kind {
        ArrowKind::None => "none",
        ArrowKind::Triangle => "triangle",
        ArrowKind::Stealth => "stealth",
        ArrowKind::Diamond => "diamond",
        ArrowKind::Oval => "oval",
        ArrowKind::Arrow => "arrow",
    }
}

fn rect_position_token(position: RectanglePosition) -> &'static str {
    match position {
        RectanglePosition::TopLeft => "tl",
        RectanglePosition::Top => "t",
        RectanglePosition::TopRight => "tr",
        RectanglePosition::Left => "l",
        RectanglePosition::Center => "ctr",
        RectanglePosition::Right => "r",
        RectanglePosition::BottomLeft => "bl",
        RectanglePosition::Bottom => "b",
        RectanglePosition::BottomRight => "br",
    }
}

fn path_token(path: PathShadeKind) -> &'static str {
    match path {
        PathShadeKind::Circle => "circle",
        PathShadeKind::Rect => "rect",
        PathShadeKind::Shape => "shape",
    }
}

/// Maps one part of a packed arrow size code (`1`, `2`, `3`) to its token.
fn arrow_size_token(code: &str) -> Option<&'static str> {
    match code.trim() {
        "1" => Some("sm"),
        "2" => Some("med"),
        "3" => Some("lg"),
        _ => None,
    }
}

/// Splits a packed `"<width>-<length>"` arrow size code.
pub fn parse_arrow_size(code: &str) -> Option<(&'static str, &'static str)> {
    let (width, length) = code.split_once('-')?;
    Some((arrow_size_token(width)?, arrow_size_token(length)?))
}

// --- Colors ---

fn normalize_rgb(hex: &str) -> Option<String> {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(hex.to_ascii_uppercase())
    } else {
        None
    }
}

/// Appends the color element (`a:srgbClr` or `a:schemeClr`) with its modifiers.
pub fn write_color(ctx: &mut ConversionContext<'_>, parent: NodeId, color: &Color) {
    let node = match &color.kind {
        ColorKind::Rgb(hex) => match normalize_rgb(hex) {
            Some(value) => {
                let node = ctx.doc.create_child_node(parent, "a:srgbClr");
                ctx.doc.set_attribute(node, "val", value);
                node
            }
            None => {
                ctx.warn(ConversionWarning::MalformedInput(format!(
                    "invalid RGB color '{}'",
                    hex
                )));
                return;
            }
        },
        ColorKind::Scheme(slot) => {
            let node = ctx.doc.create_child_node(parent, "a:schemeClr");
            ctx.doc.set_attribute(node, "val", slot.as_token());
            node
        }
    };

    let modifiers = [
        ("a:tint", color.tint),
        ("a:shade", color.shade),
        ("a:alpha", color.alpha),
        ("a:lumMod", color.lum_mod),
        ("a:lumOff", color.lum_off),
    ];
    for (tag, value) in modifiers {
        if let Some(value) = value {
            let modifier = ctx.doc.create_child_node(node, tag);
            ctx.doc
                .set_attribute(modifier, "val", to_percentage(value).to_string());
        }
    }
}

// --- Fills ---

fn write_relative_rect(ctx: &mut ConversionContext<'_>, parent: NodeId, tag: &str, rect: &RelativeRect) {
    let node = ctx.doc.create_child_node(parent, tag);
    ctx.doc.set_attribute(node, "l", to_percentage(rect.left).to_string());
    ctx.doc.set_attribute(node, "t", to_percentage(rect.top).to_string());
    ctx.doc.set_attribute(node, "r", to_percentage(rect.right).to_string());
    ctx.doc.set_attribute(node, "b", to_percentage(rect.bottom).to_string());
}

fn write_gradient(ctx: &mut ConversionContext<'_>, parent: NodeId, gradient: &GradientFill) {
    if gradient.stops.is_empty() {
        ctx.warn(ConversionWarning::MalformedInput(
            "gradient fill without stops".to_string(),
        ));
        return;
    }

    let grad = ctx.doc.create_child_node(parent, "a:gradFill");
    if let Some(rotate) = gradient.rotate_with_shape {
        ctx.doc
            .set_attribute(grad, "rotWithShape", if rotate { "1" } else { "0" });
    }

    let stops = ctx.doc.create_child_node(grad, "a:gsLst");
    for stop in &gradient.stops {
        let gs = ctx.doc.create_child_node(stops, "a:gs");
        ctx.doc
            .set_attribute(gs, "pos", to_percentage(stop.position.clamp(0.0, 1.0)).to_string());
        write_color(ctx, gs, &stop.color);
    }

    match &gradient.shade {
        Some(GradientShade::Linear { angle, scaled }) => {
            let lin = ctx.doc.create_child_node(grad, "a:lin");
            ctx.doc
                .set_attribute(lin, "ang", to_positive_angle(*angle).to_string());
            ctx.doc
                .set_attribute(lin, "scaled", if *scaled { "1" } else { "0" });
        }
        Some(GradientShade::Path { path, fill_to_rect }) => {
            let path_node = ctx.doc.create_child_node(grad, "a:path");
            ctx.doc.set_attribute(path_node, "path", path_token(*path));
            if let Some(rect) = fill_to_rect {
                write_relative_rect(ctx, path_node, "a:fillToRect", rect);
            }
        }
        None => {}
    }

    if let Some(tile) = &gradient.tile_rect {
        write_relative_rect(ctx, grad, "a:tileRect", tile);
    }
}

/// Appends the DrawingML fill element for `fill` to `parent`.
pub fn write_fill(ctx: &mut ConversionContext<'_>, parent: NodeId, fill: &Fill) {
    match fill {
        Fill::None => {
            ctx.doc.create_child_node(parent, "a:noFill");
        }
        Fill::Solid(color) => {
            let solid = ctx.doc.create_child_node(parent, "a:solidFill");
            write_color(ctx, solid, color);
        }
        Fill::Gradient(gradient) => write_gradient(ctx, parent, gradient),
        Fill::Pattern(pattern) => {
            let patt = ctx.doc.create_child_node(parent, "a:pattFill");
            ctx.doc.set_attribute(patt, "prst", pattern.preset.as_str());
            let fg = ctx.doc.create_child_node(patt, "a:fgClr");
            write_color(ctx, fg, &pattern.foreground);
            let bg = ctx.doc.create_child_node(patt, "a:bgClr");
            write_color(ctx, bg, &pattern.background);
        }
        Fill::Image(image) => {
            ctx.warn(ConversionWarning::Unsupported(format!(
                "image fill '{}'",
                image.source
            )));
        }
    }
}

// --- Outline ---

fn write_arrow(ctx: &mut ConversionContext<'_>, parent: NodeId, tag: &str, arrow: &ArrowHead) {
    let node = ctx.doc.create_child_node(parent, tag);
    ctx.doc.set_attribute(node, "type", arrow_token(arrow.kind));
    if let Some(code) = &arrow.size {
        match parse_arrow_size(code) {
            Some((width, length)) => {
                ctx.doc.set_attribute(node, "w", width);
                ctx.doc.set_attribute(node, "len", length);
            }
            None => ctx.warn(ConversionWarning::MalformedInput(format!(
                "invalid arrow size '{}'",
                code
            ))),
        }
    }
}

fn write_dash(ctx: &mut ConversionContext<'_>, parent: NodeId, dash: &DashStyle) {
    match dash {
        DashStyle::Preset(preset) => {
            let node = ctx.doc.create_child_node(parent, "a:prstDash");
            ctx.doc.set_attribute(node, "val", preset_dash_token(*preset));
        }
        DashStyle::Custom(lengths) => {
            let cust = ctx.doc.create_child_node(parent, "a:custDash");
            for pair in lengths.chunks_exact(2) {
                let ds = ctx.doc.create_child_node(cust, "a:ds");
                ctx.doc.set_attribute(ds, "d", to_percentage(pair[0]).to_string());
                ctx.doc.set_attribute(ds, "sp", to_percentage(pair[1]).to_string());
            }
        }
    }
}

/// Appends `a:ln` for `outline` when any of its properties were set.
pub fn write_outline(ctx: &mut ConversionContext<'_>, parent: NodeId, outline: &Outline) {
    let ln = ctx.doc.create_node("a:ln");

    copy_value(&mut ctx.doc, &outline.width, ln, "", set_attr("w", |w: &f64| pt_to_emu(*w).to_string()), default_copy);
    copy_value(&mut ctx.doc, &outline.cap, ln, "", set_attr("cap", cap_token), default_copy);
    copy_value(&mut ctx.doc, &outline.compound, ln, "", set_attr("cmpd", compound_token), default_copy);
    copy_value(&mut ctx.doc, &outline.alignment, ln, "", set_attr("algn", alignment_token), default_copy);

    if default_copy(outline.fill.info()) {
        if let Some(fill) = outline.fill.get() {
            write_fill(ctx, ln, fill);
        }
    }
    let invisible = matches!(outline.fill.get(), Some(Fill::None));

    // An invisible line keeps its geometry but nothing that decorates the stroke.
    if !invisible {
        if let (true, Some(dash)) = (outline.dash.is_explicit(), outline.dash.get()) {
            write_dash(ctx, ln, dash);
        }
        if let (true, Some(join)) = (outline.join.is_explicit(), outline.join.get()) {
            match join {
                LineJoin::Round => {
                    ctx.doc.create_child_node(ln, "a:round");
                }
                LineJoin::Bevel => {
                    ctx.doc.create_child_node(ln, "a:bevel");
                }
                LineJoin::Miter => {}
            }
        }
        if let (true, Some(head)) = (outline.head_end.is_explicit(), outline.head_end.get()) {
            write_arrow(ctx, ln, "a:headEnd", head);
        }
        if let (true, Some(tail)) = (outline.tail_end.is_explicit(), outline.tail_end.get()) {
            write_arrow(ctx, ln, "a:tailEnd", tail);
        }
    } else {
        debug!("Outline without fill, skipping dash, join and arrows");
    }

    ctx.doc.append_non_empty_child_node(parent, ln);
}

// --- Effects ---

fn write_shadow(ctx: &mut ConversionContext<'_>, parent: NodeId, shadow: &Shadow) {
    let effects = ctx.doc.create_child_node(parent, "a:effectLst");
    let outer = ctx.doc.create_child_node(effects, "a:outerShdw");
    ctx.doc
        .set_attribute(outer, "blurRad", pt_to_emu(shadow.blur).to_string());
    ctx.doc
        .set_attribute(outer, "dist", pt_to_emu(shadow.distance).to_string());
    ctx.doc
        .set_attribute(outer, "dir", to_positive_angle(shadow.direction).to_string());
    if let Some(alignment) = shadow.alignment {
        ctx.doc
            .set_attribute(outer, "algn", rect_position_token(alignment));
    }
    if let Some(rotate) = shadow.rotate_with_shape {
        ctx.doc
            .set_attribute(outer, "rotWithShape", if rotate { "1" } else { "0" });
    }
    write_color(ctx, outer, &shadow.color);
}

/// Writes `shape` as a `tag` element (normally `c:spPr`) under `parent`. Nothing is
/// appended when no property was set explicitly.
pub fn write_shape_properties(
    ctx: &mut ConversionContext<'_>,
    parent: NodeId,
    tag: &str,
    shape: &ShapeProperties,
) -> Option<NodeId> {
    let sp_pr = ctx.doc.create_node(tag);

    if default_copy(shape.fill.info()) {
        if let Some(fill) = shape.fill.get() {
            write_fill(ctx, sp_pr, fill);
        }
    }
    if let Some(outline) = &shape.outline {
        write_outline(ctx, sp_pr, outline);
    }
    if default_copy(shape.shadow.info()) {
        if let Some(shadow) = shape.shadow.get() {
            write_shadow(ctx, sp_pr, shadow);
        }
    }

    if ctx.doc.append_non_empty_child_node(parent, sp_pr) {
        Some(sp_pr)
    } else {
        None
    }
}
