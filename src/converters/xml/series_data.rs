//! Serialization of series dimensions: literal values, single-level references with a
//! numeric or string cache, and multi-level category references.

use indexmap::IndexSet;
use log::debug;

use super::constants::DEFAULT_FORMAT_CODE;
use super::context::ConversionContext;
use super::document::NodeId;
use super::error::ConversionWarning;
use crate::models::series::{Cell, CellValue, RangePoint, SeriesData};

/// Writes `data` as a `tag` element (`c:cat`, `c:val`, `c:xVal`, `c:yVal`,
/// `c:bubbleSize`) under `parent`.
pub fn write_series_data(
    ctx: &mut ConversionContext<'_>,
    parent: NodeId,
    tag: &str,
    data: &SeriesData,
) -> Option<NodeId> {
    let node = ctx.doc.create_node(tag);
    match data {
        SeriesData::Literal {
            values,
            format_code,
        } => {
            let cells: Vec<(u32, &Cell)> = values
                .iter()
                .enumerate()
                .map(|(idx, cell)| (idx as u32, cell))
                .collect();
            write_literal(ctx, node, &cells, values.len(), format_code.as_deref());
        }
        SeriesData::Reference { formula, points } => {
            let rendered: Vec<&RangePoint> = points.iter().filter(|p| !p.hidden).collect();
            if formula.trim().is_empty() {
                ctx.warn(ConversionWarning::MalformedInput(format!(
                    "empty formula for '{}', writing values as literals",
                    tag
                )));
                let cells: Vec<(u32, &Cell)> = rendered
                    .iter()
                    .enumerate()
                    .filter_map(|(idx, point)| point.cells.last().map(|cell| (idx as u32, cell)))
                    .collect();
                write_literal(ctx, node, &cells, rendered.len(), None);
            } else if rendered.iter().any(|p| p.cells.len() > 1) {
                write_multi_level(ctx, node, formula, &rendered);
            } else {
                write_single_level(ctx, node, tag, formula, &rendered);
            }
        }
    }

    if ctx.doc.append_non_empty_child_node(parent, node) {
        Some(node)
    } else {
        None
    }
}

fn write_pt_count(ctx: &mut ConversionContext<'_>, parent: NodeId, count: usize) {
    let pt_count = ctx.doc.create_child_node(parent, "c:ptCount");
    ctx.doc.set_attribute(pt_count, "val", count.to_string());
}

fn write_pt(ctx: &mut ConversionContext<'_>, parent: NodeId, idx: u32, value: &CellValue) -> NodeId {
    let pt = ctx.doc.create_child_node(parent, "c:pt");
    ctx.doc.set_attribute(pt, "idx", idx.to_string());
    let v = ctx.doc.create_child_node(pt, "c:v");
    ctx.doc.set_text(v, &value.to_markup_text());
    pt
}

fn write_format_code(ctx: &mut ConversionContext<'_>, parent: NodeId, code: &str) {
    let node = ctx.doc.create_child_node(parent, "c:formatCode");
    ctx.doc.set_text(node, code);
}

/// `c:numLit` when every present value is numeric, `c:strLit` otherwise.
fn write_literal(
    ctx: &mut ConversionContext<'_>,
    parent: NodeId,
    cells: &[(u32, &Cell)],
    count: usize,
    format_code: Option<&str>,
) {
    let numeric = cells
        .iter()
        .filter_map(|(_, cell)| cell.value.as_ref())
        .all(CellValue::is_numeric);

    if numeric {
        let lit = ctx.doc.create_child_node(parent, "c:numLit");
        write_format_code(ctx, lit, format_code.unwrap_or(DEFAULT_FORMAT_CODE));
        write_pt_count(ctx, lit, count);
        for (idx, cell) in cells {
            if let Some(value) = &cell.value {
                write_pt(ctx, lit, *idx, value);
            }
        }
    } else {
        let lit = ctx.doc.create_child_node(parent, "c:strLit");
        write_pt_count(ctx, lit, count);
        for (idx, cell) in cells {
            if let Some(value) = &cell.value {
                write_pt(ctx, lit, *idx, value);
            }
        }
    }
}

/// Categories with several label levels. Levels are written innermost first, so
/// level `n` holds each point's `n`-th cell counted from the end.
fn write_multi_level(
    ctx: &mut ConversionContext<'_>,
    parent: NodeId,
    formula: &str,
    points: &[&RangePoint],
) {
    let reference = ctx.doc.create_child_node(parent, "c:multiLvlStrRef");
    let f = ctx.doc.create_child_node(reference, "c:f");
    ctx.doc.set_text(f, formula);

    let cache = ctx.doc.create_child_node(reference, "c:multiLvlStrCache");
    write_pt_count(ctx, cache, points.len());

    let depth = points.iter().map(|p| p.cells.len()).max().unwrap_or(0);
    debug!("Writing {} category levels for {}", depth, formula);
    for level in 0..depth {
        let lvl = ctx.doc.create_child_node(cache, "c:lvl");
        for (idx, point) in points.iter().enumerate() {
            let cell = point
                .cells
                .len()
                .checked_sub(level + 1)
                .and_then(|i| point.cells.get(i));
            if let Some(value) = cell.and_then(|c| c.value.as_ref()) {
                write_pt(ctx, lvl, idx as u32, value);
            }
        }
    }
}

/// Picks the cache default format code.
///
/// With one distinct code, that code. With several, the second distinct code in
/// point order becomes the default; every point with another code carries its own.
pub fn resolve_format_codes<'c>(codes: &[&'c str]) -> &'c str {
    let distinct: IndexSet<&str> = codes.iter().copied().collect();
    match distinct.len() {
        0 => DEFAULT_FORMAT_CODE,
        1 => distinct[0],
        _ => distinct[1],
    }
}

fn write_single_level(
    ctx: &mut ConversionContext<'_>,
    parent: NodeId,
    tag: &str,
    formula: &str,
    points: &[&RangePoint],
) {
    let first_value = points
        .iter()
        .filter_map(|p| p.cells.first())
        .find_map(|cell| cell.value.as_ref());
    let numeric = match first_value {
        Some(value) => value.is_numeric(),
        None => tag != "c:cat",
    };

    if numeric {
        let reference = ctx.doc.create_child_node(parent, "c:numRef");
        let f = ctx.doc.create_child_node(reference, "c:f");
        ctx.doc.set_text(f, formula);
        let cache = ctx.doc.create_child_node(reference, "c:numCache");

        let numeric_points: Vec<(u32, &Cell)> = points
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| p.cells.first().map(|cell| (idx as u32, cell)))
            .filter(|(_, cell)| cell.value.as_ref().is_some_and(CellValue::is_numeric))
            .collect();
        let codes: Vec<&str> = numeric_points
            .iter()
            .map(|(_, cell)| cell.format_code.as_deref().unwrap_or(DEFAULT_FORMAT_CODE))
            .collect();
        let default_code = resolve_format_codes(&codes);

        write_format_code(ctx, cache, default_code);
        write_pt_count(ctx, cache, points.len());
        for ((idx, cell), code) in numeric_points.iter().zip(&codes) {
            if let Some(value) = &cell.value {
                let pt = write_pt(ctx, cache, *idx, value);
                if *code != default_code {
                    ctx.doc.set_attribute(pt, "formatCode", *code);
                }
            }
        }
    } else {
        let reference = ctx.doc.create_child_node(parent, "c:strRef");
        let f = ctx.doc.create_child_node(reference, "c:f");
        ctx.doc.set_text(f, formula);
        let cache = ctx.doc.create_child_node(reference, "c:strCache");
        write_pt_count(ctx, cache, points.len());
        for (idx, point) in points.iter().enumerate() {
            if let Some(value) = point.cells.first().and_then(|c| c.value.as_ref()) {
                write_pt(ctx, cache, idx as u32, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::xml::registry::VisitorRegistry;

    fn names(ctx: &ConversionContext<'_>, node: NodeId) -> Vec<String> {
        ctx.doc
            .children(node)
            .iter()
            .filter_map(|child| ctx.doc.name(*child).map(str::to_string))
            .collect()
    }

    fn pt_values(ctx: &ConversionContext<'_>, cache: NodeId) -> Vec<(String, String)> {
        ctx.doc
            .children(cache)
            .iter()
            .filter(|child| ctx.doc.name(**child) == Some("c:pt"))
            .map(|pt| {
                let v = ctx.doc.get_node(*pt, "c:v").unwrap();
                (
                    ctx.doc.attribute(*pt, "idx").unwrap().to_string(),
                    ctx.doc.text(v),
                )
            })
            .collect()
    }

    #[test]
    fn test_numeric_literal() {
        let registry = VisitorRegistry::new();
        let mut ctx = ConversionContext::new(&registry);
        let ser = ctx.doc.create_node("c:ser");
        let data = SeriesData::Literal {
            values: vec![Cell::number(1.0), Cell::number(2.5), Cell::number(3.0)],
            format_code: None,
        };
        write_series_data(&mut ctx, ser, "c:val", &data);

        let lit = ctx.doc.get_node(ser, "c:val/c:numLit").unwrap();
        assert_eq!(names(&ctx, lit), vec!["c:formatCode", "c:ptCount", "c:pt", "c:pt", "c:pt"]);
        assert_eq!(
            pt_values(&ctx, lit),
            vec![
                ("0".to_string(), "1".to_string()),
                ("1".to_string(), "2.5".to_string()),
                ("2".to_string(), "3".to_string())
            ]
        );
        assert!(ctx.doc.get_node(ser, "c:val/c:numRef").is_none());
    }

    #[test]
    fn test_mixed_literal_is_string() {
        let registry = VisitorRegistry::new();
        let mut ctx = ConversionContext::new(&registry);
        let ser = ctx.doc.create_node("c:ser");
        let data = SeriesData::Literal {
            values: vec![Cell::text("Q1"), Cell::blank(), Cell::number(3.0)],
            format_code: None,
        };
        write_series_data(&mut ctx, ser, "c:cat", &data);
        let lit = ctx.doc.get_node(ser, "c:cat/c:strLit").unwrap();
        let count = ctx.doc.get_node(lit, "c:ptCount").unwrap();
        assert_eq!(ctx.doc.attribute(count, "val"), Some("3"));
        assert_eq!(pt_values(&ctx, lit).len(), 2);
    }

    #[test]
    fn test_pt_count_counts_rendered_points_only() {
        let registry = VisitorRegistry::new();
        let mut ctx = ConversionContext::new(&registry);
        let ser = ctx.doc.create_node("c:ser");
        let mut hidden = RangePoint::single(Cell::number(9.0));
        hidden.hidden = true;
        let data = SeriesData::Reference {
            formula: "Sheet1!$B$2:$B$5".to_string(),
            points: vec![
                RangePoint::single(Cell::number(1.0)),
                hidden,
                RangePoint::single(Cell::blank()),
                RangePoint::single(Cell::number(4.0)),
            ],
        };
        write_series_data(&mut ctx, ser, "c:val", &data);

        let cache = ctx.doc.get_node(ser, "c:val/c:numRef/c:numCache").unwrap();
        let count = ctx.doc.get_node(cache, "c:ptCount").unwrap();
        assert_eq!(ctx.doc.attribute(count, "val"), Some("3"));
        assert_eq!(
            pt_values(&ctx, cache),
            vec![
                ("0".to_string(), "1".to_string()),
                ("2".to_string(), "4".to_string())
            ]
        );
        let format = ctx.doc.get_node(cache, "c:formatCode").unwrap();
        assert_eq!(ctx.doc.text(format), "General");
    }

    #[test]
    fn test_second_distinct_format_code_becomes_default() {
        let registry = VisitorRegistry::new();
        let mut ctx = ConversionContext::new(&registry);
        let ser = ctx.doc.create_node("c:ser");
        let data = SeriesData::Reference {
            formula: "Sheet1!$B$2:$B$4".to_string(),
            points: vec![
                RangePoint::single(Cell::number(1.0).with_format("0.00")),
                RangePoint::single(Cell::number(0.5).with_format("0%")),
                RangePoint::single(Cell::number(2.0).with_format("0.00")),
            ],
        };
        write_series_data(&mut ctx, ser, "c:val", &data);

        let cache = ctx.doc.get_node(ser, "c:val/c:numRef/c:numCache").unwrap();
        let format = ctx.doc.get_node(cache, "c:formatCode").unwrap();
        assert_eq!(ctx.doc.text(format), "0%");
        let pts: Vec<Option<&str>> = ctx
            .doc
            .children(cache)
            .iter()
            .filter(|c| ctx.doc.name(**c) == Some("c:pt"))
            .map(|pt| ctx.doc.attribute(*pt, "formatCode"))
            .collect();
        assert_eq!(pts, vec![Some("0.00"), None, Some("0.00")]);
    }

    #[test]
    fn test_string_reference_by_first_cell() {
        let registry = VisitorRegistry::new();
        let mut ctx = ConversionContext::new(&registry);
        let ser = ctx.doc.create_node("c:ser");
        let data = SeriesData::Reference {
            formula: "Sheet1!$A$2:$A$3".to_string(),
            points: vec![
                RangePoint::single(Cell::text("North")),
                RangePoint::single(Cell::number(2.0)),
            ],
        };
        write_series_data(&mut ctx, ser, "c:cat", &data);
        let cache = ctx.doc.get_node(ser, "c:cat/c:strRef/c:strCache").unwrap();
        assert_eq!(names(&ctx, cache), vec!["c:ptCount", "c:pt", "c:pt"]);
    }

    #[test]
    fn test_multi_level_innermost_first() {
        let registry = VisitorRegistry::new();
        let mut ctx = ConversionContext::new(&registry);
        let ser = ctx.doc.create_node("c:ser");
        let data = SeriesData::Reference {
            formula: "Sheet1!$A$2:$B$4".to_string(),
            points: vec![
                RangePoint::levels(vec![Cell::text("2023"), Cell::text("Q1")]),
                RangePoint::levels(vec![Cell::blank(), Cell::text("Q2")]),
                RangePoint::levels(vec![Cell::text("2024"), Cell::text("Q1")]),
            ],
        };
        write_series_data(&mut ctx, ser, "c:cat", &data);

        let cache = ctx
            .doc
            .get_node(ser, "c:cat/c:multiLvlStrRef/c:multiLvlStrCache")
            .unwrap();
        assert_eq!(names(&ctx, cache), vec!["c:ptCount", "c:lvl", "c:lvl"]);
        let inner = ctx.doc.children(cache)[1];
        let outer = ctx.doc.children(cache)[2];
        assert_eq!(pt_values(&ctx, inner).len(), 3);
        assert_eq!(
            pt_values(&ctx, outer),
            vec![
                ("0".to_string(), "2023".to_string()),
                ("2".to_string(), "2024".to_string())
            ]
        );
    }

    #[test]
    fn test_empty_formula_degrades_to_literal() {
        let registry = VisitorRegistry::new();
        let mut ctx = ConversionContext::new(&registry);
        let ser = ctx.doc.create_node("c:ser");
        let data = SeriesData::Reference {
            formula: String::new(),
            points: vec![RangePoint::single(Cell::number(5.0))],
        };
        write_series_data(&mut ctx, ser, "c:val", &data);
        assert!(ctx.doc.get_node(ser, "c:val/c:numLit").is_some());
        assert_eq!(ctx.warnings().len(), 1);
    }

    #[test]
    fn test_resolve_format_codes() {
        assert_eq!(resolve_format_codes(&[]), "General");
        assert_eq!(resolve_format_codes(&["0.0", "0.0"]), "0.0");
        assert_eq!(resolve_format_codes(&["a", "a", "b", "c"]), "b");
    }
}
