use std::env;
use std::fs;

use anyhow::{bail, Context};
use chartml_export::{convert, ChartSpace, ConvertOptions};

/// Usage: convert_chart <model.json> [--options <options.json>]
///
/// Prints the chart markup to stdout and conversion warnings to stderr.
fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG; defaults to info.
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = env::args().skip(1);
    let mut model_path = None;
    let mut options_path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--options" => options_path = Some(args.next().context("--options needs a path")?),
            _ if model_path.is_none() => model_path = Some(arg),
            _ => bail!("unexpected argument '{}'", arg),
        }
    }
    let model_path = model_path.unwrap_or_else(|| "demos/sample_chart.json".to_string());

    log::info!("Loading chart model from {}", model_path);
    let json = fs::read_to_string(&model_path)
        .with_context(|| format!("failed to read {}", model_path))?;
    let chart_space: ChartSpace =
        serde_json::from_str(&json).context("failed to deserialize chart model JSON")?;

    let options = match options_path {
        Some(path) => {
            let json = fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))?;
            serde_json::from_str(&json).context("failed to deserialize options JSON")?
        }
        None => ConvertOptions {
            prettify: chartml_export::converters::xml::Prettify::Enabled(true),
            ..ConvertOptions::default()
        },
    };

    let result = convert(&chart_space, &options)?;
    for warning in &result.warnings {
        eprintln!("warning: {}", warning);
    }
    println!("{}", result.xml);
    log::info!(
        "Wrote {} bytes with {} warnings",
        result.xml.len(),
        result.warning_count()
    );
    Ok(())
}
