pub mod converters;
pub mod errors;
pub mod models;

pub use converters::xml::{convert, ChartXml, ConversionWarning, ConvertOptions};
pub use errors::{ChartExportError, Result};
pub use models::chart_space::ChartSpace;

use log::debug;
use wasm_bindgen::prelude::*;

/// Converts a chart model given as JSON, with optional JSON options.
pub fn convert_json(model_json: &str, options_json: Option<&str>) -> Result<ChartXml> {
    if model_json.trim().is_empty() {
        return Err(ChartExportError::InvalidInput(
            "chart model JSON is empty".to_string(),
        ));
    }
    let chart_space: ChartSpace = serde_json::from_str(model_json)?;
    let options = match options_json {
        Some(json) if !json.trim().is_empty() => serde_json::from_str(json)?,
        _ => ConvertOptions::default(),
    };
    debug!(
        "Converting chart with {} chart type groups",
        chart_space.plot_area.chart_types.len()
    );
    Ok(convert(&chart_space, &options)?)
}

/// Converts a chart model JSON string to chart markup. Warnings are logged to the
/// console; errors are thrown as strings.
#[wasm_bindgen(js_name = convertChart)]
pub fn convert_chart(model_json: &str, options_json: Option<String>) -> std::result::Result<String, JsValue> {
    convert_json(model_json, options_json.as_deref())
        .map(|result| result.xml)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Routes `log` output to the browser console.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second call finds the logger already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_json() {
        let model = r#"{
            "plotArea": {
                "chartTypes": [{ "type": "column", "series": [] }]
            }
        }"#;
        let result = convert_json(model, Some(r#"{ "header": false }"#)).unwrap();
        assert!(result.xml.starts_with("<c:chartSpace"));
        assert!(result.xml.contains("<c:barDir val=\"col\"/>"));
    }

    #[test]
    fn test_convert_json_rejects_bad_input() {
        assert!(matches!(
            convert_json("  ", None),
            Err(ChartExportError::InvalidInput(_))
        ));
        assert!(matches!(
            convert_json("{ not json", None),
            Err(ChartExportError::JsonDeserialization(_))
        ));
    }
}
