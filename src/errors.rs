use thiserror::Error;

use crate::converters::xml::ConversionError;

/// Represents errors that can occur when exporting a chart model to markup.
#[derive(Error, Debug)]
pub enum ChartExportError {
    /// Error occurred during the deserialization of the chart model or options JSON.
    #[error("Failed to deserialize JSON input: {0}")]
    JsonDeserialization(#[from] serde_json::Error),

    /// The markup could not be serialized.
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    /// An error indicating invalid input was provided to an export function.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A type alias for `Result<T, ChartExportError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, ChartExportError>;
