use thiserror::Error;

use super::registry::Kind;

/// Errors that can occur while writing the finished chart document.
///
/// Problems with the chart model itself never surface here; they are recorded as
/// [`ConversionWarning`]s and the conversion carries on.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("I/O error while writing markup: {0}")]
    Io(#[from] std::io::Error),
    #[error("XML writer error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Generated markup is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// A specialized Result type for chart conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Fidelity loss recorded during a conversion. None of these abort the conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionWarning {
    #[error("No visitor registered for kind '{0}'")]
    UnresolvedVisitor(Kind),
    #[error("Visitor for '{expected}' was handed a '{actual}' object")]
    ModelMismatch { expected: Kind, actual: Kind },
    #[error("Malformed chart model: {0}")]
    MalformedInput(String),
    #[error("Feature is not supported by the chart writer: {0}")]
    Unsupported(String),
    #[error("Axis id window exhausted, allocation wrapped to {0}")]
    AxisIdsWrapped(u32),
    #[error("Nesting deeper than {0} levels, subtree skipped")]
    DepthExceeded(usize),
}
