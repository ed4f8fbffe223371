//! The chart object model consumed by the converters.
//!
//! Every property that can be inherited from a style or theme is a
//! [`Property`](property::Property), which records whether the user set it. All types
//! deserialize from camelCase JSON.

pub mod axis;
pub mod chart_space;
pub mod chart_type;
pub mod colors;
pub mod data_labels;
pub mod layout;
pub mod property;
pub mod series;
pub mod shape_properties;
pub mod text;

pub use axis::{Axis, AxisKind};
pub use chart_space::{ChartSpace, Legend, PlotArea};
pub use chart_type::{ChartType, ChartTypeKind};
pub use property::{Property, PropertyInfo, PropertySource};
pub use series::{Series, SeriesData};
