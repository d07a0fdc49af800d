//! Rendering of filter results.
//!
//! Three output formats are supported:
//!
//! | Format | Content |
//! |--------|---------|
//! | table | header, topology diagram, capacitor/inductor table |
//! | json | spec fields and component list |
//! | csv | one row per component |
//!
//! [`explain`] returns a narrative description of a filter family.

mod csv;
mod explain;
mod json;
mod text;
mod topology;

pub use self::csv::{render_csv, CSV_HEADER};
pub use explain::explain;
pub use json::render_json;
pub use text::render_text;
pub use topology::render_topology;

use crate::error::Result;
use crate::filter::FilterResult;

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Render `result` in the requested format.
///
/// `raw` only affects the table format; JSON and CSV always carry base SI
/// values.
pub fn render(result: &FilterResult, format: OutputFormat, raw: bool) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_text(result, raw)),
        OutputFormat::Json => render_json(result),
        OutputFormat::Csv => Ok(render_csv(result)),
    }
}
