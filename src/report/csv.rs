//! CSV report, one row per component.

use std::fmt::Write;

use crate::filter::{ComponentKind, FilterResult};

pub const CSV_HEADER: &str = "designator,index,kind,value,unit";

/// Render the components as CSV with a header row.
pub fn render_csv(result: &FilterResult) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for c in &result.components {
        let kind = match c.kind {
            ComponentKind::Capacitor => "capacitor",
            ComponentKind::Inductor => "inductor",
        };
        let _ = writeln!(
            out,
            "{},{},{},{:e},{}",
            c.designator(),
            c.index,
            kind,
            c.value,
            c.kind.unit()
        );
    }
    out
}
