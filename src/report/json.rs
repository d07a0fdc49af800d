//! JSON report.

use serde::Serialize;

use crate::error::Result;
use crate::filter::{ComponentKind, FilterFamily, FilterResult};

#[derive(Debug, Serialize)]
struct JsonReport {
    filter_type: FilterFamily,
    cutoff_hz: f64,
    impedance_ohms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    ripple_db: Option<f64>,
    order: usize,
    components: Vec<JsonComponent>,
}

#[derive(Debug, Serialize)]
struct JsonComponent {
    designator: String,
    index: usize,
    kind: ComponentKind,
    value: f64,
    unit: &'static str,
}

/// Render the result as pretty-printed JSON.
pub fn render_json(result: &FilterResult) -> Result<String> {
    let spec = &result.spec;
    let report = JsonReport {
        filter_type: spec.family,
        cutoff_hz: spec.cutoff_hz,
        impedance_ohms: spec.impedance_ohms,
        ripple_db: spec.effective_ripple(),
        order: spec.order,
        components: result
            .components
            .iter()
            .map(|c| JsonComponent {
                designator: c.designator(),
                index: c.index,
                kind: c.kind,
                value: c.value,
                unit: c.kind.unit(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
