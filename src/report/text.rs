//! Human-readable report: header, topology diagram and value table.

use std::fmt::Write;

use crate::filter::{Component, ComponentKind, FilterResult};
use crate::units::{format_capacitance, format_frequency, format_inductance, format_significant};

use super::topology::render_topology;

const RULE_WIDTH: usize = 50;
const COLUMN_WIDTH: usize = 24;

/// Render the full text report. `raw` prints values in Farads and Henries.
pub fn render_text(result: &FilterResult, raw: bool) -> String {
    let spec = &result.spec;
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out);
    let _ = writeln!(out, "{} Pi Low Pass Filter", spec.family);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Cutoff Frequency:    {}", format_frequency(spec.cutoff_hz));
    let _ = writeln!(out, "Impedance Z0:        {} Ohm", format_significant(spec.impedance_ohms, 4));
    if let Some(ripple) = spec.effective_ripple() {
        let _ = writeln!(out, "Ripple:              {} dB", ripple);
    }
    let _ = writeln!(out, "Order:               {}", spec.order);
    let _ = writeln!(out, "{}", rule);

    let capacitors: Vec<&Component> = result.capacitors().collect();
    let inductors: Vec<&Component> = result.inductors().collect();

    let _ = writeln!(out);
    let _ = writeln!(out, "Topology:");
    let _ = writeln!(out, "{}", render_topology(capacitors.len(), inductors.len()));

    let border = format!("+{}+{}+", "-".repeat(COLUMN_WIDTH), "-".repeat(COLUMN_WIDTH));
    let _ = writeln!(out);
    let _ = writeln!(out, "{:^width$}", "Component Values", width = RULE_WIDTH);
    let _ = writeln!(out, "{}", border);
    let _ = writeln!(
        out,
        "|{:^width$}|{:^width$}|",
        "Capacitors",
        "Inductors",
        width = COLUMN_WIDTH
    );
    let _ = writeln!(out, "{}", border);

    let rows = capacitors.len().max(inductors.len());
    for i in 0..rows {
        let cap = capacitors.get(i).map(|c| cell(c, raw)).unwrap_or_default();
        let ind = inductors.get(i).map(|c| cell(c, raw)).unwrap_or_default();
        let _ = writeln!(
            out,
            "| {:<width$} | {:<width$} |",
            cap,
            ind,
            width = COLUMN_WIDTH - 2
        );
    }
    let _ = writeln!(out, "{}", border);

    out
}

fn cell(component: &Component, raw: bool) -> String {
    if raw {
        return component.to_string();
    }
    let value = match component.kind {
        ComponentKind::Capacitor => format_capacitance(component.value),
        ComponentKind::Inductor => format_inductance(component.value),
    };
    format!("{}: {}", component.designator(), value)
}
