//! CLI presentation: tables for replay results.

use super::replay::{ReplayFailure, ReplayStats};
use crate::model::ObjectModel;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

/// Projections summary of a replayed model.
pub fn format_summary(model: &ObjectModel, stats: &ReplayStats) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Property", "Value"]);

    let status = serde_json::to_value(model.state.status)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{:?}", model.state.status));
    let current_tool = match model.current_tool() {
        Some(tool) if tool.name.is_empty() => format!("T{}", tool.number),
        Some(tool) => format!("T{} ({})", tool.number, tool.name),
        None => "-".to_string(),
    };
    let max_heater = model
        .max_heater_temperature()
        .map(|max| format!("{:.1}", max))
        .unwrap_or_else(|| "-".to_string());

    table.add_row(vec!["Status".to_string(), status]);
    table.add_row(vec!["Current tool".to_string(), current_tool]);
    table.add_row(vec![
        "Fraction printed".to_string(),
        format!("{:.1}%", model.fraction_printed() * 100.0),
    ]);
    table.add_row(vec![
        "Job progress".to_string(),
        format!("{:.1}%", model.job_progress() * 100.0),
    ]);
    table.add_row(vec!["Max heater temperature".to_string(), max_heater]);
    table.add_row(vec![
        "Kinematics".to_string(),
        model.motion.kinematics.name().to_string(),
    ]);
    table.add_row(vec!["Axes".to_string(), model.motion.axes.len().to_string()]);
    table.add_row(vec!["Heaters".to_string(), model.heat.heaters.len().to_string()]);
    table.add_row(vec!["Tools".to_string(), model.tools.len().to_string()]);
    table.add_row(vec!["Plugins".to_string(), model.plugins.len().to_string()]);
    table.add_row(vec![
        "Deltas applied".to_string(),
        stats.applied.to_string(),
    ]);
    table.add_row(vec!["Warnings".to_string(), stats.warnings.to_string()]);
    table.add_row(vec![
        "Failures".to_string(),
        stats.failures.len().to_string(),
    ]);

    let mut out = table.to_string();
    if !stats.failures.is_empty() {
        out.push('\n');
        out.push_str(&format_failures(&stats.failures));
    }
    out
}

/// One row per failed delta line.
pub fn format_failures(failures: &[ReplayFailure]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Line", "Error"]);
    for failure in failures {
        table.add_row(vec![failure.line.to_string(), failure.error.to_string()]);
    }
    table.to_string()
}
