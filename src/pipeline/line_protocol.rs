//! Influx line protocol rendering for telegraf

use super::aggregate::TaskMetrics;
use super::group::MetricMap;

/// Measurement name of every emitted line
pub const MEASUREMENT: &str = "mesos_tasks";

/// Render one task as `mesos_tasks,task_name=<name> <k>=<v>,...`.
///
/// Values carry three fractional digits. The task name is written verbatim;
/// names containing commas, spaces or `=` yield malformed lines.
pub fn format_line(task_name: &str, metrics: &MetricMap) -> String {
    let fields = metrics
        .iter()
        .map(|(name, value)| format!("{name}={value:.3}"))
        .collect::<Vec<_>>()
        .join(",");

    format!("{MEASUREMENT},task_name={task_name} {fields}")
}

/// Render all tasks, one line each, joined by newlines
pub fn serialize(metrics: &TaskMetrics) -> String {
    metrics
        .iter()
        .map(|(task_name, fields)| format_line(task_name, fields))
        .collect::<Vec<_>>()
        .join("\n")
}
