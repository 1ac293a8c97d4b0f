//! Grouping of executor samples by logical task name

use super::decode::InstanceRecord;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::trace;

/// Task name followed by the executor's UUID suffix, e.g. `web.6f1c...-...`.
///
/// Only ASCII tab, newline, form feed, carriage return and space end a name;
/// other Unicode whitespace stays part of it.
static EXECUTOR_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^\t\n\f\r ]+)\.[0-9A-Fa-f-]{36}").expect("Invalid regex pattern")
});

/// Metric name to value, holding only the metrics an instance reported
pub type MetricMap = BTreeMap<&'static str, f64>;

/// Samples of every instance, keyed by task name
pub type TaskGroups = BTreeMap<String, Vec<MetricMap>>;

/// Extract the task name from an executor id.
///
/// Returns `None` when the id carries no `<name>.<uuid>` portion. The match
/// is not anchored, so trailing text after the UUID is allowed.
pub fn task_name(executor_id: &str) -> Option<&str> {
    EXECUTOR_ID_PATTERN
        .captures(executor_id)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Copy the reported metrics of one instance; absent ones stay absent
pub fn flatten(record: &InstanceRecord) -> MetricMap {
    record
        .statistics
        .fields()
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
}

/// Group instances by task name, silently skipping unrecognized executor ids
pub fn group(records: &[InstanceRecord]) -> TaskGroups {
    let mut groups = TaskGroups::new();

    for record in records {
        let Some(name) = task_name(&record.executor_id) else {
            trace!("Skipping executor without task suffix: {}", record.executor_id);
            continue;
        };

        groups
            .entry(name.to_string())
            .or_default()
            .push(flatten(record));
    }

    groups
}
