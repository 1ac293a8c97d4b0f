//! Per-task averaging and derived utilization fields

use super::group::{MetricMap, TaskGroups};
use std::collections::BTreeMap;

/// Number of instances that contributed to a task's averages
pub const INSTANCES: &str = "instances";
/// Resident memory as a percentage of the memory limit
pub const MEM_PERC: &str = "mem_perc";
/// Used disk as a percentage of the disk limit
pub const DISK_PERC: &str = "disk_perc";

/// Averaged metrics keyed by task name
pub type TaskMetrics = BTreeMap<String, MetricMap>;

/// Average the samples of one task.
///
/// Every metric is divided by the full instance count, so an instance that
/// did not report a metric counts as zero for it. Metrics nobody reported
/// are left out.
pub fn average(samples: &[MetricMap]) -> MetricMap {
    let count = samples.len() as f64;
    let mut averaged = MetricMap::new();

    for sample in samples {
        for (&name, &value) in sample {
            *averaged.entry(name).or_insert(0.0) += value;
        }
    }
    for value in averaged.values_mut() {
        *value /= count;
    }

    averaged.insert(INSTANCES, count);
    averaged
}

/// `numerator / denominator * 100` when both are present and the denominator is non-zero
fn percentage(metrics: &MetricMap, numerator: &str, denominator: &str) -> Option<f64> {
    let used = metrics.get(numerator)?;
    let limit = metrics.get(denominator)?;
    (*limit != 0.0).then(|| used / limit * 100.0)
}

/// Add `mem_perc` and `disk_perc` where their inputs allow
pub fn derive_percentages(metrics: &mut MetricMap) {
    if let Some(perc) = percentage(metrics, "mem_rss_bytes", "mem_limit_bytes") {
        metrics.insert(MEM_PERC, perc);
    }
    if let Some(perc) = percentage(metrics, "disk_used_bytes", "disk_limit_bytes") {
        metrics.insert(DISK_PERC, perc);
    }
}

/// Reduce every task group to one averaged metric map
pub fn aggregate(groups: &TaskGroups) -> TaskMetrics {
    groups
        .iter()
        .filter(|(_, samples)| !samples.is_empty())
        .map(|(name, samples)| {
            let mut metrics = average(samples);
            derive_percentages(&mut metrics);
            (name.clone(), metrics)
        })
        .collect()
}
