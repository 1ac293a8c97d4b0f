//! Statistics transformation pipeline
//!
//! Turns the agent's per-executor statistics into one averaged line protocol
//! record per task:
//!
//! - `decode` - parse the raw JSON document into instance records
//! - `group` - bucket instances by task name taken from the executor id
//! - `aggregate` - average each bucket and derive `mem_perc` / `disk_perc`
//! - `line_protocol` - render the averages for telegraf
//!
//! Only decoding can fail. Executors without a task suffix, missing counters
//! and zero limits are skipped rather than reported.

pub mod aggregate;
pub mod decode;
pub mod group;
pub mod line_protocol;

pub use aggregate::{aggregate, TaskMetrics, DISK_PERC, INSTANCES, MEM_PERC};
pub use decode::{decode, InstanceRecord, Statistics};
pub use group::{group, task_name, MetricMap, TaskGroups};
pub use line_protocol::{serialize, MEASUREMENT};

use crate::error::Result;
use tracing::debug;

/// Run the whole pipeline over a raw statistics document
pub fn render(raw: &str) -> Result<String> {
    let records = decode(raw)?;
    let groups = group(&records);
    debug!(
        "Grouped {} of {} executors into {} tasks",
        groups.values().map(Vec::len).sum::<usize>(),
        records.len(),
        groups.len()
    );

    Ok(serialize(&aggregate(&groups)))
}
