//! Decoding of the agent's `/monitor/statistics.json` document

use crate::error::Result;
use serde::{Deserialize, Deserializer};

/// One polled executor as reported by the agent
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InstanceRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub executor_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub statistics: Statistics,
}

/// Treat an explicit `null` like a missing member
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Resource statistics of a single executor.
///
/// The agent omits counters it does not track for a given container, so every
/// field is optional. A value that is present but not a number fails decoding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub mem_unevictable_bytes: Option<f64>,
    pub mem_total_memsw_bytes: Option<f64>,
    pub mem_critical_pressure_counter: Option<f64>,
    pub mem_cache_bytes: Option<f64>,
    pub mem_anon_bytes: Option<f64>,
    pub disk_used_bytes: Option<f64>,
    pub disk_limit_bytes: Option<f64>,
    pub cpus_user_time_secs: Option<f64>,
    pub cpus_system_time_secs: Option<f64>,
    pub cpus_limit: Option<f64>,
    pub mem_file_bytes: Option<f64>,
    pub mem_limit_bytes: Option<f64>,
    pub mem_low_pressure_counter: Option<f64>,
    pub mem_mapped_file_bytes: Option<f64>,
    pub mem_medium_pressure_counter: Option<f64>,
    pub mem_rss_bytes: Option<f64>,
    pub mem_swap_bytes: Option<f64>,
    pub mem_total_bytes: Option<f64>,
}

impl Statistics {
    /// Recognized metrics paired with their (possibly absent) values
    pub fn fields(&self) -> [(&'static str, Option<f64>); 18] {
        [
            ("mem_unevictable_bytes", self.mem_unevictable_bytes),
            ("mem_total_memsw_bytes", self.mem_total_memsw_bytes),
            (
                "mem_critical_pressure_counter",
                self.mem_critical_pressure_counter,
            ),
            ("mem_cache_bytes", self.mem_cache_bytes),
            ("mem_anon_bytes", self.mem_anon_bytes),
            ("disk_used_bytes", self.disk_used_bytes),
            ("disk_limit_bytes", self.disk_limit_bytes),
            ("cpus_user_time_secs", self.cpus_user_time_secs),
            ("cpus_system_time_secs", self.cpus_system_time_secs),
            ("cpus_limit", self.cpus_limit),
            ("mem_file_bytes", self.mem_file_bytes),
            ("mem_limit_bytes", self.mem_limit_bytes),
            ("mem_low_pressure_counter", self.mem_low_pressure_counter),
            ("mem_mapped_file_bytes", self.mem_mapped_file_bytes),
            (
                "mem_medium_pressure_counter",
                self.mem_medium_pressure_counter,
            ),
            ("mem_rss_bytes", self.mem_rss_bytes),
            ("mem_swap_bytes", self.mem_swap_bytes),
            ("mem_total_bytes", self.mem_total_bytes),
        ]
    }
}

/// Parse the raw statistics document into per-instance records
pub fn decode(raw: &str) -> Result<Vec<InstanceRecord>> {
    let records: Vec<InstanceRecord> = serde_json::from_str(raw)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_integer_and_float_values() {
        let raw = r#"[{
            "executor_id": "web.00000000-0000-0000-0000-000000000000",
            "framework_id": "ignored",
            "statistics": {"mem_rss_bytes": 1024, "cpus_limit": 0.5, "timestamp": 1.5e9}
        }]"#;

        let records = decode(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].statistics.mem_rss_bytes, Some(1024.0));
        assert_eq!(records[0].statistics.cpus_limit, Some(0.5));
        assert_eq!(records[0].statistics.mem_limit_bytes, None);
    }

    #[test]
    fn test_decode_null_is_absent() {
        let raw = r#"[{"executor_id": "x", "statistics": {"disk_used_bytes": null}}]"#;
        let records = decode(raw).unwrap();
        assert_eq!(records[0].statistics, Statistics::default());
    }

    #[test]
    fn test_decode_missing_members_default() {
        let records = decode(r#"[{}]"#).unwrap();
        assert_eq!(records[0], InstanceRecord::default());
    }

    #[test]
    fn test_decode_null_members_default() {
        let raw = r#"[
            {"executor_id": "web.00000000-0000-0000-0000-000000000000", "statistics": null},
            {"executor_id": null, "statistics": {"cpus_limit": 1}}
        ]"#;

        let records = decode(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].statistics, Statistics::default());
        assert_eq!(records[1].executor_id, "");
        assert_eq!(records[1].statistics.cpus_limit, Some(1.0));
    }

    #[test]
    fn test_decode_rejects_non_numeric_metric() {
        let raw = r#"[{"executor_id": "x", "statistics": {"mem_rss_bytes": "lots"}}]"#;
        let err = decode(raw).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(decode(r#"{"executor_id": "x"}"#).unwrap_err().is_parse());
        assert!(decode("not json").unwrap_err().is_parse());
        assert!(decode("").unwrap_err().is_parse());
    }

    #[test]
    fn test_fields_cover_every_metric() {
        let stats = Statistics {
            cpus_limit: Some(2.0),
            ..Default::default()
        };
        let fields = stats.fields();
        let present: Vec<_> = fields.iter().filter(|(_, v)| v.is_some()).collect();
        assert_eq!(present, vec![&("cpus_limit", Some(2.0))]);

        let mut names: Vec<_> = fields.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 18);
    }
}
