//! # mesos-tasks
//!
//! A telegraf `exec` input that reads a Mesos agent's
//! `/monitor/statistics.json`, averages the resource counters of all
//! executors belonging to the same task and prints one line protocol record
//! per task.
//!
//! ## Usage
//!
//! ```bash
//! mesos-tasks [http://localhost:5051] [-t 10] [--input statistics.json]
//! ```
//!
//! ## Modules
//!
//! - `agent` - Statistics sources: the live agent over HTTP or a saved document
//! - `cli` - Argument parsing and the per-invocation collection run
//! - `config` - Agent URL and timeout settings
//! - `error` - Crate error type
//! - `pipeline` - Decode, group, average and render task statistics
pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;

pub use error::{Error, Result};
