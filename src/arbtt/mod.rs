pub mod command;
pub mod runner;
pub mod rules;
pub mod samples;
pub mod stats;

pub use command::{build_dump_command, build_stats_command};
pub use runner::{run_capture, RunError};
pub use samples::{events_from_dump, parse_sample_events};
pub use stats::parse_summary_csv;
