//! `rollbook` - A console attendance tracker
//!
//! This library records student attendance events, keeps them in a plain
//! comma-separated text file, and reports per-student attendance percentages.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod report;
pub mod shell;
pub mod stats;
pub mod storage;
pub mod store;
pub mod system;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{AttendanceRecord, Status};
pub use shell::Shell;
pub use stats::StudentStats;
pub use storage::DataFile;
pub use store::RecordStore;
pub use system::AttendanceSystem;
