pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::engine::{Operation, ReportEngine};
pub use crate::core::{full_labels, invert_groups, total_hours};
pub use crate::domain::model::{Dataset, GroupMap, MemberIndex, Report, UsageMap};
pub use crate::utils::error::{RelmapError, Result};
