pub mod aggregate;
pub mod engine;
pub mod expand;
pub mod invert;

pub use aggregate::total_hours;
pub use expand::full_labels;
pub use invert::invert_groups;

pub use crate::domain::model::{Dataset, GroupMap, MemberIndex, Report, UsageMap};
pub use crate::utils::error::Result;
