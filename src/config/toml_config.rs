use crate::domain::model::{Dataset, GroupMap, UsageMap};
use crate::utils::error::Result;
use crate::utils::validation::{validate_hours, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk dataset. Table order in the document becomes map insertion
/// order, which the expand and invert operations treat as contractual.
///
/// ```toml
/// [usage]
/// EndUser1 = 2.25
/// EndUser2 = 4.5
///
/// [groups]
/// Ali = ["Muhammad", "Amir", "Malik"]
/// Devi = ["Ram", "Amaira"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default)]
    pub usage: UsageMap,
    #[serde(default)]
    pub groups: GroupMap,
}

impl DatasetConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: DatasetConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn into_dataset(self) -> Dataset {
        Dataset {
            usage: self.usage,
            groups: self.groups,
        }
    }
}

impl Validate for DatasetConfig {
    fn validate(&self) -> Result<()> {
        for (user, hours) in &self.usage {
            validate_non_empty_string("usage key", user)?;
            validate_hours(&format!("usage.{}", user), *hours)?;
        }

        for (group, members) in &self.groups {
            validate_non_empty_string("group", group)?;
            for member in members {
                validate_non_empty_string(&format!("groups.{}", group), member)?;
            }
        }

        Ok(())
    }
}
