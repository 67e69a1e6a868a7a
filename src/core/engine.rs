use crate::core::{full_labels, invert_groups, total_hours};
use crate::domain::model::{Dataset, Report};
use crate::utils::error::{RelmapError, Result};
use std::fmt;
use std::str::FromStr;

/// One report operation over a [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Sum the usage map's hours, rounded to 2 decimal places.
    TotalHours,
    /// Flatten the group map into "member group" labels.
    FullNames,
    /// Invert the group map into member -> groups.
    InvertGroups,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::TotalHours,
        Operation::FullNames,
        Operation::InvertGroups,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::TotalHours => "total-hours",
            Operation::FullNames => "full-names",
            Operation::InvertGroups => "invert",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = RelmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "total-hours" => Ok(Operation::TotalHours),
            "full-names" => Ok(Operation::FullNames),
            "invert" => Ok(Operation::InvertGroups),
            other => Err(RelmapError::InvalidConfigValueError {
                field: "ops".to_string(),
                value: other.to_string(),
                reason: "Expected one of: total-hours, full-names, invert".to_string(),
            }),
        }
    }
}

/// Runs a selected set of operations against one dataset.
///
/// Every operation is pure and reads only the dataset it was given, so
/// the engine holds no state beyond its inputs and running it twice
/// yields identical reports.
pub struct ReportEngine {
    dataset: Dataset,
    operations: Vec<Operation>,
}

impl ReportEngine {
    pub fn new(dataset: Dataset, operations: Vec<Operation>) -> Self {
        Self {
            dataset,
            operations,
        }
    }

    pub fn run(&self) -> Report {
        let mut report = Report::default();

        for op in &self.operations {
            tracing::debug!("Running operation: {}", op);
            match op {
                Operation::TotalHours => {
                    let total = total_hours(&self.dataset.usage);
                    tracing::info!(
                        "Summed {} usage entries: {} hours",
                        self.dataset.usage.len(),
                        total
                    );
                    report.total_hours = Some(total);
                }
                Operation::FullNames => {
                    let labels = full_labels(&self.dataset.groups);
                    tracing::info!("Expanded {} full labels", labels.len());
                    report.full_names = Some(labels);
                }
                Operation::InvertGroups => {
                    let index = invert_groups(&self.dataset.groups);
                    tracing::info!(
                        "Inverted {} groups into {} members",
                        self.dataset.groups.len(),
                        index.len()
                    );
                    report.inverted = Some(index);
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn sample_dataset() -> Dataset {
        let mut usage = IndexMap::new();
        usage.insert("EndUser1".to_string(), 2.5);
        usage.insert("EndUser2".to_string(), 1.25);
        let mut groups = IndexMap::new();
        groups.insert(
            "Ali".to_string(),
            vec!["Muhammad".to_string(), "Amir".to_string()],
        );
        Dataset { usage, groups }
    }

    #[test]
    fn test_engine_runs_selected_operations_only() {
        let engine = ReportEngine::new(sample_dataset(), vec![Operation::TotalHours]);
        let report = engine.run();
        assert_eq!(report.total_hours, Some(3.75));
        assert!(report.full_names.is_none());
        assert!(report.inverted.is_none());
    }

    #[test]
    fn test_engine_runs_all_operations() {
        let engine = ReportEngine::new(sample_dataset(), Operation::ALL.to_vec());
        let report = engine.run();
        assert_eq!(report.total_hours, Some(3.75));
        assert_eq!(
            report.full_names.as_deref(),
            Some(&["Muhammad Ali".to_string(), "Amir Ali".to_string()][..])
        );
        let inverted = report.inverted.unwrap();
        assert_eq!(inverted["Muhammad"], ["Ali"]);
        assert_eq!(inverted["Amir"], ["Ali"]);
    }

    #[test]
    fn test_engine_is_idempotent() {
        let engine = ReportEngine::new(sample_dataset(), Operation::ALL.to_vec());
        let first = engine.run();
        let second = engine.run();
        assert_eq!(first.total_hours, second.total_hours);
        assert_eq!(first.full_names, second.full_names);
        assert_eq!(first.inverted, second.inverted);
    }

    #[test]
    fn test_operation_parses_from_name() {
        assert_eq!(
            "total-hours".parse::<Operation>().unwrap(),
            Operation::TotalHours
        );
        assert_eq!(
            "full-names".parse::<Operation>().unwrap(),
            Operation::FullNames
        );
        assert_eq!("invert".parse::<Operation>().unwrap(), Operation::InvertGroups);
        assert!("pig-latin".parse::<Operation>().is_err());
    }
}
