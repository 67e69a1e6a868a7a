use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier -> elapsed hours. Fractional part is minutes/60
/// (1 hour 30 minutes = 1.5).
pub type UsageMap = IndexMap<String, f64>;

/// Group label -> ordered member list. Members may repeat, both within
/// one group and across groups; duplicates are meaningful and kept.
pub type GroupMap = IndexMap<String, Vec<String>>;

/// Member label -> ordered list of the groups that reference it.
/// Produced by inversion of a [`GroupMap`].
pub type MemberIndex = IndexMap<String, Vec<String>>;

/// One in-memory dataset: the inputs every report operation reads from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub usage: UsageMap,
    #[serde(default)]
    pub groups: GroupMap,
}

/// Output of a report run. Each field is present iff the matching
/// operation was requested.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverted: Option<MemberIndex>,
}
