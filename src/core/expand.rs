use crate::domain::model::GroupMap;

/// Flattens a group -> members map into `"{member} {group}"` labels.
///
/// Ordering is part of the contract: groups in map iteration order,
/// members in list order. A group with an empty member list contributes
/// nothing.
pub fn full_labels(groups: &GroupMap) -> Vec<String> {
    let mut labels = Vec::with_capacity(groups.values().map(Vec::len).sum());
    for (group, members) in groups {
        for member in members {
            labels.push(format!("{} {}", member, group));
        }
    }
    labels
}
