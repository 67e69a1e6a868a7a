use crate::domain::model::{GroupMap, MemberIndex};

/// Inverts a group -> members map into member -> groups.
///
/// Iterates groups in map order and members in list order, appending
/// the current group to each member's entry. Multiplicity is preserved:
/// a member listed twice under one group gets that group twice. Output
/// keys appear in first-encounter order.
pub fn invert_groups(groups: &GroupMap) -> MemberIndex {
    let mut index = MemberIndex::new();
    for (group, members) in groups {
        for member in members {
            index
                .entry(member.clone())
                .or_insert_with(Vec::new)
                .push(group.clone());
        }
    }
    index
}
