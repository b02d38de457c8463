//! Grouping of exhibitions for the chart views.
//!
//! Both functions are pure and total: any slice of records, including an
//! empty one, yields a (possibly empty) list of counts.

use super::record::Exhibition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of records sharing one grouping key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub label: String,
    pub count: usize,
}

impl GroupCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }

    /// Fraction of `total` this group represents (0.0 when `total` is zero)
    pub fn share(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64
        }
    }
}

/// Count records per distinct key, in first-encountered key order.
///
/// Keys are taken literally; an empty string is a key like any other.
fn count_by<'a, F>(records: &'a [Exhibition], key: F) -> Vec<GroupCount>
where
    F: Fn(&'a Exhibition) -> &'a str,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<GroupCount> = Vec::new();

    for record in records {
        let label = key(record);
        match positions.get(label) {
            Some(&index) => groups[index].count += 1,
            None => {
                positions.insert(label, groups.len());
                groups.push(GroupCount::new(label, 1));
            }
        }
    }

    groups
}

/// Exhibitions per province, most frequent first.
///
/// Ties keep the order in which the provinces first appear.
pub fn group_by_province(records: &[Exhibition]) -> Vec<GroupCount> {
    let mut groups = count_by(records, |record| record.province.as_str());
    // sort_by is stable, which gives the first-encountered tie-break
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

/// Exhibitions per invitation type, in first-encountered order
pub fn group_by_invitation_type(records: &[Exhibition]) -> Vec<GroupCount> {
    count_by(records, |record| record.invitation_type.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhibition::record::InvitationType;
    use crate::exhibition::record::fixtures::exhibition;

    fn as_pairs(groups: &[GroupCount]) -> Vec<(&str, usize)> {
        groups.iter().map(|g| (g.label.as_str(), g.count)).collect()
    }

    #[test]
    fn test_single_province_counts_all() {
        let records: Vec<_> = (0..7)
            .map(|i| exhibition(&format!("expo-{}", i), "Zhejiang", InvitationType::Free))
            .collect();
        assert_eq!(as_pairs(&group_by_province(&records)), vec![("Zhejiang", 7)]);
    }

    #[test]
    fn test_province_sorted_by_count_with_stable_ties() {
        let records = vec![
            exhibition("1", "Fujian", InvitationType::Free),
            exhibition("2", "Guangdong", InvitationType::Free),
            exhibition("3", "Jiangsu", InvitationType::Paid),
            exhibition("4", "Guangdong", InvitationType::Free),
            exhibition("5", "Jiangsu", InvitationType::Free),
            exhibition("6", "Sichuan", InvitationType::Paid),
        ];
        assert_eq!(
            as_pairs(&group_by_province(&records)),
            vec![("Guangdong", 2), ("Jiangsu", 2), ("Fujian", 1), ("Sichuan", 1)]
        );
    }

    #[test]
    fn test_province_counts_invariant_under_permutation() {
        let records = vec![
            exhibition("1", "Shanghai", InvitationType::Free),
            exhibition("2", "Beijing", InvitationType::Free),
            exhibition("3", "Shanghai", InvitationType::Paid),
            exhibition("4", "Hubei", InvitationType::Free),
            exhibition("5", "Shanghai", InvitationType::Free),
            exhibition("6", "Beijing", InvitationType::Paid),
        ];
        let mut reversed = records.clone();
        reversed.reverse();

        let forward = group_by_province(&records);
        let backward = group_by_province(&reversed);

        let to_map = |groups: &[GroupCount]| -> HashMap<String, usize> {
            groups.iter().map(|g| (g.label.clone(), g.count)).collect()
        };
        assert_eq!(to_map(&forward), to_map(&backward));

        // Counts are distinct here, so the order is fully determined too
        assert_eq!(forward, backward);
        assert_eq!(forward[0], GroupCount::new("Shanghai", 3));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(group_by_province(&[]).is_empty());
        assert!(group_by_invitation_type(&[]).is_empty());
    }

    #[test]
    fn test_invitation_first_encountered_order() {
        let records = vec![
            exhibition("1", "Guangdong", InvitationType::Paid),
            exhibition("2", "Guangdong", InvitationType::Free),
            exhibition("3", "Guangdong", InvitationType::Free),
            exhibition("4", "Guangdong", InvitationType::Free),
        ];
        // Not sorted by count: Paid was seen first
        assert_eq!(
            as_pairs(&group_by_invitation_type(&records)),
            vec![("Paid", 1), ("Free", 3)]
        );
    }

    #[test]
    fn test_empty_province_counted_literally() {
        let records = vec![
            exhibition("1", "", InvitationType::Free),
            exhibition("2", "", InvitationType::Free),
            exhibition("3", "Hainan", InvitationType::Free),
        ];
        assert_eq!(
            as_pairs(&group_by_province(&records)),
            vec![("", 2), ("Hainan", 1)]
        );
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let records = vec![
            exhibition("1", "Yunnan", InvitationType::Free),
            exhibition("2", "Tibet", InvitationType::Paid),
        ];
        assert_eq!(group_by_province(&records), group_by_province(&records));
        assert_eq!(
            group_by_invitation_type(&records),
            group_by_invitation_type(&records)
        );
    }

    #[test]
    fn test_share() {
        let group = GroupCount::new("Free", 2);
        assert!((group.share(3) - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(group.share(0), 0.0);
    }
}
