//! Detection of segments that can never be told apart.
//!
//! Two segments are indistinguishable when they are lit in exactly the same
//! way for every glyph of a truth table. Such segments could be merged into
//! one, so the editor highlights all but the first of each group.

use crate::truth_table::TruthTable;

/// Activation pattern of one segment across all labels, in label order.
///
/// `None` marks a row too short to reach the segment. It never equals a real
/// value, only another missing entry for the same label.
pub type PatternKey = Vec<Option<i64>>;

/// Segments sharing one activation pattern. Always at least two members, in
/// increasing index order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentGroup(Vec<usize>);

impl SegmentGroup {
    pub fn members(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for groups returned by [`find_exact_groups`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowest segment index in the group.
    pub fn representative(&self) -> usize {
        self.0[0]
    }

    /// Members other than the representative.
    pub fn redundant(&self) -> &[usize] {
        &self.0[1..]
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl From<SegmentGroup> for Vec<usize> {
    fn from(group: SegmentGroup) -> Self {
        group.0
    }
}

/// Pattern key of every segment, indexed by segment.
///
/// The segment count is the length of the first row. Extra entries in longer
/// rows are ignored.
pub fn pattern_keys(table: &TruthTable) -> Vec<PatternKey> {
    let m = table.segment_count();
    (0..m)
        .map(|s| table.rows().map(|(_, row)| row.get(s).copied()).collect())
        .collect()
}

/// Partition segments into groups with identical activation patterns.
///
/// Only groups with two or more members are returned, ordered by their lowest
/// member. An empty table, or one whose first row is empty, yields no groups.
pub fn find_exact_groups(table: &TruthTable) -> Vec<SegmentGroup> {
    if table.is_empty() {
        return Vec::new();
    }
    if !table.is_rectangular() {
        log::warn!(
            "Truth table rows differ in length; grouping over the first {} segments",
            table.segment_count()
        );
    }

    let keys = pattern_keys(table);
    let mut assigned = vec![false; keys.len()];
    let mut groups = Vec::new();

    for i in 0..keys.len() {
        if assigned[i] {
            continue;
        }
        let mut members = vec![i];
        for j in (i + 1)..keys.len() {
            if !assigned[j] && keys[i] == keys[j] {
                members.push(j);
                assigned[j] = true;
            }
        }
        if members.len() > 1 {
            groups.push(SegmentGroup(members));
        }
    }

    log::debug!(
        "Found {} group(s) of identical segments among {}",
        groups.len(),
        keys.len()
    );
    groups
}

/// Every segment that duplicates a lower-indexed one, sorted.
pub fn redundant_segments(table: &TruthTable) -> Vec<usize> {
    let mut redundant: Vec<usize> = find_exact_groups(table)
        .iter()
        .flat_map(|g| g.redundant().iter().copied())
        .collect();
    redundant.sort_unstable();
    redundant
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups_of(table: &TruthTable) -> Vec<Vec<usize>> {
        find_exact_groups(table)
            .into_iter()
            .map(SegmentGroup::into_vec)
            .collect()
    }

    #[test]
    fn test_empty_table() {
        assert!(find_exact_groups(&TruthTable::new()).is_empty());
        assert!(pattern_keys(&TruthTable::new()).is_empty());
    }

    #[test]
    fn test_empty_first_row() {
        let table = TruthTable::new()
            .with_row("A", vec![])
            .with_row("B", vec![1, 1]);
        assert!(find_exact_groups(&table).is_empty());
    }

    #[test]
    fn test_all_distinct() {
        let table = TruthTable::new()
            .with_row("A", vec![0, 1, 1, 0])
            .with_row("B", vec![1, 1, 0, 0]);
        assert!(find_exact_groups(&table).is_empty());
    }

    #[test]
    fn test_single_pair() {
        let table = TruthTable::new()
            .with_row("A", vec![0, 0, 1])
            .with_row("B", vec![0, 0, 1]);
        assert_eq!(groups_of(&table), vec![vec![0, 1]]);
    }

    #[test]
    fn test_group_order_and_members() {
        let table = TruthTable::new()
            .with_row("A", vec![1, 0, 1, 0, 1, 2])
            .with_row("B", vec![0, 1, 0, 1, 0, 2]);
        assert_eq!(groups_of(&table), vec![vec![0, 2, 4], vec![1, 3]]);
    }

    #[test]
    fn test_non_binary_values() {
        let table = TruthTable::new()
            .with_row("A", vec![2, 2, 1, 7])
            .with_row("B", vec![-3, -3, -3, 7]);
        assert_eq!(groups_of(&table), vec![vec![0, 1]]);
    }

    #[test]
    fn test_label_order_does_not_change_groups() {
        let a = TruthTable::new()
            .with_row("A", vec![1, 1, 0])
            .with_row("B", vec![0, 0, 1]);
        let b = TruthTable::new()
            .with_row("B", vec![0, 0, 1])
            .with_row("A", vec![1, 1, 0]);
        assert_eq!(find_exact_groups(&a), find_exact_groups(&b));
    }

    #[test]
    fn test_short_rows_use_missing_sentinel() {
        // Row B stops after segment 1; segments 2 and 3 are both missing there.
        let table = TruthTable::new()
            .with_row("A", vec![0, 0, 1, 1])
            .with_row("B", vec![1, 1]);
        assert_eq!(groups_of(&table), vec![vec![0, 1], vec![2, 3]]);

        // A missing entry never matches a real value.
        let table = TruthTable::new()
            .with_row("A", vec![1, 1])
            .with_row("B", vec![0]);
        assert!(find_exact_groups(&table).is_empty());
        assert_eq!(
            pattern_keys(&table),
            vec![vec![Some(1), Some(0)], vec![Some(1), None]]
        );
    }

    #[test]
    fn test_longer_rows_truncated() {
        let table = TruthTable::new()
            .with_row("A", vec![1, 1])
            .with_row("B", vec![0, 0, 5, 5]);
        assert_eq!(groups_of(&table), vec![vec![0, 1]]);
    }

    #[test]
    fn test_idempotent_and_input_untouched() {
        let table = TruthTable::new()
            .with_row("A", vec![1, 1, 0])
            .with_row("B", vec![1, 1, 0]);
        let before = table.clone();
        let first = find_exact_groups(&table);
        let second = find_exact_groups(&table);
        assert_eq!(first, second);
        assert_eq!(table, before);
    }

    #[test]
    fn test_group_accessors() {
        let table = TruthTable::new().with_row("A", vec![3, 1, 3, 3]);
        let groups = find_exact_groups(&table);
        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.representative(), 0);
        assert_eq!(group.redundant(), &[2, 3]);
        assert_eq!(group.len(), 3);
        assert!(!group.is_empty());
    }

    #[test]
    fn test_redundant_segments() {
        let table = TruthTable::new()
            .with_row("A", vec![1, 0, 1, 0, 1])
            .with_row("B", vec![0, 1, 0, 1, 0]);
        assert_eq!(redundant_segments(&table), vec![2, 3, 4]);
    }

    #[test]
    fn test_seven_segment_digits_are_distinct() {
        let table = TruthTable::new()
            .with_row("0", vec![1, 1, 1, 1, 1, 1, 0])
            .with_row("1", vec![0, 1, 1, 0, 0, 0, 0])
            .with_row("2", vec![1, 1, 0, 1, 1, 0, 1])
            .with_row("3", vec![1, 1, 1, 1, 0, 0, 1])
            .with_row("4", vec![0, 1, 1, 0, 0, 1, 1])
            .with_row("5", vec![1, 0, 1, 1, 0, 1, 1])
            .with_row("6", vec![1, 0, 1, 1, 1, 1, 1])
            .with_row("7", vec![1, 1, 1, 0, 0, 0, 0])
            .with_row("8", vec![1, 1, 1, 1, 1, 1, 1])
            .with_row("9", vec![1, 1, 1, 1, 0, 1, 1]);
        assert!(find_exact_groups(&table).is_empty());
    }
}
