use std::{borrow::Borrow, collections::HashMap, hash::Hash};

/// Sample indices for each distinct group, in first-seen order.
#[derive(Debug, Clone)]
pub struct Partition<K> {
    lookup: HashMap<K, usize>,
    groups: Vec<(K, Vec<usize>)>,
}

/// Splits sample positions by group identifier.
///
/// Makes a single pass over `group_ids`, appending each position to the
/// bucket of its identifier and creating buckets on first sight. Groups keep
/// the order in which their identifiers first appear.
pub fn partition<K>(group_ids: &[K]) -> Partition<K>
where
    K: Hash + Eq + Clone,
{
    let mut lookup: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<usize>)> = Vec::new();

    for (i, key) in group_ids.iter().enumerate() {
        match lookup.get(key) {
            Some(&slot) => groups[slot].1.push(i),
            None => {
                lookup.insert(key.clone(), groups.len());
                groups.push((key.clone(), vec![i]));
            }
        }
    }

    Partition { lookup, groups }
}

impl<K> Partition<K>
where
    K: Hash + Eq,
{
    /// Number of distinct groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the sample indices of a group.
    pub fn get<Q>(&self, key: &Q) -> Option<&[usize]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Iterates over `(key, indices)` in first-seen order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &[usize])> {
        self.groups
            .iter()
            .map(|(key, indices)| (key, indices.as_slice()))
    }

    /// Iterates over the group identifiers in first-seen order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> {
        self.groups.iter().map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use disparity_core::GroupKey;

    #[test]
    fn buckets_indices_in_first_seen_order() {
        let groups = partition(&["b", "a", "b", "c", "a"]);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(groups.get("b"), Some(&[0, 2][..]));
        assert_eq!(groups.get("a"), Some(&[1, 4][..]));
        assert_eq!(groups.get("c"), Some(&[3][..]));
        assert_eq!(groups.get("d"), None);
    }

    #[test]
    fn singleton_groups_are_valid() {
        let groups = partition(&[7, 3]);

        let collected: Vec<_> = groups.iter().collect();
        assert_eq!(collected, [(&7, &[0][..]), (&3, &[1][..])]);
    }

    #[test]
    fn mixed_key_types_stay_distinct() {
        let ids = [
            GroupKey::from(1),
            GroupKey::from("1"),
            GroupKey::from(1),
            GroupKey::from(true),
        ];

        let groups = partition(&ids);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.get(&GroupKey::Int(1)), Some(&[0, 2][..]));
        assert_eq!(groups.get(&GroupKey::from("1")), Some(&[1][..]));
        assert_eq!(groups.get(&GroupKey::Bool(true)), Some(&[3][..]));
    }

    #[test]
    fn empty_input_has_no_groups() {
        let groups = partition::<u8>(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.iter().count(), 0);
    }
}
