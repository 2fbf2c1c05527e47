use std::{borrow::Borrow, collections::HashMap, hash::Hash, ops::Index};

/// The result of evaluating a metric overall and by group.
///
/// A summary is built once per evaluation and never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary<K, O> {
    overall: O,
    by_group: ByGroup<K, O>,
}

impl<K, O> GroupSummary<K, O> {
    /// Bundles an overall result with per-group results.
    pub fn new(overall: O, by_group: ByGroup<K, O>) -> Self {
        Self { overall, by_group }
    }

    /// The metric evaluated on all samples.
    pub fn overall(&self) -> &O {
        &self.overall
    }

    /// The metric evaluated on each group's samples.
    pub fn by_group(&self) -> &ByGroup<K, O> {
        &self.by_group
    }

    /// Splits the summary into its overall and per-group results.
    pub fn into_parts(self) -> (O, ByGroup<K, O>) {
        (self.overall, self.by_group)
    }
}

/// Per-group metric results, keyed by group identifier.
///
/// Iteration follows the order in which groups first appeared in the
/// sensitive features. Lookup by key is a hash lookup.
#[derive(Debug, Clone)]
pub struct ByGroup<K, O> {
    lookup: HashMap<K, usize>,
    entries: Vec<(K, O)>,
}

impl<K, O> ByGroup<K, O> {
    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, result)` pairs in first-seen order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &O)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Iterates over group identifiers in first-seen order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over results in first-seen group order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &O> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<K, O> ByGroup<K, O>
where
    K: Hash + Eq,
{
    /// Returns the result for a group.
    pub fn get<Q>(&self, key: &Q) -> Option<&O>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Returns true if the group is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup.contains_key(key)
    }
}

/// Collects results in iteration order; a repeated key keeps its first
/// position and takes the later result.
impl<K, O> FromIterator<(K, O)> for ByGroup<K, O>
where
    K: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, O)>>(iter: I) -> Self {
        let mut lookup: HashMap<K, usize> = HashMap::new();
        let mut entries: Vec<(K, O)> = Vec::new();

        for (key, value) in iter {
            match lookup.get(&key) {
                Some(&slot) => entries[slot].1 = value,
                None => {
                    lookup.insert(key.clone(), entries.len());
                    entries.push((key, value));
                }
            }
        }

        Self { lookup, entries }
    }
}

/// Order-sensitive: two results are equal only if their groups appear in
/// the same order.
impl<K, O> PartialEq for ByGroup<K, O>
where
    K: PartialEq,
    O: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, Q, O> Index<&Q> for ByGroup<K, O>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = O;

    /// # Panics
    ///
    /// Panics if the group is not present.
    fn index(&self, key: &Q) -> &O {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no result for the requested group"),
        }
    }
}

type SplitEntry<'a, K, O> = fn(&'a (K, O)) -> (&'a K, &'a O);

fn split_entry<K, O>((key, value): &(K, O)) -> (&K, &O) {
    (key, value)
}

impl<'a, K, O> IntoIterator for &'a ByGroup<K, O> {
    type Item = (&'a K, &'a O);
    type IntoIter = std::iter::Map<std::slice::Iter<'a, (K, O)>, SplitEntry<'a, K, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(split_entry as SplitEntry<'a, K, O>)
    }
}
