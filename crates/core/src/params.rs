/// Named per-sample parameters that travel with the samples.
///
/// Each parameter holds one value per sample and is restricted to a group's
/// samples whenever the metric is called for that group. Iteration and
/// lookup follow insertion order; inserting an existing name replaces its
/// values in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedParams {
    entries: Vec<(String, Vec<f64>)>,
}

static EMPTY: IndexedParams = IndexedParams {
    entries: Vec::new(),
};

impl IndexedParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a shared empty parameter set.
    #[must_use]
    pub fn empty() -> &'static Self {
        &EMPTY
    }

    /// Inserts or replaces a named parameter.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = values,
            None => self.entries.push((name, values)),
        }
    }

    /// Returns the values of a named parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Number of named parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no named parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, values)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Returns a new parameter set restricted to the given sample indices.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds for any parameter.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|(name, values)| (name.clone(), indices.iter().map(|&i| values[i]).collect()))
            .collect();
        Self { entries }
    }
}
