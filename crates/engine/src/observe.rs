/// Receives evaluation events as the metric is applied.
///
/// Observers let callers monitor an evaluation without changing its API,
/// for progress reporting or for recording per-group timings and sizes.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer<E> {
    /// Observes an evaluation event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}

/// Event emitted after each metric call of an evaluation.
#[derive(Debug)]
pub enum Event<'a, K, O> {
    /// The metric was evaluated on all samples.
    Overall {
        /// Number of samples.
        n_samples: usize,
        /// The overall result.
        output: &'a O,
    },
    /// The metric was evaluated on one group's samples.
    Group {
        /// The group identifier.
        key: &'a K,
        /// Positions of the group's samples in the inputs.
        indices: &'a [usize],
        /// The group's result.
        output: &'a O,
    },
}

impl<'a, K, O> Event<'a, K, O> {
    /// Returns the metric result carried by the event.
    pub fn output(&self) -> &'a O {
        match self {
            Event::Overall { output, .. } | Event::Group { output, .. } => *output,
        }
    }

    /// Returns the number of samples the metric was called on.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        match self {
            Event::Overall { n_samples, .. } => *n_samples,
            Event::Group { indices, .. } => indices.len(),
        }
    }
}
