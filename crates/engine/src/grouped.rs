use std::{fmt::Debug, hash::Hash};

use disparity_core::{IntoSamples, Metric};

use crate::{EvaluateResult, Inputs, evaluate};

/// A metric bound into a callable that returns a full group summary.
#[derive(Debug, Clone)]
pub struct GroupedMetric<M> {
    metric: M,
    name: Option<String>,
}

/// Wraps `metric` so that calling the wrapper evaluates it overall and by
/// group.
///
/// # Example
///
/// ```rust
/// use disparity_core::unweighted;
/// use disparity_engine::make_metric_group_summary;
///
/// let count = make_metric_group_summary(unweighted(|y_true: &[u8], _: &[u8]| y_true.len()))
///     .with_name("count");
///
/// let summary = count.call([1, 0, 1], [1, 1, 1], ["a", "b", "a"])?;
///
/// assert_eq!(count.name(), Some("count"));
/// assert_eq!(*summary.overall(), 3);
/// assert_eq!(summary.by_group()["a"], 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn make_metric_group_summary<M>(metric: M) -> GroupedMetric<M> {
    GroupedMetric::new(metric)
}

impl<M> GroupedMetric<M> {
    /// Wraps `metric` without a name.
    pub fn new(metric: M) -> Self {
        Self { metric, name: None }
    }

    /// Attaches a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The wrapped metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Evaluates the metric overall and by group.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are inconsistent or any metric call
    /// fails.
    pub fn call<T, P, K>(
        &self,
        y_true: impl IntoSamples<T>,
        y_pred: impl IntoSamples<P>,
        sensitive_features: impl IntoSamples<K>,
    ) -> EvaluateResult<K, M, T, P>
    where
        T: Clone,
        P: Clone,
        K: Hash + Eq + Clone + Debug,
        M: Metric<T, P>,
    {
        self.evaluate(Inputs::new(y_true, y_pred, sensitive_features))
    }

    /// Evaluates the metric overall and by group with sample weights.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are inconsistent or any metric call
    /// fails.
    pub fn call_weighted<T, P, K>(
        &self,
        y_true: impl IntoSamples<T>,
        y_pred: impl IntoSamples<P>,
        sensitive_features: impl IntoSamples<K>,
        sample_weight: impl IntoSamples<f64>,
    ) -> EvaluateResult<K, M, T, P>
    where
        T: Clone,
        P: Clone,
        K: Hash + Eq + Clone + Debug,
        M: Metric<T, P>,
    {
        self.evaluate(Inputs::new(y_true, y_pred, sensitive_features).sample_weight(sample_weight))
    }

    /// Evaluates the metric overall and by group from prepared [`Inputs`].
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are inconsistent or any metric call
    /// fails.
    pub fn evaluate<T, P, K>(&self, inputs: Inputs<T, P, K>) -> EvaluateResult<K, M, T, P>
    where
        T: Clone,
        P: Clone,
        K: Hash + Eq + Clone + Debug,
        M: Metric<T, P>,
    {
        evaluate(&self.metric, inputs)
    }
}
