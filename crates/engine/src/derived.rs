use std::{fmt::Debug, hash::Hash};

use disparity_core::{AsScalar, IntoSamples, Metric};
use thiserror::Error;
use tracing::debug;

use crate::{
    Config, Error, GroupSummary, Inputs, Method,
    aggregate::{
        AggregateError, difference_from_summary, difference_to_overall, group_max_from_summary,
        group_min_from_summary, ratio_from_summary, ratio_to_overall,
    },
    evaluate,
};

/// A statistic that reduces a group summary to one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Aggregate {
    GroupMin,
    GroupMax,
    Difference,
    Ratio,
}

impl Aggregate {
    /// Applies the statistic to a summary.
    ///
    /// The configured [`Method`] selects between-group or to-overall
    /// comparison for [`Aggregate::Difference`] and [`Aggregate::Ratio`].
    /// It has no effect on the group extremes.
    ///
    /// # Errors
    ///
    /// Returns an error if the summary is not made of scalars or is empty.
    pub fn apply<K, O>(
        self,
        summary: &GroupSummary<K, O>,
        config: &Config,
    ) -> Result<f64, AggregateError>
    where
        K: Debug,
        O: AsScalar,
    {
        match (self, config.method) {
            (Aggregate::GroupMin, _) => group_min_from_summary(summary),
            (Aggregate::GroupMax, _) => group_max_from_summary(summary),
            (Aggregate::Difference, Method::BetweenGroups) => difference_from_summary(summary),
            (Aggregate::Difference, Method::ToOverall) => difference_to_overall(summary),
            (Aggregate::Ratio, Method::BetweenGroups) => ratio_from_summary(summary),
            (Aggregate::Ratio, Method::ToOverall) => ratio_to_overall(summary),
        }
    }
}

/// Errors that can occur when computing a derived metric.
#[derive(Debug, Error)]
pub enum DerivedError<E> {
    #[error(transparent)]
    Evaluate(#[from] Error<E>),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

/// A metric that is evaluated by group and reduced to a single disparity.
#[derive(Debug, Clone)]
pub struct DerivedMetric<M> {
    aggregate: Aggregate,
    metric: M,
    config: Config,
}

/// Wraps `metric` so that calling the wrapper returns `aggregate` of its
/// group summary.
///
/// # Example
///
/// ```rust
/// use disparity_core::unweighted;
/// use disparity_engine::{Aggregate, make_derived_metric};
///
/// let positives = unweighted(|y_true: &[i32], _: &[i32]| f64::from(y_true.iter().sum::<i32>()));
/// let positives_difference = make_derived_metric(Aggregate::Difference, positives);
///
/// let difference = positives_difference.call(
///     [0, 0, 1, 1, 0, 1, 1, 1],
///     [0, 1, 1, 1, 1, 0, 0, 1],
///     ["a", "a", "a", "a", "b", "b", "b", "b"],
/// )?;
///
/// assert_eq!(difference, 1.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn make_derived_metric<M>(aggregate: Aggregate, metric: M) -> DerivedMetric<M> {
    DerivedMetric {
        aggregate,
        metric,
        config: Config::default(),
    }
}

impl<M> DerivedMetric<M> {
    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn aggregate(&self) -> Aggregate {
        self.aggregate
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The wrapped metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Evaluates the metric by group and aggregates the results.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation or aggregation fails.
    pub fn call<T, P, K>(
        &self,
        y_true: impl IntoSamples<T>,
        y_pred: impl IntoSamples<P>,
        sensitive_features: impl IntoSamples<K>,
    ) -> Result<f64, DerivedError<M::Error>>
    where
        T: Clone,
        P: Clone,
        K: Hash + Eq + Clone + Debug,
        M: Metric<T, P>,
        M::Output: AsScalar,
    {
        self.evaluate(Inputs::new(y_true, y_pred, sensitive_features))
    }

    /// Evaluates the metric by group with sample weights and aggregates the
    /// results.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation or aggregation fails.
    pub fn call_weighted<T, P, K>(
        &self,
        y_true: impl IntoSamples<T>,
        y_pred: impl IntoSamples<P>,
        sensitive_features: impl IntoSamples<K>,
        sample_weight: impl IntoSamples<f64>,
    ) -> Result<f64, DerivedError<M::Error>>
    where
        T: Clone,
        P: Clone,
        K: Hash + Eq + Clone + Debug,
        M: Metric<T, P>,
        M::Output: AsScalar,
    {
        self.evaluate(Inputs::new(y_true, y_pred, sensitive_features).sample_weight(sample_weight))
    }

    /// Evaluates the metric by group from prepared [`Inputs`] and aggregates
    /// the results.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation or aggregation fails.
    pub fn evaluate<T, P, K>(&self, inputs: Inputs<T, P, K>) -> Result<f64, DerivedError<M::Error>>
    where
        T: Clone,
        P: Clone,
        K: Hash + Eq + Clone + Debug,
        M: Metric<T, P>,
        M::Output: AsScalar,
    {
        let summary = evaluate(&self.metric, inputs)?;
        let value = self.aggregate.apply(&summary, &self.config)?;

        debug!(
            aggregate = ?self.aggregate,
            method = ?self.config.method,
            value,
            "derived metric"
        );

        Ok(value)
    }
}
