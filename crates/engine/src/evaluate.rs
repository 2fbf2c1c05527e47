mod invoke;
#[cfg(feature = "parallel")]
mod parallel;

#[cfg(feature = "parallel")]
pub use parallel::par_evaluate;

use std::{fmt::Debug, hash::Hash};

use disparity_core::{IntoSamples, Metric};
use tracing::{debug, trace};

use crate::{
    ByGroup, Error, GroupSummary, Inputs,
    normalize::normalize,
    observe::{Event, Observer},
    partition::partition,
};

use invoke::Invoker;

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<K, M, T, P> = Result<
    GroupSummary<K, <M as Metric<T, P>>::Output>,
    Error<<M as Metric<T, P>>::Error>,
>;

/// Evaluates a metric on all samples and on each group's samples.
///
/// # Example
///
/// ```rust
/// use disparity_core::unweighted;
/// use disparity_engine::group_summary;
///
/// let positives = unweighted(|y_true: &[i32], _y_pred: &[i32]| y_true.iter().sum::<i32>());
///
/// let summary = group_summary(
///     &positives,
///     [0, 0, 1, 1, 0, 1, 1, 1],
///     [0, 1, 1, 1, 1, 0, 0, 1],
///     [0, 0, 0, 0, 1, 1, 1, 1],
/// )?;
///
/// assert_eq!(*summary.overall(), 5);
/// assert_eq!(summary.by_group()[&0], 2);
/// assert_eq!(summary.by_group()[&1], 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns an error if the inputs are inconsistent or any metric call fails.
pub fn group_summary<T, P, K, M>(
    metric: &M,
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
    evaluate(metric, Inputs::new(y_true, y_pred, sensitive_features))
}

/// Evaluates a weighted metric on all samples and on each group's samples.
///
/// Every metric call, overall and per group, receives the weights of the
/// samples it covers.
///
/// # Errors
///
/// Returns an error if the inputs are inconsistent or any metric call fails.
pub fn group_summary_weighted<T, P, K, M>(
    metric: &M,
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
    let inputs = Inputs::new(y_true, y_pred, sensitive_features).sample_weight(sample_weight);
    evaluate(metric, inputs)
}

/// Evaluates a metric overall and by group from prepared [`Inputs`].
///
/// The metric is called once on all samples, then once per group in the
/// order groups first appear. Each group call sees only that group's
/// labels, predictions, weights, and named parameters. Weights are passed to
/// every call when supplied and to none otherwise.
///
/// # Errors
///
/// Returns an error if the inputs are inconsistent or any metric call fails.
/// No metric is called when the inputs are inconsistent, and evaluation
/// stops at the first failing call.
pub fn evaluate<T, P, K, M>(metric: &M, inputs: Inputs<T, P, K>) -> EvaluateResult<K, M, T, P>
where
    T: Clone,
    P: Clone,
    K: Hash + Eq + Clone + Debug,
    M: Metric<T, P>,
{
    evaluate_observed(metric, inputs, ())
}

/// Evaluates a metric overall and by group, reporting each call to an
/// observer.
///
/// # Errors
///
/// Returns an error if the inputs are inconsistent or any metric call fails.
pub fn evaluate_observed<T, P, K, M, Obs>(
    metric: &M,
    inputs: Inputs<T, P, K>,
    mut observer: Obs,
) -> EvaluateResult<K, M, T, P>
where
    T: Clone,
    P: Clone,
    K: Hash + Eq + Clone + Debug,
    M: Metric<T, P>,
    Obs: for<'a> Observer<Event<'a, K, M::Output>>,
{
    let data = normalize(inputs)?;
    let groups = partition(&data.sensitive_features);
    let invoker = Invoker::new(metric, &data);

    debug!(
        n_samples = data.len(),
        n_groups = groups.len(),
        weighted = invoker.is_weighted(),
        "evaluating metric by group"
    );

    let overall = invoker.overall().map_err(Error::Metric)?;
    observer.observe(&Event::Overall {
        n_samples: data.len(),
        output: &overall,
    });

    let mut results = Vec::with_capacity(groups.len());
    for (key, indices) in groups.iter() {
        let output = invoker.group(indices).map_err(Error::Metric)?;
        trace!(group = ?key, n_samples = indices.len(), "evaluated group");
        observer.observe(&Event::Group {
            key,
            indices,
            output: &output,
        });
        results.push((key.clone(), output));
    }

    Ok(GroupSummary::new(overall, results.into_iter().collect::<ByGroup<_, _>>()))
}
