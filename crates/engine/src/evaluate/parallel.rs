use std::{fmt::Debug, hash::Hash};

use disparity_core::Metric;
use rayon::prelude::*;
use tracing::debug;

use crate::{ByGroup, Error, GroupSummary, Inputs, normalize::normalize, partition::partition};

use super::{EvaluateResult, invoke::Invoker};

/// Evaluates a metric overall and by group, computing groups in parallel.
///
/// Produces the same summary as [`evaluate`](super::evaluate): groups are
/// independent, and results are assembled in first-seen group order
/// regardless of which finishes first.
///
/// # Errors
///
/// Returns an error if the inputs are inconsistent or any metric call fails.
/// When several groups fail, the error of the first failing group in group
/// order is returned.
pub fn par_evaluate<T, P, K, M>(metric: &M, inputs: Inputs<T, P, K>) -> EvaluateResult<K, M, T, P>
where
    T: Clone + Sync,
    P: Clone + Sync,
    K: Hash + Eq + Clone + Debug + Send + Sync,
    M: Metric<T, P> + Sync,
    M::Output: Send,
{
    let data = normalize(inputs)?;
    let groups = partition(&data.sensitive_features);
    let invoker = Invoker::new(metric, &data);

    debug!(
        n_samples = data.len(),
        n_groups = groups.len(),
        weighted = invoker.is_weighted(),
        "evaluating metric by group in parallel"
    );

    let overall = invoker.overall().map_err(Error::Metric)?;

    let work: Vec<(&K, &[usize])> = groups.iter().collect();
    let outputs: Vec<Result<M::Output, M::Error>> = work
        .par_iter()
        .map(|(_, indices)| invoker.group(indices))
        .collect();

    let mut results = Vec::with_capacity(work.len());
    for ((key, _), output) in work.into_iter().zip(outputs) {
        results.push((key.clone(), output.map_err(Error::Metric)?));
    }

    Ok(GroupSummary::new(overall, results.into_iter().collect::<ByGroup<_, _>>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use disparity_core::{unweighted, weighted};

    use crate::evaluate;

    #[test]
    fn matches_sequential_evaluation() {
        let metric = weighted(|y_true: &[i32], _: &[i32], w: &[f64]| {
            y_true
                .iter()
                .zip(w)
                .map(|(&y, &w)| f64::from(y) * w)
                .sum::<f64>()
        });
        let inputs = || {
            Inputs::new(
                [0, 1, 1, 1, 0, 1, 1, 1],
                [0, 1, 1, 1, 1, 0, 0, 1],
                ["ABC", "zz", "ABC", "DEF", "DEF", "GHI", "GHI", "GHI"],
            )
            .sample_weight([1.0, 1.0, 1.0, 5.0, 5.0, 7.0, 7.0, 7.0])
        };

        let sequential = evaluate(&metric, inputs()).expect("evaluation succeeds");
        let parallel = par_evaluate(&metric, inputs()).expect("evaluation succeeds");

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn metric_errors_surface() {
        let metric = unweighted(|y_true: &[i32], _: &[i32]| y_true.len());

        let inputs = Inputs::new([0, 1], [0, 1], [0, 1]).sample_weight([1.0; 2]);

        let err = par_evaluate(&metric, inputs).expect_err("metric rejects weights");

        assert!(matches!(err, Error::Metric(_)));
    }
}
