use disparity_core::{Metric, Samples};

use crate::normalize::Normalized;

/// Calls a metric on all samples or on one group's samples.
///
/// Built once per evaluation. Whether weights are passed is fixed by the
/// inputs: every call receives them when they were supplied and none does
/// otherwise.
pub(super) struct Invoker<'a, M, T, P, K> {
    metric: &'a M,
    data: &'a Normalized<T, P, K>,
}

impl<'a, M, T, P, K> Invoker<'a, M, T, P, K>
where
    M: Metric<T, P>,
    T: Clone,
    P: Clone,
{
    pub(super) fn new(metric: &'a M, data: &'a Normalized<T, P, K>) -> Self {
        Self { metric, data }
    }

    pub(super) fn is_weighted(&self) -> bool {
        self.data.sample_weight.is_some()
    }

    /// Calls the metric on every sample.
    pub(super) fn overall(&self) -> Result<M::Output, M::Error> {
        self.metric.call(&self.data.samples())
    }

    /// Calls the metric on the samples at `indices`, in order.
    pub(super) fn group(&self, indices: &[usize]) -> Result<M::Output, M::Error> {
        let y_true = select(&self.data.y_true, indices);
        let y_pred = select(&self.data.y_pred, indices);
        let sample_weight = self
            .data
            .sample_weight
            .as_deref()
            .map(|weights| select(weights, indices));
        let params = self.data.params.select(indices);

        let samples = Samples::new(&y_true, &y_pred)
            .with_sample_weight(sample_weight.as_deref())
            .with_params(&params);
        self.metric.call(&samples)
    }
}

fn select<X: Clone>(values: &[X], indices: &[usize]) -> Vec<X> {
    indices.iter().map(|&i| values[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use disparity_core::{IndexedParams, optionally_weighted};

    fn data() -> Normalized<i32, i32, u8> {
        Normalized {
            y_true: vec![1, 2, 3, 4],
            y_pred: vec![0, 0, 0, 0],
            sensitive_features: vec![0, 1, 0, 1],
            sample_weight: Some(vec![0.1, 0.2, 0.3, 0.4]),
            params: IndexedParams::new(),
        }
    }

    #[test]
    fn group_call_sees_selected_samples_and_weights() {
        let metric = optionally_weighted(|y_true: &[i32], _: &[i32], w: Option<&[f64]>| {
            (y_true.to_vec(), w.map(<[f64]>::to_vec))
        });
        let data = data();
        let invoker = Invoker::new(&metric, &data);

        assert!(invoker.is_weighted());
        assert_eq!(
            invoker.group(&[3, 1]),
            Ok((vec![4, 2], Some(vec![0.4, 0.2])))
        );
        assert_eq!(
            invoker.overall(),
            Ok((vec![1, 2, 3, 4], Some(vec![0.1, 0.2, 0.3, 0.4])))
        );
    }

    #[test]
    fn unweighted_data_passes_no_weights() {
        let metric = optionally_weighted(|_: &[i32], _: &[i32], w: Option<&[f64]>| w.is_some());
        let data = Normalized {
            sample_weight: None,
            ..data()
        };
        let invoker = Invoker::new(&metric, &data);

        assert!(!invoker.is_weighted());
        assert_eq!(invoker.overall(), Ok(false));
        assert_eq!(invoker.group(&[0, 2]), Ok(false));
    }
}
