mod adapters;

pub use adapters::{
    OptionallyWeighted, SignatureError, Unweighted, Weighted, optionally_weighted, unweighted,
    weighted,
};

use crate::IndexedParams;

/// A callable metric that maps a set of samples to a result.
///
/// Metrics must be deterministic, always producing the same result for the
/// same samples, so that the overall and per-group results of an evaluation
/// are reproducible.
///
/// Most metrics are plain closures wrapped with [`unweighted`], [`weighted`],
/// or [`optionally_weighted`]. Implement this trait directly when the metric
/// reads named per-sample parameters or has its own failure modes.
pub trait Metric<T, P> {
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the metric on the given samples.
    ///
    /// # Errors
    ///
    /// Each metric defines its own `Error` type to represent domain-specific
    /// failures, including calling-convention mismatches.
    fn call(&self, samples: &Samples<'_, T, P>) -> Result<Self::Output, Self::Error>;
}

impl<T, P, M> Metric<T, P> for &M
where
    M: Metric<T, P> + ?Sized,
{
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, samples: &Samples<'_, T, P>) -> Result<Self::Output, Self::Error> {
        (**self).call(samples)
    }
}

/// A borrowed view of the samples handed to a metric.
///
/// Every slice has the same length. For a per-group call, the slices hold
/// only that group's samples, in their original relative order.
#[derive(Debug)]
pub struct Samples<'a, T, P> {
    pub y_true: &'a [T],
    pub y_pred: &'a [P],
    pub sample_weight: Option<&'a [f64]>,
    pub params: &'a IndexedParams,
}

impl<T, P> Clone for Samples<'_, T, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, P> Copy for Samples<'_, T, P> {}

impl<'a, T, P> Samples<'a, T, P> {
    /// Creates a view over unweighted samples without extra parameters.
    pub fn new(y_true: &'a [T], y_pred: &'a [P]) -> Self {
        Self {
            y_true,
            y_pred,
            sample_weight: None,
            params: IndexedParams::empty(),
        }
    }

    /// Returns a copy of the view carrying the given weights.
    #[must_use]
    pub fn with_sample_weight(self, sample_weight: Option<&'a [f64]>) -> Self {
        Self {
            sample_weight,
            ..self
        }
    }

    /// Returns a copy of the view carrying the given named parameters.
    #[must_use]
    pub fn with_params(self, params: &'a IndexedParams) -> Self {
        Self { params, ..self }
    }

    /// Number of samples in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.y_true.len()
    }

    /// Returns true if the view holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.y_true.is_empty()
    }

    /// Looks up a named per-sample parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&'a [f64]> {
        self.params.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    /// Metric that counts positive labels, scaled by an optional named factor.
    struct ScaledCount;
    impl Metric<u8, u8> for ScaledCount {
        type Output = f64;
        type Error = Infallible;

        fn call(&self, samples: &Samples<'_, u8, u8>) -> Result<f64, Infallible> {
            let count = samples.y_true.iter().filter(|&&y| y == 1).count() as f64;
            let scale = samples.param("scale").map_or(1.0, |s| s.iter().sum());
            Ok(count * scale)
        }
    }

    #[test]
    fn call_through_reference() {
        let metric = ScaledCount;
        let samples: Samples<'_, u8, u8> = Samples::new(&[1, 0, 1], &[0, 0, 0]);

        fn count<M: Metric<u8, u8>>(metric: M, samples: &Samples<'_, u8, u8>) -> M::Output {
            match metric.call(samples) {
                Ok(output) => output,
                Err(_) => unreachable!("metric is infallible"),
            }
        }

        assert_eq!(count(&metric, &samples), 2.0);
    }

    #[test]
    fn samples_expose_named_params() {
        let mut params = IndexedParams::new();
        params.insert("scale", vec![0.5, 0.5, 1.0]);

        let samples: Samples<'_, u8, u8> =
            Samples::new(&[1, 1, 0], &[0, 0, 0]).with_params(&params);

        assert_eq!(samples.len(), 3);
        assert!(!samples.is_empty());
        assert_eq!(samples.param("scale"), Some(&[0.5, 0.5, 1.0][..]));
        assert_eq!(samples.param("missing"), None);
        assert_eq!(ScaledCount.call(&samples), Ok(4.0));
    }

    #[test]
    fn new_samples_are_unweighted() {
        let samples: Samples<'_, u8, u8> = Samples::new(&[], &[]);
        assert!(samples.is_empty());
        assert!(samples.sample_weight.is_none());
        assert!(samples.params.is_empty());
    }
}
