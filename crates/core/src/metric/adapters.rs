use thiserror::Error;

use super::{Metric, Samples};

/// Errors raised when a metric is called with a calling convention it does
/// not support.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SignatureError {
    /// Weights were supplied to a metric that does not accept them.
    #[error("metric does not accept sample_weight")]
    UnexpectedSampleWeight,
    /// A metric that requires weights was called without them.
    #[error("metric requires sample_weight")]
    MissingSampleWeight,
}

/// A metric built from a closure over `(y_true, y_pred)`.
///
/// Created by [`unweighted`].
pub struct Unweighted<F> {
    func: F,
}

/// Wraps a closure taking `(y_true, y_pred)` as a [`Metric`].
///
/// Calling the resulting metric with sample weights fails with
/// [`SignatureError::UnexpectedSampleWeight`].
///
/// # Example
///
/// ```rust
/// use disparity_core::{Metric, Samples, unweighted};
///
/// let positives = unweighted(|y_true: &[u8], _y_pred: &[u8]| {
///     y_true.iter().filter(|&&y| y == 1).count()
/// });
///
/// let samples = Samples::new(&[1, 0, 1], &[0, 0, 1]);
/// assert_eq!(positives.call(&samples), Ok(2));
/// ```
pub fn unweighted<T, P, O, F>(func: F) -> Unweighted<F>
where
    F: Fn(&[T], &[P]) -> O,
{
    Unweighted { func }
}

impl<T, P, O, F> Metric<T, P> for Unweighted<F>
where
    F: Fn(&[T], &[P]) -> O,
{
    type Output = O;
    type Error = SignatureError;

    fn call(&self, samples: &Samples<'_, T, P>) -> Result<O, SignatureError> {
        if samples.sample_weight.is_some() {
            return Err(SignatureError::UnexpectedSampleWeight);
        }
        Ok((self.func)(samples.y_true, samples.y_pred))
    }
}

/// A metric built from a closure over `(y_true, y_pred, sample_weight)`.
///
/// Created by [`weighted`].
pub struct Weighted<F> {
    func: F,
}

/// Wraps a closure taking `(y_true, y_pred, sample_weight)` as a [`Metric`].
///
/// Calling the resulting metric without sample weights fails with
/// [`SignatureError::MissingSampleWeight`].
pub fn weighted<T, P, O, F>(func: F) -> Weighted<F>
where
    F: Fn(&[T], &[P], &[f64]) -> O,
{
    Weighted { func }
}

impl<T, P, O, F> Metric<T, P> for Weighted<F>
where
    F: Fn(&[T], &[P], &[f64]) -> O,
{
    type Output = O;
    type Error = SignatureError;

    fn call(&self, samples: &Samples<'_, T, P>) -> Result<O, SignatureError> {
        let weights = samples
            .sample_weight
            .ok_or(SignatureError::MissingSampleWeight)?;
        Ok((self.func)(samples.y_true, samples.y_pred, weights))
    }
}

/// A metric built from a closure whose weights argument is optional.
///
/// Created by [`optionally_weighted`].
pub struct OptionallyWeighted<F> {
    func: F,
}

/// Wraps a closure taking `(y_true, y_pred, Option<sample_weight>)` as a
/// [`Metric`] that accepts calls with or without weights.
pub fn optionally_weighted<T, P, O, F>(func: F) -> OptionallyWeighted<F>
where
    F: Fn(&[T], &[P], Option<&[f64]>) -> O,
{
    OptionallyWeighted { func }
}

impl<T, P, O, F> Metric<T, P> for OptionallyWeighted<F>
where
    F: Fn(&[T], &[P], Option<&[f64]>) -> O,
{
    type Output = O;
    type Error = SignatureError;

    fn call(&self, samples: &Samples<'_, T, P>) -> Result<O, SignatureError> {
        Ok((self.func)(
            samples.y_true,
            samples.y_pred,
            samples.sample_weight,
        ))
    }
}
