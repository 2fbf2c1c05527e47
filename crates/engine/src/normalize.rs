use disparity_core::{IndexedParams, Samples};

use crate::{InputError, Inputs};

/// Validated inputs: every array has one entry per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T, P, K> {
    pub y_true: Vec<T>,
    pub y_pred: Vec<P>,
    pub sensitive_features: Vec<K>,
    pub sample_weight: Option<Vec<f64>>,
    pub params: IndexedParams,
}

impl<T, P, K> Normalized<T, P, K> {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.y_true.len()
    }

    /// Returns true if there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.y_true.is_empty()
    }

    /// Returns a view over all samples, as handed to the metric for the
    /// overall result.
    #[must_use]
    pub fn samples(&self) -> Samples<'_, T, P> {
        Samples::new(&self.y_true, &self.y_pred)
            .with_sample_weight(self.sample_weight.as_deref())
            .with_params(&self.params)
    }
}

/// Validates that all inputs describe the same samples.
///
/// Lengths are compared against `y_true` in a fixed order: `y_pred`,
/// `sensitive_features`, `sample_weight`, then named parameters in the order
/// they were added. The first mismatch is reported.
///
/// # Errors
///
/// Returns [`InputError::Conversion`] if an input could not be coerced, or
/// [`InputError::LengthMismatch`] naming the first array whose length
/// differs from `y_true`.
pub fn normalize<T, P, K>(inputs: Inputs<T, P, K>) -> Result<Normalized<T, P, K>, InputError> {
    let Inputs {
        y_true,
        y_pred,
        sensitive_features,
        sample_weight,
        params,
        conversion,
    } = inputs;

    if let Some((name, source)) = conversion {
        return Err(InputError::Conversion { name, source });
    }

    let expected = y_true.len();
    check_len("y_pred", expected, y_pred.len())?;
    check_len("sensitive_features", expected, sensitive_features.len())?;
    if let Some(weights) = &sample_weight {
        check_len("sample_weight", expected, weights.len())?;
    }
    for (name, values) in params.iter() {
        check_len(name, expected, values.len())?;
    }

    Ok(Normalized {
        y_true,
        y_pred,
        sensitive_features,
        sample_weight,
        params,
    })
}

fn check_len(name: &str, expected: usize, actual: usize) -> Result<(), InputError> {
    if actual == expected {
        Ok(())
    } else {
        Err(InputError::LengthMismatch {
            name: name.to_owned(),
            expected,
            actual,
        })
    }
}
