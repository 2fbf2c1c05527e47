use disparity_core::{ConversionError, IndexedParams, IntoSamples};

/// The arrays for a grouped evaluation, gathered before validation.
///
/// Each input is coerced to an owned sequence as it is added. A coercion
/// failure is recorded and reported by [`normalize`](crate::normalize), so
/// the builder itself never fails.
///
/// # Example
///
/// ```rust
/// use disparity_engine::Inputs;
///
/// let inputs = Inputs::new([0, 1, 1], [1, 1, 0], ["a", "b", "a"])
///     .sample_weight([1.0, 2.0, 1.0])
///     .param("exposure", vec![0.5, 0.5, 1.0]);
///
/// assert_eq!(inputs.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Inputs<T, P, K> {
    pub(crate) y_true: Vec<T>,
    pub(crate) y_pred: Vec<P>,
    pub(crate) sensitive_features: Vec<K>,
    pub(crate) sample_weight: Option<Vec<f64>>,
    pub(crate) params: IndexedParams,
    pub(crate) conversion: Option<(String, ConversionError)>,
}

impl<T, P, K> Inputs<T, P, K> {
    /// Collects labels, predictions, and group identifiers.
    pub fn new(
        y_true: impl IntoSamples<T>,
        y_pred: impl IntoSamples<P>,
        sensitive_features: impl IntoSamples<K>,
    ) -> Self {
        let mut conversion = None;
        let y_true = coerce(&mut conversion, "y_true", y_true);
        let y_pred = coerce(&mut conversion, "y_pred", y_pred);
        let sensitive_features = coerce(&mut conversion, "sensitive_features", sensitive_features);

        Self {
            y_true,
            y_pred,
            sensitive_features,
            sample_weight: None,
            params: IndexedParams::new(),
            conversion,
        }
    }

    /// Adds per-sample weights, passed to every metric call.
    #[must_use]
    pub fn sample_weight(mut self, sample_weight: impl IntoSamples<f64>) -> Self {
        let weights = coerce(&mut self.conversion, "sample_weight", sample_weight);
        self.sample_weight = Some(weights);
        self
    }

    /// Adds a named per-sample parameter, sliced per group like the weights.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, values: impl IntoSamples<f64>) -> Self {
        let name = name.into();
        let values = coerce(&mut self.conversion, &name, values);
        self.params.insert(name, values);
        self
    }

    /// Number of samples in `y_true`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.y_true.len()
    }

    /// Returns true if `y_true` is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.y_true.is_empty()
    }

    /// Returns true if sample weights were supplied.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.sample_weight.is_some()
    }
}

/// Coerces one input, recording the first failure.
fn coerce<X>(
    slot: &mut Option<(String, ConversionError)>,
    name: &str,
    input: impl IntoSamples<X>,
) -> Vec<X> {
    match input.into_samples() {
        Ok(values) => values,
        Err(err) => {
            if slot.is_none() {
                *slot = Some((name.to_owned(), err));
            }
            Vec::new()
        }
    }
}
