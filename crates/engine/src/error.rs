use disparity_core::ConversionError;
use thiserror::Error;

/// Errors raised while validating inputs, before any metric call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// An input could not be read as a 1-d sequence.
    #[error("Array {name} could not be converted to a 1-d sequence")]
    Conversion {
        name: String,
        #[source]
        source: ConversionError,
    },

    /// An input does not have one entry per sample of `y_true`.
    #[error("Array {name} is not the same size as y_true")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

/// Errors that can occur when evaluating a metric by group.
///
/// Metric failures are carried unchanged in [`Error::Metric`]; both
/// variants display exactly like the error they wrap.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Metric(E),
}

impl<E> Error<E> {
    /// Returns the metric error, if the metric call failed.
    pub fn into_metric(self) -> Option<E> {
        match self {
            Error::Metric(err) => Some(err),
            Error::Input(_) => None,
        }
    }
}
