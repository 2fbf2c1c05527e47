use ndarray::{Array1, Array2, ArrayD, ArrayView1, ArrayView2};
use thiserror::Error;

/// Errors that can occur when coercing an input into a sequence of samples.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The input has more than one non-trivial axis.
    #[error("expected a 1-d sequence or a single column, got shape {shape:?}")]
    NotOneDimensional { shape: Vec<usize> },
}

/// Coerces an array-like input into an owned, ordered sequence of samples.
///
/// Implemented for vectors, slices, fixed-size arrays, [`Labeled`]
/// sequences, `ndarray` 1-d arrays and views, and 2-d arrays with a single
/// column or a single row.
pub trait IntoSamples<T> {
    /// Converts the input into a `Vec` with one entry per sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read as a single sequence.
    fn into_samples(self) -> Result<Vec<T>, ConversionError>;
}

impl<T> IntoSamples<T> for Vec<T> {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        Ok(self)
    }
}

impl<T: Clone> IntoSamples<T> for &Vec<T> {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        Ok(self.clone())
    }
}

impl<T: Clone> IntoSamples<T> for &[T] {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        Ok(self.to_vec())
    }
}

impl<T, const N: usize> IntoSamples<T> for [T; N] {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        Ok(self.into())
    }
}

impl<T: Clone, const N: usize> IntoSamples<T> for &[T; N] {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        Ok(self.to_vec())
    }
}

impl<T> IntoSamples<T> for Array1<T> {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        Ok(self.into_iter().collect())
    }
}

impl<T: Clone> IntoSamples<T> for &Array1<T> {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        Ok(self.iter().cloned().collect())
    }
}

impl<T: Clone> IntoSamples<T> for ArrayView1<'_, T> {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        Ok(self.iter().cloned().collect())
    }
}

impl<T: Clone> IntoSamples<T> for &Array2<T> {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        self.view().into_samples()
    }
}

impl<T> IntoSamples<T> for Array2<T> {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        check_single_axis(self.shape())?;
        Ok(self.into_iter().collect())
    }
}

impl<T: Clone> IntoSamples<T> for ArrayView2<'_, T> {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        check_single_axis(self.shape())?;
        Ok(self.iter().cloned().collect())
    }
}

impl<T> IntoSamples<T> for ArrayD<T> {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        check_single_axis(self.shape())?;
        Ok(self.into_iter().collect())
    }
}

/// Accepts shapes with at most one axis longer than one.
fn check_single_axis(shape: &[usize]) -> Result<(), ConversionError> {
    if shape.iter().filter(|&&len| len > 1).count() > 1 {
        return Err(ConversionError::NotOneDimensional {
            shape: shape.to_vec(),
        });
    }
    Ok(())
}

/// A sequence of values paired with per-sample labels.
///
/// Labels identify samples for the caller and are dropped on coercion: the
/// values are used in order, like the data column of an indexed series.
#[derive(Debug, Clone, PartialEq)]
pub struct Labeled<L, T> {
    labels: Vec<L>,
    values: Vec<T>,
}

impl<L, T> Labeled<L, T> {
    /// Creates a labeled sequence from `(label, value)` pairs.
    pub fn new(pairs: impl IntoIterator<Item = (L, T)>) -> Self {
        let (labels, values) = pairs.into_iter().unzip();
        Self { labels, values }
    }

    /// Returns the labels in sample order.
    #[must_use]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Returns the values in sample order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<L, T> IntoSamples<T> for Labeled<L, T> {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        Ok(self.values)
    }
}

impl<L, T: Clone> IntoSamples<T> for &Labeled<L, T> {
    fn into_samples(self) -> Result<Vec<T>, ConversionError> {
        Ok(self.values.clone())
    }
}
