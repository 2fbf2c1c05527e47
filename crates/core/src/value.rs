use ndarray::{ArrayBase, ArrayD, Data, Dimension};

/// Runtime access to a metric result as a single number.
///
/// Metric results may be scalars, vectors, or matrices. Statistics across
/// groups are only defined for scalars, so aggregation asks each result for
/// its scalar value and fails when there is none.
pub trait AsScalar {
    /// Returns the value as `f64` if it is a scalar (zero-dimensional).
    fn as_scalar(&self) -> Option<f64>;
}

impl AsScalar for f64 {
    fn as_scalar(&self) -> Option<f64> {
        Some(*self)
    }
}

impl AsScalar for f32 {
    fn as_scalar(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

macro_rules! impl_as_scalar_lossless {
    ($($ty:ty),*) => {
        $(
            impl AsScalar for $ty {
                fn as_scalar(&self) -> Option<f64> {
                    Some(f64::from(*self))
                }
            }
        )*
    };
}

impl_as_scalar_lossless!(i8, i16, i32, u8, u16, u32);

macro_rules! impl_as_scalar_wide {
    ($($ty:ty),*) => {
        $(
            impl AsScalar for $ty {
                #[allow(clippy::cast_precision_loss)]
                fn as_scalar(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_as_scalar_wide!(i64, u64, isize, usize);

/// Arrays are scalars only when they have zero dimensions.
impl<S, D> AsScalar for ArrayBase<S, D>
where
    S: Data,
    S::Elem: AsScalar,
    D: Dimension,
{
    fn as_scalar(&self) -> Option<f64> {
        if self.ndim() == 0 {
            self.iter().next().and_then(AsScalar::as_scalar)
        } else {
            None
        }
    }
}

/// Vectors are never scalars, even with a single element.
impl<T> AsScalar for Vec<T> {
    fn as_scalar(&self) -> Option<f64> {
        None
    }
}

/// A metric result whose shape is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Scalar(f64),
    Array(ArrayD<f64>),
}

impl MetricValue {
    /// Number of dimensions of the value; zero for scalars.
    #[must_use]
    pub fn ndim(&self) -> usize {
        match self {
            MetricValue::Scalar(_) => 0,
            MetricValue::Array(array) => array.ndim(),
        }
    }

    /// Returns the value as an array, wrapping scalars in a 0-d array.
    #[must_use]
    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            MetricValue::Scalar(value) => ArrayD::from_elem(ndarray::IxDyn(&[]), value),
            MetricValue::Array(array) => array,
        }
    }
}

impl AsScalar for MetricValue {
    fn as_scalar(&self) -> Option<f64> {
        match self {
            MetricValue::Scalar(value) => Some(*value),
            MetricValue::Array(array) => array.as_scalar(),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Scalar(value)
    }
}

impl<S, D> From<ArrayBase<S, D>> for MetricValue
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn from(array: ArrayBase<S, D>) -> Self {
        MetricValue::Array(array.to_owned().into_dyn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array2, arr0, array};

    #[test]
    fn numbers_are_scalars() {
        assert_eq!(2.5f64.as_scalar(), Some(2.5));
        assert_eq!(3i32.as_scalar(), Some(3.0));
        assert_eq!(7usize.as_scalar(), Some(7.0));
        assert_eq!((-4i64).as_scalar(), Some(-4.0));
    }

    #[test]
    fn only_zero_dimensional_arrays_are_scalars() {
        assert_eq!(arr0(1.5).as_scalar(), Some(1.5));
        assert_eq!(array![1.5].as_scalar(), None);
        assert_eq!(Array2::<f64>::ones((3, 2)).as_scalar(), None);
        assert_eq!(vec![1.0].as_scalar(), None);
    }

    #[test]
    fn metric_value_scalarity_follows_shape() {
        let scalar = MetricValue::from(0.25);
        assert_eq!(scalar.ndim(), 0);
        assert_eq!(scalar.as_scalar(), Some(0.25));

        let wrapped = MetricValue::from(arr0(0.5));
        assert_eq!(wrapped.ndim(), 0);
        assert_eq!(wrapped.as_scalar(), Some(0.5));

        let matrix = MetricValue::from(Array2::<f64>::ones((2, 2)));
        assert_eq!(matrix.ndim(), 2);
        assert_eq!(matrix.as_scalar(), None);
    }

    #[test]
    fn into_array_wraps_scalars() {
        let array = MetricValue::Scalar(4.0).into_array();
        assert_eq!(array.ndim(), 0);
        assert_relative_eq!(array.as_scalar().unwrap_or(f64::NAN), 4.0);
    }
}
