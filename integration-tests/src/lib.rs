//! Mock metrics shared by the integration tests.

use disparity_core::MetricValue;
use ndarray::Array2;

/// Labels used by most tests.
pub const Y_TRUE: [i32; 8] = [0, 0, 1, 1, 0, 1, 1, 1];

/// Predictions used by most tests.
pub const Y_PRED: [i32; 8] = [0, 1, 1, 1, 1, 0, 0, 1];

/// Sums the labels.
pub fn sum_true(y_true: &[i32], _y_pred: &[i32]) -> i32 {
    y_true.iter().sum()
}

/// Sums the labels scaled by their weights.
pub fn weighted_sum_true(y_true: &[i32], _y_pred: &[i32], sample_weight: &[f64]) -> f64 {
    y_true
        .iter()
        .zip(sample_weight)
        .map(|(&y, &w)| f64::from(y) * w)
        .sum()
}

/// A matrix of ones with one row per sample and one column per positive
/// prediction.
pub fn ones_matrix(y_true: &[i32], y_pred: &[i32]) -> Array2<f64> {
    let cols = y_pred
        .iter()
        .map(|&p| usize::try_from(p).unwrap_or(0))
        .sum::<usize>();
    Array2::ones((y_true.len(), cols))
}

/// The negated total number of labels and predictions.
pub fn negative_lengths(y_true: &[i32], y_pred: &[i32]) -> i64 {
    let total = y_true.len() + y_pred.len();
    -i64::try_from(total).unwrap_or(i64::MAX)
}

/// The difference in length between labels and predictions, always zero.
pub fn zero_lengths(y_true: &[i32], y_pred: &[i32]) -> i64 {
    let y_true = i64::try_from(y_true.len()).unwrap_or(i64::MAX);
    let y_pred = i64::try_from(y_pred.len()).unwrap_or(i64::MAX);
    y_true - y_pred
}

/// The total length of labels, predictions, and weights.
pub fn weighted_lengths(y_true: &[i32], y_pred: &[i32], sample_weight: &[f64]) -> usize {
    y_true.len() + y_pred.len() + sample_weight.len()
}

/// The positive rate as a scalar, or the per-sample labels when there are
/// fewer than `min_samples` samples.
pub fn positive_rate_or_labels(min_samples: usize) -> impl Fn(&[i32], &[i32]) -> MetricValue {
    move |y_true, _y_pred| {
        if y_true.len() < min_samples {
            let labels: Vec<f64> = y_true.iter().map(|&y| f64::from(y)).collect();
            MetricValue::from(ndarray::Array1::from(labels))
        } else {
            #[allow(clippy::cast_precision_loss)]
            let rate = y_true.iter().filter(|&&y| y == 1).count() as f64 / y_true.len() as f64;
            MetricValue::Scalar(rate)
        }
    }
}
