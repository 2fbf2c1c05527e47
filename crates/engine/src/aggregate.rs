use std::fmt::Debug;

use disparity_core::AsScalar;
use thiserror::Error;

use crate::GroupSummary;

/// Errors that can occur when reducing a summary to a single number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// The overall result is not a scalar.
    #[error("overall metric result is not a scalar")]
    NonScalarOverall,

    /// A group's result is not a scalar.
    #[error("metric result for group {group} is not a scalar")]
    NonScalarGroup { group: String },

    /// The summary has no groups to aggregate over.
    #[error("summary has no groups")]
    NoGroups,
}

/// Returns the smallest per-group result.
///
/// A NaN group result makes the minimum NaN.
///
/// # Errors
///
/// Returns an error if the overall result or any group result is not a
/// scalar, or if the summary has no groups.
pub fn group_min_from_summary<K, O>(summary: &GroupSummary<K, O>) -> Result<f64, AggregateError>
where
    K: Debug,
    O: AsScalar,
{
    Scalars::read(summary).map(|scalars| scalars.min())
}

/// Returns the largest per-group result.
///
/// A NaN group result makes the maximum NaN.
///
/// # Errors
///
/// Returns an error if the overall result or any group result is not a
/// scalar, or if the summary has no groups.
pub fn group_max_from_summary<K, O>(summary: &GroupSummary<K, O>) -> Result<f64, AggregateError>
where
    K: Debug,
    O: AsScalar,
{
    Scalars::read(summary).map(|scalars| scalars.max())
}

/// Returns the spread between the largest and smallest group results.
///
/// # Errors
///
/// Returns an error if the overall result or any group result is not a
/// scalar, or if the summary has no groups.
pub fn difference_from_summary<K, O>(summary: &GroupSummary<K, O>) -> Result<f64, AggregateError>
where
    K: Debug,
    O: AsScalar,
{
    Scalars::read(summary).map(|scalars| scalars.max() - scalars.min())
}

/// Returns the smallest group result divided by the largest.
///
/// The result is NaN when any group result is negative or NaN, and `1.0`
/// when every group result is zero. Otherwise it lies in `[0, 1]`.
///
/// # Errors
///
/// Returns an error if the overall result or any group result is not a
/// scalar, or if the summary has no groups.
pub fn ratio_from_summary<K, O>(summary: &GroupSummary<K, O>) -> Result<f64, AggregateError>
where
    K: Debug,
    O: AsScalar,
{
    Scalars::read(summary).map(|scalars| ratio_of(scalars.min(), scalars.max()))
}

/// Returns the largest absolute gap between a group result and the overall
/// result.
///
/// # Errors
///
/// Returns an error if the overall result or any group result is not a
/// scalar, or if the summary has no groups.
pub fn difference_to_overall<K, O>(summary: &GroupSummary<K, O>) -> Result<f64, AggregateError>
where
    K: Debug,
    O: AsScalar,
{
    let scalars = Scalars::read(summary)?;
    Ok(scalars
        .groups
        .iter()
        .map(|&group| (group - scalars.overall).abs())
        .fold(f64::NEG_INFINITY, nan_max))
}

/// Returns the smallest ratio between a group result and the overall result.
///
/// Each group is compared to the overall result by dividing the smaller of
/// the two by the larger, with the same sign and zero handling as
/// [`ratio_from_summary`].
///
/// # Errors
///
/// Returns an error if the overall result or any group result is not a
/// scalar, or if the summary has no groups.
pub fn ratio_to_overall<K, O>(summary: &GroupSummary<K, O>) -> Result<f64, AggregateError>
where
    K: Debug,
    O: AsScalar,
{
    let scalars = Scalars::read(summary)?;
    Ok(scalars
        .groups
        .iter()
        .map(|&group| {
            ratio_of(
                nan_min(group, scalars.overall),
                nan_max(group, scalars.overall),
            )
        })
        .fold(f64::INFINITY, nan_min))
}

impl<K, O> GroupSummary<K, O>
where
    K: Debug,
    O: AsScalar,
{
    /// See [`group_min_from_summary`].
    ///
    /// # Errors
    ///
    /// Returns an error if the summary is not made of scalars or is empty.
    pub fn group_min(&self) -> Result<f64, AggregateError> {
        group_min_from_summary(self)
    }

    /// See [`group_max_from_summary`].
    ///
    /// # Errors
    ///
    /// Returns an error if the summary is not made of scalars or is empty.
    pub fn group_max(&self) -> Result<f64, AggregateError> {
        group_max_from_summary(self)
    }

    /// See [`difference_from_summary`].
    ///
    /// # Errors
    ///
    /// Returns an error if the summary is not made of scalars or is empty.
    pub fn difference(&self) -> Result<f64, AggregateError> {
        difference_from_summary(self)
    }

    /// See [`ratio_from_summary`].
    ///
    /// # Errors
    ///
    /// Returns an error if the summary is not made of scalars or is empty.
    pub fn ratio(&self) -> Result<f64, AggregateError> {
        ratio_from_summary(self)
    }
}

/// Divides `min` by `max`, where `min <= max` are bounds of metric results.
///
/// Negative or NaN bounds have no meaningful ratio and give NaN. Two zero
/// bounds are equal and give `1.0`.
pub(crate) fn ratio_of(min: f64, max: f64) -> f64 {
    if min.is_nan() || max.is_nan() || min < 0.0 {
        f64::NAN
    } else if max == 0.0 {
        1.0
    } else {
        min / max
    }
}

/// Scalar values read out of a summary, with at least one group.
struct Scalars {
    overall: f64,
    groups: Vec<f64>,
}

impl Scalars {
    fn read<K, O>(summary: &GroupSummary<K, O>) -> Result<Self, AggregateError>
    where
        K: Debug,
        O: AsScalar,
    {
        let overall = summary
            .overall()
            .as_scalar()
            .ok_or(AggregateError::NonScalarOverall)?;

        let groups = summary
            .by_group()
            .iter()
            .map(|(key, value)| {
                value.as_scalar().ok_or_else(|| AggregateError::NonScalarGroup {
                    group: format!("{key:?}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if groups.is_empty() {
            return Err(AggregateError::NoGroups);
        }

        Ok(Self { overall, groups })
    }

    fn min(&self) -> f64 {
        self.groups.iter().copied().fold(f64::INFINITY, nan_min)
    }

    fn max(&self) -> f64 {
        self.groups.iter().copied().fold(f64::NEG_INFINITY, nan_max)
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array2, ArrayD, IxDyn, arr0};

    use crate::ByGroup;

    fn summary<const N: usize>(
        overall: f64,
        groups: [(&'static str, f64); N],
    ) -> GroupSummary<&'static str, f64> {
        GroupSummary::new(overall, groups.into_iter().collect::<ByGroup<_, _>>())
    }

    #[test]
    fn between_groups() {
        let summary = summary(5.0, [("a", 1.0), ("b", 1.0), ("c", 3.0)]);

        assert_relative_eq!(group_min_from_summary(&summary).expect("scalar summary"), 1.0);
        assert_relative_eq!(group_max_from_summary(&summary).expect("scalar summary"), 3.0);
        assert_relative_eq!(difference_from_summary(&summary).expect("scalar summary"), 2.0);
        assert_relative_eq!(ratio_from_summary(&summary).expect("scalar summary"), 1.0 / 3.0);
    }

    #[test]
    fn all_zero_results_have_unit_ratio() {
        let summary = summary(0.0, [("a", 0.0), ("b", 0.0)]);

        assert_relative_eq!(difference_from_summary(&summary).expect("scalar summary"), 0.0);
        assert_relative_eq!(ratio_from_summary(&summary).expect("scalar summary"), 1.0);
    }

    #[test]
    fn negative_results_have_nan_ratio() {
        let summary = summary(-16.0, [("a", -10.0), ("b", -6.0)]);

        assert_relative_eq!(group_min_from_summary(&summary).expect("scalar summary"), -10.0);
        assert_relative_eq!(group_max_from_summary(&summary).expect("scalar summary"), -6.0);
        assert_relative_eq!(difference_from_summary(&summary).expect("scalar summary"), 4.0);
        assert!(ratio_from_summary(&summary).expect("scalar summary").is_nan());
    }

    #[test]
    fn ratio_policy() {
        assert!(ratio_of(-1.0, 2.0).is_nan());
        assert!(ratio_of(f64::NAN, 2.0).is_nan());
        assert!(ratio_of(0.0, f64::NAN).is_nan());
        assert_relative_eq!(ratio_of(0.0, 0.0), 1.0);
        assert_relative_eq!(ratio_of(0.0, 4.0), 0.0);
        assert_relative_eq!(ratio_of(2.0, 4.0), 0.5);
    }

    #[test]
    fn nan_group_results_propagate() {
        let summary = summary(1.0, [("a", 1.0), ("b", f64::NAN), ("c", 2.0)]);

        assert!(group_min_from_summary(&summary).expect("scalar summary").is_nan());
        assert!(group_max_from_summary(&summary).expect("scalar summary").is_nan());
        assert!(difference_from_summary(&summary).expect("scalar summary").is_nan());
        assert!(ratio_from_summary(&summary).expect("scalar summary").is_nan());
    }

    #[test]
    fn matrix_results_cannot_be_aggregated() {
        let by_group: ByGroup<&str, Array2<f64>> =
            [("a", Array2::zeros((3, 2)))].into_iter().collect();
        let summary = GroupSummary::new(Array2::<f64>::zeros((8, 5)), by_group);

        let expected = Err(AggregateError::NonScalarOverall);
        assert_eq!(group_min_from_summary(&summary), expected);
        assert_eq!(group_max_from_summary(&summary), expected);
        assert_eq!(difference_from_summary(&summary), expected);
        assert_eq!(ratio_from_summary(&summary), expected);
    }

    #[test]
    fn non_scalar_group_is_named() {
        let by_group: ByGroup<&str, ArrayD<f64>> = [
            ("a", arr0(1.0).into_dyn()),
            ("b", ArrayD::zeros(IxDyn(&[2]))),
        ]
        .into_iter()
        .collect();
        let summary = GroupSummary::new(arr0(1.0).into_dyn(), by_group);

        let err = difference_from_summary(&summary).expect_err("group b is a vector");
        assert_eq!(
            err,
            AggregateError::NonScalarGroup {
                group: "\"b\"".to_string()
            }
        );
        assert_eq!(err.to_string(), "metric result for group \"b\" is not a scalar");
    }

    #[test]
    fn empty_summary_has_no_groups() {
        let summary = summary(0.0, []);

        assert_eq!(ratio_from_summary(&summary), Err(AggregateError::NoGroups));
        assert_eq!(summary.group_min(), Err(AggregateError::NoGroups));
    }

    #[test]
    fn relative_to_overall() {
        let summary = summary(0.5, [("a", 0.25), ("b", 0.5), ("c", 0.75)]);

        assert_relative_eq!(difference_to_overall(&summary).expect("scalar summary"), 0.25);
        assert_relative_eq!(ratio_to_overall(&summary).expect("scalar summary"), 0.5);
    }

    #[test]
    fn summary_methods_match_functions() {
        let summary = summary(5.0, [("a", 2.0), ("b", 3.0)]);

        assert_relative_eq!(summary.group_min().expect("scalar summary"), 2.0);
        assert_relative_eq!(summary.group_max().expect("scalar summary"), 3.0);
        assert_relative_eq!(summary.difference().expect("scalar summary"), 1.0);
        assert_relative_eq!(summary.ratio().expect("scalar summary"), 2.0 / 3.0);
    }
}
