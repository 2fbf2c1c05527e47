//! Group-wise metric evaluation.
//!
//! A metric is applied once to all samples and once to each group of samples
//! sharing a sensitive feature value. The resulting [`GroupSummary`] can be
//! reduced to a single disparity with the aggregate functions:
//!
//! - [`group_summary`], [`group_summary_weighted`], [`evaluate`]: evaluate a
//!   metric overall and by group
//! - [`group_min_from_summary`], [`group_max_from_summary`],
//!   [`difference_from_summary`], [`ratio_from_summary`]: statistics across
//!   the per-group results
//! - [`make_metric_group_summary`]: binds a metric into a callable returning
//!   its summary
//! - [`make_derived_metric`]: binds a metric and an [`Aggregate`] into a
//!   callable returning one number

mod aggregate;
mod config;
mod derived;
mod error;
mod evaluate;
mod grouped;
mod inputs;
mod summary;

pub mod normalize;
pub mod observe;
pub mod partition;

pub use aggregate::{
    AggregateError, difference_from_summary, difference_to_overall, group_max_from_summary,
    group_min_from_summary, ratio_from_summary, ratio_to_overall,
};
pub use config::{Config, Method};
pub use derived::{Aggregate, DerivedError, DerivedMetric, make_derived_metric};
pub use error::{Error, InputError};
#[cfg(feature = "parallel")]
pub use evaluate::par_evaluate;
pub use evaluate::{
    EvaluateResult, evaluate, evaluate_observed, group_summary, group_summary_weighted,
};
pub use grouped::{GroupedMetric, make_metric_group_summary};
pub use inputs::Inputs;
pub use observe::{Event, Observer};
pub use summary::{ByGroup, GroupSummary};

pub use disparity_core::{
    AsScalar, GroupKey, IntoSamples, Labeled, Metric, MetricValue, Samples, SignatureError,
    optionally_weighted, unweighted, weighted,
};
