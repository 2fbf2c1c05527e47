//! Core traits and types for group-wise metric evaluation.
//!
//! This crate defines the shared abstractions that the evaluation engine and
//! user-supplied metrics build on:
//!
//! - [`Metric`]: a callable that maps a [`Samples`] view to a typed result
//! - [`unweighted`], [`weighted`], [`optionally_weighted`]: adapters that turn
//!   plain closures into metrics with a fixed calling convention
//! - [`GroupKey`]: a group identifier for mixing integer, string, and boolean
//!   groups in a single partition
//! - [`IntoSamples`]: coercion of array-like inputs into owned sequences
//! - [`IndexedParams`]: named per-sample parameters sliced alongside the data
//! - [`AsScalar`], [`MetricValue`]: runtime scalar checks on metric results

mod key;
mod metric;
mod params;
mod samples;
mod value;

pub use key::GroupKey;
pub use metric::{
    Metric, OptionallyWeighted, Samples, SignatureError, Unweighted, Weighted,
    optionally_weighted, unweighted, weighted,
};
pub use params::IndexedParams;
pub use samples::{ConversionError, IntoSamples, Labeled};
pub use value::{AsScalar, MetricValue};
