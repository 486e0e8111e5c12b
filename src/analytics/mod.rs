//! Stateless derivations over a [`FilteredView`](crate::data::filter::FilteredView).
//!
//! Every function here runs from scratch on each interaction; nothing is
//! memoised beyond the raw upload.

pub mod binning;
pub mod dashboard;
pub mod genres;
pub mod popularity;
pub mod search;
pub mod trend;
pub mod vote;

/// Largest non-NaN value.
pub(crate) fn max_value(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

/// Smallest non-NaN value.
pub(crate) fn min_value(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.min(v))))
}
