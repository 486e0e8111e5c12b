use serde::Serialize;

use super::binning::CategoryBreakdown;
use super::{max_value, min_value};
use crate::data::filter::FilteredView;
use crate::data::model::MovieSummary;

/// Most and least popular rows of a filtered view. Ties are all kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularityExtremes {
    pub max_popularity: Option<f64>,
    pub min_popularity: Option<f64>,
    pub most_popular: Vec<MovieSummary>,
    pub least_popular: Vec<MovieSummary>,
}

pub fn popularity_extremes(view: &FilteredView<'_>) -> PopularityExtremes {
    let max_popularity = max_value(view.rows().map(|r| r.popularity));
    let min_popularity = min_value(view.rows().map(|r| r.popularity));

    let most_popular = max_popularity
        .map(|max| view.summaries_where(|r| r.popularity == max))
        .unwrap_or_default();
    let least_popular = min_popularity
        .map(|min| view.summaries_where(|r| r.popularity == min))
        .unwrap_or_default();

    PopularityExtremes {
        max_popularity,
        min_popularity,
        most_popular,
        least_popular,
    }
}

/// Quartile breakdown of Popularity over the view.
pub fn popularity_categories(view: &FilteredView<'_>) -> CategoryBreakdown {
    let values: Vec<f64> = view.rows().map(|r| r.popularity).collect();
    CategoryBreakdown::from_values(&values)
}
