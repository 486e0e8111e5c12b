use serde::Serialize;

use super::binning::{tally, Category, CategoryCount, QuartileEdges};
use super::max_value;
use crate::data::filter::FilteredView;
use crate::data::model::MovieSummary;

/// Vote-average highlights and distribution of a filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteAnalysis {
    pub edges: Option<QuartileEdges>,
    pub max_vote: Option<f64>,
    /// Every row sharing the highest vote average.
    pub top_rated: Vec<MovieSummary>,
    pub categories: Vec<CategoryCount>,
}

/// Vote category of each row of the view under `edges`, in view order.
pub fn vote_categories(
    view: &FilteredView<'_>,
    edges: Option<&QuartileEdges>,
) -> Vec<Option<Category>> {
    view.rows()
        .map(|r| edges.and_then(|e| e.categorize(r.vote_average)))
        .collect()
}

pub fn analyze_votes(view: &FilteredView<'_>) -> VoteAnalysis {
    let edges = QuartileEdges::from_values(view.rows().map(|r| r.vote_average));
    let categories = tally(vote_categories(view, edges.as_ref()));
    let max_vote = max_value(view.rows().map(|r| r.vote_average));
    let top_rated = match max_vote {
        Some(max) => view.summaries_where(|r| r.vote_average == max),
        None => Vec::new(),
    };
    VoteAnalysis {
        edges,
        max_vote,
        top_rated,
        categories,
    }
}
