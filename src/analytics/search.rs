use crate::data::filter::FilteredView;
use crate::data::model::MovieSummary;

/// Case-insensitive substring match. A missing title never matches.
pub fn title_matches(title: Option<&str>, query: &str) -> bool {
    match title {
        Some(title) => title.to_lowercase().contains(&query.to_lowercase()),
        None => false,
    }
}

/// Rows of the view whose title contains `query`. An empty query performs
/// no search and yields `None`.
pub fn search_titles(view: &FilteredView<'_>, query: &str) -> Option<Vec<MovieSummary>> {
    if query.is_empty() {
        return None;
    }
    Some(view.summaries_where(|r| title_matches(Some(&r.title), query)))
}
