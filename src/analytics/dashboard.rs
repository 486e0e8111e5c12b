use serde::Serialize;

use super::binning::CategoryBreakdown;
use super::genres::{genre_frequency, GenreCount};
use super::popularity::{popularity_categories, popularity_extremes, PopularityExtremes};
use super::search::search_titles;
use super::trend::{release_trend, YearCount};
use super::vote::{analyze_votes, VoteAnalysis};
use crate::data::clean::{clean, CleanOptions};
use crate::data::error::LoadError;
use crate::data::filter::{genre_options, FilteredView, GenreSelection};
use crate::data::model::{MovieSummary, Preview, RawTable};

/// Settings that shape the dashboard but not the analytics themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    pub preview_rows: usize,
    pub clean: CleanOptions,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        DashboardOptions {
            preview_rows: 5,
            clean: CleanOptions::default(),
        }
    }
}

/// Row counts at each pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowCounts {
    pub raw: usize,
    pub cleaned: usize,
    pub exploded: usize,
    pub filtered: usize,
    pub unparsed_dates: usize,
}

/// Everything the presentation layer renders for one interaction.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub source: String,
    pub counts: RowCounts,
    pub selected_genre: String,
    pub genre_options: Vec<String>,
    pub preview: Preview,
    pub genre_frequency: Vec<GenreCount>,
    pub popularity_categories: CategoryBreakdown,
    pub votes: VoteAnalysis,
    pub popularity: PopularityExtremes,
    pub release_trend: Vec<YearCount>,
    pub search_query: Option<String>,
    pub search_results: Option<Vec<MovieSummary>>,
}

impl Dashboard {
    /// Run the whole pipeline over a raw upload: validate, clean, filter,
    /// then every analytic. Nothing is reused from a previous run.
    pub fn build(
        source: &str,
        raw: &RawTable,
        genre: &GenreSelection,
        query: &str,
        opts: &DashboardOptions,
    ) -> Result<Self, LoadError> {
        let table = clean(raw, &opts.clean)?;
        let view = FilteredView::new(&table, genre);
        let stats = table.stats;

        let counts = RowCounts {
            raw: stats.raw_rows,
            cleaned: stats.raw_rows - stats.dropped_rows,
            exploded: stats.exploded_rows,
            filtered: view.len(),
            unparsed_dates: stats.unparsed_dates,
        };
        log::debug!(
            "Dashboard for {source}: genre={} query={query:?} rows={counts:?}",
            genre.label()
        );

        let search_results = search_titles(&view, query);
        Ok(Dashboard {
            source: source.to_string(),
            counts,
            selected_genre: genre.label().to_string(),
            genre_options: genre_options(&table),
            preview: raw.preview(opts.preview_rows),
            genre_frequency: genre_frequency(&table),
            popularity_categories: popularity_categories(&view),
            votes: analyze_votes(&view),
            popularity: popularity_extremes(&view),
            release_trend: release_trend(&view),
            search_query: search_results.as_ref().map(|_| query.to_string()),
            search_results,
        })
    }
}
