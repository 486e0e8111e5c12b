use std::path::Path;

use crate::analytics::dashboard::Dashboard;
use crate::config::Config;
use crate::data::cache::UploadCache;
use crate::data::filter::{GenreSelection, ALL_GENRES};
use crate::data::loader::Upload;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,

    /// Parsed uploads, keyed by content hash.
    pub cache: UploadCache,

    /// Current genre selector choice.
    pub selected_genre: String,

    /// Current title search text.
    pub search_query: String,

    /// Results of the last full pipeline run (None when idle or on error).
    pub dashboard: Option<Dashboard>,

    /// Error that halted the pipeline, shown instead of the dashboard.
    pub error_message: Option<String>,

    /// Status / success message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cache: UploadCache::new(),
            selected_genre: ALL_GENRES.to_string(),
            search_query: String::new(),
            dashboard: None,
            error_message: None,
            status_message: None,
        }
    }

    /// Read a file from disk and make it the current upload.
    pub fn open_path(&mut self, path: &Path) {
        match Upload::from_path(path) {
            Ok(upload) => self.open_upload(upload),
            Err(e) => {
                log::error!("Failed to read file: {e}");
                self.reject_upload(e.to_string());
            }
        }
    }

    /// Make `upload` the current upload and rebuild the dashboard. The
    /// genre selection resets; the search text is kept.
    pub fn open_upload(&mut self, upload: Upload) {
        match self.cache.load(&upload) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    table.len(),
                    table.columns
                );
                self.selected_genre = ALL_GENRES.to_string();
                self.refresh();
                if self.dashboard.is_some() {
                    self.status_message = Some("Data successfully loaded!".to_string());
                }
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", upload.name);
                self.reject_upload(format!("Error: {e}"));
            }
        }
    }

    pub fn set_genre(&mut self, genre: &str) {
        if self.selected_genre != genre {
            self.selected_genre = genre.to_string();
            self.refresh();
        }
    }

    pub fn set_search(&mut self, query: &str) {
        if self.search_query != query {
            self.search_query = query.to_string();
            self.refresh();
        }
    }

    /// Re-run the whole pipeline over the cached upload.
    pub fn refresh(&mut self) {
        let Some(current) = self.cache.current() else {
            self.dashboard = None;
            return;
        };
        match Dashboard::build(
            &current.name,
            &current.table,
            &GenreSelection::from_choice(&self.selected_genre),
            &self.search_query,
            &self.config.dashboard_options(),
        ) {
            Ok(dashboard) => {
                self.dashboard = Some(dashboard);
                self.error_message = None;
            }
            Err(e) => {
                log::warn!("{}: {e}", current.name);
                let message = e.to_string();
                self.fail(message);
            }
        }
    }

    /// A rejected upload replaces the previous one: nothing is left to
    /// rebuild until the next successful upload.
    fn reject_upload(&mut self, message: String) {
        self.cache.clear();
        self.fail(message);
    }

    fn fail(&mut self, message: String) {
        self.dashboard = None;
        self.status_message = None;
        self.error_message = Some(message);
    }
}
