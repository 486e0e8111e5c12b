//! FlixLens: descriptive statistics over a movie/show catalogue upload.
//!
//! The pipeline is `data` (load, cache, clean, filter) followed by
//! `analytics` (stateless derivations bundled into a
//! [`Dashboard`](analytics::dashboard::Dashboard)). `state`, `app` and `ui`
//! are the egui front end; `report` is the headless JSON output.

pub mod analytics;
pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod data;
pub mod report;
pub mod state;
pub mod ui;

#[cfg(test)]
mod test_support;
