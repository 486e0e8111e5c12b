use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analytics::binning::Category;
use crate::color::category_color;
use crate::data::model::{MovieSummary, Preview};

const ROW_HEIGHT: f32 = 20.0;
const MAX_TABLE_HEIGHT: f32 = 260.0;

/// Which fields of a [`MovieSummary`] a table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Genre,
    Year,
    VoteAverage,
    Popularity,
}

impl Field {
    fn header(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Genre => "Genre",
            Field::Year => "Release_Year",
            Field::VoteAverage => "Vote_Average",
            Field::Popularity => "Popularity",
        }
    }

    fn value(self, movie: &MovieSummary) -> String {
        match self {
            Field::Title => movie.title.clone(),
            Field::Genre => movie.genre.clone(),
            Field::Year => movie.release_year.map(|y| y.to_string()).unwrap_or_default(),
            Field::VoteAverage => format!("{}", movie.vote_average),
            Field::Popularity => format!("{:.3}", movie.popularity),
        }
    }
}

/// Striped table of movie rows.
pub fn movie_table(ui: &mut Ui, id: &str, movies: &[MovieSummary], fields: &[Field]) {
    if movies.is_empty() {
        ui.label(RichText::new("No matching rows.").italics());
        return;
    }
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(MAX_TABLE_HEIGHT)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(160.0).clip(true))
            .columns(Column::auto().at_least(80.0), fields.len().saturating_sub(1))
            .header(ROW_HEIGHT + 4.0, |mut header| {
                for field in fields {
                    header.col(|ui| {
                        ui.strong(field.header());
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, movies.len(), |mut row| {
                    let movie = &movies[row.index()];
                    for field in fields {
                        row.col(|ui| {
                            ui.label(field.value(movie));
                        });
                    }
                });
            });
    });
}

/// Head of the raw upload, every column.
pub fn preview_table(ui: &mut Ui, preview: &Preview) {
    if preview.rows.is_empty() {
        ui.label(RichText::new("The upload has no data rows.").italics());
        return;
    }
    egui::ScrollArea::horizontal()
        .id_salt("preview_scroll")
        .show(ui, |ui: &mut Ui| {
            ui.push_id("preview_table", |ui: &mut Ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .vscroll(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .columns(
                        Column::auto().at_least(60.0).at_most(260.0).clip(true),
                        preview.columns.len(),
                    )
                    .header(ROW_HEIGHT + 4.0, |mut header| {
                        for col_name in &preview.columns {
                            header.col(|ui| {
                                ui.label(RichText::new(col_name).strong().monospace());
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(ROW_HEIGHT, preview.rows.len(), |mut row| {
                            let cells = &preview.rows[row.index()];
                            for cell in cells {
                                row.col(|ui| {
                                    ui.label(RichText::new(cell).monospace().small());
                                });
                            }
                        });
                    });
            });
        });
}

/// Coloured label for a quartile bucket.
pub fn category_label(ui: &mut Ui, category: Category, count: usize) {
    ui.label(RichText::new(format!("{category}: {count}")).color(category_color(category)));
}
