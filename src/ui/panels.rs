use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;
use crate::ui::banner::Banner;

// ---------------------------------------------------------------------------
// Left side panel – banner and filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, banner: &mut Banner) {
    banner.show(ui);

    ui.heading("Filter Options");
    ui.separator();

    let Some(dashboard) = &state.dashboard else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let options = dashboard.genre_options.clone();
    let current = state.selected_genre.clone();

    ui.strong("Select Genre to Filter");
    let mut chosen: Option<String> = None;
    egui::ComboBox::from_id_salt("genre_filter")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for genre in &options {
                if ui.selectable_label(current == *genre, genre).clicked() {
                    chosen = Some(genre.clone());
                }
            }
        });
    if let Some(genre) = chosen {
        state.set_genre(&genre);
    }

    ui.add_space(8.0);
    ui.strong("Search a Movie");
    let mut query = state.search_query.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut query).hint_text("Enter movie title or keyword"),
    );
    if response.changed() {
        state.set_search(&query);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(dash) = &state.dashboard {
            ui.label(format!(
                "{}: {} records, {} genre rows, {} shown",
                dash.source, dash.counts.raw, dash.counts.exploded, dash.counts.filtered
            ));
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::GREEN));
        }
        if let Some(msg) = &state.error_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload your CSV file")
        .add_filter("CSV", &["csv"])
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}
