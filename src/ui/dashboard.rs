use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::analytics::dashboard::Dashboard;
use crate::state::AppState;
use crate::ui::charts::{category_chart, genre_chart, trend_chart};
use crate::ui::tables::{category_label, movie_table, preview_table, Field};

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the dashboard, the halting error, or the idle prompt.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    if let Some(err) = &state.error_message {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(err).color(Color32::RED).heading());
        });
        return;
    }

    let Some(dash) = &state.dashboard else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Please upload a CSV file to continue.  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| sections(ui, dash));
}

fn sections(ui: &mut Ui, dash: &Dashboard) {
    ui.heading("Movie Catalogue Analysis");
    if dash.counts.unparsed_dates > 0 {
        ui.label(
            RichText::new(format!(
                "{} release dates could not be parsed and are left out of the trend.",
                dash.counts.unparsed_dates
            ))
            .weak(),
        );
    }
    ui.add_space(6.0);

    ui.strong("Data preview");
    preview_table(ui, &dash.preview);
    ui.separator();

    ui.columns(2, |cols| {
        cols[0].heading("Popularity Categories");
        category_chart(
            &mut cols[0],
            "popularity_categories",
            "Movies",
            &dash.popularity_categories.counts,
        );

        cols[1].heading("Most Frequent Genres");
        genre_chart(&mut cols[1], &dash.genre_frequency);
    });
    ui.separator();

    ui.heading("Highest Vote Average");
    match dash.votes.max_vote {
        Some(max) => {
            ui.label(RichText::new(format!("Highest vote average: {max}")).strong());
            movie_table(
                ui,
                "top_rated",
                &dash.votes.top_rated,
                &[Field::Title, Field::VoteAverage, Field::Genre],
            );
        }
        None => {
            ui.label("No rows for this genre.");
        }
    }
    ui.add_space(6.0);
    if let Some(edges) = &dash.votes.edges {
        let [min, q1, q2, q3, max] = edges.as_array();
        ui.label(format!(
            "Quartile edges: {min:.2} | {q1:.2} | {q2:.2} | {q3:.2} | {max:.2}"
        ));
        if edges.is_degenerate() {
            ui.label(RichText::new("All vote averages are equal; every row is in one bin.").weak());
        }
    }
    ui.horizontal(|ui: &mut Ui| {
        for cc in &dash.votes.categories {
            category_label(ui, cc.category, cc.count);
        }
    });
    category_chart(ui, "vote_categories", "Rows", &dash.votes.categories);
    ui.separator();

    ui.heading("Movies by Popularity");
    ui.columns(2, |cols| {
        cols[0].strong("Most Popular");
        movie_table(
            &mut cols[0],
            "most_popular",
            &dash.popularity.most_popular,
            &[Field::Title, Field::Popularity, Field::Genre],
        );
        cols[1].strong("Least Popular");
        movie_table(
            &mut cols[1],
            "least_popular",
            &dash.popularity.least_popular,
            &[Field::Title, Field::Popularity, Field::Genre],
        );
    });
    ui.separator();

    ui.heading("Releases by Year");
    trend_chart(ui, &dash.release_trend);

    if let (Some(query), Some(results)) = (&dash.search_query, &dash.search_results) {
        ui.separator();
        ui.heading(format!("Search results for “{query}” ({})", results.len()));
        movie_table(
            ui,
            "search_results",
            results,
            &[Field::Title, Field::Genre, Field::VoteAverage, Field::Popularity],
        );
    }

    ui.add_space(16.0);
}
