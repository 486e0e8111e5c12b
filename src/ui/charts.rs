use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::analytics::binning::CategoryCount;
use crate::analytics::genres::GenreCount;
use crate::analytics::trend::YearCount;
use crate::color::{category_color, ColorMap};

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Quartile category bars
// ---------------------------------------------------------------------------

/// One bar per quartile bucket; the legend carries the bucket labels.
pub fn category_chart(ui: &mut Ui, id: &str, y_label: &str, counts: &[CategoryCount]) {
    Plot::new(id)
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .y_axis_label(y_label)
        .allow_drag(false)
        .allow_scroll(false)
        .show_x(false)
        .show(ui, |plot_ui| {
            for (i, cc) in counts.iter().enumerate() {
                let bar = Bar::new(i as f64, cc.count as f64).width(0.7);
                let chart = BarChart::new(vec![bar])
                    .name(cc.category.label())
                    .color(category_color(cc.category));
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Genre frequency
// ---------------------------------------------------------------------------

/// Horizontal bars, most frequent genre on top.
pub fn genre_chart(ui: &mut Ui, frequency: &[GenreCount]) {
    let colors = ColorMap::new(frequency.iter().map(|g| g.genre.as_str()));
    let n = frequency.len();
    let bars: Vec<Bar> = frequency
        .iter()
        .enumerate()
        .map(|(i, g)| {
            Bar::new((n - 1 - i) as f64, g.count as f64)
                .name(&g.genre)
                .fill(colors.color_for(&g.genre))
                .width(0.8)
        })
        .collect();

    Plot::new("genre_frequency")
        .height(CHART_HEIGHT.max(18.0 * n as f32))
        .x_axis_label("Count")
        .allow_drag(false)
        .allow_scroll(false)
        .show_y(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().name("Genre"));
        });
}

// ---------------------------------------------------------------------------
// Release trend
// ---------------------------------------------------------------------------

pub fn trend_chart(ui: &mut Ui, trend: &[YearCount]) {
    let points: PlotPoints = trend
        .iter()
        .map(|y| [y.year as f64, y.count as f64])
        .collect();

    Plot::new("release_trend")
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label("Number of Releases")
        .allow_boxed_zoom(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("Releases").width(2.0));
        });
}
