use anyhow::Result;
use clap::Parser;
use eframe::egui;
use flixlens::app::FlixLensApp;
use flixlens::cli::Args;
use flixlens::config::Config;
use flixlens::report;
use flixlens::state::AppState;
use flixlens::ui::banner::Banner;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::load(args.config.as_deref())?;

    if let (Some(out), Some(file)) = (&args.report, &args.file) {
        let dashboard = report::build(file, &args.genre, &args.search, &config)?;
        return report::write(&dashboard, out);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.display.window_width, config.display.window_height])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };
    let banner = Banner::load(config.display.banner.as_deref());

    let mut state = AppState::new(config);
    if let Some(file) = &args.file {
        state.open_path(file);
    }
    state.set_search(&args.search);
    state.set_genre(&args.genre);

    eframe::run_native(
        "FlixLens – Movie Catalogue Analyzer",
        options,
        Box::new(move |_cc| Ok(Box::new(FlixLensApp::new(state, banner)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run UI: {e}"))
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
