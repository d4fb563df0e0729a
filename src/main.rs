use csv_results_viewer::{config::ViewerConfig, io, logging, render_window};

fn main() -> eframe::Result<()> {
    if let Err(err) = logging::init() {
        eprintln!("{err}");
    }

    let config = ViewerConfig::default();
    let loaded = io::load_results(&config.csv_path);

    render_window(loaded.rows, &config)
}
