mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

use std::path::Path;

use orchard_core::config::OrchardConfig;

const CONFIG_FILE: &str = "orchard.toml";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Fruit Detection")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Orchard",
        options,
        Box::new(|cc| Ok(Box::new(app::OrchardApp::new(&cc.egui_ctx, config)?))),
    )
}

/// `orchard.toml` in the working directory, or defaults.
fn load_config() -> OrchardConfig {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return OrchardConfig::default();
    }
    match OrchardConfig::load(path) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring {}: {e}", path.display());
            OrchardConfig::default()
        }
    }
}
