// WellScope - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (config.toml, soft-fail)
// 3. Logging initialisation (debug mode support)
// 4. Gateway construction + startup health probe
// 5. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use wellscope::app;
pub use wellscope::core;
pub use wellscope::net;
pub use wellscope::platform;
pub use wellscope::ui;
pub use wellscope::util;

use clap::Parser;

/// WellScope - Desktop well-log visualization and interpretation client.
///
/// Upload LAS files to the backend, browse ingested wells and their curves,
/// and plot a curve against depth with summary statistics and a rule-based
/// textual interpretation.
#[derive(Parser, Debug)]
#[command(name = "WellScope", version, about)]
struct Cli {
    /// Backend base address (overrides config.toml).
    #[arg(short = 'u', long = "api-url")]
    api_url: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config loads before logging so [logging] level can apply; the loader's
    // own warnings are carried back and re-logged once tracing is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "WellScope starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    // Backend address priority: CLI flag > config.toml > default.
    let base_url = cli
        .api_url
        .as_deref()
        .unwrap_or(&config.base_url)
        .to_string();

    let gateway = match net::gateway::Gateway::new(&base_url) {
        Ok(gateway) => gateway,
        Err(e) => {
            tracing::error!(error = %e, "Failed to construct HTTP client");
            eprintln!("Error: failed to construct HTTP client: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(base_url = %gateway.base_url(), "Gateway ready");

    // Startup health probe, off the main thread so an unreachable backend
    // cannot delay the window. Result is logged only.
    {
        let gateway = gateway.clone();
        std::thread::spawn(move || match gateway.health() {
            Ok(database) => tracing::info!(database = %database, "Backend health probe"),
            Err(e) => tracing::warn!(error = %e, "Backend health probe failed"),
        });
    }

    let state = app::state::AppState::new();
    let dark_mode = config.dark_mode;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(gui::WellScopeApp::new(state, gateway)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch WellScope GUI: {e}");
        std::process::exit(1);
    }
}
