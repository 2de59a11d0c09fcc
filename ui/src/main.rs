use anyhow::Context;
use clap::{Parser, Subcommand};
use promptdeck::config::{self, AppConfig};
use promptdeck::logger;
use promptdeck::theme::{
    ColorSchemeValidator, DARK_THEME, LIGHT_THEME, LoggingStatusBar, ThemeContext,
    ThemeController, ThemeDeps, ThemeMode,
};
use promptdeck::validation::Validator;
use std::path::PathBuf;
use std::sync::Arc;
use storage::FileStore;

#[derive(Parser, Debug)]
#[command(name = "promptdeck", version, about = "Prompt manager shell")]
struct Cli {
    /// Configuration file (default: ./config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect or change the UI theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    /// Print the current theme snapshot
    Show,
    /// Switch to the given mode
    Set { mode: ThemeMode },
    /// Flip between light and dark
    Toggle,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config = config::load_config(cli.config.as_deref()).into_result()?;
    logger::setup_logger(app_config.logging()).context("Failed to initialize logger")?;

    for scheme in [&LIGHT_THEME, &DARK_THEME] {
        if let Err(e) = ColorSchemeValidator.validate(scheme) {
            log::error!("{e}");
        }
    }

    let controller = build_controller(&app_config);
    controller.wait_until_loaded().await;

    match cli.command {
        Command::Theme { action } => run_theme_action(&controller, action),
    }

    controller.flush().await;

    let snapshot = serde_json::to_string_pretty(&controller.snapshot())?;
    println!("{snapshot}");
    Ok(())
}

fn build_controller(app_config: &AppConfig) -> ThemeController {
    let settings = app_config.theme();
    let store_path = settings
        .storage_file()
        .unwrap_or_else(FileStore::default_location);
    log::info!("Using preference store at {}", store_path.display());

    let deps = ThemeDeps::new(
        Arc::new(FileStore::new(store_path)),
        Arc::new(LoggingStatusBar),
    )
    .with_platform(settings.platform())
    .with_max_concurrent_writes(settings.max_concurrent_writes());

    ThemeController::new(deps)
}

fn run_theme_action(theme: &dyn ThemeContext, action: ThemeAction) {
    match action {
        ThemeAction::Show => {}
        ThemeAction::Set { mode } => theme.set_theme(mode),
        ThemeAction::Toggle => theme.toggle_theme(),
    }
}
