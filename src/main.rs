//! CLI entry point for tyche
//!
//! Parses window/stylesheet options, sets up logging and launches the GUI.

use anyhow::Context;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tyche::config::{AppConfig, StylesheetSource, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use tyche::ui::App;

#[derive(Parser)]
#[command(name = "tyche")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a stylesheet replacing the built-in one
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Default window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(i32).range(100..))]
    width: i32,

    /// Default window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(i32).range(100..))]
    height: i32,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> AppConfig {
        AppConfig {
            default_width: self.width,
            default_height: self.height,
            stylesheet: self
                .stylesheet
                .map(StylesheetSource::File)
                .unwrap_or_default(),
            ..AppConfig::default()
        }
    }
}

fn main() -> glib::ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(level));

    match launch(cli.into_config()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            glib::ExitCode::FAILURE
        }
    }
}

/// Loads startup resources and runs the GUI until the window closes
fn launch(config: AppConfig) -> anyhow::Result<glib::ExitCode> {
    let app = App::new(config).context("Failed to load startup resources")?;
    let exit_code = app.run().context("Failed to start the user interface")?;

    Ok(exit_code)
}
