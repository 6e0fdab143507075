//! Railplan - a TUI for building garde-corps fabrication orders
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;

use railplan_app::config::Settings;
use railplan_core::prelude::*;

/// Railplan - railing order configurator with remote plan computation
#[derive(Parser, Debug)]
#[command(name = "railplan")]
#[command(about = "Configure a garde-corps order and generate cutting plans", long_about = None)]
struct Args {
    /// Base URL of the computation service (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Directory exported drawings are written to (overrides the config file)
    #[arg(long, value_name = "DIR")]
    export_dir: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    railplan_core::logging::init()?;

    let mut settings = Settings::load();
    if let Some(url) = args.api_url {
        settings.api_base_url = url;
    }
    if let Some(dir) = args.export_dir {
        settings.export_dir = dir;
    }
    info!(api = %settings.api_base_url, "settings loaded");

    railplan_tui::run(settings).await?;
    Ok(())
}
