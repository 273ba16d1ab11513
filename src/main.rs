//! Taipei attractions catalog browser - entry point.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// taiview - TUI browser for the Taipei Travel Open API attractions catalog
#[derive(Parser, Debug)]
#[command(name = "taiview")]
#[command(version)]
#[command(about = "Browse Taipei city attractions from the terminal")]
pub struct Args {
    /// Server page to start on (1-based)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Locale segment passed to the API (e.g. zh-tw, en, ja)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Start with a search filter applied to the first page
    #[arg(short, long)]
    pub search: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // NO_COLOR is what the palette layer checks, so the flag funnels
    // through the environment for consistent handling everywhere.
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Resolve configuration: Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = taiview::config::load_config_with_precedence(args.config.clone())?;
        let merged = taiview::config::merge_config(config_file);
        let with_env = taiview::config::apply_env_overrides(merged);
        taiview::config::apply_cli_overrides(with_env, args.lang.clone())
    };

    taiview::logging::init(&config.log_file_path)?;
    info!(config = ?config, page = args.page, "configuration resolved");

    let client = taiview::api::AttractionsClient::new()?;
    let cli_args = taiview::view::CliArgs::new(args.page, config.lang, args.search.clone());
    taiview::view::run_with_client(client, cli_args)?;

    Ok(())
}
