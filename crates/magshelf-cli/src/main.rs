use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use magshelf_core::AppConfig;

use crate::commands::render::{PageTarget, RenderOptions};

mod commands;

#[derive(Parser)]
#[command(name = "magshelf")]
#[command(author, version, about = "Render a paginated magazine list into a web page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ~/.config/magshelf/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a static page snapshot of the list
    Render {
        /// Magazine data (.json array or .toml with [[magazine]] tables)
        #[arg(short = 'i', long)]
        items: PathBuf,
        /// Output file, "-" for stdout
        #[arg(short = 'o', long, default_value = "magazines.html")]
        out: String,
        /// 1-based page to show
        #[arg(short = 'p', long, conflicts_with = "last")]
        page: Option<usize>,
        /// Show the last page
        #[arg(long)]
        last: bool,
        /// Document title (overrides config)
        #[arg(short = 't', long)]
        title: Option<String>,
        /// Open the written file in the browser
        #[arg(long)]
        open: bool,
    },
    /// Show how the magazines split into pages
    Pages {
        /// Magazine data (.json array or .toml with [[magazine]] tables)
        #[arg(short = 'i', long)]
        items: PathBuf,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration if none exists
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    // Load configuration
    let config = AppConfig::load_from(&config_path)?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Render {
            items,
            out,
            page,
            last,
            title,
            open,
        } => {
            let target = match (page, last) {
                (_, true) => PageTarget::Last,
                (Some(page), false) => PageTarget::Number(page),
                (None, false) => PageTarget::First,
            };
            commands::render::run(
                &config,
                RenderOptions {
                    items_path: &items,
                    target,
                    out: &out,
                    title,
                    open_browser: open,
                },
            )
        }
        Commands::Pages { items } => commands::pages::run(&config, &items),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config, &config_path),
            ConfigAction::Init => commands::config::init(&config_path),
        },
    }
}
