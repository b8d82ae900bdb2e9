//! Command-line entry point for the gas technician dashboard.
//!
//! # Responsibility
//! - Resolve startup configuration from env vars and flags.
//! - Render the dashboard page, validate concept data, and inspect concepts.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use gastech_core::config::{ENV_HOST, ENV_LOG_DIR, ENV_LOG_LEVEL};
use gastech_core::ui::components::concept_details::details_markup;
use gastech_core::ui::document::standard_page;
use gastech_core::{
    init_logging_from_config, validate_all, AppConfig, ConceptFilter, ConceptStore, Dashboard,
    Diagnostics, ErrorHandler, Tier,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gastech")]
#[command(about = "Gas technician reference dashboard", version)]
struct Cli {
    /// Deployment host; loopback or empty selects development logging
    #[arg(long, global = true)]
    host: Option<String>,

    /// Log threshold: debug, info, warn or error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (stderr when omitted)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full dashboard page as HTML
    Render {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate concept data; exits non-zero on failure
    Validate {
        /// JSON file to validate instead of the built-in data
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Render the details panel for one concept
    Show {
        /// Concept id, e.g. `natgas`
        id: String,
    },
    /// List concept ids and names
    List {
        /// Only concepts of this tier
        #[arg(short, long)]
        tier: Option<String>,
    },
}

fn resolve_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let host = cli.host.clone().or_else(|| std::env::var(ENV_HOST).ok());
    let level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var(ENV_LOG_LEVEL).ok());
    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| std::env::var_os(ENV_LOG_DIR).map(PathBuf::from));
    let config = AppConfig::resolve(host.as_deref(), level.as_deref(), log_dir)?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    init_logging_from_config(&config).map_err(anyhow::Error::msg)?;
    log::info!(
        "event=cli_start module=cli status=ok deployment={:?} version={}",
        config.deployment,
        gastech_core::core_version()
    );

    let diagnostics = Diagnostics::to_log_facade(config.threshold);
    let handler = ErrorHandler::new(diagnostics.clone());

    match cli.command {
        Commands::Render { output } => {
            let store = ConceptStore::builtin(&handler);
            let mut dashboard = Dashboard::new(store, standard_page(), diagnostics);
            let failed = dashboard.render_all();
            if failed > 0 {
                log::warn!("event=render module=cli status=partial failed_sections={failed}");
            }
            let html = dashboard.to_html();
            dashboard.destroy();

            match output {
                Some(path) => std::fs::write(&path, html)
                    .with_context(|| format!("failed to write `{}`", path.display()))?,
                None => println!("{html}"),
            }
        }
        Commands::Validate { data } => {
            let raw = match data {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?,
                None => gastech_core::store::BUILTIN_CONCEPTS_JSON.to_string(),
            };
            let value: serde_json::Value =
                serde_json::from_str(&raw).context("concept data is not valid JSON")?;
            validate_all(&value, &diagnostics)?;
            let count = value.as_array().map(Vec::len).unwrap_or(0);
            println!("ok: {count} concepts validated");
        }
        Commands::Show { id } => {
            let store = ConceptStore::builtin(&handler);
            let record = store.find(&id)?;
            println!("{}", details_markup(record));
        }
        Commands::List { tier } => {
            let filter = match tier {
                Some(value) => match Tier::parse(&value) {
                    Some(tier) => ConceptFilter::Tier(tier),
                    None => bail!(
                        "unknown tier `{value}`; expected one of: {}",
                        Tier::allowed_list()
                    ),
                },
                None => ConceptFilter::All,
            };
            let store = ConceptStore::builtin(&handler);
            for record in store.filtered(filter) {
                println!("{}\t{}\t{}", record.id, record.tier, record.name);
            }
        }
    }

    Ok(())
}
