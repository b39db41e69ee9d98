use std::path::PathBuf;

use clap::{Parser, Subcommand};

use manifest_date::app;
use manifest_date::config::Config;
use manifest_date::report::{OutputFormat, render};

#[derive(Parser)]
#[command(name = "manifest-date")]
#[command(version, about = "Estimate when a package.json was last edited")]
#[command(subcommand_negates_reqs = true, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to the package.json to inspect
    #[arg(required = true)]
    manifest: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Registry base URL
    #[arg(long)]
    registry_url: Option<String>,

    /// Minimum milliseconds between registry lookups
    #[arg(long)]
    min_interval_ms: Option<u64>,

    /// Always fetch from the registry and do not record histories
    #[arg(long)]
    no_cache: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/manifest-date/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Manage the local release history cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Remove all cached release histories
    Clear,
}

impl Cli {
    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(url) = &self.registry_url {
            config.registry.base_url = url.clone();
        }
        if let Some(interval) = self.min_interval_ms {
            config.registry.min_interval = interval;
        }
        if self.no_cache {
            config.cache.enabled = false;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = manifest_date::logging::init(cli.log_file.as_deref())?;
    let config = cli.apply_overrides(Config::load(cli.config.as_deref())?);

    match (&cli.command, &cli.manifest) {
        (
            Some(Command::Cache {
                action: CacheAction::Clear,
            }),
            _,
        ) => app::clear_cache(&config),
        (None, Some(manifest)) => {
            let registry = app::build_registry(&config);
            let engine = app::build_engine(registry);

            let report = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?
                .block_on(app::estimate_manifest(manifest, &engine))?;

            println!("{}", render(&report, cli.format)?);
            Ok(())
        }
        (None, None) => anyhow::bail!("Usage: manifest-date <package.json path>"),
    }
}
