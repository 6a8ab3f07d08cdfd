//! Storefront Harvester main entry point
//!
//! This is the command-line interface for the storefront harvester.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use storefront_harvester::config::{load_config_with_hash, validate, Config};
use storefront_harvester::crawler::harvest;
use storefront_harvester::input::read_domains;
use storefront_harvester::output::print_statistics;
use storefront_harvester::url::{get_url, get_urls};
use tracing_subscriber::EnvFilter;

/// Storefront Harvester: contact and product data from storefront domains
///
/// Extracts relevant data (emails, Facebook and Twitter links, product titles
/// and images) from the domains listed in the input file and writes them to
/// the CSV output file.
///
/// Example usage:
///
///     storefront-harvester data/stores_small.csv output.csv
#[derive(Parser, Debug)]
#[command(name = "storefront-harvester")]
#[command(version)]
#[command(about = "Harvests contact and product data from storefront domains")]
struct Cli {
    /// Input CSV file listing the domains
    #[arg(value_name = "IN_FILE")]
    in_file: PathBuf,

    /// Output CSV file
    #[arg(value_name = "OUT_FILE")]
    out_file: PathBuf,

    /// Path to TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Column in input file containing domains (default 'url')
    #[arg(long)]
    input_column: Option<String>,

    /// Number of products to be extracted (default 5)
    #[arg(long)]
    product_count: Option<usize>,

    /// Delay between requests to the same domain (in seconds, default 1)
    #[arg(long, value_name = "SECONDS")]
    throttle: Option<f64>,

    /// Log level
    #[arg(long, value_enum)]
    log: Option<LogLevel>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be fetched without fetching
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "UPPER")]
enum LogLevel {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    fn directive(&self) -> &'static str {
        match self {
            Self::Critical | Self::Error => "error",
            Self::Warning => "warn",
            Self::Info => "storefront_harvester=info,warn",
            Self::Debug => "storefront_harvester=debug,info",
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log, cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    tracing::info!(
        "Starting with {} contact paths, product list {}, {} products, {}s throttle",
        config.crawler.contact_paths.len(),
        config.crawler.product_list_path,
        config.crawler.product_count,
        config.crawler.throttle_delay
    );

    if cli.dry_run {
        return handle_dry_run(&config, &cli.in_file);
    }

    let stats = harvest(config, cli.in_file.clone(), cli.out_file.clone())
        .await
        .with_context(|| {
            format!(
                "Harvest from {} to {} failed",
                cli.in_file.display(),
                cli.out_file.display()
            )
        })?;

    if !cli.quiet {
        print_statistics(&stats);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber
///
/// `RUST_LOG` wins over everything; then `--quiet`, `--log`, and `-v` counts.
fn setup_logging(level: Option<LogLevel>, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else if let Some(level) = level {
            EnvFilter::new(level.directive())
        } else {
            match verbose {
                0 => EnvFilter::new("storefront_harvester=info,warn"),
                1 => EnvFilter::new("storefront_harvester=debug,info"),
                2 => EnvFilter::new("storefront_harvester=trace,debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the optional config file and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(column) = &cli.input_column {
        config.input.column = column.clone();
    }
    if let Some(count) = cli.product_count {
        config.crawler.product_count = count;
    }
    if let Some(throttle) = cli.throttle {
        config.crawler.throttle_delay = throttle;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be fetched for each domain
fn handle_dry_run(config: &Config, in_file: &Path) -> anyhow::Result<()> {
    let domains = read_domains(in_file, &config.input.column)
        .with_context(|| format!("Failed to read domains from {}", in_file.display()))?;

    println!("=== Storefront Harvester Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Contact paths: {}", config.crawler.contact_paths.join(", "));
    println!("  Product list path: {}", config.crawler.product_list_path);
    println!("  Product count: {}", config.crawler.product_count);
    println!("  Throttle delay: {}s", config.crawler.throttle_delay);
    println!("  User agent: {}", config.user_agent.header_value());

    println!("\nDomains ({}):", domains.len());
    for domain in &domains {
        println!("  - {}", domain);
        for url in get_urls(domain, &config.crawler.contact_paths, &config.crawler.scheme) {
            println!("    * {}", url);
        }
        println!(
            "    * {}",
            get_url(
                domain,
                &config.crawler.product_list_path,
                &config.crawler.scheme
            )
        );
    }

    println!("\n✓ Configuration is valid");
    Ok(())
}
