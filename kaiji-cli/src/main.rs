use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use kaiji_core::CarrierCode;
use kaiji_ingest::{catalog_for, detect, parse_document, text::normalize};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod report;
mod state;

use config::Config;
use report::FileReport;

#[derive(Parser, Debug)]
#[command(
    name = "kaiji",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("KAIJI_BUILD_SHA"), ")"),
    about = "Extract fund performance records from variable-insurance disclosure text"
)]
struct Cli {
    /// Config file (default: ~/.kaiji/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse extracted disclosure text files and print one JSON report per file
    Parse {
        /// Text files produced by the upstream PDF-to-text step
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Force compact JSON regardless of config
        #[arg(long)]
        compact: bool,

        /// Exit non-zero when any document produced warnings
        #[arg(long)]
        fail_on_warnings: bool,
    },

    /// Print the carrier detected for a text file
    Detect { file: PathBuf },

    /// List catalog entries (all carriers unless --carrier is given)
    Catalog {
        #[arg(long)]
        carrier: Option<String>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file
    Init,

    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;
    init_tracing(&cfg.log.filter);

    match cli.command {
        Command::Parse {
            files,
            compact,
            fail_on_warnings,
        } => {
            let pretty = cfg.output.pretty && !compact;
            let fail_on_warnings = fail_on_warnings || cfg.parse.fail_on_warnings;
            run_parse(files, pretty, fail_on_warnings).await?;
        }

        Command::Detect { file } => {
            let text = normalize(&state::read_text(&file)?);
            let carrier = detect(&text).with_context(|| format!("detecting {}", file.display()))?;
            println!("{}\t{}", carrier, carrier.display_name());
        }

        Command::Catalog { carrier } => {
            let carriers = match carrier {
                Some(code) => vec![code.parse::<CarrierCode>()?],
                None => CarrierCode::ALL.to_vec(),
            };
            print_catalogs(&carriers);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(cli.config.as_deref())?,
            ConfigCommand::Show => print_config(&cfg)?,
        },
    }

    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Parse every file on the blocking pool; reports keep the argument order.
async fn run_parse(files: Vec<PathBuf>, pretty: bool, fail_on_warnings: bool) -> Result<()> {
    let handles: Vec<_> = files
        .into_iter()
        .map(|path| tokio::task::spawn_blocking(move || parse_file(path)))
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        reports.push(handle.await.context("parse task failed")?);
    }

    for r in &reports {
        let json = if pretty {
            serde_json::to_string_pretty(r)?
        } else {
            serde_json::to_string(r)?
        };
        println!("{json}");
    }

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    let warned = reports.iter().filter(|r| r.has_warnings()).count();
    if failed > 0 {
        bail!("{failed} of {} documents failed to parse", reports.len());
    }
    if fail_on_warnings && warned > 0 {
        bail!("{warned} of {} documents parsed with warnings", reports.len());
    }

    Ok(())
}

fn parse_file(path: PathBuf) -> FileReport {
    let text = match state::read_text(&path) {
        Ok(t) => t,
        Err(e) => return FileReport::failed(path, format!("{e:#}")),
    };

    match parse_document(&text) {
        Ok(outcome) => {
            debug!(file = %path.display(), accounts = outcome.document.accounts.len(), "parsed");
            FileReport::parsed(path, outcome)
        }
        Err(e) => {
            warn!(file = %path.display(), error = %e, "parse failed");
            FileReport::failed(path, e.to_string())
        }
    }
}

fn print_catalogs(carriers: &[CarrierCode]) {
    for carrier in carriers {
        println!("# {} ({})\n", carrier, carrier.display_name());
        for entry in catalog_for(*carrier) {
            let aliases = if entry.aliases.is_empty() {
                String::new()
            } else {
                format!("  [aliases: {}]", entry.aliases.join(", "))
            };
            println!(
                "- {:<28} {:<13} {}{}",
                entry.code,
                entry.account_type.as_str(),
                entry.name,
                aliases
            );
        }
        println!();
    }
}

fn print_config(cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    println!("{}", s.trim_end());
    Ok(())
}
