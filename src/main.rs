use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use magic_semvar::config::{Config, data_dir, log_path};
use magic_semvar::version::Version;
use magic_semvar::version::select::{dedup_versions, latest_version, sort_versions};

/// Pairs that must satisfy `left < right`, used by the `check` subcommand
const CHECK_PAIRS: &[(&str, &str)] = &[
    ("1.0.0", "2.0.0"),
    ("1.0.0", "1.42.0"),
    ("1.2.0", "1.2.42"),
    ("1.1.0-alpha", "1.2.0-alpha.1"),
    ("1.0.1b", "1.0.10-alpha.beta"),
    ("1.0.0-rc.1", "1.0.0"),
];

#[derive(Parser)]
#[command(name = "magic-semvar")]
#[command(version, about = "Parse and compare versions with patch suffixes")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter directive, overrides config and MAGIC_SEMVAR_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print `<`, `=` or `>` for two versions
    Compare {
        left: String,
        right: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sort versions ascending (reads stdin when none are given)
    Sort {
        versions: Vec<String>,
        #[arg(long)]
        reverse: bool,
        /// Drop versions equal to an earlier one
        #[arg(long)]
        dedup: bool,
        /// Fail on the first invalid version instead of skipping it
        #[arg(long)]
        strict: bool,
    },
    /// Print the greatest version (reads stdin when none are given)
    Latest {
        versions: Vec<String>,
        /// Consider prereleases
        #[arg(long)]
        pre: bool,
    },
    /// Run the built-in ordering self-check
    Check,
}

#[derive(Serialize)]
struct CompareOutput<'a> {
    left: &'a str,
    right: &'a str,
    ordering: &'static str,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let _guard = init_logging(&config, cli.log_level.as_deref())?;

    match cli.command {
        Command::Compare { left, right, json } => compare(&left, &right, json),
        Command::Sort {
            versions,
            reverse,
            dedup,
            strict,
        } => {
            let versions = read_versions(versions)?;
            if strict {
                for text in &versions {
                    Version::parse(text).with_context(|| format!("invalid version '{text}'"))?;
                }
            }
            let mut sorted = if dedup {
                dedup_versions(&versions)
            } else {
                sort_versions(&versions)
            };
            if reverse {
                sorted.reverse();
            }
            for text in sorted {
                println!("{text}");
            }
            Ok(())
        }
        Command::Latest { versions, pre } => {
            let versions = read_versions(versions)?;
            match latest_version(&versions, pre) {
                Some(latest) => {
                    println!("{latest}");
                    Ok(())
                }
                None => bail!("no valid versions given"),
            }
        }
        Command::Check => check(),
    }
}

fn init_logging(
    config: &Config,
    cli_level: Option<&str>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = config.log_filter(cli_level);
    let env_filter =
        EnvFilter::try_new(&filter).with_context(|| format!("invalid log filter '{filter}'"))?;

    if config.log.file {
        let dir = data_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let appender = tracing_appender::rolling::never(&dir, "magic-semvar.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        info!("Logging to {}", log_path().display());
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
        Ok(None)
    }
}

/// Use the arguments, or one version per non-blank stdin line when empty
fn read_versions(versions: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !versions.is_empty() {
        return Ok(versions);
    }
    let mut lines = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    debug!("Read {} versions from stdin", lines.len());
    Ok(lines)
}

fn compare(left: &str, right: &str, json: bool) -> anyhow::Result<()> {
    let lhs = Version::parse(left).with_context(|| format!("invalid version '{left}'"))?;
    let rhs = Version::parse(right).with_context(|| format!("invalid version '{right}'"))?;

    let ordering = match lhs.cmp(&rhs) {
        std::cmp::Ordering::Less => "<",
        std::cmp::Ordering::Equal => "=",
        std::cmp::Ordering::Greater => ">",
    };

    if json {
        let output = CompareOutput {
            left,
            right,
            ordering,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{left} {ordering} {right}");
    }
    Ok(())
}

fn check() -> anyhow::Result<()> {
    for (left, right) in CHECK_PAIRS {
        let lhs = Version::parse(left)?;
        let rhs = Version::parse(right)?;
        if lhs >= rhs {
            bail!("expected {left} < {right}");
        }
        if rhs <= lhs {
            bail!("expected {right} > {left}");
        }
        if rhs == lhs {
            bail!("expected {right} != {left}");
        }
        debug!("{} < {}", left, right);
    }
    println!("ok: {} pairs", CHECK_PAIRS.len());
    Ok(())
}
