//! `myeongri`: Analyzes a four-pillar chart and prints luck-pillar sequences.
//!
//! **Subcommands:**
//! - `analyze`: pattern, ten gods, month authority, direction, start age,
//!   sowun/daewun and auxiliary pillars as pretty JSON; `--target-year` adds
//!   that year's sewun and wolwun
//! - `sewun`: consecutive year pillars
//!
//! **Usage:**
//! ```text
//! myeongri analyze --year 甲子 --month 丙寅 --day 甲午 --hour 丁卯 \
//!     --sex male --solar-term-days 12 --birth-month 1 [--elapsed-days <n>] \
//!     [--config <file.toml>] [--target-year <year>]
//! myeongri sewun [--from <year>] [--count <n>]
//! ```
//!
//! Logging goes to stderr and is filtered by `RUST_LOG` (default `info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use myeongri::chart::{BirthContext, Chart, ChartAnalysis};
use myeongri::config::AnalysisConfig;
use myeongri::direction::Sex;
use myeongri::luck::{sewun, sewun_range, wolwun_year, Sewun, Wolwun};
use myeongri::Pillar;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Four-pillar chart analysis.
#[derive(Parser)]
#[command(name = "myeongri", about = "Analyze four-pillar charts and luck cycles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a chart and print the result as JSON.
    Analyze(AnalyzeArgs),
    /// Print consecutive year pillars as JSON.
    Sewun {
        /// First Gregorian year.
        #[arg(long, default_value_t = 2024)]
        from: i64,
        /// Number of years.
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

#[derive(clap::Args)]
struct AnalyzeArgs {
    /// Year pillar (e.g. 甲子, 갑자, gap-ja, 0-0).
    #[arg(long)]
    year: Pillar,
    /// Month pillar.
    #[arg(long)]
    month: Pillar,
    /// Day pillar.
    #[arg(long)]
    day: Pillar,
    /// Hour pillar.
    #[arg(long)]
    hour: Pillar,
    /// Declared sex (male/female, 남/여).
    #[arg(long)]
    sex: Sex,
    /// Days from birth to the adjacent solar term in the luck direction.
    #[arg(long)]
    solar_term_days: u32,
    /// Solar-term month number of the birth (1 = 寅 month).
    #[arg(long)]
    birth_month: u8,
    /// Days elapsed since the month's solar term, for month-authority
    /// resolution.
    #[arg(long)]
    elapsed_days: Option<u32>,
    /// TOML file with analysis settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Year whose sewun and wolwun are appended to the output.
    #[arg(long)]
    target_year: Option<i64>,
}

/// The `analyze` output document.
#[derive(Serialize)]
struct Report {
    analysis: ChartAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<TargetYear>,
}

#[derive(Serialize)]
struct TargetYear {
    sewun: Sewun,
    wolwun: Vec<Wolwun>,
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: AnalysisConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    debug!(?config, path = %path.display(), "loaded analysis config");
    Ok(config)
}

fn analyze(args: AnalyzeArgs) -> Result<Report> {
    let config = load_config(args.config.as_deref())?;
    let chart = Chart::new(args.year, args.month, args.day, args.hour);
    let mut birth = BirthContext::new(args.sex, args.solar_term_days, args.birth_month);
    if let Some(days) = args.elapsed_days {
        birth = birth.with_elapsed_days(days);
    }

    info!(%chart, sex = %args.sex, "analyzing chart");
    let analysis = chart
        .analyze(&birth, &config)
        .with_context(|| format!("Invalid analysis config for chart {chart}"))?;
    info!(pattern = %analysis.pattern, "classified");

    let target = args.target_year.map(|year| TargetYear {
        sewun: sewun(year),
        wolwun: wolwun_year(year),
    });
    Ok(Report { analysis, target })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")?;
    println!("{json}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Analyze(args) => print_json(&analyze(args)?),
        Command::Sewun { from, count } => {
            info!(from, count, "listing year pillars");
            print_json(&sewun_range(from, count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_with_target_year() {
        let cli = Cli::try_parse_from([
            "myeongri",
            "analyze",
            "--year",
            "庚午",
            "--month",
            "乙酉",
            "--day",
            "甲子",
            "--hour",
            "丙寅",
            "--sex",
            "female",
            "--solar-term-days",
            "20",
            "--birth-month",
            "8",
            "--target-year",
            "2024",
        ])
        .unwrap();
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        let report = analyze(args).unwrap();
        assert_eq!(report.analysis.start_age, 7);
        let target = report.target.unwrap();
        assert_eq!(target.sewun.pillar.to_string(), "甲辰");
        assert_eq!(target.wolwun.len(), 12);
    }

    #[test]
    fn test_rejects_bad_pillar() {
        let result = Cli::try_parse_from([
            "myeongri", "analyze", "--year", "甲", "--month", "丙寅", "--day", "甲午", "--hour",
            "丁卯", "--sex", "male", "--solar-term-days", "12", "--birth-month", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let err = load_config(Some(Path::new("/nonexistent/myeongri.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
