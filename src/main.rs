use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use progressus::config::AppConfig;
use progressus::progress::Challenge;
use progressus::{clock, convert, count_label, parse_duration, ConversionResult, Granularity};

const DEFAULT_CONFIG_PATH: &str = "./progressus.toml";

#[derive(Parser)]
#[command(name = "progressus")]
#[command(about = "Format durations and track challenge progress")]
#[command(version)]
struct Cli {
    /// Path to configuration file [default: ./progressus.toml, if present]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a duration into display units
    Convert {
        /// Seconds, or a suffixed value such as "90s", "25h", "3d", "2w"
        #[arg(allow_hyphen_values = true)]
        duration: String,

        /// Granularity (hour, day, week, day-hour)
        #[arg(long, short)]
        granularity: Option<String>,
    },

    /// Show the time elapsed since an instant
    Elapsed {
        /// Start instant (RFC 3339, e.g. "2017-01-11T08:00:00Z")
        #[arg(long)]
        since: String,

        /// Granularity (hour, day, week, day-hour)
        #[arg(long, short)]
        granularity: Option<String>,
    },

    /// Show progress of a challenge towards its goal
    Progress {
        /// Start instant (RFC 3339)
        #[arg(long)]
        since: String,

        /// Goal in days; defaults to the configured goal
        #[arg(long)]
        goal: Option<u32>,
    },

    /// Close a challenge and report the finished record
    Reset {
        /// Start instant of the challenge being reset (RFC 3339)
        #[arg(long)]
        since: String,

        /// Goal in days; defaults to the configured goal
        #[arg(long)]
        goal: Option<u32>,
    },

    /// Show the configured settings and reminders
    Settings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_source) = load_config(cli.config.clone(), Path::new(DEFAULT_CONFIG_PATH))?;

    // Initialize tracing
    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::debug!("Starting progressus v{}", env!("CARGO_PKG_VERSION"));
    match &config_source {
        ConfigSource::File(path) => tracing::debug!(path = %path.display(), "Loaded configuration"),
        ConfigSource::Defaults => tracing::debug!("No config file, using defaults"),
    }

    match cli.command {
        Commands::Convert {
            duration,
            granularity,
        } => {
            let seconds = parse_seconds(&duration)?;
            let granularity = resolve_granularity(granularity.as_deref(), &config)?;
            tracing::debug!(seconds, %granularity, "Converting duration");

            let result = convert(seconds, granularity)?;
            print_result(&result, cli.json)?;
        }

        Commands::Elapsed { since, granularity } => {
            let started = parse_instant(&since)?;
            let granularity = resolve_granularity(granularity.as_deref(), &config)?;
            let seconds = clock::elapsed_seconds(started, Utc::now());

            let result = convert(seconds, granularity)
                .with_context(|| format!("Start instant {} is in the future", since))?;
            print_result(&result, cli.json)?;
        }

        Commands::Progress { since, goal } => {
            let started = parse_instant(&since)?;
            let challenge = Challenge::new(started, goal.unwrap_or(config.goal_days));
            let now = Utc::now();

            let elapsed = challenge.elapsed(now)?;
            let progress = challenge.progress(now)?;

            if cli.json {
                let output = serde_json::json!({
                    "started": challenge.started,
                    "goal_days": challenge.goal_days,
                    "elapsed": elapsed,
                    "progress": progress,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("Started:  {}", clock::medium_date(started.date_naive()));
                println!("Elapsed:  {}", elapsed);
                println!(
                    "Progress: {:.1}% of {}",
                    progress * 100.0,
                    count_label(u64::from(challenge.goal_days), "day")
                );
            }
        }

        Commands::Reset { since, goal } => {
            let started = parse_instant(&since)?;
            let challenge = Challenge::new(started, goal.unwrap_or(config.goal_days));
            let (record, next) = challenge.reset(Utc::now(), config.start_on_reset);

            let days = record.duration_days()?;
            let reached = record.reached_goal()?;

            if cli.json {
                let output = serde_json::json!({
                    "record": record,
                    "duration_days": days,
                    "reached_goal": reached,
                    "next": next,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!(
                    "Lasted {} (goal {}{})",
                    count_label(days, "day"),
                    count_label(u64::from(record.goal_days), "day"),
                    if reached { ", reached" } else { "" }
                );
                match next {
                    Some(next) => println!(
                        "New challenge started at {}",
                        clock::time_of_day(Some(next.started.time()))
                    ),
                    None => println!("No new challenge started"),
                }
            }
        }

        Commands::Settings => {
            let reminders = config.active_reminders();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Goal:            {}", count_label(u64::from(config.goal_days), "day"));
                println!("Granularity:     {}", config.granularity);
                println!("Dark theme:      {}", on_off(config.theme.is_dark()));
                println!("Start on reset:  {}", on_off(config.start_on_reset));
                println!(
                    "Reminders:       {} ({})",
                    on_off(config.reminders_enabled),
                    count_label(config.reminders.len() as u64, "Reminder")
                );
                for reminder in reminders {
                    println!("  {}", reminder.summary());
                }
            }
        }
    }

    Ok(())
}

/// Where the configuration came from; logged once tracing is up.
#[derive(Debug, PartialEq)]
enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// An explicit path must exist; the default path is optional.
fn load_config(explicit: Option<PathBuf>, default_path: &Path) -> Result<(AppConfig, ConfigSource)> {
    let path = match explicit {
        Some(path) => path,
        None if default_path.exists() => default_path.to_path_buf(),
        None => return Ok((AppConfig::default(), ConfigSource::Defaults)),
    };

    let config = AppConfig::from_file(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok((config, ConfigSource::File(path)))
}

/// Plain (possibly negative) seconds, or a suffixed duration.
fn parse_seconds(s: &str) -> Result<i64> {
    if let Ok(secs) = s.trim().parse::<i64>() {
        return Ok(secs);
    }

    let duration = parse_duration(s).ok_or_else(|| anyhow!("Invalid duration: {}", s))?;
    i64::try_from(duration.as_secs()).with_context(|| format!("Duration too large: {}", s))
}

fn resolve_granularity(name: Option<&str>, config: &AppConfig) -> Result<Granularity> {
    match name {
        Some(name) => Ok(name.parse()?),
        None => Ok(config.granularity),
    }
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    let instant = DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("Invalid instant (expected RFC 3339): {}", s))?;
    Ok(instant.with_timezone(&Utc))
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn print_result(result: &ConversionResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else {
        println!("{}", result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("progressus.toml");

        let (config, source) = load_config(None, &default_path).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.goal_days, 30);
    }

    #[test]
    fn test_load_config_reports_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "goal_days = 14").unwrap();

        let (config, source) = load_config(None, file.path()).unwrap();
        assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));
        assert_eq!(config.goal_days, 14);
    }

    #[test]
    fn test_load_config_explicit_missing_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        assert!(load_config(Some(missing.clone()), &missing).is_err());
    }

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds("-1").unwrap(), -1);
        assert_eq!(parse_seconds("25h").unwrap(), 90000);
        assert!(parse_seconds("soon").is_err());
    }
}
