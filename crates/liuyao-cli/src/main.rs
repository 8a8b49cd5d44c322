//! Liu Yao CLI - Cast six-line hexagrams
//!
//! Casts locally with the bundled calendar, or against a Liu Yao server
//! with `--remote`.

mod api;
mod config;
mod report;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Password, Select};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api::{EnhancedDivinationRequest, LiuyaoClient};
use config::{Config, OutputFormat};
use liuyao::{
    parse_civil_time, parse_line_specs, ChineseCalendar, DivinationRequest, DivinationService,
    TrigramNames,
};
use report::DivinationReport;

/// Choices offered for each line when none are given on the command line
const LINE_CHOICES: [&str; 4] = ["少阳", "少阴", "老阳", "老阴"];

#[derive(Parser)]
#[command(name = "liuyao")]
#[command(about = "Liu Yao CLI - six-line hexagram divination", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Cast on the configured server instead of locally
    #[arg(long, global = true)]
    remote: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast from the moment of asking
    Time {
        /// Date-time in UTC+8 (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Cast from six lines, bottom first (prompts if omitted)
    Manual {
        /// Comma-separated lines, e.g. "solid,broken moving,老阳,少阴,yang,yin"
        #[arg(short, long, value_delimiter = ',')]
        lines: Option<Vec<String>>,
        /// Date-time in UTC+8 (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Cast from original and changed trigram names
    Name {
        upper_original: String,
        lower_original: String,
        upper_changed: String,
        lower_changed: String,
        /// Date-time in UTC+8 (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show current configuration
    Config,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.default_output
    };

    let request = match cli.command {
        Commands::Login { key } => return cmd_login(config, key).await,
        Commands::Config => return cmd_config(&config),
        Commands::Time { at } => EnhancedDivinationRequest {
            divination_type: "time".to_string(),
            target_time: at,
            ..Default::default()
        },
        Commands::Manual { lines, at } => {
            let lines = match lines {
                Some(lines) => lines,
                None => prompt_lines()?,
            };
            EnhancedDivinationRequest {
                divination_type: "manual".to_string(),
                target_time: at,
                manual_yaos: Some(lines),
                ..Default::default()
            }
        }
        Commands::Name {
            upper_original,
            lower_original,
            upper_changed,
            lower_changed,
            at,
        } => EnhancedDivinationRequest {
            divination_type: "name".to_string(),
            target_time: at,
            upper_original: Some(upper_original),
            lower_original: Some(lower_original),
            upper_changed: Some(upper_changed),
            lower_changed: Some(lower_changed),
            ..Default::default()
        },
    };

    let report = if cli.remote {
        let client = LiuyaoClient::new(&config.base_url, config.api_key.as_deref());
        client.divine(&request).await?
    } else {
        cast_locally(request)?
    };

    print_report(&report, output)
}

// ============================================
// Command Implementations
// ============================================

/// Ask for each line, bottom first
fn prompt_lines() -> Result<Vec<String>> {
    let names = ["初爻", "二爻", "三爻", "四爻", "五爻", "上爻"];
    let mut lines = Vec::with_capacity(names.len());

    for name in names {
        let choice = Select::new()
            .with_prompt(name)
            .items(&LINE_CHOICES)
            .default(0)
            .interact()
            .context("Failed to read line")?;
        lines.push(LINE_CHOICES[choice].to_string());
    }

    Ok(lines)
}

/// Translate the wire request into a domain request and cast in-process
fn to_domain_request(request: EnhancedDivinationRequest) -> Result<DivinationRequest> {
    let at = request
        .target_time
        .as_deref()
        .map(parse_civil_time)
        .transpose()?;

    let domain = match request.divination_type.as_str() {
        "time" => DivinationRequest::Time { at },
        "manual" => DivinationRequest::Manual {
            lines: request
                .manual_yaos
                .map(|lines| parse_line_specs(lines.as_slice()))
                .transpose()?,
            at,
        },
        "name" => DivinationRequest::Name {
            names: TrigramNames {
                upper_original: request.upper_original,
                lower_original: request.lower_original,
                upper_changed: request.upper_changed,
                lower_changed: request.lower_changed,
            },
            at,
        },
        other => bail!("Unknown divination type: {}", other),
    };

    Ok(domain)
}

fn cast_locally(request: EnhancedDivinationRequest) -> Result<DivinationReport> {
    let service = DivinationService::new(Arc::new(ChineseCalendar::new()));
    let result = service.divine(to_domain_request(request)?)?;
    Ok(DivinationReport::from(&result))
}

fn print_report(report: &DivinationReport, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("Failed to serialize result")?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", report.render_text()),
    }
    Ok(())
}

async fn cmd_login(mut config: Config, key: Option<String>) -> Result<()> {
    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = LiuyaoClient::new(&config.base_url, Some(&api_key));
    print!("Testing connection to {}... ", config.base_url);

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to Liu Yao API at {}", config.base_url);
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );
    println!("  Output: {}", config.default_output.to_string().cyan());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_manual_lines() {
        let cli = Cli::try_parse_from([
            "liuyao",
            "manual",
            "--lines",
            "solid,broken moving,老阳,少阴,yang,yin",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Manual { lines, .. } => assert_eq!(lines.unwrap().len(), 6),
            _ => panic!("expected manual"),
        }
    }

    #[test]
    fn test_local_name_cast() {
        let request = EnhancedDivinationRequest {
            divination_type: "name".to_string(),
            target_time: Some("2024-02-10 12:00".to_string()),
            upper_original: Some("乾".to_string()),
            lower_original: Some("坤".to_string()),
            upper_changed: Some("坤".to_string()),
            lower_changed: Some("乾".to_string()),
            ..Default::default()
        };
        let report = cast_locally(request).unwrap();
        assert_eq!(report.original.binary, "000111");
        assert_eq!(report.changed.binary, "111000");
        assert_eq!(report.moving_lines, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_local_cast_rejects_bad_input() {
        let request = EnhancedDivinationRequest {
            divination_type: "manual".to_string(),
            manual_yaos: Some(vec!["solid".to_string(); 5]),
            ..Default::default()
        };
        assert!(cast_locally(request).is_err());

        let request = EnhancedDivinationRequest {
            divination_type: "lots".to_string(),
            ..Default::default()
        };
        assert!(cast_locally(request).is_err());
    }
}
