//! Warden CLI - Command-line front end for the boundary firewall
//!
//! Every subcommand prints its result as pretty JSON on stdout. Unsafe input
//! is a normal result, not a failure; the exit code is non-zero only when
//! input or configuration cannot be read.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use warden_core::{Warden, WardenConfig};
use warden_firewall::{
    classifier, MaliciousContentVerdict, DEFAULT_MAX_NUMBER, DEFAULT_MIN_NUMBER,
};

#[derive(Parser)]
#[command(name = "warden")]
#[command(about = "Warden - Boundary sanitization and threat detection")]
#[command(version)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sanitize free text
    Text {
        /// Text to sanitize; read from stdin when omitted
        input: Option<String>,
    },
    /// Run the phishing classifier over text
    Scan {
        /// Text to classify; read from stdin when omitted
        input: Option<String>,
    },
    /// Sanitize and classify a message, producing a verdict
    Inspect {
        /// Message text; read from stdin when omitted
        input: Option<String>,
    },
    /// Validate a number against inclusive bounds
    Number {
        /// Number or numeric text
        #[arg(allow_hyphen_values = true)]
        input: String,
        /// Inclusive lower bound
        #[arg(long, default_value_t = DEFAULT_MIN_NUMBER, allow_negative_numbers = true)]
        min: f64,
        /// Inclusive upper bound
        #[arg(long, default_value_t = DEFAULT_MAX_NUMBER, allow_negative_numbers = true)]
        max: f64,
    },
    /// Check that a URL is safe to link to
    Url {
        /// URL to check
        input: String,
    },
    /// Restrict a file name to a safe character set
    FileName {
        /// File name to sanitize
        input: String,
    },
    /// Check configuration validity (requires --config)
    Check,
}

#[derive(Serialize)]
struct ScanOutput {
    #[serde(flatten)]
    verdict: MaliciousContentVerdict,
    /// Names of the heuristics that fired, in catalog order
    rules: Vec<&'static str>,
}

#[derive(Serialize)]
struct FileNameOutput {
    sanitized: String,
}

#[derive(Serialize)]
struct CheckOutput {
    valid: bool,
    config: WardenConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Text { input } => {
            let warden = build_warden(cli.config.as_deref())?;
            let text = read_input(input)?;
            print_json(&warden.firewall().sanitize_text(Some(&text)))
        }
        Commands::Scan { input } => {
            let text = read_input(input)?;
            print_json(&ScanOutput {
                verdict: warden_firewall::detect_malicious_content(&text),
                rules: classifier::matching_rules(&text),
            })
        }
        Commands::Inspect { input } => {
            let warden = build_warden(cli.config.as_deref())?;
            let text = read_input(input)?;
            print_json(&warden.inspect_message(&text))
        }
        Commands::Number { input, min, max } => {
            print_json(&warden_firewall::sanitize_number(input.as_str(), min, max))
        }
        Commands::Url { input } => print_json(&warden_firewall::sanitize_url(&input)),
        Commands::FileName { input } => print_json(&FileNameOutput {
            sanitized: warden_firewall::sanitize_file_name(&input),
        }),
        Commands::Check => {
            let Some(path) = cli.config.as_deref() else {
                bail!("check needs --config <PATH>");
            };
            let config = load_config(Some(path))?;
            Warden::new(config.clone())
                .with_context(|| format!("invalid config {}", path.display()))?;
            print_json(&CheckOutput {
                valid: true,
                config,
            })
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<WardenConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            WardenConfig::load(path).with_context(|| format!("loading {}", path.display()))
        }
        None => Ok(WardenConfig::default()),
    }
}

fn build_warden(path: Option<&Path>) -> anyhow::Result<Warden> {
    let config = load_config(path)?;
    Ok(Warden::new(config)?)
}

fn read_input(input: Option<String>) -> anyhow::Result<String> {
    if let Some(input) = input {
        return Ok(input);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
