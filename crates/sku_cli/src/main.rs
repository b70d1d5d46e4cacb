//! sku - print localized SKU codes and spec text
//!
//! Reads a JSON snapshot record (or an array of them) from a file or stdin
//! and prints one line per record.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use sku_i18n::{FormatConfig, SkuFormatter};
use tracing_subscriber::EnvFilter;

/// Localized SKU code and spec text
#[derive(Parser, Debug)]
#[command(name = "sku")]
#[command(about = "Print localized SKU codes and spec text from snapshot JSON")]
#[command(version)]
struct Cli {
    /// Formatter settings (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Requested locale, e.g. zh-CN, zh-TW, en-US (overrides the config file)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Label shown for the DEFAULT sku code (overrides the config file)
    #[arg(long, global = true)]
    default_label: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the display code of each snapshot
    Code(InputArgs),
    /// Print the formatted spec of each snapshot
    Spec(InputArgs),
    /// Format bare spec-values payloads
    Values(InputArgs),
    /// Print `CODE (spec)` for each snapshot
    Describe(InputArgs),
}

#[derive(clap::Args, Debug)]
struct InputArgs {
    /// Input JSON (stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

impl Command {
    fn input(&self) -> Option<&Path> {
        match self {
            Self::Code(a) | Self::Spec(a) | Self::Values(a) | Self::Describe(a) => a.file.as_deref(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = resolve_config(
        cli.config.as_deref(),
        cli.locale.clone(),
        cli.default_label.clone(),
    )?;
    tracing::debug!(locale = %config.locale, "resolved formatter config");
    let formatter = SkuFormatter::new(config);

    let input = read_input(cli.command.input())?;

    for line in render(&cli.command, &formatter, &input) {
        println!("{line}");
    }
    Ok(())
}

/// Config file (or defaults) with command-line overrides applied.
fn resolve_config(
    path: Option<&Path>,
    locale: Option<String>,
    default_label: Option<String>,
) -> Result<FormatConfig> {
    let mut config = match path {
        Some(p) => FormatConfig::load(p)
            .with_context(|| format!("Failed to load config {}", p.display()))?,
        None => FormatConfig::default(),
    };
    if let Some(locale) = locale {
        config.locale = locale;
    }
    if default_label.is_some() {
        config.default_label = default_label;
    }
    Ok(config)
}

fn read_input(file: Option<&Path>) -> Result<Value> {
    let (content, source) = match file {
        Some(p) => (
            fs::read_to_string(p).with_context(|| format!("Failed to read {}", p.display()))?,
            p.display().to_string(),
        ),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            (buf, "stdin".to_string())
        }
    };
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON from {source}"))
}

/// One output line per record; a top-level array is a list of records.
fn render(command: &Command, formatter: &SkuFormatter, input: &Value) -> Vec<String> {
    let records: Vec<&Value> = match input {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    records
        .into_iter()
        .map(|record| match command {
            Command::Code(_) => formatter.sku_code(record),
            Command::Spec(_) => formatter.sku_spec(record),
            Command::Values(_) => formatter.format_spec_values(record),
            Command::Describe(_) => formatter.describe(record),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn formatter() -> SkuFormatter {
        SkuFormatter::new(FormatConfig {
            locale: "en".to_string(),
            default_label: Some("Standard".to_string()),
        })
    }

    fn command(name: &str) -> Command {
        Cli::parse_from(["sku", name]).command
    }

    #[test]
    fn cli_parses_subcommands_and_overrides() {
        let cli = Cli::parse_from(["sku", "spec", "--locale", "zh-TW", "order.json"]);
        assert_eq!(cli.locale.as_deref(), Some("zh-TW"));
        assert!(matches!(cli.command, Command::Spec(_)));
        assert_eq!(cli.command.input(), Some(Path::new("order.json")));

        let cli = Cli::parse_from(["sku", "--default-label", "Std", "code"]);
        assert_eq!(cli.default_label.as_deref(), Some("Std"));
        assert!(matches!(cli.command, Command::Code(_)));
        assert_eq!(cli.command.input(), None);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let cfg = resolve_config(None, Some("en-US".into()), None).unwrap();
        assert_eq!(cfg.locale, "en-US");
        assert_eq!(cfg.default_label, None);

        let cfg = resolve_config(None, None, Some("Std".into())).unwrap();
        assert_eq!(cfg.locale, "zh-CN");
        assert_eq!(cfg.default_label.as_deref(), Some("Std"));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = resolve_config(Some(Path::new("/nonexistent/sku.toml")), None, None);
        assert!(err.is_err());
    }

    #[test]
    fn render_one_line_per_record() {
        let input = json!([
            { "sku_code": "default", "spec_values": { "size": "L" } },
            { "sku_code": "A-1", "spec_values": { "color": { "zh-CN": "红", "en-US": "Red" } } },
        ]);
        let f = formatter();
        assert_eq!(render(&command("code"), &f, &input), vec!["Standard", "A-1"]);
        assert_eq!(render(&command("spec"), &f, &input), vec!["size: L", "color: Red"]);
        assert_eq!(
            render(&command("describe"), &f, &input),
            vec!["Standard (size: L)", "A-1 (color: Red)"]
        );
    }

    #[test]
    fn render_bare_values() {
        let f = formatter();
        let input = json!({ "zh-CN": "红色", "en-US": "Red" });
        assert_eq!(render(&command("values"), &f, &input), vec!["Red"]);
        assert_eq!(render(&command("code"), &f, &json!(null)), vec![""]);
    }
}
