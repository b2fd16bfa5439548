//! `yamltrim` CLI — strip empty values from YAML documents.
//!
//! ## Usage
//!
//! ```sh
//! # Trim YAML (stdin → stdout)
//! printf 'a: ""\nb: [0, two]\n' | yamltrim
//!
//! # Trim from file to file
//! yamltrim -i values.yaml -o values.trimmed.yaml
//!
//! # Emit pretty-printed JSON instead of YAML
//! yamltrim --format json -i values.yaml
//!
//! # Debug logging on stderr
//! RUST_LOG=yamltrim_core=debug yamltrim -i values.yaml
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "yamltrim",
    version,
    about = "Recursively remove empty values (null, false, 0, \"\", empty lists and maps) from YAML"
)]
struct Cli {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    format: Format,

    /// Minified JSON output (requires --format json)
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.compact && cli.format != Format::Json {
        anyhow::bail!("--compact is only valid with --format json");
    }

    let yaml = read_input(cli.input.as_deref())?;
    let documents = yamltrim_core::trim_documents(&yaml).context("Failed to trim input")?;
    debug!(documents = documents.len(), format = ?cli.format, "encoding output");

    let out = match cli.format {
        Format::Yaml => yamltrim_core::encode_documents(&documents),
        Format::Json => yamltrim_core::encode_json_documents(&documents, !cli.compact),
    }
    .context("Failed to encode trimmed output")?;

    write_output(cli.output.as_deref(), &out)
}

/// Log to stderr so stdout carries only documents. `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            io::stdout()
                .lock()
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
