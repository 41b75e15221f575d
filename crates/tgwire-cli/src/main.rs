use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ValidationArg {
    Strict,
    Off,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnknownFieldsArg {
    Deny,
    Warn,
    Ignore,
}

#[derive(Parser, Debug)]
#[command(
    name = "tgwire-cli",
    about = "Normalize Telegram Bot API payloads into their canonical wire form",
    version
)]
struct Args {
    /// Record to decode the input as (case-insensitive)
    #[arg(short = 't', long = "type", default_value = "Update")]
    record: String,

    /// Check documented field constraints while normalizing
    #[arg(long, value_enum, default_value_t = ValidationArg::Strict)]
    validation: ValidationArg,

    /// What to do with keys the record does not declare
    #[arg(long, value_enum, default_value_t = UnknownFieldsArg::Deny)]
    unknown_fields: UnknownFieldsArg,

    /// Pretty-print JSON on output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Print the known record names and exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if args.list {
        for name in tgwire::catalog::RECORD_NAMES {
            println!("{}", name);
        }
        return Ok(());
    }

    let Some(record) = tgwire::catalog::lookup(&args.record) else {
        bail!("unknown record type `{}` (see --list)", args.record);
    };

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let options = tgwire::Options {
        validation: match args.validation {
            ValidationArg::Strict => tgwire::Validation::Strict,
            ValidationArg::Off => tgwire::Validation::Off,
        },
        unknown_fields: match args.unknown_fields {
            UnknownFieldsArg::Deny => tgwire::UnknownFields::Deny,
            UnknownFieldsArg::Warn => tgwire::UnknownFields::Warn,
            UnknownFieldsArg::Ignore => tgwire::UnknownFields::Ignore,
        },
    };
    tracing::debug!(record, ?options, "normalizing input");

    let value: serde_json::Value = serde_json::from_str(&buf).context("input is not valid JSON")?;
    let wire = tgwire::catalog::normalize_named(record, value, &options)
        .with_context(|| format!("input is not a valid {}", record))?;

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&wire)?);
    } else {
        println!("{}", serde_json::to_string(&wire)?);
    }

    Ok(())
}
