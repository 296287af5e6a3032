//! `constjson` CLI: query JSON documents by key/index path from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Print the value at a path (stdin → stdout)
//! echo '{"a":1,"b":[10,20,"x"]}' | constjson get b 1
//!
//! # Read from a file, fall back to a default when the path is absent
//! constjson get -i settings.json --default 30 server timeout
//!
//! # List the keys of a nested object
//! constjson keys -i settings.json map map1
//!
//! # Scan the whole document and report the first error
//! constjson check -i settings.json
//!
//! # Reach an object key made of digits by quoting it
//! constjson get -i settings.json ports '"8080"'
//! ```
//!
//! Path segments made only of digits are array indices; everything else is an
//! object key. A segment wrapped in double quotes is always a key, with the
//! quotes removed. Logging goes to stderr; `-v`/`-vv` raise the level and
//! `RUST_LOG` overrides it.

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use constjson_core::{classify, Document, PathKey, Value};
use std::io::{self, Read};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "constjson",
    version,
    about = "Query JSON documents by key/index path"
)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a path
    Get {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Literal printed when the path does not exist (e.g. 30, true, "text")
        #[arg(short, long)]
        default: Option<String>,
        /// Path segments; digit-only segments are array indices, "quoted" ones are keys
        path: Vec<String>,
    },
    /// List the keys of the object, or the indices of the array, at a path
    Keys {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Path segments; digit-only segments are array indices, "quoted" ones are keys
        path: Vec<String>,
    },
    /// Scan the whole document and report the first error
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Get {
            input,
            default,
            path,
        } => {
            let source = read_input(input.as_deref())?;
            let doc = Document::parse(&source).context("Failed to parse document")?;
            let keys = parse_path(&path);

            let value = match default.as_deref() {
                Some(literal) => doc.get_or(&keys, default_value(literal)),
                None => doc.get(&keys),
            }
            .with_context(|| format!("Failed to resolve path {}", display_path(&keys)))?;

            println!("{value}");
        }
        Commands::Keys { input, path } => {
            let source = read_input(input.as_deref())?;
            let doc = Document::parse(&source).context("Failed to parse document")?;
            let keys = parse_path(&path);

            let value = doc
                .get(&keys)
                .with_context(|| format!("Failed to resolve path {}", display_path(&keys)))?;

            match value {
                Value::Object(object) => {
                    for key in object.keys() {
                        println!("{}", key.context("Failed to scan object")?);
                    }
                }
                Value::Array(array) => {
                    let len = array.len().context("Failed to scan array")?;
                    for i in 0..len {
                        println!("{i}");
                    }
                }
                other => bail!(
                    "Value at {} is {}, not an object or array",
                    display_path(&keys),
                    other.kind()
                ),
            }
        }
        Commands::Check { input } => {
            let source = read_input(input.as_deref())?;
            let doc = Document::parse(&source).context("Failed to parse document")?;
            doc.validate().context("Document is invalid")?;
            println!("ok");
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Digit-only segments become indices; everything else is a key. A segment in
/// double quotes is a key even when its content is all digits.
fn parse_path(segments: &[String]) -> Vec<PathKey<'_>> {
    segments
        .iter()
        .map(|segment| {
            if let Some(key) = segment
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
            {
                return PathKey::Key(key);
            }
            let is_index = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
            match segment.parse::<usize>() {
                Ok(index) if is_index => PathKey::Index(index),
                _ => PathKey::Key(segment),
            }
        })
        .collect()
}

/// Classify the `--default` literal like a document token; text that is not a
/// valid literal is used as a plain string.
fn default_value(literal: &str) -> Value<'_> {
    match classify(literal) {
        Ok(scalar) => Value::Scalar(scalar),
        Err(e) => {
            debug!(error = %e, "default is not a literal, using it as a string");
            Value::from(literal)
        }
    }
}

fn display_path(keys: &[PathKey<'_>]) -> String {
    if keys.is_empty() {
        return "<root>".to_string();
    }
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
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
