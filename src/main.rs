//! marker64 CLI entry point.
//!
//! Reads a raw HTTP request, rewrites Base64 marker spans in its body, and
//! writes the result. Can also wrap a byte range of the input in a marker
//! pair, which is how spans are prepared before sending.

use anyhow::{bail, Context, Result};
use clap::Parser;
use marker64::{insert_markers, MarkerKind, MarkerPair, MarkerRewriter, RewriteConfig};
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "marker64")]
#[command(
    author,
    version,
    about = "Base64 marker rewriter for raw HTTP requests"
)]
struct Args {
    /// Raw request file to rewrite (stdin if omitted)
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path (YAML or JSON)
    #[arg(short, long, env = "MARKER64_CONFIG")]
    config: Option<PathBuf>,

    /// Wrap a byte range in a marker pair instead of rewriting
    #[arg(long, value_parser = ["decode", "encode"])]
    mark: Option<String>,

    /// Selection start for --mark (byte offset, inclusive)
    #[arg(long, requires = "mark")]
    start: Option<usize>,

    /// Selection end for --mark (byte offset, exclusive)
    #[arg(long, requires = "mark")]
    end: Option<usize>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print example configuration and exit.
    #[arg(long)]
    example_config: bool,
}

fn print_example_config() {
    let example = r#"# marker64 Configuration Example
version: "1"

settings:
  # Maximum body size to rewrite (bytes). 0 disables the limit.
  max_body_size: 10485760  # 10MB
"#;
    println!("{}", example);
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    if args.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    if args.example_config {
        print_example_config();
        return Ok(());
    }

    // Load configuration
    let config = if let Some(config_path) = &args.config {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        if config_path
            .extension()
            .is_some_and(|e| e == "yaml" || e == "yml")
        {
            RewriteConfig::from_yaml(&content)?
        } else {
            RewriteConfig::from_json(&content)?
        }
    } else {
        RewriteConfig::default()
    };

    // Read the raw request
    let raw = match &args.input {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read input: {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let output = if let Some(kind) = &args.mark {
        mark_selection(&raw, kind, args.start, args.end)?
    } else {
        let rewriter = MarkerRewriter::new(&config);
        match rewriter.rewrite_raw(&raw) {
            Some(rewritten) => {
                info!(
                    in_len = raw.len(),
                    out_len = rewritten.len(),
                    "request rewritten"
                );
                rewritten
            }
            None => {
                info!("no change");
                raw
            }
        }
    };

    match &args.output {
        Some(path) => std::fs::write(path, &output)
            .with_context(|| format!("Failed to write output: {}", path.display()))?,
        None => std::io::stdout()
            .write_all(&output)
            .context("Failed to write stdout")?,
    }

    Ok(())
}

/// Wrap `[start, end)` of the input in the requested marker pair.
fn mark_selection(
    raw: &[u8],
    kind: &str,
    start: Option<usize>,
    end: Option<usize>,
) -> Result<Vec<u8>> {
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => bail!("--mark requires --start and --end"),
    };

    let kind = match kind {
        "decode" => MarkerKind::Decode,
        _ => MarkerKind::Encode,
    };
    let pair = MarkerPair::for_kind(kind);

    match insert_markers(raw, start, end, &pair) {
        Some(out) => {
            info!(start, end, prefix = pair.prefix, "selection marked");
            Ok(out)
        }
        None => bail!(
            "selection [{start}, {end}) is empty or out of range (input is {} bytes)",
            raw.len()
        ),
    }
}
