use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use markdownify_core::{classify, convert_to_markdown, decode_body};
use markdownify_logging::{markdownify_debug, markdownify_error, markdownify_warn};
use serde::Serialize;

/// Convert HTTP response bodies to Markdown.
///
/// Prints `{"markdown": ..., "preview": ...}` on success and exits non-zero
/// on read or conversion failures.
#[derive(Debug, Parser)]
#[command(name = "markdownify", version)]
pub struct Args {
    /// Path to the body file.
    #[arg(long)]
    pub path: PathBuf,

    /// Content type of the body, parameters included.
    #[arg(long)]
    pub content_type: String,

    /// Preview snippet character limit.
    #[arg(long, allow_negative_numbers = true)]
    pub limit: i64,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn", value_parser = parse_log_level)]
    pub log_level: LevelFilter,

    /// Also write log records to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    markdown: &'a str,
    preview: &'a str,
}

fn parse_log_level(value: &str) -> Result<LevelFilter, String> {
    markdownify_logging::parse_level(value).ok_or_else(|| format!("unknown log level `{value}`"))
}

/// Read, convert and print one body. Failures are logged before returning.
pub fn run(args: &Args, out: &mut dyn Write) -> Result<()> {
    let bytes = fs::read(&args.path)
        .with_context(|| format!("failed to read body file {}", args.path.display()))
        .inspect_err(|err| markdownify_error!("{err:#}"))?;

    let decoded = decode_body(&bytes, Some(&args.content_type));
    markdownify_debug!(
        "Decoded {} bytes from {:?} as {}",
        bytes.len(),
        args.path,
        decoded.encoding_label
    );

    markdownify_debug!(
        "Content type {:?} classified as {}",
        args.content_type,
        classify(&args.content_type)
    );

    // Non-positive limits map to zero and are rejected by the core.
    let limit = usize::try_from(args.limit).unwrap_or(0);
    let result = convert_to_markdown(&decoded.text, &args.content_type, limit)
        .context("markdown conversion failed")
        .inspect_err(|err| markdownify_warn!("{err:#}"))?;
    markdownify_debug!(
        "Converted {} chars of markdown, preview {} chars",
        result.markdown.chars().count(),
        result.preview.chars().count()
    );

    let output = Output {
        markdown: &result.markdown,
        preview: &result.preview,
    };
    serde_json::to_writer(&mut *out, &output).context("failed to serialize result")?;
    writeln!(out).context("failed to write result")?;
    Ok(())
}
