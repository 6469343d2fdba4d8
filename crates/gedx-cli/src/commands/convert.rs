use anyhow::Context;
use gedx_config::GedxConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ConvertArgs, DocumentFormat};
use crate::commands::shared::document::{parse_document, read_text, render_document, write_text};
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct ConvertSummary {
    pub input: String,
    pub output: String,
    pub from: DocumentFormat,
    pub to: DocumentFormat,
    pub places: usize,
    pub changes: usize,
}

/// Handle `gedx convert`.
pub fn handle(args: &ConvertArgs, config: &GedxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (rendered, summary) = convert(args, config)?;

    match &args.output {
        Some(path) => {
            write_text(path, &rendered)?;
            if !flags.quiet {
                output(&summary, flags.format)?;
            }
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Read `args.input` and render it in the target format.
pub fn convert(args: &ConvertArgs, config: &GedxConfig) -> anyhow::Result<(String, ConvertSummary)> {
    let from = DocumentFormat::from_path(&args.input);
    let to = args.to.unwrap_or_else(|| from.other());

    let text = read_text(&args.input)?;
    let document = parse_document(&text, from)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let rendered = render_document(&document, to, &config.xml.options())?;

    tracing::debug!(?from, ?to, records = document.record_count(), "converted document");

    let summary = ConvertSummary {
        input: args.input.display().to_string(),
        output: args
            .output
            .as_ref()
            .map_or_else(|| "-".to_string(), |path| path.display().to_string()),
        from,
        to,
        places: document.places.len(),
        changes: document.changes.len(),
    };
    Ok((rendered, summary))
}
