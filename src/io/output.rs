use crate::formatting::FormattingConfig;
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::pipeline::Recomputation;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_recomputation(&mut self, result: &Recomputation) -> anyhow::Result<()>;
}

/// Rendering options shared by the human-readable writers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Show at most this many table rows (`None` shows all)
    pub top: Option<usize>,
    pub formatting: FormattingConfig,
}

impl RenderOptions {
    /// Number of rows to show out of `total`.
    pub fn visible_rows(&self, total: usize) -> usize {
        self.top.map_or(total, |top| top.min(total))
    }
}

pub fn create_writer(
    format: OutputFormat,
    destination: Box<dyn Write>,
    options: RenderOptions,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination, options)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination, options)),
    }
}
