//! Output formatting for the CLI.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders a response as human-readable text.
pub type TextRenderer<T> = fn(&T, &mut dyn Write) -> io::Result<()>;

/// Destination for command results.
pub struct Output<'a> {
    format: OutputFormat,
    writer: &'a mut dyn Write,
}

impl<'a> Output<'a> {
    pub fn new(format: OutputFormat, writer: &'a mut dyn Write) -> Self {
        Self { format, writer }
    }

    /// Print a response: through `render` in text mode, as pretty JSON
    /// otherwise.
    pub fn emit<T: Serialize>(&mut self, value: &T, render: TextRenderer<T>) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => render(value, &mut *self.writer)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *self.writer, value)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()
    }
}
