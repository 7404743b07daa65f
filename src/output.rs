//! Rendering query results
//!
//! One result per line: compact JSON by default, indented JSON with
//! `--pretty`, and bare strings with `--raw-output`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use serde_json::Value;

use crate::config::OutputOptions;
use crate::error::{Error, Result};

/// Writes results to stdout or to the configured file
pub struct ResultWriter {
    out: Box<dyn Write>,
    path: Option<PathBuf>,
    pretty: bool,
    raw: bool,
}

impl ResultWriter {
    /// Opens the destination described by `options`
    ///
    /// A file destination is created (or truncated) once, here.
    pub fn open(options: &OutputOptions) -> Result<Self> {
        let out: Box<dyn Write> = match &options.file {
            Some(path) => {
                let file = File::create(path).map_err(|source| Error::Output {
                    path: path.clone(),
                    source,
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };
        let mut writer = Self::with_writer(out, options);
        writer.path = options.file.clone();
        Ok(writer)
    }

    /// Wraps an arbitrary writer
    pub fn with_writer(out: Box<dyn Write>, options: &OutputOptions) -> Self {
        Self {
            out,
            path: None,
            pretty: options.pretty,
            raw: options.raw,
        }
    }

    /// Writes one result followed by a newline
    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        let rendered = render(value, self.pretty, self.raw)
            .map_err(|e| self.io_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        writeln!(self.out, "{}", rendered).map_err(|e| self.io_error(e))
    }

    /// Flushes buffered output
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: io::Error) -> Error {
        match &self.path {
            Some(path) => Error::Output {
                path: path.clone(),
                source,
            },
            None => Error::Io(source),
        }
    }
}

/// Renders a single value without the trailing newline
pub fn render(value: &Value, pretty: bool, raw: bool) -> serde_json::Result<String> {
    match value {
        Value::String(s) if raw => Ok(s.clone()),
        _ if pretty => serde_json::to_string_pretty(value),
        _ => serde_json::to_string(value),
    }
}
