//! File stream handler

use crate::core::{Formatter, Handler, Level, LogRecord, Result};
use crate::formatters::LineFormatter;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-mode file sink. Opens the target file on construction and flushes
/// buffered output on drop.
pub struct StreamHandler {
    writer: BufWriter<File>,
    path: PathBuf,
    level: Level,
    formatter: Box<dyn Formatter>,
}

impl StreamHandler {
    pub fn new(path: impl Into<PathBuf>, level: Level) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            level,
            formatter: Box::new(LineFormatter::new()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Handler for StreamHandler {
    fn handle(&mut self, record: &LogRecord) -> Result<()> {
        let mut line = self.formatter.format(record);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn level(&self) -> Level {
        self.level
    }

    fn set_formatter(&mut self, formatter: Box<dyn Formatter>) {
        self.formatter = formatter;
    }

    fn name(&self) -> &str {
        "stream"
    }
}

impl Drop for StreamHandler {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
