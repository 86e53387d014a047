//! JSON output formatter for machine processing

use crate::domain::{BumpResult, Tag};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    dry_run: bool,
}

impl JsonFormatter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

/// JSON representation of a bump
#[derive(Serialize)]
struct JsonBump<'a> {
    /// Whether this was a dry-run
    dry_run: bool,
    /// Same text the text formatter prints
    message: &'static str,
    result: &'a BumpResult,
}

impl OutputFormatter for JsonFormatter {
    fn format_bump(&self, result: &BumpResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonBump {
            dry_run: self.dry_run,
            message: result.message(),
            result,
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }

    fn format_tag(&self, tag: &Tag, writer: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, tag)?;
        writeln!(writer)
    }
}
