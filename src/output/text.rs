//! Text output formatter for human-readable display

use crate::domain::{BumpResult, Tag};
use crate::output::{OutputConfig, OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for terminal output
pub struct TextFormatter {
    config: OutputConfig,
}

impl TextFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    fn status_line(&self, result: &BumpResult) -> String {
        let message = match (result, self.config.dry_run) {
            (BumpResult::Updated(_), true) => "would update (dry run)",
            _ => result.message(),
        };

        if !self.config.color {
            return message.to_string();
        }
        match result {
            BumpResult::Updated(_) => message.green().to_string(),
            BumpResult::AlreadyCurrent { .. } => message.dimmed().to_string(),
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_bump(&self, result: &BumpResult, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{}", self.status_line(result))?;

        if self.config.verbosity != Verbosity::Verbose {
            return Ok(());
        }

        match result {
            BumpResult::Updated(versions) => {
                writeln!(
                    writer,
                    "  WordPress: {} -> {}",
                    versions.previous, versions.wordpress
                )?;
                writeln!(writer, "  Release:   {}", versions.release)?;
            }
            BumpResult::AlreadyCurrent { pinned, latest } => {
                writeln!(writer, "  Pinned: {}", pinned)?;
                writeln!(writer, "  Latest: {}", latest)?;
            }
        }
        Ok(())
    }

    fn format_tag(&self, tag: &Tag, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{}", tag.name)?;

        if self.config.verbosity == Verbosity::Verbose {
            if !tag.commit.sha.is_empty() {
                writeln!(writer, "  commit:  {}", tag.commit.sha)?;
            }
            if !tag.zipball_url.is_empty() {
                writeln!(writer, "  zipball: {}", tag.zipball_url)?;
            }
            if !tag.tarball_url.is_empty() {
                writeln!(writer, "  tarball: {}", tag.tarball_url)?;
            }
        }
        Ok(())
    }
}
