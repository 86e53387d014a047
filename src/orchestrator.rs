//! Bump orchestrator coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: fetch → compare → patch manifest → update changelog
//! - Dry-run mode support
//! - Verbose diagnostics on stderr
//!
//! Both rewrites are rendered in memory before either file is written, so a
//! missing changelog header never leaves a half-applied bump behind. A failed
//! changelog write after a successful manifest write is not rolled back.

use crate::changelog::ChangelogUpdater;
use crate::config::BumpConfig;
use crate::domain::{BumpResult, BumpedVersions, Tag, Version};
use crate::error::AppError;
use crate::manifest::{pinned_version, replace_pinned_version, ComposerJson};
use crate::progress::Progress;
use crate::registry::TagSource;
use chrono::{Local, NaiveDate};

/// Orchestrator for the bump workflow
pub struct BumpOrchestrator {
    /// Where the latest tag comes from
    source: Box<dyn TagSource>,
    /// Paths, dependency key, dry-run flag
    config: BumpConfig,
    /// Fixed release date (defaults to the local date at bump time)
    today: Option<NaiveDate>,
    /// Show a spinner while fetching
    show_progress: bool,
    /// Print diagnostics to stderr
    verbose: bool,
}

impl BumpOrchestrator {
    /// Create a new orchestrator
    pub fn new(source: Box<dyn TagSource>, config: BumpConfig) -> Self {
        Self {
            source,
            config,
            today: None,
            show_progress: false,
            verbose: false,
        }
    }

    /// Use a fixed date for the changelog header
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Fetch the latest upstream tag
    pub async fn latest_tag(&self) -> Result<Tag, AppError> {
        let mut progress = Progress::new(self.show_progress);
        progress.spinner("Fetching WordPress tags...");
        let result = self.source.fetch_latest_tag().await;
        progress.finish_and_clear();

        let tag = result?;
        if self.verbose {
            eprintln!("Latest tag: {} ({})", tag.name, self.source.endpoint());
            if !tag.commit.sha.is_empty() {
                eprintln!("  commit: {}", tag.commit.sha);
            }
        }
        Ok(tag)
    }

    /// Run the bump workflow
    pub async fn bump(&self) -> Result<BumpResult, AppError> {
        let paths = &self.config.paths;
        let dependency = self.config.dependency.as_str();

        // Step 1: latest upstream version
        let tag = self.latest_tag().await?;
        let latest = Version::parse(&tag.name)?;

        // Step 2: pinned version
        let manifest = ComposerJson::new(&paths.manifest);
        let manifest_content = manifest.read()?;
        let pinned = pinned_version(&manifest_content, manifest.path(), dependency)?;
        if self.verbose {
            eprintln!("Pinned {}: {}", dependency, pinned);
        }

        if !pinned.is_older_than(&latest) {
            return Ok(BumpResult::AlreadyCurrent { pinned, latest });
        }

        // Step 3: render both rewrites
        let patched =
            replace_pinned_version(&manifest_content, manifest.path(), dependency, &latest)?;
        let changelog = ChangelogUpdater::new(&paths.changelog);
        let entry = changelog.prepare(&latest, self.today())?;
        if self.verbose {
            eprintln!("Release: {} -> {}", entry.current, entry.next);
        }

        // Step 4: write (unless dry-run)
        if self.config.dry_run {
            if self.verbose {
                eprintln!("Dry run: leaving files untouched");
            }
        } else {
            manifest.write(&patched)?;
            changelog.write(&entry)?;
        }

        Ok(BumpResult::Updated(BumpedVersions {
            previous: pinned,
            wordpress: latest,
            release: entry.next,
        }))
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
