//! bump-bedrock - WordPress version bumps for Bedrock projects
//!
//! This library provides the core functionality for:
//! - Fetching the latest WordPress tag from the GitHub tags API
//! - Reading and patching the pinned version in composer.json
//! - Adding a patch release entry to CHANGELOG.md

pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
