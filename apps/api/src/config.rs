use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::taxonomy::{SnapshotRole, SnapshotSpec};

const DEFAULT_SKILL_SNAPSHOTS: &str = "skills.json";
const DEFAULT_CONCEPT_SNAPSHOTS: &str =
    "concepts-and-common-relations.json,the-ssyk-hierarchy-with-occupations.json";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub taxonomy_dir: PathBuf,
    pub skill_snapshots: Vec<String>,
    pub concept_snapshots: Vec<String>,
    pub port: u16,
    pub rust_log: String,
    pub request_timeout: Duration,
    pub max_text_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            taxonomy_dir: PathBuf::from(env_or("TAXONOMY_DIR", "data")),
            skill_snapshots: split_list(&env_or("SKILL_SNAPSHOTS", DEFAULT_SKILL_SNAPSHOTS)),
            concept_snapshots: split_list(&env_or("CONCEPT_SNAPSHOTS", DEFAULT_CONCEPT_SNAPSHOTS)),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            request_timeout: Duration::from_secs(
                env_or("REQUEST_TIMEOUT_SECS", "30")
                    .parse::<u64>()
                    .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            max_text_bytes: env_or("MAX_TEXT_BYTES", "1048576")
                .parse::<usize>()
                .context("MAX_TEXT_BYTES must be a byte count")?,
        })
    }

    /// Snapshot files in load order: skills first, then concept snapshots.
    /// Relative names resolve against `taxonomy_dir`.
    pub fn snapshot_specs(&self) -> Vec<SnapshotSpec> {
        let skills = self
            .skill_snapshots
            .iter()
            .map(|name| SnapshotSpec::new(self.taxonomy_dir.join(name), SnapshotRole::Skills));
        let concepts = self
            .concept_snapshots
            .iter()
            .map(|name| SnapshotSpec::new(self.taxonomy_dir.join(name), SnapshotRole::Concepts));
        skills.chain(concepts).collect()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
