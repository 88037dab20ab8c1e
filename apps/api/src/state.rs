use std::sync::Arc;

use anyhow::{Context, Result};

use crate::analysis::detector::SkillDetector;
use crate::config::Config;
use crate::taxonomy::Taxonomy;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything behind the `Arc`s is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub taxonomy: Arc<Taxonomy>,
    /// Compiled word-boundary patterns for every skill label in `taxonomy`.
    pub detector: Arc<SkillDetector>,
    pub config: Config,
}

impl AppState {
    pub fn new(taxonomy: Taxonomy, config: Config) -> Result<Self> {
        let detector =
            SkillDetector::new(taxonomy.skills()).context("failed to compile skill patterns")?;
        Ok(Self {
            taxonomy: Arc::new(taxonomy),
            detector: Arc::new(detector),
            config,
        })
    }
}
