//! Store configuration
//!
//! Values are layered with figment: built-in defaults, then an optional TOML
//! file, then `KANBAN_`-prefixed environment variables.

use crate::error::{KanbanError, Result};
use crate::types::Board;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `KANBAN_ACTIVITY_LIMIT=50`
pub const ENV_PREFIX: &str = "KANBAN_";

/// Default number of activity entries retained
pub const DEFAULT_ACTIVITY_LIMIT: usize = 256;

/// Tunables for a [`crate::BoardStore`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Titles of the empty columns every new board starts with
    pub seed_columns: Vec<String>,
    /// How many activity entries to keep (oldest are dropped first)
    pub activity_limit: usize,
    /// Start with the "My First Board" sample instead of an empty store
    pub sample_board: bool,
    /// Recorded on every activity entry when set
    pub actor: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_columns: Board::default_column_titles(),
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
            sample_board: false,
            actor: None,
        }
    }
}

impl StoreConfig {
    /// Build the layered figment without extracting it
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration from defaults, an optional TOML file and the
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.is_file() {
                return Err(KanbanError::invalid_value(
                    "config",
                    format!("file not found: {}", path.display()),
                ));
            }
        }

        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        tracing::debug!(?config, "loaded store configuration");
        Ok(config)
    }

    /// Reject configurations the store cannot honor
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self.seed_columns.iter().position(|t| t.trim().is_empty()) {
            return Err(KanbanError::invalid_value(
                "seed_columns",
                format!("entry {} is blank", index),
            ));
        }
        Ok(())
    }

    /// Set the seed column titles
    pub fn with_seed_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seed_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the activity limit
    pub fn with_activity_limit(mut self, limit: usize) -> Self {
        self.activity_limit = limit;
        self
    }

    /// Start from the sample board
    pub fn with_sample_board(mut self, sample: bool) -> Self {
        self.sample_board = sample;
        self
    }

    /// Set the actor recorded on activity entries
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}
