use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::command::{CommandMetadata, CommandRegistry};
use crate::error::{ConfigError, HistoryError};
use crate::history::CommandHistory;
use crate::validator::{CommandValidator, ValidatedCommand, ValidationResult};

/// Startup options handed over by the page as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsoleSettings {
    /// UI language code; carried for the page, the core never translates.
    pub language: String,
    pub log_level: String,
    /// Max history entries, `None` = unbounded.
    pub history_limit: Option<usize>,
    /// Replaces the built-in command table when present.
    pub commands: Option<Vec<CommandMetadata>>,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            log_level: "info".to_string(),
            history_limit: None,
            commands: None,
        }
    }
}

impl ConsoleSettings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.level_filter()?;
        Ok(settings)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    fn build_registry(&self) -> Result<CommandRegistry, ConfigError> {
        let Some(commands) = &self.commands else {
            return Ok(CommandRegistry::default_commands());
        };
        let mut reg = CommandRegistry::new();
        for meta in commands {
            reg.register_command(meta.clone())?;
        }
        Ok(reg)
    }
}

/// Validator + history + settings: everything one console session owns.
pub struct ConsoleContext {
    pub settings: ConsoleSettings,
    pub validator: CommandValidator,
    pub history: CommandHistory,
}

impl ConsoleContext {
    pub fn new() -> Self {
        Self {
            settings: ConsoleSettings::default(),
            validator: CommandValidator::default(),
            history: CommandHistory::new(),
        }
    }

    pub fn from_settings(settings: ConsoleSettings) -> Result<Self, ConfigError> {
        let registry = Arc::new(settings.build_registry()?);
        Ok(Self {
            validator: CommandValidator::new(registry),
            history: CommandHistory::with_limit(settings.history_limit),
            settings,
        })
    }

    pub fn execute(&mut self, input: &str) -> ValidationResult {
        self.history.execute(&self.validator, input)
    }

    pub fn edit(&mut self, index: usize, input: &str) -> Result<ValidatedCommand, HistoryError> {
        self.history.edit(&self.validator, index, input)
    }

    pub fn remove(&mut self, index: usize) -> Result<String, HistoryError> {
        self.history.remove(index)
    }

    pub fn reset(&mut self) {
        self.history.reset();
    }

    pub fn replay(&self) -> Vec<ValidatedCommand> {
        self.history.replay(&self.validator)
    }
}

impl Default for ConsoleContext {
    fn default() -> Self {
        Self::new()
    }
}
