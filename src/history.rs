use std::fmt;

use tracing::{debug, warn};

use crate::error::HistoryError;
use crate::parser::trim_js;
use crate::validator::{CommandValidator, ValidatedCommand, ValidationResult};

/// Accepted command lines, oldest first.
///
/// Only strings that validated are stored; replaying re-validates each one
/// so the caller always draws from typed commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandHistory {
    entries: Vec<String>,
    limit: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` keeps everything; otherwise the oldest entries are dropped.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self { entries: Vec::new(), limit: limit.map(|l| l.max(1)) }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates `input` and appends it when valid. Invalid input leaves the
    /// history untouched.
    pub fn execute(&mut self, validator: &CommandValidator, input: &str) -> ValidationResult {
        let result = validator.validate_command(input);
        if result.is_valid {
            self.entries.push(trim_js(input).to_string());
            self.enforce_limit();
            debug!(len = self.entries.len(), "command added to history");
        }
        result
    }

    pub fn edit(
        &mut self,
        validator: &CommandValidator,
        index: usize,
        input: &str,
    ) -> Result<ValidatedCommand, HistoryError> {
        self.check_index(index)?;
        let result = validator.validate_command(input);
        match result.parsed_command {
            Some(cmd) if result.is_valid => {
                self.entries[index] = trim_js(input).to_string();
                Ok(cmd)
            }
            _ => Err(HistoryError::Rejected(result.errors)),
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<String, HistoryError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Typed commands for a full redraw, in history order.
    ///
    /// Entries that no longer validate (e.g. the registry changed) are
    /// skipped with a warning.
    pub fn replay(&self, validator: &CommandValidator) -> Vec<ValidatedCommand> {
        self.entries
            .iter()
            .filter_map(|line| {
                let result = validator.validate_command(line);
                if result.parsed_command.is_none() {
                    warn!(command = %line, errors = ?result.errors, "invalid command in history");
                }
                result.parsed_command
            })
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<(), HistoryError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(HistoryError::OutOfRange { index, len: self.entries.len() })
        }
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                let excess = self.entries.len() - limit;
                self.entries.drain(..excess);
            }
        }
    }
}

// numbered listing, same layout as a shell's `history`
impl fmt::Display for CommandHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:4}  {}", i + 1, cmd)?;
        }
        Ok(())
    }
}
