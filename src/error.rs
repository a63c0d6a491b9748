use thiserror::Error;

use crate::command::ParamType;

/// Problems found while validating a single command string.
///
/// These never escape as `Err`: the validator renders each one with
/// `to_string()` and collects the messages into a `ValidationResult`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid command format. Expected: functionName(arg1, arg2, ...)")]
    InvalidFormat,

    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    #[error("Too few arguments for {name}. Expected at least {expected}, got {actual}")]
    TooFewArguments {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Too many arguments for {name}. Expected at most {expected}, got {actual}")]
    TooManyArguments {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid {expected} value for parameter {parameter}: {value}")]
    InvalidArgument {
        parameter: String,
        expected: ParamType,
        value: String,
    },
}

/// Errors raised while building a command registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("command '{0}' is already registered")]
    DuplicateCommand(String),

    #[error("default for parameter '{parameter}' of '{command}' is not a {expected}")]
    DefaultTypeMismatch {
        command: String,
        parameter: String,
        expected: ParamType,
    },

    #[error("failed to parse command registry: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by history edits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    #[error("history index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    /// The replacement command did not validate; carries the messages.
    #[error("{}", .0.join("; "))]
    Rejected(Vec<String>),
}

/// Errors raised while reading console configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid console settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("invalid log level '{0}'")]
    LogLevel(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
