use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::command::{Category, CommandMetadata, CommandRegistry, ParamType, ParamValue};
use crate::error::ValidationError;
use crate::parser::{trim_js, CallSyntaxParser, CommandParser, ParsedCommand};

// longest numeric prefix, the way the browser's parseFloat reads it
static NUMBER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("static regex must compile")
});

/// A command whose arguments have been coerced to their declared types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedCommand {
    pub name: String,
    pub args: Vec<ParamValue>,
}

/// Outcome of `validate_command`. `parsed_command` is set iff `is_valid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_command: Option<ValidatedCommand>,
}

impl ValidationResult {
    fn rejected(error: ValidationError) -> Self {
        Self { is_valid: false, errors: vec![error.to_string()], parsed_command: None }
    }

    fn from_parts(errors: Vec<ValidationError>, command: ValidatedCommand) -> Self {
        if errors.is_empty() {
            Self { is_valid: true, errors: Vec::new(), parsed_command: Some(command) }
        } else {
            Self {
                is_valid: false,
                errors: errors.iter().map(|e| e.to_string()).collect(),
                parsed_command: None,
            }
        }
    }
}

/// Coerces one raw token to `expected`; `None` means present but unparsable.
pub fn coerce_argument(raw: &str, expected: ParamType) -> Option<ParamValue> {
    let token = trim_js(raw);
    match expected {
        ParamType::Number => parse_number(token).map(ParamValue::Number),
        ParamType::Boolean => {
            if token.eq_ignore_ascii_case("true") {
                Some(ParamValue::Boolean(true))
            } else if token.eq_ignore_ascii_case("false") {
                Some(ParamValue::Boolean(false))
            } else {
                None
            }
        }
        ParamType::String => Some(ParamValue::String(unquote(token).to_string())),
    }
}

fn parse_number(token: &str) -> Option<f64> {
    let literal = NUMBER_PREFIX_RE.find(token)?.as_str();
    match literal.trim_start_matches(['+', '-']) {
        "Infinity" if literal.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => literal.parse::<f64>().ok(),
    }
}

// strips exactly one matching outer pair of quotes
fn unquote(token: &str) -> &str {
    let bytes = token.as_bytes();
    // a lone quote is kept as-is; the web UI's slice(1, -1) turned it into ""
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &token[1..token.len() - 1];
        }
    }
    token
}

/// Validates command strings against a shared, read-only registry.
pub struct CommandValidator {
    registry: Arc<CommandRegistry>,
    parser: Box<dyn CommandParser + Send + Sync>,
}

impl CommandValidator {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self::with_parser(registry, Box::new(CallSyntaxParser))
    }

    pub fn with_parser(registry: Arc<CommandRegistry>, parser: Box<dyn CommandParser + Send + Sync>) -> Self {
        Self { registry, parser }
    }

    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    pub fn parse_command(&self, input: &str) -> Option<ParsedCommand> {
        self.parser.parse(input)
    }

    /// Parses, checks arity and coerces every argument.
    ///
    /// Only a syntax failure or an unknown name stops early; every other
    /// problem is collected so the UI can show them all at once.
    pub fn validate_command(&self, input: &str) -> ValidationResult {
        let Some(ParsedCommand { name, args }) = self.parse_command(input) else {
            debug!(input, "rejected: not a call");
            return ValidationResult::rejected(ValidationError::InvalidFormat);
        };

        let Some(meta) = self.registry.get(&name) else {
            debug!(%name, "rejected: unknown command");
            return ValidationResult::rejected(ValidationError::UnknownCommand { name });
        };

        let mut errors = Vec::new();
        let required = meta.required_count();
        let total = meta.total_count();

        if args.len() < required {
            errors.push(ValidationError::TooFewArguments {
                name: name.clone(),
                expected: required,
                actual: args.len(),
            });
        }
        if args.len() > total {
            errors.push(ValidationError::TooManyArguments {
                name: name.clone(),
                expected: total,
                actual: args.len(),
            });
        }

        let mut values = Vec::with_capacity(total);
        for (i, param) in meta.parameters.iter().enumerate() {
            match args.get(i) {
                Some(raw) => match coerce_argument(raw, param.param_type) {
                    Some(value) => values.push(value),
                    // a bad optional argument is an error too, it does not fall back to the default
                    None => errors.push(ValidationError::InvalidArgument {
                        parameter: param.name.clone(),
                        expected: param.param_type,
                        value: raw.clone(),
                    }),
                },
                None => {
                    if !param.required {
                        if let Some(default) = &param.default {
                            values.push(default.clone());
                        }
                    }
                }
            }
        }

        debug!(%name, errors = errors.len(), "validated");
        ValidationResult::from_parts(errors, ValidatedCommand { name, args: values })
    }

    /// Canonical names starting with `partial` (case-insensitive), sorted.
    pub fn get_command_suggestions(&self, partial: Option<&str>) -> Vec<String> {
        let names = self.registry.get_command_names();
        match partial.filter(|p| !p.is_empty()) {
            None => names,
            Some(p) => {
                let prefix = p.to_lowercase();
                names
                    .into_iter()
                    .filter(|name| name.to_lowercase().starts_with(&prefix))
                    .collect()
            }
        }
    }

    pub fn get_command_metadata(&self, name: &str) -> Option<&CommandMetadata> {
        self.registry.get(name)
    }

    pub fn get_commands_by_category(&self) -> BTreeMap<Category, Vec<&CommandMetadata>> {
        let mut categories: BTreeMap<Category, Vec<&CommandMetadata>> = BTreeMap::new();
        for meta in self.registry.iter() {
            categories.entry(meta.category).or_default().push(meta);
        }
        categories
    }
}

impl Default for CommandValidator {
    fn default() -> Self {
        Self::new(Arc::new(CommandRegistry::default_commands()))
    }
}
