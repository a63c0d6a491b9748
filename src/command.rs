use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Declared type of a command parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Number,
    String,
    Boolean,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Number => "number",
            ParamType::String => "string",
            ParamType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed argument value, serialized as a bare JS number/string/bool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    String(String),
    Boolean(bool),
}

impl ParamValue {
    pub fn param_type(&self) -> ParamType {
        match self {
            ParamValue::Number(_) => ParamType::Number,
            ParamValue::String(_) => ParamType::String,
            ParamValue::Boolean(_) => ParamType::Boolean,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Boolean(b)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::String(s.to_string())
    }
}

/// Command grouping shown in the command list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Movement,
    Drawing,
    Visual,
    Appearance,
    Programmatic,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub required: bool,
    /// Backfills an omitted optional argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ParamValue>,
}

impl CommandParameter {
    pub fn required(name: &str, param_type: ParamType) -> Self {
        Self { name: name.to_string(), param_type, required: true, default: None }
    }

    pub fn optional(name: &str, param_type: ParamType, default: Option<ParamValue>) -> Self {
        Self { name: name.to_string(), param_type, required: false, default }
    }
}

/// Everything the UI and the validator know about one command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandMetadata {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<CommandParameter>,
    pub category: Category,
    #[serde(default)]
    pub description_key: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl CommandMetadata {
    pub fn new(name: &str, category: Category) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            parameters: Vec::new(),
            category,
            description_key: format!("commands.{}.description", name),
            examples: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_param(mut self, param: CommandParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn with_examples(mut self, examples: &[&str]) -> Self {
        self.examples = examples.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn required_count(&self) -> usize {
        self.parameters.iter().filter(|p| p.required).count()
    }

    pub fn total_count(&self) -> usize {
        self.parameters.len()
    }
}

/// Canonical name -> metadata, in registration order.
///
/// Built once at startup and shared read-only afterwards; aliases are
/// display-only and never used for lookup.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandMetadata>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: Vec::new(), index: HashMap::new() }
    }

    pub fn register_command(&mut self, mut meta: CommandMetadata) -> Result<(), RegistryError> {
        if self.index.contains_key(&meta.name) {
            return Err(RegistryError::DuplicateCommand(meta.name));
        }
        for param in &meta.parameters {
            if let Some(default) = &param.default {
                if default.param_type() != param.param_type {
                    return Err(RegistryError::DefaultTypeMismatch {
                        command: meta.name.clone(),
                        parameter: param.name.clone(),
                        expected: param.param_type,
                    });
                }
            }
        }
        if meta.description_key.is_empty() {
            meta.description_key = format!("commands.{}.description", meta.name);
        }
        self.index.insert(meta.name.clone(), self.commands.len());
        self.commands.push(meta);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CommandMetadata> {
        self.index.get(name).map(|&i| &self.commands[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandMetadata> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get_command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.iter().map(|c| c.name.clone()).collect();
        names.sort();
        names
    }

    /// Parses a JSON array of command metadata, the same shape the UI reads.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let entries: Vec<CommandMetadata> = serde_json::from_str(json)?;
        let mut reg = Self::new();
        for meta in entries {
            reg.register_command(meta)?;
        }
        Ok(reg)
    }

    pub fn default_commands() -> Self {
        let mut reg = Self::new();
        let builtin = crate::commands::movement::commands()
            .into_iter()
            .chain(crate::commands::drawing::commands())
            .chain(crate::commands::visual::commands())
            .chain(crate::commands::appearance::commands());
        for meta in builtin {
            let name = meta.name.clone();
            if let Err(e) = reg.register_command(meta) {
                tracing::error!(command = %name, error = %e, "skipping built-in command");
            }
        }
        tracing::debug!(count = reg.len(), "built-in command registry ready");
        reg
    }
}
