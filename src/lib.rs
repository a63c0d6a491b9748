// turtle-storm command core, compiled to wasm for the playground page
// validates typed commands and keeps the editable history the canvas replays
pub mod command;
pub mod commands;
pub mod context;
pub mod error;
pub mod events;
pub mod history;
pub mod parser;
pub mod tracing_config;
pub mod validator;

pub use command::{Category, CommandMetadata, CommandParameter, CommandRegistry, ParamType, ParamValue};
pub use context::{ConsoleContext, ConsoleSettings};
pub use error::{ConfigError, HistoryError, RegistryError, ValidationError};
pub use history::CommandHistory;
pub use parser::{parse_command, CallSyntaxParser, CommandParser, ParsedCommand};
pub use validator::{coerce_argument, CommandValidator, ValidatedCommand, ValidationResult};

use serde::Serialize;
use tracing::level_filters::LevelFilter;
use wasm_bindgen::prelude::*;

// plain JS objects (not Maps), `null` for None
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn init_logging(level: LevelFilter) {
    // a second console on the same page shares the first subscriber
    if let Err(e) = tracing_config::init(level) {
        tracing::debug!(error = %e, "tracing already initialized");
    }
}

/// One playground session: validator, history and settings.
#[wasm_bindgen]
pub struct TurtleConsole {
    ctx: ConsoleContext,
}

// reply for history edits, mirrors the validation result shape
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommandResponse {
    success: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self { success: true, errors: Vec::new() }
    }

    fn failed(error: HistoryError) -> Self {
        let errors = match error {
            HistoryError::Rejected(errors) => errors,
            other => vec![other.to_string()],
        };
        Self { success: false, errors }
    }
}

#[wasm_bindgen]
impl TurtleConsole {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TurtleConsole {
        init_logging(LevelFilter::INFO);
        TurtleConsole { ctx: ConsoleContext::new() }
    }

    /// Build from a JSON settings object; throws on malformed settings.
    pub fn with_config(json: &str) -> Result<TurtleConsole, JsError> {
        let settings = ConsoleSettings::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        init_logging(settings.level_filter().unwrap_or(LevelFilter::INFO));
        let ctx = ConsoleContext::from_settings(settings).map_err(|e| JsError::new(&e.to_string()))?;
        tracing::info!(commands = ctx.validator.registry().len(), "console configured");
        Ok(TurtleConsole { ctx })
    }

    pub fn language(&self) -> String {
        self.ctx.settings.language.clone()
    }

    pub fn validate_command(&self, input: &str) -> JsValue {
        to_js(&self.ctx.validator.validate_command(input))
    }

    pub fn parse_command(&self, input: &str) -> JsValue {
        to_js(&self.ctx.validator.parse_command(input))
    }

    pub fn get_command_suggestions(&self, partial: Option<String>) -> JsValue {
        to_js(&self.ctx.validator.get_command_suggestions(partial.as_deref()))
    }

    pub fn get_command_metadata(&self, name: &str) -> JsValue {
        to_js(&self.ctx.validator.get_command_metadata(name))
    }

    pub fn get_commands_by_category(&self) -> JsValue {
        to_js(&self.ctx.validator.get_commands_by_category())
    }

    // main entry point - validate, record, redraw
    pub fn execute_command(&mut self, input: &str) -> JsValue {
        let result = self.ctx.execute(input);
        if result.is_valid {
            events::emit_console_event(events::COMMAND_EXECUTE, parser::trim_js(input));
            self.emit_redraw();
        }
        to_js(&result)
    }

    pub fn edit_command(&mut self, index: usize, input: &str) -> JsValue {
        let response = match self.ctx.edit(index, input) {
            Ok(_) => {
                self.emit_redraw();
                CommandResponse::ok()
            }
            Err(e) => CommandResponse::failed(e),
        };
        to_js(&response)
    }

    pub fn remove_command(&mut self, index: usize) -> JsValue {
        let response = match self.ctx.remove(index) {
            Ok(_) => {
                self.emit_redraw();
                CommandResponse::ok()
            }
            Err(e) => CommandResponse::failed(e),
        };
        to_js(&response)
    }

    pub fn reset(&mut self) {
        self.ctx.reset();
        events::emit_console_event(events::RESET, &());
        self.emit_redraw();
    }

    pub fn get_history(&self) -> JsValue {
        to_js(self.ctx.history.entries())
    }

    /// Typed commands for the canvas, oldest first.
    pub fn replay(&self) -> JsValue {
        to_js(&self.ctx.replay())
    }

    fn emit_redraw(&self) {
        events::emit_console_event(events::TURTLE_DRAW, &self.ctx.replay());
    }
}

impl Default for TurtleConsole {
    fn default() -> Self {
        Self::new()
    }
}
