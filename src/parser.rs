use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// whitespace as the browser's String.trim and \s see it
const JS_SPACE: &str = r"[\t\n\x0B\f\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

// `.` stops at these, as in JS
const NOT_LINE_END: &str = r"[^\n\r\x{2028}\x{2029}]";

// name(args) with the whole input consumed
static CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^([a-zA-Z_$][a-zA-Z0-9_$]*){ws}*\({ws}*({any}*?){ws}*\)$",
        ws = JS_SPACE,
        any = NOT_LINE_END,
    );
    Regex::new(&pattern).expect("static regex must compile")
});

// one argument: runs of quoted strings or non-comma chars
static ARG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:"[^"]*"|'[^']*'|[^,])+"#).expect("static regex must compile")
});

/// Syntactic split of a command, before any type knowledge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Turns a raw command line into a name and raw argument tokens.
///
/// `None` is the only syntax-error signal; the validator reports it as an
/// invalid format.
pub trait CommandParser {
    fn parse(&self, input: &str) -> Option<ParsedCommand>;
}

/// Regex-based `name(arg, arg, ...)` parser.
///
/// Known limitations: parentheses nested inside arguments are not tracked
/// and quotes cannot be escaped inside a quoted string. Whitespace and line
/// breaks follow browser rules (`\u{FEFF}` trims, `\u{85}` does not, a
/// `\r` inside the call is a syntax error).
#[derive(Debug, Clone, Copy, Default)]
pub struct CallSyntaxParser;

impl CommandParser for CallSyntaxParser {
    fn parse(&self, input: &str) -> Option<ParsedCommand> {
        parse_command(input)
    }
}

/// `str::trim` with the browser's notion of whitespace.
pub fn trim_js(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let caps = CALL_RE.captures(trim_js(input))?;
    let name = caps.get(1)?.as_str().to_string();
    let arg_text = caps.get(2).map_or("", |m| m.as_str());

    // empty interior = no args, not one empty arg
    let args = if trim_js(arg_text).is_empty() {
        Vec::new()
    } else {
        ARG_RE
            .find_iter(arg_text)
            .map(|m| trim_js(m.as_str()).to_string())
            .collect()
    };

    Some(ParsedCommand { name, args })
}
