//! Integration tests for command parsing and validation through the public API.

use std::sync::Arc;

use turtle_storm::{
    parse_command, Category, CommandMetadata, CommandParameter, CommandRegistry, CommandValidator, ParamType,
    ParamValue, ParsedCommand, ValidatedCommand, ValidationResult,
};

fn sample_arg(param_type: ParamType) -> (&'static str, ParamValue) {
    match param_type {
        ParamType::Number => ("42", ParamValue::Number(42.0)),
        ParamType::String => ("\"red\"", ParamValue::String("red".to_string())),
        ParamType::Boolean => ("true", ParamValue::Boolean(true)),
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn parses_simple_call() {
        assert_eq!(
            parse_command("forward(100)"),
            Some(ParsedCommand { name: "forward".into(), args: vec!["100".into()] })
        );
    }

    #[test]
    fn parses_quoted_argument_verbatim() {
        assert_eq!(
            parse_command("fillText(\"Hello World\")"),
            Some(ParsedCommand { name: "fillText".into(), args: vec!["\"Hello World\"".into()] })
        );
    }

    #[test]
    fn bare_word_does_not_parse() {
        assert_eq!(parse_command("invalid"), None);
    }

    #[test]
    fn validates_forward() {
        let result = CommandValidator::default().validate_command("forward(100)");
        assert_eq!(
            result,
            ValidationResult {
                is_valid: true,
                errors: vec![],
                parsed_command: Some(ValidatedCommand {
                    name: "forward".into(),
                    args: vec![ParamValue::Number(100.0)],
                }),
            }
        );
    }

    #[test]
    fn arc_backfills_counterclockwise() {
        let result = CommandValidator::default().validate_command("arc(50, 90)");
        assert!(result.is_valid);
        assert_eq!(
            result.parsed_command,
            Some(ValidatedCommand {
                name: "arc".into(),
                args: vec![ParamValue::Number(50.0), ParamValue::Number(90.0), ParamValue::Boolean(false)],
            })
        );
    }

    #[test]
    fn unknown_command_is_the_only_error() {
        let result = CommandValidator::default().validate_command("unknownCommand()");
        assert_eq!(
            result,
            ValidationResult {
                is_valid: false,
                errors: vec!["Unknown command: unknownCommand".into()],
                parsed_command: None,
            }
        );
    }

    #[test]
    fn arity_boundaries() {
        let v = CommandValidator::default();
        assert!(v.validate_command("forward()").errors[0].contains("Too few arguments"));
        assert!(v.validate_command("forward(1,2,3)").errors[0].contains("Too many arguments"));
    }
}

mod properties {
    use super::*;

    #[test]
    fn every_registered_command_accepts_well_typed_arguments() {
        let v = CommandValidator::default();
        for meta in v.registry().iter() {
            let required: Vec<_> = meta
                .parameters
                .iter()
                .filter(|p| p.required)
                .map(|p| sample_arg(p.param_type))
                .collect();
            let all: Vec<_> = meta.parameters.iter().map(|p| sample_arg(p.param_type)).collect();

            for args in [&required, &all] {
                let raw: Vec<&str> = args.iter().map(|(raw, _)| *raw).collect();
                let input = format!("{}({})", meta.name, raw.join(", "));
                let result = v.validate_command(&input);
                assert!(result.is_valid, "{} -> {:?}", input, result.errors);
                let cmd = result.parsed_command.unwrap();
                assert_eq!(cmd.name, meta.name);
                let typed: Vec<ParamValue> = args.iter().map(|(_, value)| value.clone()).collect();
                assert_eq!(cmd.args[..typed.len()], typed[..]);
            }
        }
    }

    #[test]
    fn numeric_arguments_come_back_as_numbers() {
        let result = CommandValidator::default().validate_command("setPosition(1,2)");
        assert_eq!(
            result.parsed_command.unwrap().args,
            vec![ParamValue::Number(1.0), ParamValue::Number(2.0)]
        );
    }

    #[test]
    fn parse_and_validate_are_repeatable() {
        let v = CommandValidator::default();
        for input in ["forward(10)", "arc(1, 2, FALSE)", "fillText('a, b')", "nope(", "back(x, y)"] {
            assert_eq!(v.parse_command(input), v.parse_command(input));
            assert_eq!(v.validate_command(input), v.validate_command(input));
        }
    }

    #[test]
    fn hostile_input_never_panics() {
        let v = CommandValidator::default();
        let long = format!("forward({})", "9".repeat(10_000));
        for input in ["", "()", "(((", "f(\"", "f('')", "\u{1F422}(1)", "forward(\u{0}1)", long.as_str()] {
            let result = v.validate_command(input);
            assert_eq!(result.is_valid, result.parsed_command.is_some());
        }
    }
}

mod custom_registry {
    use super::*;

    fn validator() -> CommandValidator {
        let mut reg = CommandRegistry::new();
        reg.register_command(
            CommandMetadata::new("stamp", Category::Custom)
                .with_aliases(&["st"])
                .with_param(CommandParameter::required("label", ParamType::String))
                .with_param(CommandParameter::optional("scale", ParamType::Number, Some(ParamValue::Number(1.0))))
                .with_param(CommandParameter::optional("outline", ParamType::Boolean, None)),
        )
        .unwrap();
        CommandValidator::new(Arc::new(reg))
    }

    #[test]
    fn defaults_and_omissions_keep_positional_order() {
        let v = validator();
        assert_eq!(
            v.validate_command("stamp(hi)").parsed_command.unwrap().args,
            vec![ParamValue::from("hi"), ParamValue::Number(1.0)]
        );
        assert_eq!(
            v.validate_command("stamp('hi', 2, true)").parsed_command.unwrap().args,
            vec![ParamValue::from("hi"), ParamValue::Number(2.0), ParamValue::Boolean(true)]
        );
    }

    #[test]
    fn type_errors_on_optional_params_are_reported() {
        let result = validator().validate_command("stamp(hi, big, nope)");
        assert_eq!(
            result.errors,
            vec![
                "Invalid number value for parameter scale: big",
                "Invalid boolean value for parameter outline: nope",
            ]
        );
    }

    #[test]
    fn queries_see_only_the_injected_registry() {
        let v = validator();
        assert_eq!(v.get_command_suggestions(None), vec!["stamp"]);
        assert!(v.get_command_metadata("st").is_none());
        let groups = v.get_commands_by_category();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&Category::Custom][0].name, "stamp");
    }
}
