use crate::command::{Category, CommandMetadata, CommandParameter, ParamType};

/// Canvas style setters; all take a single argument.
pub fn commands() -> Vec<CommandMetadata> {
    let setter = |name: &str, param: &str, param_type: ParamType, examples: &[&str]| {
        CommandMetadata::new(name, Category::Visual)
            .with_param(CommandParameter::required(param, param_type))
            .with_examples(examples)
    };
    vec![
        setter(
            "setStrokeStyle",
            "style",
            ParamType::String,
            &["setStrokeStyle(\"red\")", "setStrokeStyle(\"#00FF00\")", "setStrokeStyle(\"blue\")"],
        ),
        setter(
            "setFillStyle",
            "style",
            ParamType::String,
            &["setFillStyle(\"red\")", "setFillStyle(\"#00FF00\")", "setFillStyle(\"blue\")"],
        ),
        setter(
            "setLineWidth",
            "width",
            ParamType::Number,
            &["setLineWidth(5)", "setLineWidth(10)", "setLineWidth(1)"],
        ),
        setter(
            "setLineCap",
            "style",
            ParamType::String,
            &["setLineCap(\"round\")", "setLineCap(\"square\")", "setLineCap(\"butt\")"],
        ),
        setter(
            "setFont",
            "font",
            ParamType::String,
            &["setFont(\"20px Arial\")", "setFont(\"bold 16px serif\")", "setFont(\"italic 24px sans-serif\")"],
        ),
        setter(
            "setTextAlign",
            "align",
            ParamType::String,
            &["setTextAlign(\"center\")", "setTextAlign(\"left\")", "setTextAlign(\"right\")"],
        ),
        setter(
            "setTextBaseline",
            "baseline",
            ParamType::String,
            &["setTextBaseline(\"middle\")", "setTextBaseline(\"top\")", "setTextBaseline(\"bottom\")"],
        ),
    ]
}
