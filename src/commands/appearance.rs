use crate::command::{Category, CommandMetadata, CommandParameter, ParamType};

pub fn commands() -> Vec<CommandMetadata> {
    vec![
        CommandMetadata::new("setPosition", Category::Appearance)
            .with_param(CommandParameter::required("x", ParamType::Number))
            .with_param(CommandParameter::required("y", ParamType::Number))
            .with_examples(&["setPosition(100, 100)", "setPosition(0, 0)", "setPosition(400, 200)"]),
        CommandMetadata::new("setSpeed", Category::Appearance)
            .with_param(CommandParameter::required("speed", ParamType::Number))
            .with_examples(&["setSpeed(1)", "setSpeed(5)", "setSpeed(10)"]),
        CommandMetadata::new("setSize", Category::Appearance)
            .with_param(CommandParameter::required("size", ParamType::Number))
            .with_examples(&["setSize(50)", "setSize(25)", "setSize(100)"]),
        // visibility toggles for the turtle sprite
        CommandMetadata::new("hide", Category::Appearance).with_examples(&["hide()"]),
        CommandMetadata::new("show", Category::Appearance).with_examples(&["show()"]),
    ]
}
