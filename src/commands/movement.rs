use crate::command::{Category, CommandMetadata, CommandParameter, ParamType, ParamValue};

/// Turtle motion. `sleep` lives here too since it only paces movement.
pub fn commands() -> Vec<CommandMetadata> {
    vec![
        CommandMetadata::new("forward", Category::Movement)
            .with_aliases(&["fd", "move"])
            .with_param(CommandParameter::required("steps", ParamType::Number))
            .with_examples(&["forward(100)", "fd(50)", "forward(200)"]),
        CommandMetadata::new("back", Category::Movement)
            .with_aliases(&["bk"])
            .with_param(CommandParameter::required("steps", ParamType::Number))
            .with_examples(&["back(100)", "bk(50)"]),
        CommandMetadata::new("left", Category::Movement)
            .with_aliases(&["lt"])
            .with_param(CommandParameter::required("degrees", ParamType::Number))
            .with_examples(&["left(90)", "lt(45)", "left(180)"]),
        CommandMetadata::new("right", Category::Movement)
            .with_aliases(&["rt"])
            .with_param(CommandParameter::required("degrees", ParamType::Number))
            .with_examples(&["right(90)", "rt(45)", "right(180)"]),
        CommandMetadata::new("turn", Category::Movement)
            .with_param(CommandParameter::required("degrees", ParamType::Number))
            .with_examples(&["turn(90)", "turn(-45)", "turn(180)"]),
        CommandMetadata::new("arc", Category::Movement)
            .with_param(CommandParameter::required("radius", ParamType::Number))
            .with_param(CommandParameter::required("angle", ParamType::Number))
            .with_param(CommandParameter::optional(
                "counterclockwise",
                ParamType::Boolean,
                Some(ParamValue::Boolean(false)),
            ))
            .with_examples(&["arc(50, 90)", "arc(100, 180)", "arc(30, 45, true)"]),
        CommandMetadata::new("sleep", Category::Movement)
            .with_param(CommandParameter::required("milliseconds", ParamType::Number))
            .with_examples(&["sleep(1000)", "sleep(500)", "sleep(2000)"]),
    ]
}
