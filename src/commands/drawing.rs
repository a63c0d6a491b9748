use crate::command::{Category, CommandMetadata, CommandParameter, ParamType};

// path and pen control, plus text stamped at the turtle position
pub fn commands() -> Vec<CommandMetadata> {
    let bare = |name: &str, example: &str| {
        CommandMetadata::new(name, Category::Drawing).with_examples(&[example])
    };
    vec![
        bare("penDown", "penDown()"),
        bare("penUp", "penUp()"),
        bare("beginPath", "beginPath()"),
        bare("closePath", "closePath()"),
        bare("stroke", "stroke()"),
        bare("fill", "fill()"),
        CommandMetadata::new("fillText", Category::Drawing)
            .with_param(CommandParameter::required("text", ParamType::String))
            .with_examples(&["fillText(\"Hello\")", "fillText(\"My Drawing\")"]),
        CommandMetadata::new("strokeText", Category::Drawing)
            .with_param(CommandParameter::required("text", ParamType::String))
            .with_examples(&["strokeText(\"Hello\")", "strokeText(\"Outline Text\")"]),
    ]
}
