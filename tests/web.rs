//! Browser tests for the JS-facing console. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use turtle_storm::TurtleConsole;

wasm_bindgen_test_configure!(run_in_browser);

fn get(value: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(value, &key.into()).unwrap()
}

fn page() -> web_sys::Window {
    web_sys::window().expect("tests run in a browser")
}

fn clear_callback() {
    js_sys::Reflect::delete_property(page().as_ref(), &"__turtleCallback".into()).unwrap();
}

#[wasm_bindgen_test]
fn validate_returns_plain_object() {
    let console = TurtleConsole::new();
    let result = console.validate_command("arc(50, 90)");
    assert_eq!(get(&result, "isValid"), JsValue::TRUE);
    let args = js_sys::Array::from(&get(&get(&result, "parsedCommand"), "args"));
    assert_eq!(args.length(), 3);
    assert_eq!(args.get(0).as_f64(), Some(50.0));
    assert_eq!(args.get(2).as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn missing_results_are_null() {
    let console = TurtleConsole::new();
    assert!(console.parse_command("invalid").is_null());
    assert!(console.get_command_metadata("fd").is_null());
    let invalid = console.validate_command("forward()");
    assert!(get(&invalid, "parsedCommand").is_undefined());
}

#[wasm_bindgen_test]
fn categories_are_object_keys() {
    let console = TurtleConsole::new();
    let groups = console.get_commands_by_category();
    let movement = js_sys::Array::from(&get(&groups, "movement"));
    assert_eq!(get(&movement.get(0), "name").as_string().as_deref(), Some("forward"));
}

#[wasm_bindgen_test]
fn history_round_trip() {
    let mut console = TurtleConsole::new();
    console.execute_command("forward(10)");
    console.execute_command("nope()");
    console.execute_command("left(90)");
    assert_eq!(js_sys::Array::from(&console.get_history()).length(), 2);

    let edited = console.edit_command(0, "forward(x)");
    assert_eq!(get(&edited, "success"), JsValue::FALSE);

    let removed = console.remove_command(1);
    assert_eq!(get(&removed, "success"), JsValue::TRUE);
    assert_eq!(js_sys::Array::from(&console.replay()).length(), 1);

    console.reset();
    assert_eq!(js_sys::Array::from(&console.get_history()).length(), 0);
}

#[wasm_bindgen_test]
fn config_sets_language_and_limit() {
    let Ok(mut console) = TurtleConsole::with_config(r#"{"language": "pl", "historyLimit": 1}"#) else {
        panic!("settings rejected");
    };
    assert_eq!(console.language(), "pl");
    console.execute_command("penDown()");
    console.execute_command("penUp()");
    let history = js_sys::Array::from(&console.get_history());
    assert_eq!(history.get(0).as_string().as_deref(), Some("penUp()"));
    assert!(TurtleConsole::with_config(r#"{"logLevel": "loud"}"#).is_err());
}

#[wasm_bindgen_test]
fn execute_reports_to_page_callback() {
    let win = page();
    js_sys::Reflect::set(win.as_ref(), &"__turtleLog".into(), &js_sys::Array::new()).unwrap();
    let callback = js_sys::Function::new_with_args("type, detail", "window.__turtleLog.push([type, detail]);");
    js_sys::Reflect::set(win.as_ref(), &"__turtleCallback".into(), &callback).unwrap();

    let mut console = TurtleConsole::new();
    console.execute_command(" forward(10) ");
    console.execute_command("forward()");
    clear_callback();

    let log = js_sys::Array::from(&get(win.as_ref(), "__turtleLog"));
    assert_eq!(log.length(), 2);

    let executed = js_sys::Array::from(&log.get(0));
    assert_eq!(executed.get(0).as_string().as_deref(), Some("command:execute"));
    assert_eq!(executed.get(1).as_string().as_deref(), Some("forward(10)"));

    let draw = js_sys::Array::from(&log.get(1));
    assert_eq!(draw.get(0).as_string().as_deref(), Some("turtle:draw"));
    let commands = js_sys::Array::from(&draw.get(1));
    assert_eq!(commands.length(), 1);
    assert_eq!(get(&commands.get(0), "name").as_string().as_deref(), Some("forward"));
}

#[wasm_bindgen_test]
fn reset_falls_back_to_window_event() {
    clear_callback();
    let win = page();

    let fired = Rc::new(Cell::new(false));
    let detail_was_null = Rc::new(Cell::new(false));
    let listener = {
        let fired = fired.clone();
        let detail_was_null = detail_was_null.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            fired.set(true);
            if let Some(custom) = event.dyn_ref::<web_sys::CustomEvent>() {
                detail_was_null.set(custom.detail().is_null());
            }
        })
    };
    win.add_event_listener_with_callback("reset", listener.as_ref().unchecked_ref())
        .unwrap();

    let mut console = TurtleConsole::new();
    console.execute_command("penDown()");
    console.reset();

    win.remove_event_listener_with_callback("reset", listener.as_ref().unchecked_ref())
        .unwrap();
    assert!(fired.get(), "reset listener never ran");
    assert!(detail_was_null.get());
}
