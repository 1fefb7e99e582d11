use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};

/// Enough for the scheduler to flush a render.
pub const TICK: Duration = Duration::from_millis(5);

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("test page has a document")
}

/// Fresh element attached to the test page body.
pub fn mount_point() -> Element {
    let document = document();
    let root = document.create_element("div").expect("create mount point");
    document
        .body()
        .expect("test page has a body")
        .append_child(&root)
        .expect("attach mount point");
    root
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

pub fn click(root: &Element, selector: &str) {
    find(root, selector)
        .dyn_into::<HtmlElement>()
        .expect("clickable element")
        .click();
}

pub fn type_into(root: &Element, selector: &str, text: &str) {
    let input = find(root, selector)
        .dyn_into::<HtmlInputElement>()
        .expect("input element");
    input.set_value(text);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).expect("input event");
    input.dispatch_event(&event).expect("dispatch input event");
}

pub fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector)
        .expect("valid selector")
        .length()
}
