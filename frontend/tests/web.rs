#![cfg(target_arch = "wasm32")]

use campusiq_frontend::components::cursor::follow_pointer;
use campusiq_frontend::components::diagram::{register_keyframes, KEYFRAMES_STYLE_ID};
use campusiq_frontend::utils::observer::observe_once;
use campusiq_frontend::utils::scroll::scroll_to_anchor;
use campusiq_frontend::utils::{document, visibility::force_visible};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> HtmlElement {
    let document = document().unwrap();
    let host: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    host.set_inner_html(html);
    document.body().unwrap().append_child(&host).unwrap();
    host
}

#[wasm_bindgen_test]
fn hidden_inline_styles_are_cleared() {
    let host = mount(
        r#"<div id="faded" style="opacity: 0"></div>
           <div id="shifted" style="transform: translateY(40px)"></div>
           <div id="rotated" style="transform: rotate(5deg)"></div>"#,
    );
    let document = document().unwrap();
    force_visible(&document).unwrap();

    let style = |id: &str, prop: &str| {
        document
            .get_element_by_id(id)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .style()
            .get_property_value(prop)
            .unwrap()
    };
    assert_eq!(style("faded", "opacity"), "1");
    assert_eq!(style("shifted", "transform"), "none");
    assert_eq!(style("rotated", "transform"), "rotate(5deg)");
    host.remove();
}

#[wasm_bindgen_test]
fn allow_listed_elements_are_forced_visible() {
    let host = mount(r#"<div class="process-step" id="step"></div>"#);
    let document = document().unwrap();
    force_visible(&document).unwrap();
    // Idempotent
    force_visible(&document).unwrap();

    let step: HtmlElement = document.get_element_by_id("step").unwrap().dyn_into().unwrap();
    assert_eq!(step.style().get_property_value("opacity").unwrap(), "1");
    assert_eq!(step.style().get_property_value("visibility").unwrap(), "visible");
    host.remove();
}

#[wasm_bindgen_test]
fn keyframes_register_once() {
    let document = document().unwrap();
    let first = register_keyframes(&document).unwrap();
    let second = register_keyframes(&document).unwrap();
    assert!(first || document.get_element_by_id(KEYFRAMES_STYLE_ID).is_some());
    assert!(!second);
    let styles = document
        .query_selector_all(&format!("#{}", KEYFRAMES_STYLE_ID))
        .unwrap();
    assert_eq!(styles.length(), 1);
}

#[wasm_bindgen_test]
fn anchors_resolve_only_existing_targets() {
    let host = mount(r#"<div id="anchor-target" style="height: 40px"></div>"#);

    assert!(matches!(scroll_to_anchor("#anchor-target", 80.0), Ok(true)));
    assert!(matches!(scroll_to_anchor("#missing", 80.0), Ok(false)));
    assert!(matches!(scroll_to_anchor("#", 80.0), Ok(false)));
    // Not a valid selector, so the browser keeps its default
    assert!(matches!(scroll_to_anchor("#1bad", 80.0), Ok(false)));
    host.remove();
}

#[wasm_bindgen_test]
fn reveal_observer_attaches_to_mounted_element() {
    let host = mount(r#"<div class="problem-card" id="watched"></div>"#);
    let target = document().unwrap().get_element_by_id("watched").unwrap();

    let observer = observe_once(&target, 0.1, || ());
    assert!(observer.is_ok());
    drop(observer);
    host.remove();
}

#[wasm_bindgen_test]
fn cursor_elements_follow_coordinates() {
    let host = mount(r#"<div class="cursor-dot" id="dot"></div>"#);
    let dot: HtmlElement = document().unwrap().get_element_by_id("dot").unwrap().dyn_into().unwrap();

    follow_pointer(&dot, 12, 34).unwrap();
    assert_eq!(dot.style().get_property_value("left").unwrap(), "12px");
    assert_eq!(dot.style().get_property_value("top").unwrap(), "34px");
    host.remove();
}
