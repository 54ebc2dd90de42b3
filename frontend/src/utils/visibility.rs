use crate::error::Result;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, NodeList};

/// Elements that must end up visible whether or not their reveal animation runs.
pub const MUST_BE_VISIBLE: [&str; 13] = [
    ".hero h1",
    ".hero p",
    ".hero-buttons",
    ".stats-counter",
    ".section-title",
    ".problem-card",
    ".dashboard-container",
    ".calculator-container",
    ".chart-container",
    ".alert-container",
    ".timeline-item",
    ".process-step",
    ".building",
];

// Only inline styles can hide an element this way, so `[style]` is the whole
// candidate set.
const INLINE_STYLED: &str = "[style]";

pub fn resets_opacity(value: &str) -> bool {
    value == "0"
}

pub fn resets_transform(value: &str) -> bool {
    value.contains("translate")
}

fn html_elements(list: &NodeList) -> impl Iterator<Item = HtmlElement> + '_ {
    (0..list.length())
        .filter_map(move |i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
}

/// Clears hidden/translated inline styling and forces the allow-list visible.
/// Returns how many elements were touched. Safe to call repeatedly.
pub fn force_visible(document: &Document) -> Result<usize> {
    let mut touched = 0;

    let styled = document.query_selector_all(INLINE_STYLED)?;
    for el in html_elements(&styled) {
        let style = el.style();
        let mut changed = false;
        if resets_opacity(&style.get_property_value("opacity")?) {
            style.set_property("opacity", "1")?;
            changed = true;
        }
        if resets_transform(&style.get_property_value("transform")?) {
            style.set_property("transform", "none")?;
            changed = true;
        }
        if changed {
            touched += 1;
        }
    }

    for selector in MUST_BE_VISIBLE {
        let list = document.query_selector_all(selector)?;
        for el in html_elements(&list) {
            let style = el.style();
            style.set_property("opacity", "1")?;
            style.set_property("transform", "none")?;
            style.set_property("visibility", "visible")?;
            touched += 1;
        }
    }

    if let Some(body) = document.body() {
        let style = body.style();
        style.set_property("opacity", "1")?;
        style.set_property("visibility", "visible")?;
    }

    Ok(touched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_zero_opacity_is_reset() {
        assert!(resets_opacity("0"));
        assert!(!resets_opacity("0.5"));
        assert!(!resets_opacity(""));
        assert!(!resets_opacity("1"));
    }

    #[test]
    fn translations_are_reset() {
        assert!(resets_transform("translateY(20px)"));
        assert!(resets_transform("scale(1.1) translate3d(0, 10px, 0)"));
        assert!(!resets_transform("rotate(5deg)"));
        assert!(!resets_transform(""));
    }
}
