use crate::error::{PageError, Result};
use crate::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Debug, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Leave the click to the browser.
    PassThrough,
    /// Look the href up as a selector and scroll to it.
    Resolve(&'a str),
}

pub fn classify_href(href: &str) -> AnchorAction<'_> {
    match href {
        "#" => AnchorAction::PassThrough,
        h if h.starts_with('#') => AnchorAction::Resolve(h),
        _ => AnchorAction::PassThrough,
    }
}

pub fn scroll_top_for(offset_top: f64, anchor_offset: f64) -> f64 {
    offset_top - anchor_offset
}

/// Smoothly scrolls to the anchor target. Returns whether the click was
/// handled; unhandled clicks keep their default navigation.
pub fn scroll_to_anchor(href: &str, anchor_offset: f64) -> Result<bool> {
    let selector = match classify_href(href) {
        AnchorAction::Resolve(selector) => selector,
        AnchorAction::PassThrough => return Ok(false),
    };
    let document = document()?;
    // An invalid selector behaves like a missing target.
    let target = match document.query_selector(selector) {
        Ok(Some(el)) => el,
        _ => return Ok(false),
    };
    let target = match target.dyn_into::<HtmlElement>() {
        Ok(el) => el,
        Err(_) => return Ok(false),
    };

    let window =
        web_sys::window().ok_or_else(|| PageError::MissingElement("window".to_string()))?;
    let options = ScrollToOptions::new();
    options.set_top(scroll_top_for(target.offset_top() as f64, anchor_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_threshold_is_strict() {
        assert!(!is_scrolled(0.0, 100.0));
        assert!(!is_scrolled(100.0, 100.0));
        assert!(is_scrolled(100.5, 100.0));
    }

    #[test]
    fn bare_hash_passes_through() {
        assert_eq!(classify_href("#"), AnchorAction::PassThrough);
        assert_eq!(classify_href("/pricing"), AnchorAction::PassThrough);
        assert_eq!(classify_href("#calculator"), AnchorAction::Resolve("#calculator"));
    }

    #[test]
    fn target_sits_below_navbar() {
        assert_eq!(scroll_top_for(1200.0, 80.0), 1120.0);
        assert_eq!(scroll_top_for(40.0, 80.0), -40.0);
    }
}
