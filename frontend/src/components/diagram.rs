use crate::error::{PageError, Result};
use crate::utils::document;
use web_sys::Document;
use yew::prelude::*;

pub const KEYFRAMES_STYLE_ID: &str = "diagram-keyframes";

const DIAGRAM_KEYFRAMES: &str = "
    @keyframes draw {
        to { stroke-dashoffset: 0; }
    }
    @keyframes fadeIn {
        to { opacity: 1; }
    }
";

/// Adds the `draw`/`fadeIn` keyframes to the head unless they are already there.
/// Returns whether a style element was inserted.
pub fn register_keyframes(document: &Document) -> Result<bool> {
    if document.get_element_by_id(KEYFRAMES_STYLE_ID).is_some() {
        return Ok(false);
    }
    let head = document
        .head()
        .ok_or_else(|| PageError::MissingElement("head".to_string()))?;
    let style = document.create_element("style")?;
    style.set_id(KEYFRAMES_STYLE_ID);
    style.set_text_content(Some(DIAGRAM_KEYFRAMES));
    head.append_child(&style)?;
    Ok(true)
}

/// Building sketch with three windows and an energy-flow line, drawn in on load.
#[function_component(Whiteboard)]
pub fn whiteboard() -> Html {
    use_effect_with_deps(
        |_| {
            if let Err(e) = document().and_then(|d| register_keyframes(&d)) {
                log::error!("Failed to register diagram keyframes: {}", e);
            }
            || ()
        },
        (),
    );

    html! {
        <div id="whiteboardCanvas" class="whiteboard-canvas">
            <svg width="100%" height="100%">
                <rect x="50" y="100" width="200" height="150" stroke="#2A5CAA" stroke-width="3" fill="none"
                      style="stroke-dasharray: 1000; stroke-dashoffset: 1000; animation: draw 2s ease-in-out forwards 0.5s"/>

                // Windows
                <rect x="80" y="120" width="30" height="30" fill="#2A5CAA" opacity="0" style="animation: fadeIn 0.5s ease forwards 1.5s"/>
                <rect x="130" y="120" width="30" height="30" fill="#2A5CAA" opacity="0" style="animation: fadeIn 0.5s ease forwards 1.8s"/>
                <rect x="180" y="120" width="30" height="30" fill="#2A5CAA" opacity="0" style="animation: fadeIn 0.5s ease forwards 2.1s"/>

                // Energy flow
                <line x1="250" y1="100" x2="350" y2="50" stroke="#FF6B35" stroke-width="2"
                      stroke-dasharray="10,5" opacity="0" style="animation: fadeIn 1s ease forwards 2.5s"/>
                <circle cx="350" cy="50" r="10" fill="#FF6B35" opacity="0" style="animation: fadeIn 0.5s ease forwards 2.5s"/>
            </svg>
        </div>
    }
}
