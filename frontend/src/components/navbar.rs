use crate::components::scroll_link::ScrollLink;
use crate::components::use_page_config;
use crate::utils::scroll::is_scrolled;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let config = use_page_config();
    let scrolled = use_state(|| false);

    // Toggle the scrolled look past the threshold
    {
        let scrolled = scrolled.clone();
        let threshold = config.navbar_scroll_threshold;
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(scroll_y) = win.scroll_y() {
                                scrolled.set(is_scrolled(scroll_y, threshold));
                            }
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::error!("Failed to attach navbar scroll listener: {:?}", e);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <ScrollLink href="#" class={classes!("logo")}>
                <span class="logo-mark">{"⚡"}</span>{config.product_name.clone()}
            </ScrollLink>
            <div class="nav-links">
                <ScrollLink href="#problem">{"Problem"}</ScrollLink>
                <ScrollLink href="#dashboard">{"Dashboard"}</ScrollLink>
                <ScrollLink href="#process">{"How it works"}</ScrollLink>
                <ScrollLink href="#calculator">{"ROI"}</ScrollLink>
                <ScrollLink href="#timeline">{"Rollout"}</ScrollLink>
            </div>
        </nav>
    }
}
