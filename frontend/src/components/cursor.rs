use crate::error::Result;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

/// Pins an element's top-left corner to viewport coordinates.
pub fn follow_pointer(el: &HtmlElement, x: i32, y: i32) -> Result<()> {
    let style = el.style();
    style.set_property("left", &format!("{}px", x))?;
    style.set_property("top", &format!("{}px", y))?;
    Ok(())
}

/// Two decorative elements that track the pointer on every move.
#[function_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let cursor = use_node_ref();
    let dot = use_node_ref();

    {
        let cursor = cursor.clone();
        let dot = dot.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let destructor: Box<dyn FnOnce()> = match (
                    document,
                    cursor.cast::<HtmlElement>(),
                    dot.cast::<HtmlElement>(),
                ) {
                    (Some(document), Some(cursor), Some(dot)) => {
                        let callback = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                            let (x, y) = (e.client_x(), e.client_y());
                            if let Err(err) = follow_pointer(&cursor, x, y)
                                .and_then(|_| follow_pointer(&dot, x, y))
                            {
                                log::error!("Failed to move cursor: {}", err);
                            }
                        });
                        if let Err(e) = document.add_event_listener_with_callback(
                            "mousemove",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            log::error!("Failed to attach cursor listener: {:?}", e);
                        }
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "mousemove",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    html! {
        <>
            <div class="custom-cursor" ref={cursor}></div>
            <div class="cursor-dot" ref={dot}></div>
        </>
    }
}
