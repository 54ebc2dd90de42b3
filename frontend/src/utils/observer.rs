use crate::error::Result;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// One-way switch fed with intersection readings. Leaving the viewport never
/// turns it back off.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Returns true only for the reading that flips the latch.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// An intersection observer that fires once per target and then stops
/// watching it. Disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_once(
    target: &Element,
    threshold: f64,
    on_reveal: impl Fn() + 'static,
) -> Result<RevealObserver> {
    let mut latch = RevealLatch::default();
    let callback = EntriesCallback::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if latch.observe(entry.is_intersecting()) {
                    observer.unobserve(&entry.target());
                    on_reveal();
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// True from the first time the node crosses `threshold` onward.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|el| {
                    observe_once(&el, threshold, move || revealed.set(true))
                        .map_err(|e| log::error!("Failed to observe element: {}", e))
                        .ok()
                });
                move || drop(observer)
            },
            node,
        );
    }
    *revealed
}
