use crate::components::use_page_config;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

#[derive(Clone, Copy, Debug, PartialEq)]
enum AlertPhase {
    Shown,
    Fading,
    Hidden,
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    /// `warning`, `info` or `success`.
    pub level: AttrValue,
    pub message: AttrValue,
}

/// Dismissible alert: fades out, then leaves the layout.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let fade_ms = use_page_config().alert_fade_ms;
    let phase = use_state(|| AlertPhase::Shown);

    let onclick = {
        let phase = phase.clone();
        let message = props.message.clone();
        Callback::from(move |_: MouseEvent| {
            gloo_console::log!(format!("Dismissing alert: {}", message));
            phase.set(AlertPhase::Fading);
            let phase = phase.clone();
            Timeout::new(fade_ms, move || phase.set(AlertPhase::Hidden)).forget();
        })
    };

    let style = match *phase {
        AlertPhase::Shown => None,
        AlertPhase::Fading => Some("opacity: 0;"),
        AlertPhase::Hidden => Some("opacity: 0; display: none;"),
    };

    html! {
        <div class={classes!("alert", format!("alert-{}", props.level))} style={style}>
            <span class="alert-message">{props.message.clone()}</span>
            <button type="button" aria-label="Dismiss" {onclick}>{"×"}</button>
        </div>
    }
}
