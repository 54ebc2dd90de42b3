use crate::components::use_page_config;
use crate::utils::clock::local_time_string;
use gloo_timers::callback::Interval;
use yew::prelude::*;

#[function_component(LiveClock)]
pub fn live_clock() -> Html {
    let interval_ms = use_page_config().clock_interval_ms;
    let time = use_state(String::new);

    {
        let time = time.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || match local_time_string() {
                    Ok(now) => time.set(now),
                    Err(e) => log::error!("Failed to format live time: {}", e),
                };
                update();
                let interval = Interval::new(interval_ms, update);
                move || drop(interval)
            },
            (),
        );
    }

    html! { <span id="liveTime" class="live-time">{(*time).clone()}</span> }
}
