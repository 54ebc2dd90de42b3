use crate::components::use_page_config;
use crate::models::counter::CounterRamp;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Raw `data-count` value.
    pub count: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    /// The ramp starts once this turns true.
    pub running: bool,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let config = use_page_config();
    let ramp = {
        let count = props.count.clone();
        let steps = config.counter_steps;
        use_mut_ref(move || CounterRamp::from_attr(Some(count.as_str()), steps))
    };
    // (ticks taken, value shown)
    let display = use_state(|| (0u32, 0i64));

    {
        let deps = (props.running, display.0);
        let ramp = ramp.clone();
        let display = display.clone();
        let tick_ms = config.counter_tick_ms;
        use_effect_with_deps(
            move |(running, _)| {
                let pending = (*running && !ramp.borrow().is_finished()).then(|| {
                    Timeout::new(tick_ms, move || {
                        let next = {
                            let mut ramp = ramp.borrow_mut();
                            ramp.tick().map(|value| (ramp.ticks(), value))
                        };
                        if let Some(next) = next {
                            display.set(next);
                        }
                    })
                });
                move || drop(pending)
            },
            deps,
        );
    }

    html! {
        <div class="stat">
            <span class="stat-number" data-count={props.count.clone()}>{display.1}</span>
            <span class="stat-suffix">{props.suffix.clone()}</span>
            <p class="stat-label">{props.label.clone()}</p>
        </div>
    }
}
