use crate::utils::observer::use_reveal;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use super::reveal::REVEAL_THRESHOLD;

pub const TIMELINE_THRESHOLD: f64 = 0.3;

const PHASES: [(&str, &str, &str); 4] = [
    ("Week 1", "Audit", "We map every building, meter and AC unit on campus."),
    ("Week 2-3", "Install", "Sensors and controllers go in without disrupting classes."),
    ("Week 4", "Calibrate", "Schedules and comfort ranges are tuned per building."),
    ("Month 2+", "Save", "Automated optimisation runs and savings are reported monthly."),
];

#[derive(Properties, PartialEq)]
pub struct TimelineItemProps {
    pub when: AttrValue,
    pub title: AttrValue,
    pub body: AttrValue,
}

#[function_component(TimelineItem)]
pub fn timeline_item(props: &TimelineItemProps) -> Html {
    let node = use_node_ref();
    let animated = use_reveal(node.clone(), REVEAL_THRESHOLD);
    let settled = use_reveal(node.clone(), TIMELINE_THRESHOLD);

    html! {
        <div
            ref={node}
            class={classes!("timeline-item", animated.then_some("animate-in"))}
            style={settled.then(|| AttrValue::from("opacity: 1; transform: translateY(0);"))}
        >
            <div class="timeline-marker"></div>
            <div class="timeline-content">
                <span class="timeline-date">{props.when.clone()}</span>
                <h3>{props.title.clone()}</h3>
                <p>{props.body.clone()}</p>
            </div>
        </div>
    }
}

#[function_component(Timeline)]
pub fn timeline() -> Html {
    html! {
        <div class="timeline">
            {
                PHASES.iter().map(|(when, title, body)| html! {
                    <TimelineItem key={*title} when={*when} title={*title} body={*body} />
                }).collect::<Html>()
            }
        </div>
    }
}
