use crate::models::process::StepHighlight;
use yew::prelude::*;

const STEPS: [(&str, &str, &str); 4] = [
    ("01", "Sense", "Smart meters and AC controllers report load from every building."),
    ("02", "Analyze", "Usage is compared against schedules, occupancy and weather."),
    ("03", "Optimize", "Idle units are throttled and peaks are shifted automatically."),
    ("04", "Report", "Facilities teams get alerts and a live view of savings."),
];

#[function_component(ProcessSteps)]
pub fn process_steps() -> Html {
    let highlight = use_state(StepHighlight::default);

    html! {
        <div class="process-steps">
            {
                STEPS.iter().enumerate().map(|(index, (number, title, body))| {
                    let onmouseenter = {
                        let highlight = highlight.clone();
                        Callback::from(move |_: MouseEvent| highlight.set(highlight.enter(index)))
                    };
                    html! {
                        <div
                            key={index}
                            class={classes!("process-step", highlight.is_active(index).then_some("active"))}
                            {onmouseenter}
                        >
                            <div class="step-number">{*number}</div>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
