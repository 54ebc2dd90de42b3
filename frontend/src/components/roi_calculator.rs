use crate::models::roi::{RoiDisplay, RoiInputs};
use crate::components::reveal::Reveal;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

fn on_slider(value: &UseStateHandle<String>) -> Callback<InputEvent> {
    let value = value.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        value.set(input.value());
    })
}

#[function_component(RoiCalculator)]
pub fn roi_calculator() -> Html {
    let units = use_state(|| "150".to_string());
    let energy_cost = use_state(|| "0.15".to_string());
    let maintenance_cost = use_state(|| "300".to_string());

    let display = RoiDisplay::from(RoiInputs::from_raw(&units, &energy_cost, &maintenance_cost).compute());

    html! {
        <Reveal class={classes!("calculator-container")} id={AttrValue::from("calculator")}>
            <div class="calculator-inputs">
                <label for="acCount">
                    {"AC units on campus: "}<span id="acCountValue">{(*units).clone()}</span>
                </label>
                <input type="range" id="acCount" min="10" max="1000" step="10"
                       value={(*units).clone()} oninput={on_slider(&units)} />

                <label for="energyCost">
                    {"Energy cost ($/kWh): "}<span id="energyCostValue">{(*energy_cost).clone()}</span>
                </label>
                <input type="range" id="energyCost" min="0.05" max="0.50" step="0.01"
                       value={(*energy_cost).clone()} oninput={on_slider(&energy_cost)} />

                <label for="maintenanceCost">
                    {"Maintenance per unit ($/yr): "}<span id="maintenanceCostValue">{(*maintenance_cost).clone()}</span>
                </label>
                <input type="range" id="maintenanceCost" min="100" max="1000" step="50"
                       value={(*maintenance_cost).clone()} oninput={on_slider(&maintenance_cost)} />
            </div>
            <div class="calculator-results">
                <div class="result">
                    <span class="result-label">{"Annual energy savings"}</span>
                    <span class="result-value" id="annualEnergySavings">{display.energy_savings}</span>
                </div>
                <div class="result">
                    <span class="result-label">{"Maintenance savings"}</span>
                    <span class="result-value" id="maintenanceSavings">{display.maintenance_savings}</span>
                </div>
                <div class="result total">
                    <span class="result-label">{"Total annual savings"}</span>
                    <span class="result-value" id="totalSavings">{display.total}</span>
                </div>
            </div>
        </Reveal>
    }
}
