use crate::components::reveal::Reveal;
use crate::components::use_page_config;
use crate::error::PageError;
use crate::models::chart::energy_chart;
use crate::utils::charting::render_chart;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EnergyChartProps {
    pub ready: bool,
}

#[function_component(EnergyChart)]
pub fn energy_chart_view(props: &EnergyChartProps) -> Html {
    let config = use_page_config();
    let canvas = use_node_ref();

    {
        let canvas = canvas.clone();
        let chart = energy_chart(&config);
        use_effect_with_deps(
            move |ready| {
                if *ready {
                    match render_chart(canvas.cast::<HtmlCanvasElement>(), &chart) {
                        Ok(true) => log::debug!("Energy chart rendered"),
                        Ok(false) => {}
                        Err(PageError::ChartUnavailable) => log::warn!("Chart.js not loaded"),
                        Err(e) => log::error!("Failed to render energy chart: {}", e),
                    }
                }
                || ()
            },
            props.ready,
        );
    }

    html! {
        <Reveal class={classes!("chart-container")}>
            <canvas id="energyChart" ref={canvas}></canvas>
        </Reveal>
    }
}
