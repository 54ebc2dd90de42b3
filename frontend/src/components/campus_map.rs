use crate::components::use_page_config;
use crate::models::campus::{
    reveal_delay_ms, restored_fill_width, Building, BUILDINGS, HOVER_FILL_COLOR, HOVER_FILL_WIDTH,
};
use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CampusMapProps {
    /// Markers are built once this turns true.
    pub ready: bool,
}

#[function_component(CampusMap)]
pub fn campus_map(props: &CampusMapProps) -> Html {
    html! {
        <div class="campus-map">
            {
                if props.ready {
                    BUILDINGS
                        .iter()
                        .enumerate()
                        .map(|(index, building)| html! {
                            <BuildingMarker key={building.name} index={index} building={*building} />
                        })
                        .collect::<Html>()
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BuildingMarkerProps {
    pub index: usize,
    pub building: Building,
}

#[function_component(BuildingMarker)]
pub fn building_marker(props: &BuildingMarkerProps) -> Html {
    let config = use_page_config();
    let revealed = use_state(|| false);
    // Hover override for the load bar: (width, colour)
    let fill_override = use_state(|| None::<(String, &'static str)>);
    let fill = use_node_ref();

    {
        let revealed = revealed.clone();
        let delay = reveal_delay_ms(props.index, config.map_reveal_base_ms, config.map_reveal_step_ms);
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(delay, move || revealed.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let onmouseenter = {
        let fill_override = fill_override.clone();
        Callback::from(move |_: MouseEvent| {
            fill_override.set(Some((HOVER_FILL_WIDTH.to_string(), HOVER_FILL_COLOR)));
        })
    };

    // Nothing writes data-original, so this restores the fallback width
    let onmouseleave = {
        let fill_override = fill_override.clone();
        let fill = fill.clone();
        Callback::from(move |_: MouseEvent| {
            let original = fill
                .cast::<Element>()
                .and_then(|el| el.get_attribute("data-original"));
            fill_override.set(Some((restored_fill_width(original), HOVER_FILL_COLOR)));
        })
    };

    let building = &props.building;
    let marker_style = if *revealed {
        format!("{} opacity: 1; transform: translateY(0);", building.position_style())
    } else {
        building.position_style()
    };
    let fill_style = match &*fill_override {
        Some((width, color)) => format!("width: {}; background-color: {};", width, color),
        None => format!("width: {};", building.load_width()),
    };

    html! {
        <div class="building" style={marker_style} {onmouseenter} {onmouseleave}>
            <div class="building-icon">{building.icon}</div>
            <div class="building-name">{building.name}</div>
            <div class="building-energy">
                <div class="building-energy-fill" ref={fill} style={fill_style}></div>
            </div>
            <div class="building-load">{building.load_label()}</div>
        </div>
    }
}
