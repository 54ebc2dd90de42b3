use crate::utils::observer::use_reveal;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Container that gains `animate-in` the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.threshold);
    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!(props.class.clone(), revealed.then_some("animate-in"))}
        >
            { for props.children.iter() }
        </div>
    }
}
