use crate::components::use_page_config;
use crate::utils::scroll;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

#[derive(Properties, PartialEq)]
pub struct ScrollLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page anchor that scrolls smoothly to its target, leaving room for the navbar.
#[function_component(ScrollLink)]
pub fn scroll_link(props: &ScrollLinkProps) -> Html {
    let offset = use_page_config().anchor_offset;
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| match scroll::scroll_to_anchor(&href, offset) {
            Ok(true) => e.prevent_default(),
            Ok(false) => {}
            Err(err) => log::error!("Smooth scroll to {} failed: {}", href, err),
        })
    };
    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
