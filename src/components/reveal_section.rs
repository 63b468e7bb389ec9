use yew::prelude::*;

use crate::sections::SectionId;
use crate::state::reveal::{reveal_style, RevealController};
use crate::utils::observer::use_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: SectionId,
    #[prop_or("section")]
    pub tag: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Page region that fades up into place: on load for the first screen,
/// otherwise the first time it scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), RevealController::for_section(props.id));

    let class = classes!(
        props.class.clone(),
        props.id.is_first_screen().then_some("reveal-on-load"),
    );

    html! {
        <@{props.tag} id={props.id.as_str()} ref={node} class={class} style={reveal_style(reveal)}>
            { for props.children.iter() }
        </@>
    }
}
