use yew::prelude::*;

use crate::animation::reveal::{use_reveal, RevealOptions};

#[derive(Properties, PartialEq)]
pub struct SectionTransitionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Extra delay before the reveal plays, in milliseconds.
    #[prop_or_default]
    pub delay_ms: f64,
}

#[function_component(SectionTransition)]
pub fn section_transition(props: &SectionTransitionProps) -> Html {
    let section_ref = use_node_ref();

    use_reveal(
        section_ref.clone(),
        vec![section_ref.clone()],
        RevealOptions::rising(50.0).duration(1000.0).delay(props.delay_ms).band(85),
    );

    html! {
        <div ref={section_ref} class={props.class.clone()}>
            { for props.children.iter() }
        </div>
    }
}
