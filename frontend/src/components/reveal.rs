use yew::prelude::*;

use crate::hooks::use_scroll_reveal;
use crate::state::reveal::RevealConfig;

pub const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .reveal.visible {
        opacity: 1;
        transform: translateY(0);
    }
"#;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger, applied as a CSS transition delay.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub config: RevealConfig,
}

/// Wraps its children in a block that fades in the first time it scrolls
/// into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_scroll_reveal(node_ref.clone(), props.config.clone());

    html! {
        <div
            ref={node_ref}
            class={classes!("reveal", visible.then_some("visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
