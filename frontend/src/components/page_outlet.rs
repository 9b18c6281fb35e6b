use yew::prelude::*;

use crate::pages::{contact::ContactPage, features::FeaturesPage, home::HomePage, specs::SpecsPage};
use crate::state::navigation::{route, Page};

#[derive(Properties, PartialEq, Clone)]
pub struct PageOutletProps {
    pub page_id: AttrValue,
    pub on_navigate: Callback<String>,
}

/// Mounts the page named by `page_id`. Unknown identifiers render nothing.
#[function_component(PageOutlet)]
pub fn page_outlet(props: &PageOutletProps) -> Html {
    match route(&props.page_id) {
        Some(Page::Home) => html! { <HomePage on_navigate={props.on_navigate.clone()} /> },
        Some(Page::Features) => html! { <FeaturesPage /> },
        Some(Page::Specs) => html! { <SpecsPage /> },
        Some(Page::Contact) => html! { <ContactPage /> },
        None => html! {},
    }
}
