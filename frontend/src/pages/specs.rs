use yew::prelude::*;

use crate::components::reveal::{Reveal, REVEAL_CSS};
use crate::hooks::use_remote_list;
use crate::pages::{PAGE_HEADING_CSS, SPINNER_CSS};
use crate::state::content::{SpecCategory, SPECS_PATH};

#[function_component(SpecsPage)]
pub fn specs_page() -> Html {
    let specs = use_remote_list::<SpecCategory>(SPECS_PATH);

    let specs_css = r#"
        .specs-page {
            padding: 8rem 1.5rem 5rem;
            max-width: 80rem;
            margin: 0 auto;
        }
        .spec-grid {
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 1.5rem;
        }
        .spec-card {
            padding: 1.5rem;
            border-radius: 16px;
            background: rgba(255, 255, 255, 0.05);
            border: 1px solid rgba(255, 255, 255, 0.1);
        }
        .spec-card h2 {
            font-size: 1.5rem;
            margin: 0 0 1rem;
            background: linear-gradient(90deg, #c084fc, #f472b6);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .spec-item {
            display: flex;
            align-items: flex-start;
            gap: 0.75rem;
            padding: 0.5rem 0;
            color: rgba(255, 255, 255, 0.8);
            border-bottom: 1px solid rgba(255, 255, 255, 0.1);
        }
        .spec-item:last-child {
            border-bottom: none;
        }
        .spec-dot {
            width: 0.5rem;
            height: 0.5rem;
            margin-top: 0.5rem;
            border-radius: 50%;
            flex-shrink: 0;
            background: #c084fc;
        }
        @media (max-width: 768px) {
            .spec-grid {
                grid-template-columns: 1fr;
            }
        }
    "#;

    html! {
        <div class="specs-page">
            <style>{specs_css}{PAGE_HEADING_CSS}{SPINNER_CSS}{REVEAL_CSS}</style>
            <div class="page-heading">
                <h1>{"Technical "}<span>{"Specifications"}</span></h1>
                <p>{"Every detail engineered to perfection"}</p>
            </div>
            if specs.loading {
                <div class="loading-spinner"></div>
            } else {
                <div class="spec-grid">
                    { for specs.items.iter().enumerate().map(|(index, spec)| html! {
                        <Reveal key={index} class="spec-card" delay_ms={(index % 2) as u32 * 100}>
                            <h2>{&spec.category}</h2>
                            { for spec.items.iter().map(|item| html! {
                                <div class="spec-item">
                                    <span class="spec-dot"></span>
                                    <span>{item}</span>
                                </div>
                            }) }
                        </Reveal>
                    }) }
                </div>
            }
        </div>
    }
}
