use yew::prelude::*;

use crate::components::reveal::{Reveal, REVEAL_CSS};
use crate::hooks::use_remote_list;
use crate::pages::{PAGE_HEADING_CSS, SPINNER_CSS};
use crate::state::content::{attach_details, Feature, FeatureItem, FEATURES_PATH};

/// Font Awesome class for a catalogue icon key.
fn icon_class(icon: &str) -> &'static str {
    match icon {
        "🎵" => "fa-volume-high",
        "🔇" | "☁️" => "fa-cloud-rain",
        "⚡" => "fa-battery-full",
        "🎤" => "fa-microphone",
        _ => "fa-wand-magic-sparkles",
    }
}

#[derive(Properties, PartialEq, Clone)]
struct FeatureCardProps {
    feature: FeatureItem,
    index: usize,
}

#[function_component]
fn FeatureCard(props: &FeatureCardProps) -> Html {
    let feature = &props.feature;
    html! {
        <Reveal class="feature-card" delay_ms={(props.index % 3) as u32 * 100}>
            <div class="feature-icon">
                <i class={classes!("fa-solid", icon_class(&feature.icon))}></i>
            </div>
            <h3>{&feature.title}</h3>
            <p>{&feature.description}</p>
            if !feature.details.is_empty() {
                <ul class="feature-details">
                    { for feature.details.iter().map(|detail| html! {
                        <li><i class="fa-solid fa-check"></i>{detail}</li>
                    }) }
                </ul>
            }
        </Reveal>
    }
}

#[function_component(FeaturesPage)]
pub fn features_page() -> Html {
    let features = use_remote_list::<Feature>(FEATURES_PATH);

    let features_css = r#"
        .features-page {
            padding: 8rem 1.5rem 5rem;
            max-width: 80rem;
            margin: 0 auto;
        }
        .feature-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.5rem;
        }
        .feature-card {
            padding: 1.5rem;
            border-radius: 16px;
            background: rgba(255, 255, 255, 0.05);
            border: 1px solid rgba(255, 255, 255, 0.1);
        }
        .feature-card:hover {
            background: rgba(255, 255, 255, 0.1);
            border-color: rgba(168, 85, 247, 0.5);
        }
        .feature-icon {
            width: 3rem;
            height: 3rem;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            background: linear-gradient(135deg, #9333ea, #db2777);
        }
        .feature-card p {
            color: rgba(255, 255, 255, 0.6);
            font-size: 0.9rem;
            line-height: 1.6;
        }
        .feature-details {
            list-style: none;
            padding: 0;
            margin: 1rem 0 0;
            font-size: 0.85rem;
            color: rgba(255, 255, 255, 0.8);
        }
        .feature-details li {
            display: flex;
            gap: 0.5rem;
            margin-bottom: 0.4rem;
        }
        .feature-details i {
            color: #c084fc;
        }
        @media (max-width: 1024px) {
            .feature-grid {
                grid-template-columns: repeat(2, 1fr);
            }
        }
        @media (max-width: 768px) {
            .feature-grid {
                grid-template-columns: 1fr;
            }
        }
    "#;

    html! {
        <div class="features-page">
            <style>{features_css}{PAGE_HEADING_CSS}{SPINNER_CSS}{REVEAL_CSS}</style>
            <div class="page-heading">
                <h1>{"Premium "}<span>{"Features"}</span></h1>
                <p>{"Discover what makes NOVA headphones extraordinary"}</p>
            </div>
            if features.loading {
                <div class="loading-spinner"></div>
            } else {
                <div class="feature-grid">
                    { for attach_details(features.items).into_iter().enumerate().map(|(index, feature)| html! {
                        <FeatureCard key={index} feature={feature} index={index} />
                    }) }
                </div>
            }
        </div>
    }
}
