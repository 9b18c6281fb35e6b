use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::reveal::{Reveal, REVEAL_CSS};
use crate::state::navigation::Page;

struct QuickFeature {
    icon: &'static str,
    label: &'static str,
    description: &'static str,
}

const QUICK_FEATURES: [QuickFeature; 3] = [
    QuickFeature { icon: "fa-volume-high", label: "Hi-Res Audio", description: "Studio quality" },
    QuickFeature { icon: "fa-battery-full", label: "40H Battery", description: "All-day power" },
    QuickFeature { icon: "fa-microphone", label: "Clear Calls", description: "AI noise reduction" },
];

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub on_navigate: Callback<String>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let scroll_y = use_state(|| 0.0_f64);
    // Track scroll position for the product card tilt
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scroll_y = scroll_y.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    scroll_y.set(y);
                                }
                            }
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::error!("Failed to add scroll listener: {:?}", e);
                    }
                    if let Ok(y) = window.scroll_y() {
                        scroll_y.set(y);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let go_to = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(page.id().to_string()))
    };

    let home_css = r#"
        .home-page {
            padding: 8rem 1.5rem 5rem;
        }
        .home-grid {
            max-width: 80rem;
            margin: 0 auto;
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 3rem;
            align-items: center;
        }
        .release-badge {
            display: inline-flex;
            align-items: center;
            gap: 0.4rem;
            padding: 0.25rem 0.75rem;
            border-radius: 999px;
            font-size: 0.8rem;
            color: #d8b4fe;
            background: rgba(168, 85, 247, 0.2);
            border: 1px solid rgba(168, 85, 247, 0.5);
        }
        .home-title {
            font-size: 4.5rem;
            font-weight: 700;
            line-height: 1.1;
            margin: 1.5rem 0 1rem;
        }
        .home-title span {
            display: block;
            background: linear-gradient(90deg, #c084fc, #f472b6, #c084fc);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .home-lede {
            font-size: 1.25rem;
            color: rgba(255, 255, 255, 0.7);
            max-width: 36rem;
        }
        .home-cta-group {
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
            margin-top: 2rem;
        }
        .cta-primary, .cta-secondary {
            padding: 0.9rem 1.75rem;
            border-radius: 10px;
            font-size: 1rem;
            cursor: pointer;
        }
        .cta-primary {
            border: none;
            color: #fff;
            background: linear-gradient(90deg, #9333ea, #db2777);
            box-shadow: 0 10px 30px rgba(168, 85, 247, 0.5);
        }
        .cta-secondary {
            color: #fff;
            background: transparent;
            border: 1px solid rgba(255, 255, 255, 0.2);
        }
        .quick-features {
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
            padding-top: 2rem;
        }
        .quick-feature {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            padding: 0.5rem 1rem;
            border-radius: 999px;
            background: rgba(255, 255, 255, 0.05);
            border: 1px solid rgba(255, 255, 255, 0.1);
        }
        .quick-feature i {
            color: #c084fc;
        }
        .quick-feature small {
            display: block;
            color: rgba(255, 255, 255, 0.5);
        }
        .product-card {
            max-width: 28rem;
            margin: 0 auto;
            padding: 2rem;
            border-radius: 16px;
            background: linear-gradient(135deg, rgba(255, 255, 255, 0.05), rgba(255, 255, 255, 0));
            border: 1px solid rgba(255, 255, 255, 0.1);
            box-shadow: 0 25px 50px rgba(168, 85, 247, 0.2);
            transition: transform 0.5s ease;
        }
        .product-orb {
            width: 16rem;
            height: 16rem;
            margin: 0 auto 1.5rem;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            background: radial-gradient(circle, #020617 60%, #db2777 100%);
            font-size: 6rem;
        }
        .product-stats {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 0.75rem;
            margin-top: 1rem;
        }
        .product-stat {
            text-align: center;
            padding: 0.75rem;
            border-radius: 8px;
            font-size: 0.8rem;
            color: rgba(255, 255, 255, 0.6);
            background: rgba(255, 255, 255, 0.05);
            border: 1px solid rgba(255, 255, 255, 0.1);
        }
        .rating i {
            color: #facc15;
        }
        @media (max-width: 1024px) {
            .home-grid {
                grid-template-columns: 1fr;
            }
            .home-title {
                font-size: 3.5rem;
            }
        }
    "#;

    let tilt = format!(
        "transform: perspective(1000px) rotateY({}deg) rotateX({}deg);",
        *scroll_y * 0.02,
        *scroll_y * -0.01
    );

    html! {
        <div class="home-page">
            <style>{home_css}{REVEAL_CSS}</style>
            <div class="home-grid">
                <div>
                    <span class="release-badge">
                        <i class="fa-solid fa-wand-magic-sparkles"></i>
                        {"New Release 2024"}
                    </span>
                    <h1 class="home-title">
                        {"Sound Beyond"}
                        <span>{"Limits"}</span>
                    </h1>
                    <p class="home-lede">
                        {"Experience premium audio quality with our flagship wireless headphones. Engineered for perfection, designed for you."}
                    </p>
                    <div class="home-cta-group">
                        <button class="cta-primary" onclick={go_to(Page::Contact)}>
                            {"Order Now - $299 "}<i class="fa-solid fa-chevron-right"></i>
                        </button>
                        <button class="cta-secondary" onclick={go_to(Page::Features)}>
                            {"Learn More"}
                        </button>
                    </div>
                    <div class="quick-features">
                        { for QUICK_FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <Reveal delay_ms={index as u32 * 100}>
                                <div class="quick-feature">
                                    <i class={classes!("fa-solid", feature.icon)}></i>
                                    <div>
                                        <strong>{feature.label}</strong>
                                        <small>{feature.description}</small>
                                    </div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
                <div class="product-card" style={tilt}>
                    <div class="product-orb">
                        <i class="fa-solid fa-headphones"></i>
                    </div>
                    <div style="display: flex; justify-content: space-between; align-items: center;">
                        <div>
                            <h3 style="margin: 0; font-size: 1.5rem;">{"NOVA Pro"}</h3>
                            <p style="margin: 0; color: rgba(255, 255, 255, 0.6); font-size: 0.9rem;">{"Premium Wireless"}</p>
                        </div>
                        <div class="rating">
                            { for (0..5).map(|_| html! { <i class="fa-solid fa-star"></i> }) }
                        </div>
                    </div>
                    <div class="product-stats">
                        <div class="product-stat"><i class="fa-solid fa-battery-full" style="color: #4ade80;"></i><br/>{"40hrs"}</div>
                        <div class="product-stat"><i class="fa-solid fa-volume-high" style="color: #c084fc;"></i><br/>{"Hi-Res"}</div>
                        <div class="product-stat"><i class="fa-solid fa-cloud-rain" style="color: #60a5fa;"></i><br/>{"ANC"}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
