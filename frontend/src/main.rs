use yew::prelude::*;

mod components;
mod config;
mod error;
mod hooks;
mod pages;
mod state;
mod utils;

use components::nav::Navigation;
use components::page_outlet::PageOutlet;
use state::navigation::NavState;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let nav = use_state(NavState::default);

    let on_select = {
        let nav = nav.clone();
        Callback::from(move |id: String| {
            let mut next = (*nav).clone();
            next.set_current_page(&id);
            nav.set(next);
            scroll_to_top();
        })
    };

    let on_select_mobile = {
        let nav = nav.clone();
        Callback::from(move |id: String| {
            let mut next = (*nav).clone();
            next.set_current_page_from_mobile(&id);
            nav.set(next);
            scroll_to_top();
        })
    };

    let on_toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |_| {
            let mut next = (*nav).clone();
            next.toggle_mobile_menu();
            nav.set(next);
        })
    };

    let app_css = r#"
        body {
            margin: 0;
            min-height: 100vh;
            color: #fff;
            background: #020617;
            font-family: system-ui, -apple-system, sans-serif;
            overflow-x: hidden;
        }
        .app-background {
            position: fixed;
            inset: 0;
            z-index: -1;
            overflow: hidden;
            pointer-events: none;
        }
        .glow {
            position: absolute;
            width: 24rem;
            height: 24rem;
            border-radius: 50%;
            filter: blur(96px);
            animation: pulse 4s ease-in-out infinite;
        }
        .glow.purple {
            top: 0;
            left: 25%;
            background: rgba(168, 85, 247, 0.3);
        }
        .glow.pink {
            bottom: 0;
            right: 25%;
            background: rgba(236, 72, 153, 0.3);
            animation-delay: 1s;
        }
        @keyframes pulse {
            0%, 100% { opacity: 1; }
            50% { opacity: 0.5; }
        }
    "#;

    html! {
        <>
            <style>{app_css}</style>
            <div class="app-background">
                <div class="glow purple"></div>
                <div class="glow pink"></div>
            </div>
            <Navigation
                entries={nav.entries()}
                mobile_menu_open={nav.mobile_menu_open()}
                on_select={on_select.clone()}
                {on_select_mobile}
                {on_toggle_menu}
            />
            <main>
                <PageOutlet page_id={nav.current().id()} on_navigate={on_select} />
            </main>
        </>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    gloo_console::log!("NOVA frontend starting, API at", config::api_url(""));
    yew::Renderer::<App>::new().render();
}
