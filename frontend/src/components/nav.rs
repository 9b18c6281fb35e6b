use yew::prelude::*;

use crate::state::navigation::{NavEntry, Page};

#[derive(Properties, PartialEq, Clone)]
pub struct NavigationProps {
    pub entries: Vec<NavEntry>,
    pub mobile_menu_open: bool,
    /// Page chosen from the desktop bar or the logo.
    pub on_select: Callback<String>,
    /// Page chosen from the mobile list.
    pub on_select_mobile: Callback<String>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let nav_css = r#"
        .top-nav {
            position: fixed;
            top: 0;
            width: 100%;
            z-index: 50;
            border-bottom: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(2, 6, 23, 0.5);
            backdrop-filter: blur(24px);
        }
        .top-nav-inner {
            max-width: 80rem;
            margin: 0 auto;
            padding: 1rem 1.5rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .nav-logo {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            cursor: pointer;
            font-size: 1.5rem;
            font-weight: 700;
            background: linear-gradient(90deg, #c084fc, #f472b6);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .nav-logo i {
            color: #c084fc;
        }
        .nav-links {
            display: flex;
            gap: 2rem;
        }
        .nav-link {
            background: none;
            border: none;
            font-size: 0.9rem;
            color: rgba(255, 255, 255, 0.6);
            cursor: pointer;
            transition: color 0.2s ease;
        }
        .nav-link:hover {
            color: #c084fc;
        }
        .nav-link.active {
            color: #fff;
        }
        .buy-button {
            padding: 0.5rem 1.25rem;
            border: none;
            border-radius: 8px;
            color: #fff;
            background: linear-gradient(90deg, #9333ea, #db2777);
            cursor: pointer;
        }
        .menu-toggle {
            display: none;
            background: none;
            border: none;
            color: #fff;
            font-size: 1.4rem;
            cursor: pointer;
        }
        .mobile-menu {
            display: none;
            padding: 0 1.5rem 1rem;
        }
        .mobile-link {
            display: block;
            width: 100%;
            text-align: left;
            padding: 0.5rem 1rem;
            margin-top: 0.75rem;
            border: none;
            border-radius: 8px;
            background: none;
            color: rgba(255, 255, 255, 0.6);
            cursor: pointer;
        }
        .mobile-link.active {
            background: #9333ea;
            color: #fff;
        }
        @media (max-width: 768px) {
            .nav-links, .buy-button {
                display: none;
            }
            .menu-toggle, .mobile-menu {
                display: block;
            }
        }
    "#;

    let link = |entry: &NavEntry, class: &'static str, on_select: &Callback<String>| {
        let id = entry.page.id().to_string();
        let on_select = on_select.clone();
        html! {
            <button
                key={entry.page.id()}
                class={classes!(class, entry.active.then_some("active"))}
                onclick={Callback::from(move |_| on_select.emit(id.clone()))}
            >
                {entry.label}
            </button>
        }
    };

    let on_logo = {
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(Page::Home.id().to_string()))
    };
    let on_toggle = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_| on_toggle_menu.emit(()))
    };

    html! {
        <nav class="top-nav">
            <style>{nav_css}</style>
            <div class="top-nav-inner">
                <div class="nav-logo" onclick={on_logo}>
                    <i class="fa-solid fa-headphones"></i>
                    <span>{"NOVA"}</span>
                </div>
                <div class="nav-links">
                    { for props.entries.iter().map(|entry| link(entry, "nav-link", &props.on_select)) }
                </div>
                <button class="buy-button">{"Buy Now"}</button>
                <button class="menu-toggle" onclick={on_toggle}>
                    if props.mobile_menu_open {
                        <i class="fa-solid fa-xmark"></i>
                    } else {
                        <i class="fa-solid fa-bars"></i>
                    }
                </button>
            </div>
            if props.mobile_menu_open {
                <div class="mobile-menu">
                    { for props.entries.iter().map(|entry| link(entry, "mobile-link", &props.on_select_mobile)) }
                </div>
            }
        </nav>
    }
}
