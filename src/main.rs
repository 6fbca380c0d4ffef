use std::rc::Rc;

use log::{error, info};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;
mod motion {
    pub mod accordion;
    pub mod counter;
    pub mod marquee;
    pub mod reveal;
}
mod components {
    pub mod counter;
    pub mod faq_item;
    pub mod host;
    pub mod marquee;
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::host::WindowListener;
use content::{anchor, SiteContent};
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub items: Vec<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("scroll", move || {
                    if let Some(window) = web_sys::window() {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > f64::from(config::NAV_SCROLLED_OFFSET));
                    }
                });
                if let Err(err) = &listener {
                    log::warn!("{}; nav stays expanded", err);
                }
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor jumps still happen; this only folds the mobile menu.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    {config::BRAND}{" "}<span class="accent">{config::BRAND_ACCENT}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <ul class="nav-links">
                        { for props.items.iter().map(|item| html! {
                            <li onclick={close_menu.clone()}>
                                <a href={anchor(item)} class="nav-link">{item}</a>
                            </li>
                        }) }
                    </ul>
                    <a
                        href={config::BOOKING_URL}
                        target="_blank"
                        rel="noreferrer"
                        class="nav-cta"
                        onclick={close_menu.clone()}
                    >
                        {"Book a Call"}
                    </a>
                </div>
            </div>
            <style>{ NAV_CSS }</style>
        </nav>
    }
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        padding: 20px 5%;
        background: rgba(9, 9, 10, 0.85);
        backdrop-filter: blur(20px);
        border-bottom: 1px solid rgba(201, 169, 110, 0.08);
        transition: padding 0.3s;
    }
    .top-nav.scrolled {
        padding: 12px 5%;
    }
    .nav-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-family: 'Cormorant Garamond', serif;
        font-size: 1.5rem;
        font-weight: 500;
        color: var(--text);
        text-decoration: none;
    }
    .nav-logo .accent {
        color: var(--gold);
    }
    .nav-right {
        display: flex;
        align-items: center;
        gap: 36px;
    }
    .nav-links {
        display: flex;
        gap: 36px;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-link {
        color: var(--text-muted);
        text-decoration: none;
        font-size: 0.82rem;
        letter-spacing: 0.12em;
        text-transform: uppercase;
    }
    .nav-link:hover {
        color: var(--text);
    }
    .nav-cta {
        border: 1px solid var(--gold-dim);
        color: var(--gold);
        padding: 10px 24px;
        font-size: 0.8rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        text-decoration: none;
        transition: all 0.3s;
    }
    .nav-cta:hover {
        background: var(--gold);
        color: var(--bg);
        border-color: var(--gold);
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 4px;
    }
    .burger-menu span {
        width: 22px;
        height: 1px;
        background: var(--text);
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: flex;
        }
        .nav-right {
            display: none;
        }
        .nav-right.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            padding: 24px 5%;
            background: rgba(9, 9, 10, 0.97);
            border-bottom: 1px solid var(--border);
        }
        .nav-right.mobile-menu-open .nav-links {
            flex-direction: column;
            align-items: center;
            gap: 20px;
        }
    }
"#;

fn switch(routes: Route, content: Rc<SiteContent>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home content={content} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| content::load().map(Rc::new), ());

    match &*content {
        Ok(site) => {
            let render = {
                let site = site.clone();
                move |route: Route| switch(route, site.clone())
            };
            html! {
                <BrowserRouter>
                    <Nav items={site.nav.clone()} />
                    <Switch<Route> render={render} />
                </BrowserRouter>
            }
        }
        Err(err) => {
            error!("{}", err);
            html! {
                <div class="content-error">
                    <p>{"We're updating this page. Please reach us at "}
                        <a href={config::mailto_link()}>{config::CONTACT_EMAIL}</a>
                    </p>
                </div>
            }
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
