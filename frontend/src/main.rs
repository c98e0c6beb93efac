use yew::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent, Node};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew_hooks::use_mount;
use gloo_timers::callback::Timeout;

mod config;
mod contact;
mod effects;
mod newsletter;
mod components {
    pub mod notification;
}
mod pages {
    pub mod home;
}

use effects::scroll::{scroll_to_section, use_scroll_y, NavbarStyle};
use pages::home::Home;

const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("collections", "Collections"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll_y = use_scroll_y();
    let last_y = use_mut_ref(|| 0.0_f64);
    let style = use_state_eq(NavbarStyle::default);
    let nav_ref = use_node_ref();

    {
        let style = style.clone();
        use_effect_with_deps(
            move |y: &f64| {
                let mut last_y = last_y.borrow_mut();
                style.set(NavbarStyle::for_scroll(*last_y, *y));
                *last_y = *y;
                || ()
            },
            scroll_y,
        );
    }

    // Clicking anywhere outside the navbar closes the mobile menu
    {
        let open_now = *menu_open;
        let menu_open = menu_open.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let document = window().and_then(|w| w.document());
                let listener = open.then(|| {
                    Closure::<dyn Fn(web_sys::Event)>::new(move |e: web_sys::Event| {
                        let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let inside = nav_ref
                            .cast::<Node>()
                            .map_or(false, |nav| nav.contains(target.as_ref()));
                        if !inside {
                            menu_open.set(false);
                        }
                    })
                });

                if let (Some(document), Some(listener)) = (&document, &listener) {
                    let _ = document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                }

                move || {
                    if let (Some(document), Some(listener)) = (document, listener) {
                        let _ = document.remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                    }
                }
            },
            open_now,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |id: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            if scroll_to_section(id) {
                e.prevent_default();
            }
            menu_open.set(false);
        });
        html! {
            <li class="nav-item">
                <a class="nav-link" href={format!("#{}", id)} {onclick}>{ label }</a>
            </li>
        }
    };

    html! {
        <nav
            ref={nav_ref}
            class={classes!("navbar", "navbar-expand-lg", "fixed-top", style.scrolled.then(|| "scrolled"))}
            style={style.transform()}
        >
            <div class="container">
                <a class="navbar-brand" href="#home">{"Luxe Living"}</a>
                <button class="navbar-toggler" aria-label="Toggle navigation" onclick={toggle_menu}>
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class={classes!("collapse", "navbar-collapse", (*menu_open).then(|| "show"))}>
                    <ul class="navbar-nav ms-auto">
                        { for NAV_LINKS.iter().map(|&(id, label)| nav_link(id, label)) }
                    </ul>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    // Fade the page in once mounted
    use_mount(|| {
        let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let _ = body.style().set_property("opacity", "0");
        Timeout::new(100, move || {
            let style = body.style();
            let _ = style.set_property("transition", "opacity 0.5s ease");
            let _ = style.set_property("opacity", "1");
        })
        .forget();
    });

    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Luxe Living frontend");
    yew::Renderer::<App>::new().render();
}
