use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::mode_toggle::ModeToggle;
use crate::navigation::{active_section, is_scrolled, section_tops, Section};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_navigate: Callback<Section>,
    pub on_contact: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let scrolled = use_state(|| false);
    let active = use_state(|| None::<Section>);
    let menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let on_scroll = Closure::wrap(Box::new(move || {
                    let scroll_y = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    scrolled.set(is_scrolled(scroll_y));
                    if let Some(section) = active_section(&section_tops()) {
                        active.set(Some(section));
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not attach scroll listener");
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let navigate = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(section);
        })
    };

    let contact = {
        let on_contact = props.on_contact.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_contact.emit(());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links: Vec<Html> = Section::ALL.into_iter().map(|section| {
        html! {
            <a
                href={section.href()}
                class={classes!("nav-link", (*active == Some(section)).then(|| "active"))}
                onclick={navigate(section)}
            >
                {section.title()}
            </a>
        }
    }).collect();

    html! {
        <header class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    border-bottom: 1px solid transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: var(--background-blur);
                    backdrop-filter: blur(12px);
                    border-color: var(--border);
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    font-size: 1.1rem;
                    color: #fff;
                    text-decoration: none;
                }
                .top-nav.scrolled .nav-logo {
                    color: var(--foreground);
                }
                .nav-logo-mark {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 8px;
                    background: var(--primary);
                    color: var(--primary-foreground);
                    font-size: 0.8rem;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    position: relative;
                    padding: 0.25rem 0;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.9);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .top-nav.scrolled .nav-link {
                    color: var(--nav-link);
                }
                .nav-link.active {
                    font-weight: 700;
                }
                .nav-link.active::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    width: 100%;
                    height: 2px;
                    border-radius: 2px;
                    background: #fff;
                }
                .top-nav.scrolled .nav-link.active::after {
                    background: var(--primary);
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .nav-contact {
                    padding: 0.55rem 1.1rem;
                    border: none;
                    border-radius: 8px;
                    background: var(--primary);
                    color: var(--primary-foreground);
                    font-weight: 500;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .nav-contact:hover {
                    transform: scale(1.05);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: currentColor;
                }
                .mobile-menu {
                    display: none;
                }
                @media (max-width: 1024px) {
                    .nav-links, .nav-actions .nav-contact {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                        color: var(--foreground);
                    }
                    .mobile-menu.open {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        padding: 1rem;
                        background: var(--card);
                        border-bottom: 1px solid var(--border);
                    }
                    .mobile-menu .nav-link {
                        color: var(--foreground);
                        padding: 0.75rem 1rem;
                    }
                    .mobile-menu .nav-contact {
                        display: block;
                        margin-top: 1rem;
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <a href={Section::Inicio.href()} class="nav-logo" onclick={navigate(Section::Inicio)}>
                    <span class="nav-logo-mark">{"<>"}</span>
                    {"PampaCode"}
                </a>
                <nav class="nav-links">
                    { for links.clone() }
                </nav>
                <div class="nav-actions">
                    <ModeToggle />
                    <button class="nav-contact" onclick={contact.clone()}>{"Contactar"}</button>
                    <button class="burger-menu" aria-label="Menú" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for links }
                <button class="nav-contact" onclick={contact}>{"Contactar Equipo"}</button>
            </div>
        </header>
    }
}
