use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::theme::{self, Theme, STORAGE_KEY};

#[function_component(ModeToggle)]
pub fn mode_toggle() -> Html {
    let storage = use_local_storage::<String>(STORAGE_KEY.to_string());
    let menu_open = use_state(|| false);
    let current = Theme::parse((*storage).as_deref().unwrap_or_default());

    use_effect_with_deps(
        move |theme: &Theme| {
            theme::apply(*theme);
            || ()
        },
        current,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let choose = |theme: Theme| {
        let storage = storage.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("Switching theme to {}", theme.as_str());
            storage.set(theme.as_str().to_string());
            menu_open.set(false);
        })
    };

    html! {
        <div class="mode-toggle">
            <style>
                {r#"
                .mode-toggle {
                    position: relative;
                }
                .mode-toggle-button {
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    background: var(--background);
                    color: var(--primary);
                    cursor: pointer;
                }
                .mode-toggle-menu {
                    position: absolute;
                    right: 0;
                    top: 2.75rem;
                    min-width: 8rem;
                    background: var(--card);
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
                    padding: 0.25rem;
                    z-index: 60;
                }
                .mode-toggle-menu button {
                    display: block;
                    width: 100%;
                    text-align: left;
                    padding: 0.5rem 0.75rem;
                    border: none;
                    background: none;
                    color: var(--card-foreground);
                    border-radius: 6px;
                    cursor: pointer;
                }
                .mode-toggle-menu button.selected,
                .mode-toggle-menu button:hover {
                    background: var(--accent);
                }
                "#}
            </style>
            <button class="mode-toggle-button" aria-label="Cambiar tema" onclick={toggle_menu}>
                { if current.is_dark(theme::system_prefers_dark()) { "☾" } else { "☀" } }
            </button>
            if *menu_open {
                <div class="mode-toggle-menu">
                    { for Theme::ALL.into_iter().map(|theme| html! {
                        <button
                            class={classes!((theme == current).then(|| "selected"))}
                            onclick={choose(theme)}
                        >
                            {theme.label()}
                        </button>
                    })}
                </div>
            }
        </div>
    }
}
