use web_sys::HtmlElement;
use yew::prelude::*;

/// Keys that close a dismissable dialog.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Backdrop click, escape key or the ✕ button.
    pub on_close: Callback<()>,
    /// While false the dialog ignores close requests.
    #[prop_or(true)]
    pub dismissable: bool,
    #[prop_or_default]
    pub accent_header: bool,
    #[prop_or(AttrValue::Static("dialog-md"))]
    pub size: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let content_ref = use_node_ref();

    // Take focus on open so the escape key reaches the dialog
    {
        let content_ref = content_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(content) = content_ref.cast::<HtmlElement>() {
                    if content.focus().is_err() {
                        log::debug!("Dialog could not take focus");
                    }
                }
                || ()
            },
            (),
        );
    }

    let request_close = {
        let on_close = props.on_close.clone();
        let dismissable = props.dismissable;
        Callback::from(move |_: ()| {
            if dismissable {
                on_close.emit(());
            }
        })
    };

    let on_backdrop = {
        let request_close = request_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            request_close.emit(());
        })
    };

    let on_keydown = {
        let request_close = request_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_dismiss_key(&e.key()) {
                request_close.emit(());
            }
        })
    };

    let on_close_button = {
        let request_close = request_close.clone();
        Callback::from(move |_: MouseEvent| request_close.emit(()))
    };

    html! {
        <div class="dialog-root" onkeydown={on_keydown}>
            <style>
                {r#"
                .dialog-root {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .dialog-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(2px);
                }
                .dialog-content {
                    position: relative;
                    width: 100%;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: var(--card);
                    color: var(--card-foreground);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.3);
                    animation: dialogIn 0.2s ease-out;
                }
                .dialog-content:focus { outline: none; }
                .dialog-sm { max-width: 28rem; text-align: center; }
                .dialog-md { max-width: 42rem; }
                .dialog-lg { max-width: 48rem; }
                .dialog-header h2 {
                    margin: 0 0 0.4rem 0;
                    font-size: 1.25rem;
                }
                .dialog-header p {
                    margin: 0 0 1rem 0;
                    color: var(--muted-foreground);
                    font-size: 0.9rem;
                }
                .dialog-header.accent {
                    background: var(--primary);
                    color: var(--primary-foreground);
                    margin: -1.5rem -1.5rem 1rem -1.5rem;
                    padding: 1rem 1.5rem;
                    border-radius: 12px 12px 0 0;
                }
                .dialog-header.accent p {
                    color: var(--primary-foreground);
                    opacity: 0.8;
                    margin-bottom: 0;
                }
                .dialog-close {
                    position: absolute;
                    top: 0.8rem;
                    right: 0.8rem;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    color: inherit;
                    cursor: pointer;
                    opacity: 0.7;
                }
                @keyframes dialogIn {
                    from { opacity: 0; transform: scale(0.96); }
                    to { opacity: 1; transform: scale(1); }
                }
                "#}
            </style>
            <div class="dialog-backdrop" onclick={on_backdrop}></div>
            <div
                ref={content_ref}
                class={classes!("dialog-content", props.size.to_string())}
                role="dialog"
                aria-modal="true"
                tabindex="-1"
            >
                <div class={classes!("dialog-header", props.accent_header.then(|| "accent"))}>
                    <h2>{props.title.clone()}</h2>
                    if let Some(description) = &props.description {
                        <p>{description.clone()}</p>
                    }
                </div>
                <button
                    class="dialog-close"
                    aria-label="Cerrar"
                    disabled={!props.dismissable}
                    onclick={on_close_button}
                >
                    {"✕"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key("e"));
    }
}
