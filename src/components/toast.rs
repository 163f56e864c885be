use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DURATION_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

impl ToastMessage {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind: ToastKind::Success,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind: ToastKind::Destructive,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |toast: &Option<ToastMessage>| {
                let timeout = toast
                    .as_ref()
                    .map(|_| Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(())));
                // Dropping the timeout cancels it when a newer toast replaces this one
                move || drop(timeout)
            },
            props.toast.clone(),
        );
    }

    let Some(toast) = &props.toast else {
        return html! {};
    };

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast-viewport">
            <style>
                {r#"
                .toast-viewport {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 200;
                    max-width: 380px;
                    width: calc(100% - 3rem);
                }
                .toast {
                    position: relative;
                    padding: 1rem 2.5rem 1rem 1.2rem;
                    border-radius: 10px;
                    border: 1px solid var(--border);
                    background: var(--card);
                    color: var(--card-foreground);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.25);
                    animation: toastIn 0.25s ease-out;
                }
                .toast.destructive {
                    background: var(--destructive);
                    color: #fff;
                    border-color: var(--destructive);
                }
                .toast-title {
                    font-weight: 600;
                    margin: 0 0 0.25rem 0;
                }
                .toast-description {
                    margin: 0;
                    font-size: 0.875rem;
                    opacity: 0.9;
                }
                .toast-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.6rem;
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                }
                @keyframes toastIn {
                    from { transform: translateY(100%); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
            <div
                class={classes!("toast", (toast.kind == ToastKind::Destructive).then(|| "destructive"))}
                role="status"
            >
                <p class="toast-title">{&toast.title}</p>
                <p class="toast-description">{&toast.description}</p>
                <button class="toast-close" aria-label="Cerrar" onclick={on_close}>{"✕"}</button>
            </div>
        </div>
    }
}
