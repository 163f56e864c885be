use yew::prelude::*;

pub const AGENCY_EMAIL: &str = "pampacode@gmail.com";
pub const AGENCY_PHONE_DISPLAY: &str = "+54 9 358-422-2994";
pub const AGENCY_PHONE_TEL: &str = "+5493584222994";

#[derive(Properties, PartialEq)]
pub struct ContactBarProps {
    pub on_faq_click: Callback<()>,
    /// Sits on top of the hero image instead of inside the footer.
    #[prop_or_default]
    pub overlay: bool,
}

/// Email, phone and the FAQ shortcut. Shown under the hero and in the footer.
#[function_component(ContactBar)]
pub fn contact_bar(props: &ContactBarProps) -> Html {
    let on_faq = {
        let on_faq_click = props.on_faq_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_faq_click.emit(());
        })
    };

    html! {
        <div class={classes!("contact-bar", props.overlay.then(|| "overlay"))}>
            <style>
                {r#"
                .contact-bar {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.9);
                }
                .contact-bar.overlay {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    z-index: 2;
                    padding: 0.75rem 1.5rem;
                    background: rgba(8, 47, 92, 0.8);
                    backdrop-filter: blur(4px);
                }
                .contact-bar-links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }
                .contact-bar a, .contact-bar button {
                    color: inherit;
                    text-decoration: none;
                    background: none;
                    border: none;
                    font: inherit;
                    cursor: pointer;
                }
                .contact-bar a:hover, .contact-bar button:hover {
                    color: #fff;
                }
                "#}
            </style>
            <div class="contact-bar-links">
                <a href={format!("mailto:{}", AGENCY_EMAIL)}>{"✉ "}{AGENCY_EMAIL}</a>
                <a href={format!("tel:{}", AGENCY_PHONE_TEL)}>{"☎ "}{AGENCY_PHONE_DISPLAY}</a>
            </div>
            <button onclick={on_faq}>{"? Preguntas Frecuentes"}</button>
        </div>
    }
}
