use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::sections::contact_bar::ContactBar;

pub fn copyright_line(year: i32) -> String {
    format!("© {} PampaCode. Todos los derechos reservados.", year)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_faq_click: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    padding: 1.5rem;
                    background: var(--primary-dark);
                    color: var(--primary-foreground);
                }
                .site-footer-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .site-footer-copy {
                    margin: 1.5rem 0 0 0;
                    padding-top: 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    font-size: 0.875rem;
                    text-align: center;
                    opacity: 0.7;
                }
                "#}
            </style>
            <div class="site-footer-inner">
                <ContactBar on_faq_click={props.on_faq_click.clone()} />
                <p class="site-footer-copy">{copyright_line(year)}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 PampaCode. Todos los derechos reservados."
        );
    }
}
