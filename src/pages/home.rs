use log::{info, warn};
use yew::prelude::*;

use crate::components::toast::{Toast, ToastMessage};
use crate::config::EmailConfig;
use crate::modals::contact::ContactModal;
use crate::modals::quote::QuoteModal;
use crate::modals::shell::{ActiveModal, ModalShell};
use crate::modals::success::SuccessModal;
use crate::navigation::{scroll_to_section, Section};
use crate::sections::{
    faq::FaqSection, footer::Footer, hero::HeroCarousel, navbar::Navbar,
    services::ServicesSection, team::TeamSection,
};

const GLOBAL_STYLES: &str = r#"
:root {
    --background: #f8fafc;
    --background-blur: rgba(248, 250, 252, 0.9);
    --foreground: #0f172a;
    --card: #ffffff;
    --card-foreground: #0f172a;
    --primary: #1565c0;
    --primary-dark: #0d47a1;
    --primary-foreground: #ffffff;
    --primary-soft: rgba(21, 101, 192, 0.1);
    --accent: #e3f2fd;
    --muted: #f1f5f9;
    --muted-foreground: #64748b;
    --border: #e2e8f0;
    --destructive: #dc2626;
    --nav-link: #334155;
}
.dark {
    --background: #0b1220;
    --background-blur: rgba(11, 18, 32, 0.9);
    --foreground: #e2e8f0;
    --card: #111a2e;
    --card-foreground: #e2e8f0;
    --primary: #3b82f6;
    --primary-dark: #1d4ed8;
    --primary-foreground: #ffffff;
    --primary-soft: rgba(59, 130, 246, 0.15);
    --accent: #1e293b;
    --muted: #162033;
    --muted-foreground: #94a3b8;
    --border: #1e293b;
    --destructive: #ef4444;
    --nav-link: #cbd5e1;
}
html {
    scroll-behavior: smooth;
}
body {
    margin: 0;
    font-family: 'Inter', system-ui, sans-serif;
    background: var(--background);
    color: var(--foreground);
}
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_state(EmailConfig::from_build_env);
    let shell = use_state(ModalShell::default);
    let toast = use_state(|| None::<ToastMessage>);

    {
        let demo = config.is_demo_mode();
        use_effect_with_deps(
            move |_| {
                if demo {
                    warn!("EmailJS public key not configured, forms run in demo mode");
                }
                || ()
            },
            (),
        );
    }

    let scroll_to = |section: Section| Callback::from(move |_: ()| scroll_to_section(section));

    let on_navigate = Callback::from(scroll_to_section);

    let on_contact = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.set(shell.open_contact()))
    };

    let on_request_quote = {
        let shell = shell.clone();
        Callback::from(move |service_id: String| {
            let next = shell.request_quote(&service_id);
            info!(
                "Quote requested for service '{}' ({})",
                next.selected_service(),
                next.quote_project_type()
            );
            shell.set(next);
        })
    };

    let on_close = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.set(shell.close()))
    };

    let on_success = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.set(shell.submission_succeeded()))
    };

    let on_acknowledge = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.set(shell.acknowledge()))
    };

    let on_toast = {
        let toast = toast.clone();
        Callback::from(move |message: ToastMessage| toast.set(Some(message)))
    };

    let on_dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let modal = match shell.active() {
        ActiveModal::Closed => html! {},
        ActiveModal::Contact => html! {
            <ContactModal
                config={(*config).clone()}
                on_close={on_close.clone()}
                on_success={on_success.clone()}
                on_toast={on_toast.clone()}
            />
        },
        ActiveModal::Quote => html! {
            <QuoteModal
                config={(*config).clone()}
                project_type={shell.quote_project_type()}
                on_close={on_close.clone()}
                on_success={on_success.clone()}
                on_toast={on_toast.clone()}
            />
        },
        ActiveModal::Success => html! {
            <SuccessModal on_acknowledge={on_acknowledge} />
        },
    };

    html! {
        <div class="landing">
            <style>{GLOBAL_STYLES}</style>
            <Navbar on_navigate={on_navigate} on_contact={on_contact} />
            <main>
                <HeroCarousel on_faq_click={scroll_to(Section::Faq)} />
                <ServicesSection on_request_quote={on_request_quote} />
                <TeamSection />
                <FaqSection on_back_to_top={scroll_to(Section::Inicio)} />
            </main>
            <Footer on_faq_click={scroll_to(Section::Faq)} />
            { modal }
            <Toast toast={(*toast).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
