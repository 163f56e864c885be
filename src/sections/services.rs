use yew::prelude::*;

use crate::navigation::Section;

pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "gestion",
        icon: "💼",
        title: "Sistema de Gestión Empresarial",
        description: "Organice clientes, stock, facturación y reportes. Implementación rápida para PYMEs y cooperativas.",
        button_text: "Solicitar Presupuesto",
    },
    Service {
        id: "posventa",
        icon: "🔧",
        title: "Servicio de posventa y mantenimiento",
        description: "Actualizaciones, soporte técnico y monitoreo. Acompañamiento para continuidad operativa.",
        button_text: "Solicitar Plan de soporte",
    },
    Service {
        id: "medida",
        icon: "</>",
        title: "Desarrollo de software a medida",
        description: "Soluciones personalizadas según objetivos y procesos. Integraciones y escalabilidad desde el inicio.",
        button_text: "Solicitar Propuesta",
    },
];

#[derive(Properties, PartialEq)]
pub struct ServicesSectionProps {
    /// Receives the id of the card whose button was pressed.
    pub on_request_quote: Callback<String>,
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesSectionProps) -> Html {
    html! {
        <section id={Section::Servicios.anchor()} class="services">
            <style>
                {r#"
                .services {
                    padding: 5rem 1.5rem;
                    background: var(--background);
                }
                .section-header {
                    max-width: 42rem;
                    margin: 0 auto 3rem auto;
                    text-align: center;
                }
                .section-header h2 {
                    margin: 0 0 1rem 0;
                    font-size: 2.25rem;
                    color: var(--primary);
                }
                .section-header p {
                    margin: 0;
                    color: var(--muted-foreground);
                }
                .card-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    gap: 2rem;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                }
                .service-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: var(--card);
                    color: var(--card-foreground);
                    box-shadow: 0 4px 20px rgba(21, 101, 192, 0.1);
                    transition: box-shadow 0.3s ease, transform 0.3s ease;
                }
                .service-card:hover {
                    box-shadow: 0 12px 32px rgba(21, 101, 192, 0.2);
                    transform: translateY(-4px);
                }
                .service-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 4rem;
                    height: 4rem;
                    margin-bottom: 1.5rem;
                    border-radius: 0.75rem;
                    background: var(--primary);
                    color: var(--primary-foreground);
                    font-size: 1.6rem;
                }
                .service-card h3 {
                    margin: 0 0 1rem 0;
                    font-size: 1.1rem;
                    text-align: center;
                }
                .service-card p {
                    flex-grow: 1;
                    margin: 0 0 1.5rem 0;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    text-align: center;
                    color: var(--muted-foreground);
                }
                .service-button {
                    width: 100%;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: var(--primary);
                    color: var(--primary-foreground);
                    font-weight: 500;
                    cursor: pointer;
                }
                .service-button:hover {
                    background: var(--primary-dark);
                }
                "#}
            </style>
            <div class="section-header">
                <h2>{"Servicios"}</h2>
                <p>{"Soluciones tecnológicas diseñadas para escalar tu negocio."}</p>
            </div>
            <div class="card-grid">
                { for SERVICES.iter().map(|service| {
                    let on_click = {
                        let on_request_quote = props.on_request_quote.clone();
                        let id = service.id;
                        Callback::from(move |_: MouseEvent| on_request_quote.emit(id.to_string()))
                    };
                    html! {
                        <article class="service-card" key={service.id}>
                            <div class="service-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <button class="service-button" onclick={on_click}>{service.button_text}</button>
                        </article>
                    }
                })}
            </div>
        </section>
    }
}
