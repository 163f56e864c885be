use yew::prelude::*;

use crate::navigation::Section;

struct Faq {
    question: &'static str,
    answer: &'static str,
}

const FAQS: &[Faq] = &[
    Faq {
        question: "¿Cuánto demora un sistema de gestión administrativa típico?",
        answer: "Según el alcance, entre 2 y 8 semanas para una primera versión funcional. Ajustamos plazos en la propuesta según módulos y complejidad.",
    },
    Faq {
        question: "¿Qué incluye el servicio de posventa y mantenimiento?",
        answer: "Incluye actualizaciones de seguridad, corrección de errores, soporte técnico por email y teléfono, monitoreo del sistema y capacitación continua para tu equipo.",
    },
    Faq {
        question: "¿Cómo solicito un presupuesto?",
        answer: "Completá el formulario de 'Solicitud de presupuesto' con objetivos, funcionalidades y plazos. Te lo enviamos por email a la brevedad.",
    },
    Faq {
        question: "¿Pueden integrarse con sistemas existentes (AFIP, ERP, pagos)?",
        answer: "Sí, desarrollamos integraciones con AFIP, Mercado Pago, sistemas contables, ERPs y cualquier API que tu negocio necesite conectar.",
    },
    Faq {
        question: "¿Cuáles son las condiciones comerciales?",
        answer: "Trabajamos con un anticipo del 50% al iniciar y el resto al entregar. Para proyectos grandes, ofrecemos planes de pago en cuotas.",
    },
];

/// Single-open accordion: clicking the open item collapses it, any other item replaces it.
pub fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub on_back_to_top: Callback<()>,
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let open = use_state(|| None::<usize>);

    let on_back = {
        let on_back_to_top = props.on_back_to_top.clone();
        Callback::from(move |_: MouseEvent| on_back_to_top.emit(()))
    };

    html! {
        <section id={Section::Faq.anchor()} class="faq">
            <style>
                {r#"
                .faq {
                    padding: 5rem 1.5rem;
                    background: var(--primary);
                }
                .faq-inner {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .faq h2 {
                    margin: 0 0 0.5rem 0;
                    font-size: 1.9rem;
                    color: var(--primary-foreground);
                }
                .faq-lead {
                    margin: 0 0 2rem 0;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .faq-card {
                    overflow: hidden;
                    border-radius: 1rem;
                    background: var(--card);
                    color: var(--card-foreground);
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.15);
                }
                .faq-item {
                    border-bottom: 1px solid var(--border);
                }
                .faq-question {
                    display: flex;
                    width: 100%;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 1.5rem;
                    border: none;
                    background: none;
                    color: inherit;
                    font: inherit;
                    font-weight: 500;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-question:hover {
                    color: var(--primary);
                }
                .faq-chevron {
                    transition: transform 0.2s ease;
                }
                .faq-item.open .faq-chevron {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    display: none;
                    padding: 0 1.5rem 1rem 1.5rem;
                    line-height: 1.6;
                    color: var(--muted-foreground);
                }
                .faq-item.open .faq-answer {
                    display: block;
                }
                .faq-cta {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: var(--muted);
                }
                .faq-cta p {
                    margin: 0;
                }
                .faq-cta small {
                    color: var(--muted-foreground);
                }
                .faq-back {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: var(--primary);
                    color: var(--primary-foreground);
                    font-weight: 500;
                    white-space: nowrap;
                    cursor: pointer;
                }
                .faq-back:hover {
                    background: var(--primary-dark);
                }
                "#}
            </style>
            <div class="faq-inner">
                <h2>{"Preguntas frecuentes (FAQ)"}</h2>
                <p class="faq-lead">
                    {"Ahorra fricción: encontrá respuestas rápidas. Si algo no está aquí, podés escribirnos."}
                </p>
                <div class="faq-card">
                    { for FAQS.iter().enumerate().map(|(index, faq)| {
                        let is_open = *open == Some(index);
                        let toggle = {
                            let open = open.clone();
                            Callback::from(move |_: MouseEvent| open.set(toggle_open(*open, index)))
                        };
                        html! {
                            <div class={classes!("faq-item", is_open.then(|| "open"))} key={index}>
                                <button class="faq-question" aria-expanded={is_open.to_string()} onclick={toggle}>
                                    {faq.question}
                                    <span class="faq-chevron">{"▾"}</span>
                                </button>
                                <div class="faq-answer">{faq.answer}</div>
                            </div>
                        }
                    })}
                    <div class="faq-cta">
                        <div>
                            <p>{"¿No encontrás tu respuesta? Escribínos."}</p>
                            <small>{"Podés completar el formulario de contacto o solicitar un presupuesto detallado."}</small>
                        </div>
                        <button class="faq-back" onclick={on_back}>{"Volver al inicio"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_an_item_closes_the_previous_one() {
        assert_eq!(toggle_open(None, 2), Some(2));
        assert_eq!(toggle_open(Some(2), 4), Some(4));
    }

    #[test]
    fn clicking_the_open_item_collapses_it() {
        assert_eq!(toggle_open(Some(1), 1), None);
    }
}
