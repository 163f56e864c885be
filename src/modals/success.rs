use yew::prelude::*;

use crate::components::dialog::Dialog;

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub on_acknowledge: Callback<()>,
}

#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let on_accept = {
        let on_acknowledge = props.on_acknowledge.clone();
        Callback::from(move |_: MouseEvent| on_acknowledge.emit(()))
    };

    html! {
        <Dialog
            title="Gracias por contactarte con nosotros"
            description={Some(AttrValue::from("Recibimos tu consulta. Te enviamos una respuesta a la brevedad al correo indicado."))}
            on_close={props.on_acknowledge.clone()}
            size="dialog-sm"
        >
            <style>
                {r#"
                .success-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem auto;
                    border-radius: 50%;
                    background: var(--primary-soft);
                    color: var(--primary);
                    font-size: 2rem;
                }
                .success-accept {
                    width: 100%;
                    margin-top: 1rem;
                    padding: 0.7rem;
                    border: none;
                    border-radius: 8px;
                    background: var(--primary);
                    color: var(--primary-foreground);
                    font-weight: 500;
                    cursor: pointer;
                }
                "#}
            </style>
            <div class="success-icon">{"✓"}</div>
            <button class="success-accept" onclick={on_accept}>{"Aceptar"}</button>
        </Dialog>
    }
}
