use log::{error, info};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::form_field::{field, select_input, text_input, FORM_STYLES};
use crate::components::toast::ToastMessage;
use crate::config::EmailConfig;
use crate::email::client::{DispatchError, DispatchOutcome, EmailClient};
use crate::forms::contact::{ContactDraft, ContactField, COUNTRIES, PROVINCES};
use crate::forms::state::FormState;

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub config: EmailConfig,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
    pub on_toast: Callback<ToastMessage>,
}

pub enum ContactModalMsg {
    Set(ContactField, String),
    Submit,
    Sent(Result<DispatchOutcome, DispatchError>),
    Cancel,
}

/// Mounted only while the contact dialog is open, so every open starts blank.
pub struct ContactModal {
    form: FormState<ContactDraft>,
}

impl Component for ContactModal {
    type Message = ContactModalMsg;
    type Properties = ContactModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FormState::new(ContactDraft::default()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactModalMsg::Set(field, value) => {
                self.form.edit(|draft| draft.set(field, value));
                true
            }
            ContactModalMsg::Submit => {
                if self.form.is_submitting() {
                    return false;
                }
                let Some(request) = self.form.begin_submit() else {
                    return true;
                };

                let client = EmailClient::http(ctx.props().config.clone());
                ctx.link().send_future(async move {
                    ContactModalMsg::Sent(client.send_contact(&request).await)
                });
                true
            }
            ContactModalMsg::Sent(result) => {
                self.form.finish();
                let props = ctx.props();
                match result {
                    Ok(outcome) => {
                        info!("Contact request delivered ({:?})", outcome);
                        props.on_toast.emit(ToastMessage::success(
                            "¡Mensaje enviado!",
                            "Recibimos tu consulta. Te enviamos una respuesta a tu email indicado a la brevedad.",
                        ));
                        props.on_success.emit(());
                    }
                    Err(e) => {
                        error!("Error sending contact email: {}", e);
                        props.on_toast.emit(ToastMessage::destructive(
                            "Error",
                            "Hubo un problema al enviar tu mensaje. Intenta nuevamente.",
                        ));
                    }
                }
                true
            }
            ContactModalMsg::Cancel => {
                if !self.form.is_submitting() {
                    ctx.props().on_close.emit(());
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let busy = self.form.is_submitting();
        let draft = self.form.draft();

        let on_input = |field: ContactField| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactModalMsg::Set(field, input.value())
            })
        };
        let on_select = |field: ContactField| {
            link.callback(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                ContactModalMsg::Set(field, select.value())
            })
        };
        let text = |key: ContactField, label: &str, value: &str, placeholder: &str| {
            let input_type = if key == ContactField::Email { "email" } else { "text" };
            field(
                label,
                self.form.error(key),
                text_input(value, placeholder, input_type, busy, on_input(key)),
            )
        };

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactModalMsg::Submit
        });
        let cancel = link.callback(|_: MouseEvent| ContactModalMsg::Cancel);
        let on_close = link.callback(|_: ()| ContactModalMsg::Cancel);

        html! {
            <Dialog
                title="Solicitud de contacto"
                description={Some(AttrValue::from("Completá tus datos y te contactamos a la brevedad."))}
                on_close={on_close}
                dismissable={!busy}
            >
                <style>{FORM_STYLES}</style>
                <form onsubmit={onsubmit} novalidate=true>
                    <div class="form-grid">
                        { text(ContactField::FirstName, "Nombre", &draft.first_name, "Ingresá tu nombre") }
                        { text(ContactField::LastName, "Apellido", &draft.last_name, "Ingresá tu apellido") }
                        { text(ContactField::Email, "Email", &draft.email, "nombre@empresa.com") }
                        { text(ContactField::Phone, "Número de contacto", &draft.phone, "+54 9 358 422-2994") }
                        { text(ContactField::Address, "Dirección", &draft.address, "Calle y número") }
                        { text(ContactField::PostalCode, "Código postal", &draft.postal_code, "Ej.: 5800") }
                        { text(ContactField::Industry, "Rubro", &draft.industry, "Escribí tu rubro") }
                        { text(ContactField::City, "Localidad", &draft.city, "Tu localidad") }
                        { field(
                            "Provincia",
                            self.form.error(ContactField::StateProvince),
                            select_input(&draft.state_province, "Seleccioná tu provincia", PROVINCES, busy, on_select(ContactField::StateProvince)),
                        ) }
                        { field(
                            "País",
                            self.form.error(ContactField::Country),
                            select_input(&draft.country, "Seleccioná tu país", COUNTRIES, busy, on_select(ContactField::Country)),
                        ) }
                    </div>

                    <p class="form-note">
                        {"Usaremos tus datos exclusivamente para responder tu consulta."}
                    </p>

                    <div class="form-actions">
                        <button type="button" class="btn btn-outline" onclick={cancel} disabled={busy}>
                            {"Cancelar"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={busy}>
                            { if busy { "Enviando..." } else { "Enviar solicitud" } }
                        </button>
                    </div>
                </form>
            </Dialog>
        }
    }
}
