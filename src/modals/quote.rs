use log::{error, info};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::form_field::{checkbox, field, select_input, text_area, text_input, FORM_STYLES};
use crate::components::toast::ToastMessage;
use crate::config::EmailConfig;
use crate::email::client::{DispatchError, DispatchOutcome, EmailClient};
use crate::forms::quote::{QuoteDraft, QuoteField, SupportTier, INDUSTRIES};
use crate::forms::state::FormState;

#[derive(Properties, PartialEq)]
pub struct QuoteModalProps {
    pub config: EmailConfig,
    /// Pre-filled project type, empty when the card has none.
    #[prop_or_default]
    pub project_type: AttrValue,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
    pub on_toast: Callback<ToastMessage>,
}

pub enum QuoteModalMsg {
    Set(QuoteField, String),
    SetEmailCopy(bool),
    SetAcceptsTerms(bool),
    Submit,
    Sent(Result<DispatchOutcome, DispatchError>),
    Cancel,
}

pub struct QuoteModal {
    form: FormState<QuoteDraft>,
}

impl Component for QuoteModal {
    type Message = QuoteModalMsg;
    type Properties = QuoteModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: FormState::new(QuoteDraft::with_project_type(&ctx.props().project_type)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            QuoteModalMsg::Set(field, value) => {
                self.form.edit(|draft| draft.set(field, value));
                true
            }
            QuoteModalMsg::SetEmailCopy(checked) => {
                self.form.edit(|draft| draft.wants_email_copy = checked);
                true
            }
            QuoteModalMsg::SetAcceptsTerms(checked) => {
                self.form.edit(|draft| draft.accepts_terms = checked);
                true
            }
            QuoteModalMsg::Submit => {
                if self.form.is_submitting() {
                    return false;
                }
                let Some(request) = self.form.begin_submit() else {
                    return true;
                };

                let client = EmailClient::http(ctx.props().config.clone());
                ctx.link().send_future(async move {
                    QuoteModalMsg::Sent(client.send_quote(&request).await)
                });
                true
            }
            QuoteModalMsg::Sent(result) => {
                self.form.finish();
                let props = ctx.props();
                match result {
                    Ok(outcome) => {
                        info!("Quote request delivered ({:?})", outcome);
                        props.on_toast.emit(ToastMessage::success(
                            "¡Solicitud enviada!",
                            "Recibimos tu solicitud de presupuesto. Te lo enviaremos por email a la brevedad.",
                        ));
                        props.on_success.emit(());
                    }
                    Err(e) => {
                        error!("Error sending quote email: {}", e);
                        props.on_toast.emit(ToastMessage::destructive(
                            "Error",
                            "Hubo un problema al enviar tu solicitud. Intenta nuevamente.",
                        ));
                    }
                }
                true
            }
            QuoteModalMsg::Cancel => {
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
        let error = |key: QuoteField| self.form.error(key);

        let on_input = |key: QuoteField| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                QuoteModalMsg::Set(key, input.value())
            })
        };
        let on_textarea = |key: QuoteField| {
            link.callback(move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                QuoteModalMsg::Set(key, area.value())
            })
        };
        let on_select = |key: QuoteField| {
            link.callback(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                QuoteModalMsg::Set(key, select.value())
            })
        };
        let text = |key: QuoteField, label: &str, value: &str, placeholder: &str| {
            let input_type = if key == QuoteField::Email { "email" } else { "text" };
            field(label, error(key), text_input(value, placeholder, input_type, busy, on_input(key)))
        };
        let area = |key: QuoteField, label: &str, value: &str, placeholder: &str, rows: u32| {
            field(label, error(key), text_area(value, placeholder, rows, busy, on_textarea(key)))
        };

        let support_labels: Vec<&str> = SupportTier::ALL.into_iter().map(SupportTier::label).collect();

        let on_email_copy = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            QuoteModalMsg::SetEmailCopy(input.checked())
        });
        let on_terms = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            QuoteModalMsg::SetAcceptsTerms(input.checked())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            QuoteModalMsg::Submit
        });
        let cancel = link.callback(|_: MouseEvent| QuoteModalMsg::Cancel);
        let on_close = link.callback(|_: ()| QuoteModalMsg::Cancel);

        html! {
            <Dialog
                title="Solicitud de presupuesto"
                description={Some(AttrValue::from("Completá los datos para estimar el alcance y enviarte el presupuesto a tu email."))}
                on_close={on_close}
                dismissable={!busy}
                accent_header=true
                size="dialog-lg"
            >
                <style>{FORM_STYLES}</style>
                <form onsubmit={onsubmit} novalidate=true>
                    <div class="form-grid">
                        { text(QuoteField::FirstName, "Nombre", &draft.first_name, "Ingresá tu nombre") }
                        { text(QuoteField::LastName, "Apellido", &draft.last_name, "Ingresá tu apellido") }
                        { text(QuoteField::Email, "Email", &draft.email, "nombre@empresa.com") }
                        { text(QuoteField::Phone, "Teléfono de contacto", &draft.phone, "+54 9 358 422-2994") }
                        { text(QuoteField::Company, "Empresa / Cooperativa (opcional)", &draft.company, "Razón social o nombre comercial") }
                        { field(
                            "Rubro / Industria",
                            error(QuoteField::Industry),
                            select_input(&draft.industry, "Seleccioná tu rubro", INDUSTRIES, busy, on_select(QuoteField::Industry)),
                        ) }
                        { text(QuoteField::ProjectType, "Tipo de proyecto", &draft.project_type, "Sistema de gestión / A medida / Análisis de datos") }
                        { text(QuoteField::MainGoal, "Objetivo principal", &draft.main_goal, "Ej.: digitalizar facturación y reportes") }
                    </div>

                    { area(QuoteField::Features, "Funcionalidades clave", &draft.features,
                        "Ej.: alta de clientes, gestión de stock, facturación electrónica, reportes PDF...", 3) }
                    { area(QuoteField::Integrations, "Integraciones requeridas", &draft.integrations,
                        "Ej.: AFIP, Mercado Pago, Google Sheets, ERP actual...", 2) }

                    <div class="form-grid">
                        <div>
                            { text(QuoteField::Budget, "Presupuesto estimado", &draft.budget, "") }
                            <p class="form-note">
                                {"Usaremos la información solo para elaborar la cotización y contactarte. \
                                  Podés solicitar la baja o rectificación de tus datos cuando lo desees."}
                            </p>
                        </div>
                        { text(QuoteField::TargetDate, "Fecha objetivo", &draft.target_date, "Mes/Año (Ej.: 03/2026)") }
                        { field(
                            "Soporte y posventa",
                            error(QuoteField::SupportTier),
                            select_input(&draft.support_tier, "Básico / Estándar / Continuo", &support_labels, busy, on_select(QuoteField::SupportTier)),
                        ) }
                        { area(QuoteField::Comments, "Comentarios", &draft.comments, "Información adicional relevante", 2) }
                    </div>

                    { checkbox(
                        "Deseo recibir el presupuesto por correo electrónico.",
                        draft.wants_email_copy,
                        busy,
                        on_email_copy,
                    ) }
                    <div class={classes!("form-item", error(QuoteField::AcceptsTerms).is_some().then(|| "has-error"))}>
                        { checkbox(
                            "Acepto los términos y la política de privacidad de PampaCode.",
                            draft.accepts_terms,
                            busy,
                            on_terms,
                        ) }
                        if let Some(message) = error(QuoteField::AcceptsTerms) {
                            <p class="form-message">{message}</p>
                        }
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn btn-outline" onclick={cancel} disabled={busy}>
                            {"Cancelar"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={busy}>
                            { if busy { "Enviando..." } else { "Enviar solicitud de presupuesto" } }
                        </button>
                    </div>
                </form>
            </Dialog>
        }
    }
}
