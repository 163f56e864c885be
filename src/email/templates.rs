use std::collections::BTreeMap;

use crate::forms::contact::ContactRequest;
use crate::forms::quote::QuoteRequest;

/// Named variables handed to the EmailJS template.
pub type TemplateParams = BTreeMap<&'static str, String>;

pub const NOT_SPECIFIED: &str = "No especificado";

pub const CONTACT_SUBJECT: &str = "Nueva solicitud de contacto - PampaCode";
pub const QUOTE_SUBJECT: &str = "Nueva solicitud de presupuesto - PampaCode";

fn or_not_specified(value: Option<&str>) -> String {
    value.unwrap_or(NOT_SPECIFIED).to_string()
}

fn sender_params(
    recipient: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
) -> TemplateParams {
    let mut params = TemplateParams::new();
    params.insert("to_email", recipient.to_string());
    params.insert("from_name", format!("{} {}", first_name, last_name));
    params.insert("from_email", email.to_string());
    params.insert("phone", phone.to_string());
    params
}

pub fn contact_params(request: &ContactRequest, recipient: &str) -> TemplateParams {
    let mut params = sender_params(
        recipient,
        &request.first_name,
        &request.last_name,
        &request.email,
        &request.phone,
    );
    params.insert("address", or_not_specified(request.address.as_deref()));
    params.insert("postal_code", or_not_specified(request.postal_code.as_deref()));
    params.insert("business", or_not_specified(request.industry.as_deref()));
    params.insert("city", or_not_specified(request.city.as_deref()));
    params.insert("province", or_not_specified(request.state_province.as_deref()));
    params.insert("country", or_not_specified(request.country.as_deref()));
    params.insert("subject", CONTACT_SUBJECT.to_string());
    params
}

pub fn quote_params(request: &QuoteRequest, recipient: &str) -> TemplateParams {
    let mut params = sender_params(
        recipient,
        &request.first_name,
        &request.last_name,
        &request.email,
        &request.phone,
    );
    params.insert("company", or_not_specified(request.company.as_deref()));
    params.insert("business", or_not_specified(request.industry.as_deref()));
    params.insert("project_type", or_not_specified(request.project_type.as_deref()));
    params.insert("main_goal", or_not_specified(request.main_goal.as_deref()));
    params.insert("features", or_not_specified(request.features.as_deref()));
    params.insert("integrations", or_not_specified(request.integrations.as_deref()));
    params.insert("budget", or_not_specified(request.budget.as_deref()));
    params.insert("deadline", or_not_specified(request.target_date.as_deref()));
    params.insert(
        "support",
        or_not_specified(request.support_tier.map(|tier| tier.label())),
    );
    params.insert("comments", or_not_specified(request.comments.as_deref()));
    params.insert(
        "email_preference",
        if request.wants_email_copy { "Sí" } else { "No" }.to_string(),
    );
    params.insert("subject", QUOTE_SUBJECT.to_string());
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::quote::SupportTier;

    fn quote() -> QuoteRequest {
        QuoteRequest {
            first_name: "Efren".to_string(),
            last_name: "Accolto".to_string(),
            email: "efren@pampacode.com".to_string(),
            phone: "123".to_string(),
            company: None,
            industry: Some("Servicios".to_string()),
            project_type: Some("Sistema de gestión".to_string()),
            main_goal: None,
            features: None,
            integrations: None,
            budget: None,
            target_date: None,
            support_tier: Some(SupportTier::Basic),
            comments: None,
            wants_email_copy: true,
        }
    }

    #[test]
    fn quote_fills_absent_optionals_with_sentinel() {
        let params = quote_params(&quote(), "inbox@pampacode.com");
        assert_eq!(params["company"], NOT_SPECIFIED);
        assert_eq!(params["comments"], NOT_SPECIFIED);
        assert_eq!(params["deadline"], NOT_SPECIFIED);
        assert_eq!(params["business"], "Servicios");
        assert_eq!(params["support"], "Básico");
        assert_eq!(params["from_name"], "Efren Accolto");
        assert_eq!(params["to_email"], "inbox@pampacode.com");
        assert_eq!(params["email_preference"], "Sí");
        assert_eq!(params["subject"], QUOTE_SUBJECT);
    }

    #[test]
    fn quote_has_fixed_variable_set() {
        let keys: Vec<_> = quote_params(&quote(), "x@y.com").into_keys().collect();
        let mut expected = vec![
            "to_email",
            "from_name",
            "from_email",
            "phone",
            "company",
            "business",
            "project_type",
            "main_goal",
            "features",
            "integrations",
            "budget",
            "deadline",
            "support",
            "comments",
            "email_preference",
            "subject",
        ];
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn contact_maps_every_optional_field() {
        let request = ContactRequest {
            first_name: "Nicolás".to_string(),
            last_name: "Díaz".to_string(),
            email: "nicolas@pampacode.com".to_string(),
            phone: "+54 9 358".to_string(),
            address: None,
            postal_code: Some("5800".to_string()),
            industry: None,
            city: Some("Río Cuarto".to_string()),
            state_province: Some("Córdoba".to_string()),
            country: None,
        };
        let params = contact_params(&request, "inbox@pampacode.com");
        assert_eq!(params.len(), 11);
        assert_eq!(params["address"], NOT_SPECIFIED);
        assert_eq!(params["postal_code"], "5800");
        assert_eq!(params["business"], NOT_SPECIFIED);
        assert_eq!(params["province"], "Córdoba");
        assert_eq!(params["country"], NOT_SPECIFIED);
        assert_eq!(params["subject"], CONTACT_SUBJECT);
    }
}
