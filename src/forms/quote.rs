use super::state::Validate;
use super::validation::{FieldErrors, Validator, INVALID_OPTION};

pub const INDUSTRIES: &[&str] = &[
    "Comercio",
    "Industria",
    "Servicios",
    "Salud",
    "Educación",
    "Agrícola",
    "Tecnología",
    "Otro",
];

pub const TERMS_NOT_ACCEPTED: &str = "Debes aceptar los términos y condiciones";

/// Pre-filled project type for a service card id. Unknown ids get nothing.
pub fn project_type_for_service(service_id: &str) -> &'static str {
    match service_id {
        "gestion" => "Sistema de gestión",
        "medida" => "Desarrollo a medida",
        _ => "",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupportTier {
    Basic,
    Standard,
    Continuous,
}

impl SupportTier {
    pub const ALL: [SupportTier; 3] = [SupportTier::Basic, SupportTier::Standard, SupportTier::Continuous];

    pub fn label(self) -> &'static str {
        match self {
            SupportTier::Basic => "Básico",
            SupportTier::Standard => "Estándar",
            SupportTier::Continuous => "Continuo",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuoteField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Industry,
    ProjectType,
    MainGoal,
    Features,
    Integrations,
    Budget,
    TargetDate,
    SupportTier,
    Comments,
    AcceptsTerms,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub industry: String,
    pub project_type: String,
    pub main_goal: String,
    pub features: String,
    pub integrations: String,
    pub budget: String,
    pub target_date: String,
    pub support_tier: String,
    pub comments: String,
    pub wants_email_copy: bool,
    pub accepts_terms: bool,
}

impl Default for QuoteDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            industry: String::new(),
            project_type: String::new(),
            main_goal: String::new(),
            features: String::new(),
            integrations: String::new(),
            budget: String::new(),
            target_date: String::new(),
            support_tier: String::new(),
            comments: String::new(),
            wants_email_copy: true,
            accepts_terms: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub project_type: Option<String>,
    pub main_goal: Option<String>,
    pub features: Option<String>,
    pub integrations: Option<String>,
    pub budget: Option<String>,
    pub target_date: Option<String>,
    pub support_tier: Option<SupportTier>,
    pub comments: Option<String>,
    pub wants_email_copy: bool,
}

impl QuoteDraft {
    /// A fresh draft with the project type chosen by the service card, if any.
    pub fn with_project_type(project_type: &str) -> Self {
        Self {
            project_type: project_type.to_string(),
            ..Default::default()
        }
    }

    /// Sets a text field. Checkbox fields are plain struct fields.
    pub fn set(&mut self, field: QuoteField, value: String) {
        let slot = match field {
            QuoteField::FirstName => &mut self.first_name,
            QuoteField::LastName => &mut self.last_name,
            QuoteField::Email => &mut self.email,
            QuoteField::Phone => &mut self.phone,
            QuoteField::Company => &mut self.company,
            QuoteField::Industry => &mut self.industry,
            QuoteField::ProjectType => &mut self.project_type,
            QuoteField::MainGoal => &mut self.main_goal,
            QuoteField::Features => &mut self.features,
            QuoteField::Integrations => &mut self.integrations,
            QuoteField::Budget => &mut self.budget,
            QuoteField::TargetDate => &mut self.target_date,
            QuoteField::SupportTier => &mut self.support_tier,
            QuoteField::Comments => &mut self.comments,
            QuoteField::AcceptsTerms => {
                log::warn!("accepts_terms is a checkbox, ignoring text value");
                return;
            }
        };
        *slot = value;
    }

    pub fn validate(&self) -> Result<QuoteRequest, FieldErrors<QuoteField>> {
        use QuoteField as F;

        let mut v = Validator::new();
        let support_tier = match self.support_tier.trim() {
            "" => None,
            label => {
                let tier = SupportTier::from_label(label);
                if tier.is_none() {
                    v.reject(F::SupportTier, INVALID_OPTION);
                }
                tier
            }
        };
        let request = QuoteRequest {
            first_name: v.required(F::FirstName, &self.first_name, 100, "El nombre es requerido"),
            last_name: v.required(F::LastName, &self.last_name, 100, "El apellido es requerido"),
            email: v.email(F::Email, &self.email, 255),
            phone: v.required(F::Phone, &self.phone, 50, "El teléfono es requerido"),
            company: v.optional(F::Company, &self.company, 200),
            industry: v.one_of(F::Industry, &self.industry, INDUSTRIES),
            project_type: v.optional(F::ProjectType, &self.project_type, 200),
            main_goal: v.optional(F::MainGoal, &self.main_goal, 500),
            features: v.optional(F::Features, &self.features, 1000),
            integrations: v.optional(F::Integrations, &self.integrations, 500),
            budget: v.optional(F::Budget, &self.budget, 200),
            target_date: v.optional(F::TargetDate, &self.target_date, 50),
            support_tier,
            comments: v.optional(F::Comments, &self.comments, 2000),
            wants_email_copy: self.wants_email_copy,
        };
        v.must_be_true(F::AcceptsTerms, self.accepts_terms, TERMS_NOT_ACCEPTED);
        v.finish(request)
    }
}

impl Validate for QuoteDraft {
    type Field = QuoteField;
    type Output = QuoteRequest;

    fn validate(&self) -> Result<QuoteRequest, FieldErrors<QuoteField>> {
        QuoteDraft::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> QuoteDraft {
        QuoteDraft {
            first_name: "Benjamin".to_string(),
            last_name: "Sosa".to_string(),
            email: "benjamin@pampacode.com".to_string(),
            phone: "3584222994".to_string(),
            accepts_terms: true,
            ..Default::default()
        }
    }

    #[test]
    fn defaults_opt_into_email_copy_without_terms() {
        let draft = QuoteDraft::default();
        assert!(draft.wants_email_copy);
        assert!(!draft.accepts_terms);
    }

    #[test]
    fn service_id_maps_to_project_type() {
        assert_eq!(project_type_for_service("gestion"), "Sistema de gestión");
        assert_eq!(project_type_for_service("medida"), "Desarrollo a medida");
        assert_eq!(project_type_for_service("posventa"), "");
        assert_eq!(project_type_for_service(""), "");
    }

    #[test]
    fn prefilled_draft_starts_with_defaults() {
        let draft = QuoteDraft::with_project_type("Sistema de gestión");
        assert_eq!(draft.project_type, "Sistema de gestión");
        assert!(draft.wants_email_copy);
        assert!(!draft.accepts_terms);
    }

    #[test]
    fn unaccepted_terms_always_rejects() {
        let mut draft = filled();
        draft.company = "Cooperativa".to_string();
        draft.industry = "Salud".to_string();
        draft.support_tier = "Continuo".to_string();
        draft.accepts_terms = false;

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&QuoteField::AcceptsTerms], TERMS_NOT_ACCEPTED);
    }

    #[test]
    fn terms_error_is_distinct_from_field_errors() {
        let mut draft = filled();
        draft.accepts_terms = false;
        draft.first_name.clear();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors[&QuoteField::FirstName], "El nombre es requerido");
        assert_eq!(errors[&QuoteField::AcceptsTerms], TERMS_NOT_ACCEPTED);
    }

    #[test]
    fn each_blank_required_field_fails_alone() {
        for field in [QuoteField::FirstName, QuoteField::LastName, QuoteField::Email, QuoteField::Phone] {
            let mut draft = filled();
            draft.set(field, " \t ".to_string());
            let errors = draft.validate().unwrap_err();
            assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![field]);
        }
    }

    #[test]
    fn parses_support_tier_and_rejects_unknown() {
        let mut draft = filled();
        draft.support_tier = "Estándar".to_string();
        assert_eq!(draft.validate().unwrap().support_tier, Some(SupportTier::Standard));

        draft.support_tier = "Premium".to_string();
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains_key(&QuoteField::SupportTier));
    }

    #[test]
    fn long_free_text_is_rejected() {
        let mut draft = filled();
        draft.features = "x".repeat(1001);
        draft.comments = "y".repeat(2000);
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![QuoteField::Features]);
    }

    #[test]
    fn blank_optionals_become_none() {
        let mut draft = filled();
        draft.project_type = "   ".to_string();
        draft.wants_email_copy = false;
        let request = draft.validate().unwrap();
        assert_eq!(request.project_type, None);
        assert_eq!(request.company, None);
        assert!(!request.wants_email_copy);
    }
}
