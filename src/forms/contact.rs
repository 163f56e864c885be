use super::state::Validate;
use super::validation::{FieldErrors, Validator};

pub const PROVINCES: &[&str] = &[
    "Buenos Aires",
    "CABA",
    "Catamarca",
    "Chaco",
    "Chubut",
    "Córdoba",
    "Corrientes",
    "Entre Ríos",
    "Formosa",
    "Jujuy",
    "La Pampa",
    "La Rioja",
    "Mendoza",
    "Misiones",
    "Neuquén",
    "Río Negro",
    "Salta",
    "San Juan",
    "San Luis",
    "Santa Cruz",
    "Santa Fe",
    "Santiago del Estero",
    "Tierra del Fuego",
    "Tucumán",
];

pub const COUNTRIES: &[&str] = &["Argentina", "Chile", "Uruguay", "Paraguay", "Brasil", "Otro"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    PostalCode,
    Industry,
    City,
    StateProvince,
    Country,
}

/// The contact form exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
    pub industry: String,
    pub city: String,
    pub state_province: String,
    pub country: String,
}

/// A contact request that passed validation. Every string is trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub industry: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub country: Option<String>,
}

impl ContactDraft {
    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Address => &mut self.address,
            ContactField::PostalCode => &mut self.postal_code,
            ContactField::Industry => &mut self.industry,
            ContactField::City => &mut self.city,
            ContactField::StateProvince => &mut self.state_province,
            ContactField::Country => &mut self.country,
        };
        *slot = value;
    }

    pub fn validate(&self) -> Result<ContactRequest, FieldErrors<ContactField>> {
        use ContactField::*;

        let mut v = Validator::new();
        let request = ContactRequest {
            first_name: v.required(FirstName, &self.first_name, 100, "El nombre es requerido"),
            last_name: v.required(LastName, &self.last_name, 100, "El apellido es requerido"),
            email: v.email(Email, &self.email, 255),
            phone: v.required(Phone, &self.phone, 50, "El teléfono es requerido"),
            address: v.optional(Address, &self.address, 200),
            postal_code: v.optional(PostalCode, &self.postal_code, 20),
            industry: v.optional(Industry, &self.industry, 100),
            city: v.optional(City, &self.city, 100),
            state_province: v.one_of(StateProvince, &self.state_province, PROVINCES),
            country: v.one_of(Country, &self.country, COUNTRIES),
        };
        v.finish(request)
    }
}

impl Validate for ContactDraft {
    type Field = ContactField;
    type Output = ContactRequest;

    fn validate(&self) -> Result<ContactRequest, FieldErrors<ContactField>> {
        ContactDraft::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            email: "ana@empresa.com".to_string(),
            phone: "+54 9 358 422-2994".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_draft_is_valid_and_trimmed() {
        let mut draft = filled();
        draft.first_name = "  Ana  ".to_string();
        draft.city = "   ".to_string();
        draft.state_province = "Córdoba".to_string();

        let request = draft.validate().unwrap();
        assert_eq!(request.first_name, "Ana");
        assert_eq!(request.city, None);
        assert_eq!(request.state_province.as_deref(), Some("Córdoba"));
        assert_eq!(request.address, None);
    }

    #[test]
    fn each_blank_required_field_fails_alone() {
        let required = [
            ContactField::FirstName,
            ContactField::LastName,
            ContactField::Email,
            ContactField::Phone,
        ];
        for field in required {
            let mut draft = filled();
            draft.set(field, "   ".to_string());
            let errors = draft.validate().unwrap_err();
            assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![field]);
        }
    }

    #[test]
    fn bad_email_is_reported() {
        let mut draft = filled();
        draft.email = "not-an-email".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors[&ContactField::Email], "Email inválido");

        draft.email = "a@b.com".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn enforces_max_lengths() {
        let mut draft = filled();
        draft.postal_code = "1".repeat(21);
        draft.first_name = "a".repeat(101);
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors[&ContactField::PostalCode], "Máximo 20 caracteres");
        assert_eq!(errors[&ContactField::FirstName], "Máximo 100 caracteres");
    }

    #[test]
    fn province_and_country_come_from_fixed_lists() {
        let mut draft = filled();
        draft.state_province = "Ontario".to_string();
        draft.country = "Argentina".to_string();
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains_key(&ContactField::StateProvince));
        assert!(!errors.contains_key(&ContactField::Country));
        assert_eq!(PROVINCES.len(), 24);
    }
}
