use super::validation::FieldErrors;

/// A form draft that can be checked into a validated request.
pub trait Validate {
    type Field: Ord + Copy;
    type Output;

    fn validate(&self) -> Result<Self::Output, FieldErrors<Self::Field>>;
}

/// Draft, visible errors and the in-flight flag of one open form.
///
/// Errors stay hidden until the first submit attempt. From then on every edit
/// re-validates the whole draft.
pub struct FormState<D: Validate> {
    draft: D,
    errors: FieldErrors<D::Field>,
    attempted: bool,
    in_flight: bool,
}

impl<D: Validate> FormState<D> {
    pub fn new(draft: D) -> Self {
        Self {
            draft,
            errors: FieldErrors::new(),
            attempted: false,
            in_flight: false,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn error(&self, field: D::Field) -> Option<&String> {
        self.errors.get(&field)
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn edit(&mut self, change: impl FnOnce(&mut D)) {
        change(&mut self.draft);
        if self.attempted {
            self.errors = self.draft.validate().err().unwrap_or_default();
        }
    }

    /// Validated request to send, or `None` when a send is already pending or
    /// the draft has errors.
    pub fn begin_submit(&mut self) -> Option<D::Output> {
        if self.in_flight {
            return None;
        }
        self.attempted = true;
        match self.draft.validate() {
            Ok(request) => {
                self.errors.clear();
                self.in_flight = true;
                Some(request)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// The pending send completed, either way. The draft is kept for a retry.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::contact::{ContactDraft, ContactField};
    use crate::forms::quote::{QuoteDraft, QuoteField, TERMS_NOT_ACCEPTED};

    fn filled_contact() -> ContactDraft {
        ContactDraft {
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            email: "ana@empresa.com".to_string(),
            phone: "+54 9 358 422-2994".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn errors_stay_hidden_before_first_attempt() {
        let mut form = FormState::new(ContactDraft::default());
        form.edit(|d| d.set(ContactField::Email, "not-an-email".to_string()));
        assert!(form.error(ContactField::Email).is_none());
        assert!(form.error(ContactField::FirstName).is_none());
    }

    #[test]
    fn edits_revalidate_after_an_attempt() {
        let mut form = FormState::new(ContactDraft::default());
        assert!(form.begin_submit().is_none());
        assert!(!form.is_submitting());
        assert_eq!(
            form.error(ContactField::FirstName).map(String::as_str),
            Some("El nombre es requerido")
        );

        form.edit(|d| d.set(ContactField::FirstName, "Ana".to_string()));
        assert!(form.error(ContactField::FirstName).is_none());
        assert!(form.error(ContactField::LastName).is_some());

        form.edit(|d| d.set(ContactField::FirstName, "  ".to_string()));
        assert!(form.error(ContactField::FirstName).is_some());
    }

    #[test]
    fn second_submit_is_ignored_while_in_flight() {
        let mut form = FormState::new(filled_contact());
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());

        form.finish();
        assert!(!form.is_submitting());
        assert_eq!(form.draft(), &filled_contact());
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn ticking_terms_clears_the_terms_error() {
        let mut form = FormState::new(QuoteDraft {
            first_name: "Ana".to_string(),
            last_name: "Gómez".to_string(),
            email: "a@b.com".to_string(),
            phone: "555".to_string(),
            ..QuoteDraft::with_project_type("")
        });
        assert!(form.begin_submit().is_none());
        assert_eq!(
            form.error(QuoteField::AcceptsTerms).map(String::as_str),
            Some(TERMS_NOT_ACCEPTED)
        );

        form.edit(|d| d.accepts_terms = true);
        assert!(form.error(QuoteField::AcceptsTerms).is_none());
        assert!(form.begin_submit().is_some());
    }
}
