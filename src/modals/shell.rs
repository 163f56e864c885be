use crate::forms::quote::project_type_for_service;

/// Which dialog is on screen. At most one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveModal {
    #[default]
    Closed,
    Contact,
    Quote,
    Success,
}

/// Modal visibility for the landing page plus the service the quote form was
/// opened from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalShell {
    active: ActiveModal,
    selected_service: String,
}

impl ModalShell {
    pub fn active(&self) -> ActiveModal {
        self.active
    }

    pub fn selected_service(&self) -> &str {
        &self.selected_service
    }

    /// Project type the quote form starts with.
    pub fn quote_project_type(&self) -> &'static str {
        project_type_for_service(&self.selected_service)
    }

    fn with_active(&self, active: ActiveModal) -> Self {
        Self {
            active,
            selected_service: self.selected_service.clone(),
        }
    }

    pub fn open_contact(&self) -> Self {
        self.with_active(ActiveModal::Contact)
    }

    pub fn request_quote(&self, service_id: &str) -> Self {
        Self {
            active: ActiveModal::Quote,
            selected_service: service_id.to_string(),
        }
    }

    pub fn close(&self) -> Self {
        self.with_active(ActiveModal::Closed)
    }

    /// A form modal finished sending: swap it for the acknowledgement.
    pub fn submission_succeeded(&self) -> Self {
        match self.active {
            ActiveModal::Contact | ActiveModal::Quote => self.with_active(ActiveModal::Success),
            ActiveModal::Closed | ActiveModal::Success => self.clone(),
        }
    }

    pub fn acknowledge(&self) -> Self {
        match self.active {
            ActiveModal::Success => self.with_active(ActiveModal::Closed),
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let shell = ModalShell::default();
        assert_eq!(shell.active(), ActiveModal::Closed);
        assert_eq!(shell.selected_service(), "");
        assert_eq!(shell.quote_project_type(), "");
    }

    #[test]
    fn service_card_prefills_quote() {
        let shell = ModalShell::default().request_quote("gestion");
        assert_eq!(shell.active(), ActiveModal::Quote);
        assert_eq!(shell.quote_project_type(), "Sistema de gestión");

        let shell = shell.close().request_quote("medida");
        assert_eq!(shell.quote_project_type(), "Desarrollo a medida");

        let shell = shell.close().request_quote("posventa");
        assert_eq!(shell.quote_project_type(), "");
    }

    #[test]
    fn closing_keeps_selected_service() {
        let shell = ModalShell::default().request_quote("gestion").close();
        assert_eq!(shell.active(), ActiveModal::Closed);
        assert_eq!(shell.selected_service(), "gestion");
        assert_eq!(shell.quote_project_type(), "Sistema de gestión");
    }

    #[test]
    fn success_replaces_either_form_exactly_once() {
        for opened in [ModalShell::default().open_contact(), ModalShell::default().request_quote("medida")] {
            let shell = opened.submission_succeeded();
            assert_eq!(shell.active(), ActiveModal::Success);

            // A late second success does not reopen anything
            let again = shell.submission_succeeded();
            assert_eq!(again, shell);
        }
    }

    #[test]
    fn success_without_open_form_is_ignored() {
        let shell = ModalShell::default().submission_succeeded();
        assert_eq!(shell.active(), ActiveModal::Closed);
    }

    #[test]
    fn acknowledge_only_closes_success() {
        let shell = ModalShell::default().open_contact();
        assert_eq!(shell.acknowledge().active(), ActiveModal::Contact);

        let shell = shell.submission_succeeded().acknowledge();
        assert_eq!(shell.active(), ActiveModal::Closed);
    }

    #[test]
    fn opening_one_modal_replaces_another() {
        let shell = ModalShell::default().open_contact().request_quote("gestion");
        assert_eq!(shell.active(), ActiveModal::Quote);
    }
}
