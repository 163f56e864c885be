use log::Level;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Value shipped in the template config; treated the same as a missing key.
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

pub const DEFAULT_CONTACT_EMAIL: &str = "cnicolasdiaz@gmail.com";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// EmailJS credentials and the inbox that receives the lead forms.
///
/// Built once by the landing page and handed down to the modals as a property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub contact_template_id: String,
    pub quote_template_id: String,
    pub public_key: Option<String>,
    pub recipient: String,
    pub send_url: String,
}

impl EmailConfig {
    /// Reads the `EMAILJS_*` and `CONTACT_EMAIL` variables baked in at build time.
    pub fn from_build_env() -> Self {
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID")
                .unwrap_or("YOUR_SERVICE_ID")
                .to_string(),
            contact_template_id: option_env!("EMAILJS_CONTACT_TEMPLATE_ID")
                .unwrap_or("YOUR_CONTACT_TEMPLATE_ID")
                .to_string(),
            quote_template_id: option_env!("EMAILJS_QUOTE_TEMPLATE_ID")
                .unwrap_or("YOUR_QUOTE_TEMPLATE_ID")
                .to_string(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY").map(str::to_string),
            recipient: option_env!("CONTACT_EMAIL")
                .unwrap_or(DEFAULT_CONTACT_EMAIL)
                .to_string(),
            send_url: EMAILJS_SEND_URL.to_string(),
        }
    }

    /// The public key to send with, or `None` when sending is not configured.
    pub fn usable_public_key(&self) -> Option<&str> {
        self.public_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_PUBLIC_KEY)
    }

    pub fn is_demo_mode(&self) -> bool {
        self.usable_public_key().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> EmailConfig {
        EmailConfig {
            service_id: "service_abc".to_string(),
            contact_template_id: "template_contact".to_string(),
            quote_template_id: "template_quote".to_string(),
            public_key: key.map(str::to_string),
            recipient: DEFAULT_CONTACT_EMAIL.to_string(),
            send_url: EMAILJS_SEND_URL.to_string(),
        }
    }

    #[test]
    fn missing_or_placeholder_key_means_demo_mode() {
        assert!(config_with_key(None).is_demo_mode());
        assert!(config_with_key(Some("")).is_demo_mode());
        assert!(config_with_key(Some("   ")).is_demo_mode());
        assert!(config_with_key(Some(PLACEHOLDER_PUBLIC_KEY)).is_demo_mode());
    }

    #[test]
    fn real_key_is_usable() {
        let config = config_with_key(Some("pk_live_123"));
        assert!(!config.is_demo_mode());
        assert_eq!(config.usable_public_key(), Some("pk_live_123"));
    }
}
