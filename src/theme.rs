use log::{debug, warn};
use web_sys::window;

pub const STORAGE_KEY: &str = "vite-ui-theme";

const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Claro",
            Theme::Dark => "Oscuro",
            Theme::System => "Sistema",
        }
    }

    /// Stored value back to a theme. Anything unrecognised follows the system.
    pub fn parse(stored: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == stored.trim())
            .unwrap_or_default()
    }

    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => system_prefers_dark,
        }
    }
}

pub fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Toggles the `dark` class on the document root.
pub fn apply(theme: Theme) {
    let dark = theme.is_dark(system_prefers_dark());
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("No document element to apply theme to");
        return;
    };
    if root.class_list().toggle_with_force(DARK_CLASS, dark).is_err() {
        warn!("Failed to toggle {} class", DARK_CLASS);
        return;
    }
    debug!("Applied theme {} (dark: {})", theme.as_str(), dark);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_values() {
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("system"), Theme::System);
        assert_eq!(Theme::parse("sepia"), Theme::System);
        assert_eq!(Theme::parse(""), Theme::System);
    }

    #[test]
    fn system_theme_follows_preference() {
        assert!(Theme::System.is_dark(true));
        assert!(!Theme::System.is_dark(false));
        assert!(Theme::Dark.is_dark(false));
        assert!(!Theme::Light.is_dark(true));
    }

    #[test]
    fn round_trips_through_storage_string() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
    }
}
