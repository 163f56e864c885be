use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Per-field error messages, keyed by the form's field enum.
pub type FieldErrors<F> = BTreeMap<F, String>;

pub const INVALID_EMAIL: &str = "Email inválido";
pub const REQUIRED_EMAIL: &str = "El email es requerido";
pub const INVALID_OPTION: &str = "Seleccioná una opción válida";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_%+'\-]+(?:\.[A-Za-z0-9_%+'\-]+)*@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

pub fn too_long_message(max: usize) -> String {
    format!("Máximo {} caracteres", max)
}

/// Collects errors while a draft is checked field by field.
pub struct Validator<F: Ord> {
    errors: FieldErrors<F>,
}

impl<F: Ord + Copy> Validator<F> {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records an error for `field` unless it already has one.
    pub fn reject(&mut self, field: F, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    fn check_len(&mut self, field: F, value: &str, max: usize) -> bool {
        if value.chars().count() > max {
            self.reject(field, too_long_message(max));
            false
        } else {
            true
        }
    }

    pub fn required(&mut self, field: F, raw: &str, max: usize, missing: &str) -> String {
        let value = raw.trim();
        if value.is_empty() {
            self.reject(field, missing);
        } else {
            self.check_len(field, value, max);
        }
        value.to_string()
    }

    pub fn email(&mut self, field: F, raw: &str, max: usize) -> String {
        let value = raw.trim();
        if value.is_empty() {
            self.reject(field, REQUIRED_EMAIL);
        } else if self.check_len(field, value, max) && !is_valid_email(value) {
            self.reject(field, INVALID_EMAIL);
        }
        value.to_string()
    }

    pub fn optional(&mut self, field: F, raw: &str, max: usize) -> Option<String> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        self.check_len(field, value, max);
        Some(value.to_string())
    }

    /// An optional value that must be one of `allowed` when present.
    pub fn one_of(&mut self, field: F, raw: &str, allowed: &[&str]) -> Option<String> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        if !allowed.contains(&value) {
            self.reject(field, INVALID_OPTION);
        }
        Some(value.to_string())
    }

    pub fn must_be_true(&mut self, field: F, value: bool, message: &str) {
        if !value {
            self.reject(field, message);
        }
    }

    pub fn finish<T>(self, record: T) -> Result<T, FieldErrors<F>> {
        if self.errors.is_empty() {
            Ok(record)
        } else {
            Err(self.errors)
        }
    }
}

impl<F: Ord + Copy> Default for Validator<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for email in [
            "a@b.com",
            "nombre@empresa.com.ar",
            "first.last+tag@sub.domain.io",
            "o'brien@empresa.com",
        ] {
            assert!(is_valid_email(email), "{} should be valid", email);
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "not-an-email",
            "a@b",
            "@b.com",
            "a@.com",
            "a..b@c.com",
            ".a@c.com",
            "a@b.c",
            "a b@c.com",
            "a@b@c.com",
        ] {
            assert!(!is_valid_email(email), "{} should be rejected", email);
        }
    }

    #[test]
    fn length_is_counted_in_characters() {
        let mut validator = Validator::<u8>::new();
        // 5 chars, 10 bytes
        assert_eq!(validator.optional(0, "ñññññ", 5), Some("ñññññ".to_string()));
        assert!(validator.finish(()).is_ok());

        let mut validator = Validator::<u8>::new();
        validator.optional(0, "ñññññn", 5);
        let errors = validator.finish(()).unwrap_err();
        assert_eq!(errors.get(&0).map(String::as_str), Some("Máximo 5 caracteres"));
    }

    #[test]
    fn one_of_ignores_blank_and_rejects_unknown() {
        let mut validator = Validator::<u8>::new();
        assert_eq!(validator.one_of(0, "  ", &["A"]), None);
        assert_eq!(validator.one_of(1, " A ", &["A"]), Some("A".to_string()));
        validator.one_of(2, "B", &["A"]);
        let errors = validator.finish(()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&2], INVALID_OPTION);
    }
}
