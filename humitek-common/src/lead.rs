use serde::{Deserialize, Serialize};

/// Category of damp/leak problem a visitor can report.
///
/// Serializes as the French intake label, so the payload matches what the
/// form displays and what a backend expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Problem {
    #[serde(rename = "Remontées capillaires")]
    RisingDamp,
    #[serde(rename = "Fuite invisible")]
    HiddenLeak,
    #[serde(rename = "Salpêtre / moisissures")]
    Saltpeter,
    #[serde(rename = "Condensation")]
    Condensation,
    #[serde(rename = "Autre")]
    Other,
}

impl Problem {
    /// All selectable categories, in display order.
    pub const ALL: [Problem; 5] = [
        Problem::RisingDamp,
        Problem::HiddenLeak,
        Problem::Saltpeter,
        Problem::Condensation,
        Problem::Other,
    ];

    /// Label shown in the intake form and carried in the lead payload.
    pub fn label(&self) -> &'static str {
        match self {
            Problem::RisingDamp => "Remontées capillaires",
            Problem::HiddenLeak => "Fuite invisible",
            Problem::Saltpeter => "Salpêtre / moisissures",
            Problem::Condensation => "Condensation",
            Problem::Other => "Autre",
        }
    }

    /// Parse a form value back into a category.
    pub fn from_label(value: &str) -> Option<Problem> {
        Problem::ALL.iter().copied().find(|p| p.label() == value)
    }
}

/// A quote request as entered in the contact form.
///
/// Field names are the stable contract for any backend integration. Only
/// `name` and `phone` are required; `email` and `zip` are validated when
/// present, the rest is free-form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub zip: String,
    pub problem: Option<Problem>,
    /// Preferred visit slot, free text ("Mercredi matin").
    pub slot: String,
    pub message: String,
    /// Consent checkbox. Gates submission at the interaction level and is
    /// never reported through [`FieldErrors`].
    pub gdpr_consent: bool,
}

/// Per-field validation failures. `None` means the field is valid.
///
/// Fields without a rule (`problem`, `slot`, `message`) have no slot here,
/// so they can never carry an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
    pub zip: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none() && self.zip.is_none()
    }
}

impl LeadSubmission {
    /// Check every field rule independently and report all failures together.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Nom requis");
        }
        if self.phone.trim().is_empty() {
            errors.phone = Some("Téléphone requis");
        }
        let email = self.email.trim();
        if !email.is_empty() && !is_email_shaped(email) {
            errors.email = Some("Email invalide");
        }
        let zip = self.zip.trim();
        if !zip.is_empty() && !is_zip_shaped(zip) {
            errors.zip = Some("Code postal invalide");
        }
        errors
    }
}

/// `<non-space>+@<non-space>+.<non-space>+`: no whitespace anywhere, exactly
/// one `@` with a non-empty local part, and a dot inside the domain with at
/// least one character on each side.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // '.' is a single byte, so byte positions are safe on UTF-8 input
    let bytes = domain.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > 0 && i + 1 < bytes.len())
}

/// Exactly 4 or 5 ASCII digits.
fn is_zip_shaped(value: &str) -> bool {
    (4..=5).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, phone: &str) -> LeadSubmission {
        LeadSubmission {
            name: name.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_name_required() {
        assert_eq!(lead("", "0600000000").validate().name, Some("Nom requis"));
        assert_eq!(
            lead("   ", "0600000000").validate().name,
            Some("Nom requis")
        );
        assert_eq!(lead("Jean", "0600000000").validate().name, None);
    }

    #[test]
    fn test_phone_required() {
        assert_eq!(
            lead("Jean", "").validate().phone,
            Some("Téléphone requis")
        );
        assert_eq!(
            lead("Jean", " \t ").validate().phone,
            Some("Téléphone requis")
        );
        assert_eq!(lead("Jean", "06 12 34 56 78").validate().phone, None);
    }

    #[test]
    fn test_all_failures_reported_together() {
        let errors = lead("", "").validate();
        assert_eq!(errors.name, Some("Nom requis"));
        assert_eq!(errors.phone, Some("Téléphone requis"));
    }

    #[test]
    fn test_invalid_email_is_the_only_error() {
        let mut l = lead("Jean", "0600000000");
        l.email = "not-an-email".to_string();
        let errors = l.validate();
        assert_eq!(errors.email, Some("Email invalide"));
        assert_eq!(errors.name, None);
        assert_eq!(errors.phone, None);
        assert_eq!(errors.zip, None);
    }

    #[test]
    fn test_email_shapes() {
        for ok in [
            "jean@exemple.fr",
            "a@b.c",
            "jean.dupont@mail.exemple-site.fr",
            "j+devis@exemple.co.uk",
        ] {
            let mut l = lead("Jean", "0600000000");
            l.email = ok.to_string();
            assert_eq!(l.validate().email, None, "expected valid: {ok}");
        }
        for bad in [
            "not-an-email",
            "a@b",
            "a@b.",
            "a@.b",
            "@b.c",
            "a b@c.d",
            "a@b c.d",
            "a@@b.c",
            "a@b@c.d",
        ] {
            let mut l = lead("Jean", "0600000000");
            l.email = bad.to_string();
            assert_eq!(l.validate().email, Some("Email invalide"), "expected invalid: {bad}");
        }
    }

    #[test]
    fn test_zip_shapes() {
        for ok in ["1234", "33000"] {
            let mut l = lead("Jean", "0600000000");
            l.zip = ok.to_string();
            assert_eq!(l.validate().zip, None, "expected valid: {ok}");
        }
        for bad in ["123", "123456", "3300a", "33 00", "abcd"] {
            let mut l = lead("Jean", "0600000000");
            l.zip = bad.to_string();
            assert_eq!(
                l.validate().zip,
                Some("Code postal invalide"),
                "expected invalid: {bad}"
            );
        }
    }

    #[test]
    fn test_optional_fields_empty_are_valid() {
        let errors = lead("Jean", "0600000000").validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unvalidated_fields_never_error() {
        let mut l = lead("Jean", "0600000000");
        l.problem = None;
        l.slot = "n'importe quoi".to_string();
        l.message = String::new();
        assert!(l.validate().is_empty());
    }

    #[test]
    fn test_problem_labels_round_trip() {
        for p in Problem::ALL {
            assert_eq!(Problem::from_label(p.label()), Some(p));
        }
        assert_eq!(Problem::from_label("Choisir…"), None);
    }

    #[test]
    fn test_problem_serializes_as_label() {
        for p in Problem::ALL {
            assert_eq!(
                serde_json::to_value(p).unwrap(),
                serde_json::Value::String(p.label().to_string())
            );
        }
    }
}
