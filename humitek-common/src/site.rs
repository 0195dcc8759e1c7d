//! Site configuration record

use serde::Deserialize;

/// Business facts rendered across the page.
///
/// Defaults to the Humitek values; a deployment can override individual
/// fields from JSON.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub company_name: String,
    /// Short descriptor shown under the logo ("Humidité & fuites").
    pub tagline: String,
    pub phone_display: String,
    /// `tel:` href matching `phone_display`.
    pub phone_href: String,
    pub email: String,
    pub hours: String,
    pub service_area: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            company_name: "Humitek".to_string(),
            tagline: "Humidité & fuites".to_string(),
            phone_display: "06 00 00 00 00".to_string(),
            phone_href: "tel:+33600000000".to_string(),
            email: "contact@humitek.fr".to_string(),
            hours: "Lun–Ven 8h30–18h30".to_string(),
            service_area: "Bordeaux & Gironde".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let info: SiteInfo =
            serde_json::from_str(r#"{"phone_display": "05 00 00 00 00"}"#).unwrap();
        assert_eq!(info.phone_display, "05 00 00 00 00");
        assert_eq!(info.company_name, "Humitek");
        assert_eq!(info.service_area, "Bordeaux & Gironde");
    }
}
