//! Transport configuration for the two vendor client generations.
//!
//! The modern client takes credentials as plain fields. Legacy client
//! releases renamed their credential attributes more than once, so the
//! legacy configuration is built by probing candidate attribute names
//! in priority order against a catalog of the names the installed
//! binding actually exposes. An unknown schema is a configuration
//! error rather than a silent mis-assignment.
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::types::Credentials;

pub const DEFAULT_API_BASE_URL: &str = "https://api.aspose.cloud";

const ID_FIELDS: [&str; 2] = ["client_id", "app_sid"];
const SECRET_FIELDS: [&str; 2] = ["client_secret", "app_key"];
const BASE_URL_FIELDS: [&str; 2] = ["api_base_url", "base_url"];

/// Configuration for the modern client generation.
#[derive(Debug, Clone)]
pub struct ModernConfiguration {
    pub client_id: String,
    pub client_secret: String,
    pub api_base_url: String,
}

pub fn build_modern_configuration(
    credentials: &Credentials,
    base_url: Option<&str>,
) -> ModernConfiguration {
    ModernConfiguration {
        client_id: credentials.client_id.clone(),
        client_secret: credentials.client_secret.clone(),
        api_base_url: base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
    }
}

/// Attribute names exposed by the installed legacy binding.
#[derive(Debug, Clone)]
pub struct LegacyFieldCatalog {
    names: BTreeSet<&'static str>,
}

impl LegacyFieldCatalog {
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Catalog of the legacy binding this crate is built against.
    pub fn installed() -> Self {
        Self::new(["app_sid", "app_key", "base_url"])
    }

    fn first_present(&self, candidates: &[&'static str]) -> Option<&'static str> {
        candidates
            .iter()
            .copied()
            .find(|name| self.names.contains(name))
    }
}

/// Configuration for the legacy client generation: the attribute names
/// the probing resolved, mapped to their assigned values.
#[derive(Debug, Clone)]
pub struct LegacyConfiguration {
    fields: BTreeMap<&'static str, String>,
    id_field: &'static str,
    secret_field: &'static str,
}

impl LegacyConfiguration {
    /// Value assigned to the given attribute name, if it was populated.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Credential query parameters under the resolved attribute names.
    pub fn credential_params(&self) -> [(&'static str, &str); 2] {
        [
            (self.id_field, self.get(self.id_field).unwrap_or_default()),
            (
                self.secret_field,
                self.get(self.secret_field).unwrap_or_default(),
            ),
        ]
    }

    /// Base URL override, when the binding had an attribute for it.
    pub fn api_base_url(&self) -> Option<&str> {
        BASE_URL_FIELDS.iter().find_map(|name| self.get(name))
    }
}

pub fn build_legacy_configuration(
    catalog: &LegacyFieldCatalog,
    credentials: &Credentials,
    base_url: Option<&str>,
) -> Result<LegacyConfiguration> {
    let mut fields = BTreeMap::new();

    let id_field = catalog.first_present(&ID_FIELDS).ok_or_else(|| {
        Error::Configuration("client id field not found on legacy configuration".to_string())
    })?;
    fields.insert(id_field, credentials.client_id.clone());

    let secret_field = catalog.first_present(&SECRET_FIELDS).ok_or_else(|| {
        Error::Configuration("client secret field not found on legacy configuration".to_string())
    })?;
    fields.insert(secret_field, credentials.client_secret.clone());

    if let Some(url) = base_url {
        // Bindings without a base url attribute keep their default.
        if let Some(url_field) = catalog.first_present(&BASE_URL_FIELDS) {
            fields.insert(url_field, url.trim_end_matches('/').to_string());
        }
    }

    Ok(LegacyConfiguration {
        fields,
        id_field,
        secret_field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            client_id: "my-id".to_string(),
            client_secret: "my-secret".to_string(),
        }
    }

    #[test]
    fn modern_configuration_uses_default_base_url() {
        let config = build_modern_configuration(&credentials(), None);
        assert_eq!(config.client_id, "my-id");
        assert_eq!(config.client_secret, "my-secret");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn modern_configuration_applies_base_url_override() {
        let config = build_modern_configuration(&credentials(), Some("https://example.test/"));
        assert_eq!(config.api_base_url, "https://example.test");
    }

    #[test]
    fn legacy_probing_prefers_primary_names() {
        let catalog = LegacyFieldCatalog::new([
            "client_id",
            "app_sid",
            "client_secret",
            "app_key",
            "api_base_url",
            "base_url",
        ]);
        let config =
            build_legacy_configuration(&catalog, &credentials(), Some("https://example.test"))
                .unwrap();

        assert_eq!(config.get("client_id"), Some("my-id"));
        assert_eq!(config.get("client_secret"), Some("my-secret"));
        assert_eq!(config.get("api_base_url"), Some("https://example.test"));
        assert_eq!(config.get("app_sid"), None);
        assert_eq!(config.get("app_key"), None);
    }

    #[test]
    fn legacy_probing_populates_renamed_attributes() {
        let catalog = LegacyFieldCatalog::new(["app_sid", "app_key", "base_url"]);
        let config =
            build_legacy_configuration(&catalog, &credentials(), Some("https://example.test"))
                .unwrap();

        assert_eq!(config.get("app_sid"), Some("my-id"));
        assert_eq!(config.get("app_key"), Some("my-secret"));
        assert_eq!(config.get("base_url"), Some("https://example.test"));
        assert_eq!(config.get("client_id"), None);
        assert_eq!(
            config.credential_params(),
            [("app_sid", "my-id"), ("app_key", "my-secret")]
        );
    }

    #[test]
    fn legacy_probing_rejects_unknown_schemas() {
        let catalog = LegacyFieldCatalog::new([]);
        let err = build_legacy_configuration(&catalog, &credentials(), None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn missing_secret_candidates_are_a_configuration_error() {
        let catalog = LegacyFieldCatalog::new(["app_sid"]);
        let err = build_legacy_configuration(&catalog, &credentials(), None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn base_url_override_is_skipped_without_an_attribute() {
        let catalog = LegacyFieldCatalog::new(["app_sid", "app_key"]);
        let config =
            build_legacy_configuration(&catalog, &credentials(), Some("https://example.test"))
                .unwrap();
        assert_eq!(config.api_base_url(), None);
    }
}
