//! Shared types used across barscan.
//! Includes the normalized `RecognizedBarcode`, `Credentials` resolution,
//! the per-invocation `ScanRequest`, and the client `Generation`.
use serde::{Deserialize, Serialize};

/// Environment fallback for `--client-id`.
pub const CLIENT_ID_ENV: &str = "ASPOSE_CLIENT_ID";
/// Environment fallback for `--client-secret`.
pub const CLIENT_SECRET_ENV: &str = "ASPOSE_CLIENT_SECRET";

/// A single recognition result, normalized across client generations.
///
/// `value` and `symbology` are empty strings when the remote payload
/// omits them; `confidence` is absent when the vendor does not report
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedBarcode {
    pub value: String,
    pub symbology: String,
    pub confidence: Option<f64>,
}

/// Cloud credentials, held only for the lifetime of one invocation.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Resolve credentials from explicit flag values with environment
    /// fallback. Empty strings count as missing.
    pub fn resolve(client_id: Option<String>, client_secret: Option<String>) -> Option<Self> {
        Self::resolve_with(client_id, client_secret, |name| std::env::var(name).ok())
    }

    /// Resolution against an injected environment lookup.
    pub fn resolve_with(
        client_id: Option<String>,
        client_secret: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Option<Self> {
        let client_id = client_id
            .or_else(|| env(CLIENT_ID_ENV))
            .filter(|v| !v.is_empty())?;
        let client_secret = client_secret
            .or_else(|| env(CLIENT_SECRET_ENV))
            .filter(|v| !v.is_empty())?;
        Some(Self {
            client_id,
            client_secret,
        })
    }
}

/// One recognition call: image bytes, optional symbology filters, and
/// an optional vendor preset name. Built once per invocation.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub image: Vec<u8>,
    pub symbologies: Vec<String>,
    pub preset: Option<String>,
}

/// The vendor client generation the process runs against.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Generation {
    Modern,
    Legacy,
}

impl Generation {
    /// Generation selected for this build. The legacy binding is chosen
    /// with the `legacy-sdk` cargo feature; the result is fixed for the
    /// whole process.
    pub fn detect() -> Self {
        if cfg!(feature = "legacy-sdk") {
            Generation::Legacy
        } else {
            Generation::Modern
        }
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generation::Modern => write!(f, "modern"),
            Generation::Legacy => write!(f, "legacy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn flags_win_over_environment() {
        let creds = Credentials::resolve_with(
            Some("flag-id".to_string()),
            Some("flag-secret".to_string()),
            |_| Some("env-value".to_string()),
        )
        .unwrap();
        assert_eq!(creds.client_id, "flag-id");
        assert_eq!(creds.client_secret, "flag-secret");
    }

    #[test]
    fn environment_fills_missing_flags() {
        let creds = Credentials::resolve_with(None, None, |name| match name {
            CLIENT_ID_ENV => Some("env-id".to_string()),
            CLIENT_SECRET_ENV => Some("env-secret".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(creds.client_id, "env-id");
        assert_eq!(creds.client_secret, "env-secret");
    }

    #[test]
    fn missing_secret_is_missing_credentials() {
        let creds = Credentials::resolve_with(Some("id".to_string()), None, no_env);
        assert!(creds.is_none());
    }

    #[test]
    fn empty_values_count_as_missing() {
        let creds =
            Credentials::resolve_with(Some(String::new()), Some("secret".to_string()), no_env);
        assert!(creds.is_none());
    }
}
