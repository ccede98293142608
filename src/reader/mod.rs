//! The SDK adapter: one stable scan interface over the two vendor
//! client generations.
//!
//! `BarcodeReader` builds a transport configuration for the generation
//! detected at process start, submits image bytes to the remote
//! recognition service, and normalizes the heterogeneous response
//! shapes into a uniform `RecognizedBarcode` list. Transport and
//! authentication failures propagate unchanged.
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Credentials, Generation, RecognizedBarcode, ScanRequest};

pub mod config;
pub mod wire;

use config::{LegacyConfiguration, LegacyFieldCatalog, ModernConfiguration};
use wire::{ScanBase64Options, ScanResponse, TokenResponse};

enum Configuration {
    Modern(ModernConfiguration),
    Legacy(LegacyConfiguration),
}

/// Recognises barcodes in local images through the vendor cloud
/// service.
///
/// The reader owns the HTTP client handle; dropping it releases the
/// underlying connection pool on every exit path.
pub struct BarcodeReader {
    http: reqwest::blocking::Client,
    configuration: Configuration,
}

impl BarcodeReader {
    /// Build a reader for the generation detected at process start.
    pub fn new(credentials: &Credentials, base_url: Option<&str>) -> Result<Self> {
        Self::with_generation(Generation::detect(), credentials, base_url)
    }

    pub fn with_generation(
        generation: Generation,
        credentials: &Credentials,
        base_url: Option<&str>,
    ) -> Result<Self> {
        debug!("Building {generation} client configuration");
        let configuration = match generation {
            Generation::Modern => {
                Configuration::Modern(config::build_modern_configuration(credentials, base_url))
            }
            Generation::Legacy => Configuration::Legacy(config::build_legacy_configuration(
                &LegacyFieldCatalog::installed(),
                credentials,
                base_url,
            )?),
        };
        Ok(Self {
            http: reqwest::blocking::Client::new(),
            configuration,
        })
    }

    /// Recognise barcodes from a local image.
    ///
    /// `symbologies` limits recognition to the given symbology names;
    /// `preset` selects a vendor recognition preset
    /// (e.g. `HighPerformance`). Fails before any network activity
    /// when the image path does not exist.
    pub fn scan(
        &self,
        image_path: &Path,
        symbologies: &[String],
        preset: Option<&str>,
    ) -> Result<Vec<RecognizedBarcode>> {
        if !image_path.exists() {
            return Err(Error::ImageNotFound {
                path: image_path.to_path_buf(),
            });
        }
        let request = ScanRequest {
            image: std::fs::read(image_path)?,
            symbologies: symbologies.to_vec(),
            preset: preset.map(str::to_string),
        };
        self.scan_request(&request)
    }

    /// Submit an already-built request to the remote service.
    pub fn scan_request(&self, request: &ScanRequest) -> Result<Vec<RecognizedBarcode>> {
        match &self.configuration {
            Configuration::Modern(configuration) => self.scan_with_modern(configuration, request),
            Configuration::Legacy(configuration) => self.scan_with_legacy(configuration, request),
        }
    }

    fn scan_with_modern(
        &self,
        configuration: &ModernConfiguration,
        request: &ScanRequest,
    ) -> Result<Vec<RecognizedBarcode>> {
        let token = self.fetch_token(configuration)?;
        let options = ScanBase64Options::from_request(request);
        debug!(
            "Submitting {} byte(s) to the scan endpoint",
            request.image.len()
        );
        let body = self
            .http
            .post(format!("{}/v3.0/barcode/scan", configuration.api_base_url))
            .bearer_auth(token)
            .json(&options)
            .send()?
            .error_for_status()?
            .text()?;
        let response: ScanResponse = serde_json::from_str(&body)?;
        Ok(response.into_barcodes())
    }

    fn fetch_token(&self, configuration: &ModernConfiguration) -> Result<String> {
        let response: TokenResponse = self
            .http
            .post(format!("{}/connect/token", configuration.api_base_url))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", configuration.client_id.as_str()),
                ("client_secret", configuration.client_secret.as_str()),
            ])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.access_token)
    }

    fn scan_with_legacy(
        &self,
        configuration: &LegacyConfiguration,
        request: &ScanRequest,
    ) -> Result<Vec<RecognizedBarcode>> {
        let base_url = configuration
            .api_base_url()
            .unwrap_or(config::DEFAULT_API_BASE_URL);
        debug!(
            "Submitting {} byte(s) to the recognize endpoint",
            request.image.len()
        );
        let mut call = self
            .http
            .post(format!("{base_url}/v1.3/barcode/recognize"))
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(request.image.clone());
        if let Some(types) = wire::join_symbologies(&request.symbologies) {
            call = call.query(&[("type", types.as_str())]);
        }
        if let Some(preset) = &request.preset {
            call = call.query(&[("preset", preset.as_str())]);
        }
        for (name, value) in configuration.credential_params() {
            call = call.query(&[(name, value)]);
        }
        let body = call.send()?.error_for_status()?.text()?;
        let response: ScanResponse = serde_json::from_str(&body)?;
        Ok(response.into_barcodes())
    }
}
