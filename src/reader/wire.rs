//! Request and response wire schemas for the vendor recognition API.
//!
//! Both generations return the barcode list under one of two field
//! names (`barcodes`, then `barcode_list`), and each item spells its
//! symbology as either `type` or `code_type_name`. Extraction is an
//! ordered first-present-wins over the known candidates.
use base64::Engine;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};

use crate::types::{RecognizedBarcode, ScanRequest};

/// Body of the modern-generation scan call. The filter list is always
/// sent, empty when no filter was requested.
#[derive(Debug, Serialize)]
pub struct ScanBase64Options {
    pub image: String,
    pub barcode_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
}

impl ScanBase64Options {
    pub fn from_request(request: &ScanRequest) -> Self {
        Self {
            image: general_purpose::STANDARD.encode(&request.image),
            barcode_types: request.symbologies.clone(),
            preset: request.preset.clone(),
        }
    }
}

/// Comma-joined symbology filter for the legacy query string; `None`
/// when no filter was requested.
pub fn join_symbologies(symbologies: &[String]) -> Option<String> {
    if symbologies.is_empty() {
        None
    } else {
        Some(symbologies.join(","))
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScanResponse {
    barcodes: Option<Vec<WireBarcode>>,
    #[serde(alias = "barcodeList")]
    barcode_list: Option<Vec<WireBarcode>>,
}

impl ScanResponse {
    /// First present of the two list fields wins.
    pub fn into_barcodes(self) -> Vec<RecognizedBarcode> {
        self.barcodes
            .or(self.barcode_list)
            .unwrap_or_default()
            .into_iter()
            .map(WireBarcode::into_normalized)
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireBarcode {
    #[serde(alias = "barcodeValue")]
    barcode_value: Option<String>,
    #[serde(rename = "type")]
    type_name: Option<String>,
    #[serde(alias = "codeTypeName")]
    code_type_name: Option<String>,
    confidence: Option<f64>,
}

impl WireBarcode {
    fn into_normalized(self) -> RecognizedBarcode {
        RecognizedBarcode {
            value: self.barcode_value.unwrap_or_default(),
            symbology: self.type_name.or(self.code_type_name).unwrap_or_default(),
            confidence: self.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(payload: &str) -> Vec<RecognizedBarcode> {
        serde_json::from_str::<ScanResponse>(payload)
            .unwrap()
            .into_barcodes()
    }

    #[test]
    fn barcodes_field_wins_over_barcode_list() {
        let results = decode(
            r#"{
                "barcodes": [{"barcode_value": "111", "type": "QR"}],
                "barcode_list": [{"barcode_value": "222", "type": "EAN13"}]
            }"#,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].value, "111");
    }

    #[test]
    fn barcode_list_is_used_when_barcodes_is_absent() {
        let results = decode(r#"{"barcode_list": [{"barcode_value": "222", "type": "EAN13"}]}"#);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].value, "222");
        assert_eq!(results[0].symbology, "EAN13");
    }

    #[test]
    fn camel_case_spellings_are_accepted() {
        let results =
            decode(r#"{"barcodeList": [{"barcodeValue": "333", "codeTypeName": "Code128"}]}"#);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].value, "333");
        assert_eq!(results[0].symbology, "Code128");
    }

    #[test]
    fn type_wins_over_code_type_name() {
        let results = decode(
            r#"{"barcodes": [{"barcode_value": "1", "type": "QR", "code_type_name": "Pdf417"}]}"#,
        );
        assert_eq!(results[0].symbology, "QR");
    }

    #[test]
    fn missing_fields_normalize_to_empty_strings() {
        let results = decode(r#"{"barcodes": [{}]}"#);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].value, "");
        assert_eq!(results[0].symbology, "");
        assert_eq!(results[0].confidence, None);
    }

    #[test]
    fn confidence_is_passed_through() {
        let results =
            decode(r#"{"barcodes": [{"barcode_value": "1", "type": "QR", "confidence": 0.5}]}"#);
        assert_eq!(results[0].confidence, Some(0.5));
    }

    #[test]
    fn empty_response_yields_no_barcodes() {
        assert!(decode("{}").is_empty());
    }

    #[test]
    fn join_symbologies_is_none_without_filters() {
        assert_eq!(join_symbologies(&[]), None);
        assert_eq!(
            join_symbologies(&["QR".to_string(), "EAN13".to_string()]),
            Some("QR,EAN13".to_string())
        );
    }

    #[test]
    fn scan_options_carry_base64_image_and_filters() {
        let request = ScanRequest {
            image: b"hello".to_vec(),
            symbologies: vec!["QR".to_string()],
            preset: None,
        };
        let options = ScanBase64Options::from_request(&request);
        assert_eq!(options.image, "aGVsbG8=");

        let body = serde_json::to_value(&options).unwrap();
        assert_eq!(body["barcode_types"][0], "QR");
        assert!(body.get("preset").is_none());
    }

    #[test]
    fn scan_options_include_preset_when_given() {
        let request = ScanRequest {
            image: Vec::new(),
            symbologies: Vec::new(),
            preset: Some("HighPerformance".to_string()),
        };
        let body = serde_json::to_value(ScanBase64Options::from_request(&request)).unwrap();
        assert_eq!(body["preset"], "HighPerformance");
        assert_eq!(body["barcode_types"].as_array().unwrap().len(), 0);
    }
}
