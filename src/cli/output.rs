//! Output formatting for the CLI: a human friendly table and a machine
//! readable JSON array.
use barscan::RecognizedBarcode;

const EMPTY_MESSAGE: &str = "No barcodes found.";

/// One `SYMBOLOGY: VALUE` line per barcode, with the confidence
/// appended as a percentage when the vendor reported one.
pub fn format_table(results: &[RecognizedBarcode]) -> String {
    if results.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    results
        .iter()
        .map(|item| match item.confidence {
            Some(confidence) => format!(
                "{}: {} ({:.2}%)",
                item.symbology,
                item.value,
                confidence * 100.0
            ),
            None => format!("{}: {}", item.symbology, item.value),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A compact JSON array of `{value, symbology, confidence}` objects in
/// result order, with absent confidence serialized as null.
pub fn format_json(results: &[RecognizedBarcode]) -> barscan::Result<String> {
    Ok(serde_json::to_string(results)?)
}
