#![doc = r#"
barscan — read barcodes from local images with the Aspose Barcode Cloud service.

This crate forwards one local image to the vendor recognition service and
returns the decoded barcodes as a uniform, typed result list. Two incompatible
generations of the vendor client are hidden behind one adapter interface,
selected once per process. It powers the barscan CLI and can be embedded in
your own Rust applications.

The heavy lifting (image decoding, symbology detection, confidence scoring)
happens remotely; local responsibilities are credential resolution, transport
configuration, response normalization, logging setup, and output formatting.

Quick start: scan an image
--------------------------
```rust,no_run
use std::path::Path;

use barscan::{BarcodeReader, Credentials};

fn main() -> barscan::Result<()> {
    let credentials = Credentials::resolve(None, None)
        .expect("set ASPOSE_CLIENT_ID / ASPOSE_CLIENT_SECRET");

    let reader = BarcodeReader::new(&credentials, None)?;
    for barcode in reader.scan(Path::new("label.png"), &[], None)? {
        println!("{}: {}", barcode.symbology, barcode.value);
    }
    Ok(())
}
```

Restrict symbologies and pick a preset
--------------------------------------
```rust,no_run
use std::path::Path;

use barscan::{BarcodeReader, Credentials};

fn main() -> barscan::Result<()> {
    let credentials = Credentials::resolve(None, None).expect("credentials");
    let reader = BarcodeReader::new(&credentials, None)?;

    let filters = vec!["EAN13".to_string(), "QR".to_string()];
    let results = reader.scan(Path::new("label.png"), &filters, Some("HighQuality"))?;
    println!("{} barcode(s) found", results.len());
    Ok(())
}
```

Error handling
--------------
All public functions return `barscan::Result<T>`; match on `barscan::Error`
to handle specific cases, e.g. a missing image or a transport failure.

```rust,no_run
use std::path::Path;

use barscan::{BarcodeReader, Credentials, Error};

fn main() {
    let credentials = Credentials::resolve(None, None).expect("credentials");
    let reader = BarcodeReader::new(&credentials, None).expect("configuration");

    match reader.scan(Path::new("/bad/path.png"), &[], None) {
        Ok(results) => println!("{} found", results.len()),
        Err(Error::ImageNotFound { path }) => eprintln!("no such image: {}", path.display()),
        Err(Error::Transport(e)) => eprintln!("service unreachable: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Feature flags
-------------
- `legacy-sdk`: builds against the legacy generation of the vendor client
  (raw-content recognize endpoint, query-string credentials) instead of the
  modern base64 scan endpoint.

Useful modules
--------------
- [`reader`] — the SDK adapter: configuration building and the scan call.
- [`types`] — `RecognizedBarcode`, `Credentials`, `ScanRequest`, `Generation`.
- [`logging`] — process-wide file + stderr logging setup.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod error;
pub mod logging;
pub mod reader;
pub mod types;

// Curated public API surface
pub use error::{Error, Result};
pub use reader::BarcodeReader;
pub use reader::config::{
    DEFAULT_API_BASE_URL, LegacyConfiguration, LegacyFieldCatalog, ModernConfiguration,
};
pub use types::{Credentials, Generation, RecognizedBarcode, ScanRequest};
