use tracing::{debug, info};

use barscan::logging;
use barscan::reader::BarcodeReader;
use barscan::types::Credentials;

use super::args::CliArgs;
use super::errors::AppError;
use super::output;

pub fn run(args: CliArgs) -> Result<(), AppError> {
    let log_path = logging::init(args.log_file.clone())?;
    info!("Log file initialised at {}", log_path.display());
    info!(
        "Starting barcode recognition for image {}",
        args.image.display()
    );
    if !args.barcode_types.is_empty() {
        debug!("Barcode type filters: {}", args.barcode_types.join(", "));
    }
    if let Some(preset) = &args.preset {
        debug!("Recognition preset: {preset}");
    }
    if let Some(base_url) = &args.base_url {
        debug!("Using custom base URL: {base_url}");
    }

    let credentials = Credentials::resolve(args.client_id.clone(), args.client_secret.clone())
        .ok_or(AppError::MissingCredentials)?;

    if !args.image.exists() {
        return Err(AppError::ImageNotFound {
            path: args.image.clone(),
        });
    }

    let results = {
        let reader = BarcodeReader::new(&credentials, args.base_url.as_deref())?;
        reader.scan(&args.image, &args.barcode_types, args.preset.as_deref())?
        // reader dropped here, releasing the transport
    };

    info!("Recognition finished. {} barcode(s) found.", results.len());

    if args.json {
        debug!("Writing JSON payload to stdout");
        println!("{}", output::format_json(&results)?);
    } else {
        debug!("Writing table output to stdout");
        println!("{}", output::format_table(&results));
    }

    Ok(())
}
