use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "barscan",
    version,
    about = "Read barcodes from a local image using Aspose Barcode Cloud"
)]
pub struct CliArgs {
    /// Path to the image that contains barcodes
    pub image: PathBuf,

    /// Limit recognition to the provided symbology (can be passed multiple times)
    #[arg(long = "type", value_name = "SYMBOLOGY")]
    pub barcode_types: Vec<String>,

    /// Optional recognition preset (e.g. HighPerformance, HighQuality)
    #[arg(long)]
    pub preset: Option<String>,

    /// Override the cloud API base url
    #[arg(long)]
    pub base_url: Option<String>,

    /// Client id. Falls back to the ASPOSE_CLIENT_ID environment variable
    #[arg(long)]
    pub client_id: Option<String>,

    /// Client secret. Falls back to the ASPOSE_CLIENT_SECRET environment variable
    #[arg(long)]
    pub client_secret: Option<String>,

    /// Path to the log file. Defaults to barcode_reader.log in the current working directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Emit machine readable JSON instead of a human friendly table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
