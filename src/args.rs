use clap::Parser;

/// CLI arguments for the S3 threshold copy tool
#[derive(Parser, Debug)]
#[command(name = "s3_sizecopy")]
#[command(author, version = "1.0", about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Source S3 bucket name (e.g. 'sourcebucket')
    #[arg(value_parser = trimmed_bucket_name)]
    pub source_bucket: String,

    /// Destination S3 bucket name (e.g. 'destinationbucket')
    #[arg(value_parser = trimmed_bucket_name)]
    pub destination_bucket: String,

    /// Copy objects larger than this size. Specify size in bytes (e.g. 1000)
    pub threshold: i64,

    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,
}

/// Trim surrounding whitespace from a bucket name argument.
fn trimmed_bucket_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("bucket name must not be empty".to_string());
    }
    Ok(name.to_string())
}
