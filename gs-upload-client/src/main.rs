use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gs_upload_common::models::{GsutilConfig, SerialDevice, UploadRequest};
use gs_upload_common::{unique_name, Device, Uploader};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Explicit path to the gsutil executable
    #[arg(long, global = true, conflicts_with = "source_root")]
    gsutil_path: Option<PathBuf>,

    /// Source tree containing third_party/catapult/third_party/gsutil
    #[arg(long, global = true)]
    source_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Copy a local file into a bucket and print its viewer link
    Upload {
        #[arg(long)]
        name: String,

        #[arg(long = "file")]
        file: PathBuf,

        #[arg(long)]
        bucket: String,

        #[arg(long = "content-type")]
        content_type: Option<String>,

        /// Print a link that works without sign-in (public buckets only)
        #[arg(long)]
        public: bool,

        #[arg(long)]
        json: bool,
    },
    /// Print a unique object name
    Name {
        basename: String,

        #[arg(long, default_value = "")]
        suffix: String,

        #[arg(long = "no-timestamp")]
        no_timestamp: bool,

        #[arg(long = "device-serial")]
        device_serial: Option<String>,
    },
}

fn gsutil_config(args: &Args) -> GsutilConfig {
    match (&args.gsutil_path, &args.source_root) {
        (Some(path), _) => GsutilConfig::new(path),
        (None, Some(root)) => GsutilConfig::from_source_root(root),
        (None, None) => GsutilConfig::default(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = gsutil_config(&args);

    match args.command {
        Cmd::Upload {
            name,
            file,
            bucket,
            content_type,
            public,
            json,
        } => {
            info!("Using gsutil at {}", config.gsutil_path.display());
            let uploader = Uploader::new(config);

            let mut request =
                UploadRequest::new(name, file, bucket).authenticated_link(!public);
            if let Some(content_type) = content_type {
                request = request.content_type(content_type);
            }

            let result = uploader
                .try_upload(&request)
                .await
                .context("Upload failed, no link available")?;
            info!("Uploaded to {}", result.gs_path);

            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{}", result.url);
            }
        }
        Cmd::Name {
            basename,
            suffix,
            no_timestamp,
            device_serial,
        } => {
            let device = device_serial.map(SerialDevice::new);
            let name = unique_name(
                &basename,
                &suffix,
                !no_timestamp,
                device.as_ref().map(|d| d as &dyn Device),
            );
            println!("{}", name);
        }
    }

    Ok(())
}
