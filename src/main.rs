//! Command-line front end: `encode`, `decode` and `inspect`.
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use qrlogo::helper::{self, EncodeOptions, BORDER_DISABLED};
use qrlogo::ImageFormat;

#[derive(Parser)]
#[command(name = "qrlogo", version, about = "Render, decode and inspect QR code images")]
struct Cli {
    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render TEXT as a QR code image
    Encode {
        text: String,
        /// Output file; the image is written to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, default_value = "png")]
        format: ImageFormat,
        #[arg(long, default_value_t = 320)]
        width: u32,
        #[arg(long, default_value_t = 320)]
        height: u32,
        /// Image to draw over the center of the code
        #[arg(long)]
        logo: Option<PathBuf>,
        /// White border in pixels; negative keeps the default margin
        #[arg(long, default_value_t = BORDER_DISABLED, allow_negative_numbers = true)]
        border: i32,
    },
    /// Print the text stored in a QR code image
    Decode { path: PathBuf },
    /// Print width, height, size in bytes and format of an image
    Inspect { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "qrlogo=debug" } else { "qrlogo=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Encode { text, output, format, width, height, logo, border } => {
            let mut options = EncodeOptions::default()
                .with_format(format)
                .with_size(width, height)
                .with_border(border);
            if let Some(logo) = logo {
                options.logo = helper::read_logo(&logo)
                    .with_context(|| format!("reading logo {}", logo.display()))?;
            }
            match output {
                Some(path) => helper::encode_to_file(&text, &path, &options)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => {
                    let bytes = helper::encode(&text, &options)?;
                    io::stdout().lock().write_all(&bytes)?;
                }
            }
        }
        Command::Decode { path } => {
            let text = helper::decode_file(&path)
                .with_context(|| format!("decoding {}", path.display()))?;
            println!("{}", text);
        }
        Command::Inspect { path } => {
            let info = qrlogo::inspect(&path)
                .with_context(|| format!("inspecting {}", path.display()))?;
            println!("{} {} {} {}", info.width, info.height, info.size_bytes, info.format);
        }
    }

    Ok(())
}
