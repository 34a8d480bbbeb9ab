//! `imgconv` CLI - convert an image into a VGG-19 input tensor.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: imgconv <input file> <output file>";

/// Convert an image into a normalized 3x224x224 channel-major f32 tensor.
///
/// Exactly two arguments are accepted. Anything else, including `--help`,
/// is a usage error. Log verbosity comes from `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(name = "imgconv")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Input image path (any format the image crate can decode).
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    input: PathBuf,

    /// Output tensor path. Overwritten if it exists.
    #[arg(value_name = "OUTPUT", allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> ExitCode {
    // Program name plus exactly two arguments.
    if std::env::args_os().len() != 3 {
        println!("{USAGE}");
        return ExitCode::from(1);
    }
    let Ok(args) = Args::try_parse() else {
        println!("{USAGE}");
        return ExitCode::from(1);
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imgconv=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    imgconv::process(&args.input, &args.output).with_context(|| {
        format!(
            "Failed to convert {} -> {}",
            args.input.display(),
            args.output.display()
        )
    })
}
