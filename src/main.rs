use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rasterpipe::models::{OutputPaths, DEFAULT_LOG_FILTER};
use rasterpipe::Pipeline;

#[derive(Parser)]
#[command(name = "rasterpipe")]
#[command(version)]
#[command(about = "Sharpen a binary PPM image, convert it to gray and write a 5-bin intensity histogram")]
#[command(
    after_help = "Writes output.ppm (sharpened image) and output.txt (histogram counts) to the current directory."
)]
struct Cli {
    /// Input image: binary PPM (P6) with maxval 255
    input: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(OutputPaths::default());

    let report = pipeline.run(&cli.input).map_err(|e| {
        let stage = e.stage();
        anyhow::Error::new(e).context(format!("{stage} stage failed"))
    })?;

    tracing::info!(
        image = %report.image_path.display(),
        histogram = %report.histogram_path.display(),
        "Artifacts written"
    );
    Ok(())
}
