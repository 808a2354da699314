use std::io::IsTerminal as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pixelgrad",
    version,
    about = "Render an image as an HTML page made of per-pixel CSS radial gradients"
)]
struct Cli {
    /// Image path. JPG or PNG (example --image=path/to/image).
    #[arg(long)]
    image: PathBuf,

    /// Output path (example --output=path/to/html/file). `.html` is appended if missing.
    #[arg(long)]
    output: PathBuf,

    /// How translucent pixels are reduced to 8-bit channels.
    #[arg(long, value_enum, default_value_t = AlphaChoice::Premultiplied)]
    alpha: AlphaChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlphaChoice {
    Premultiplied,
    Straight,
}

impl From<AlphaChoice> for pixelgrad::AlphaMode {
    fn from(choice: AlphaChoice) -> Self {
        match choice {
            AlphaChoice::Premultiplied => Self::Premultiplied,
            AlphaChoice::Straight => Self::Straight,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let cfg = pixelgrad::ConvertConfig::new(cli.image, cli.output)?.with_alpha(cli.alpha.into());
    let report = pixelgrad::convert(&cfg)
        .with_context(|| format!("convert '{}'", cfg.image.display()))?;

    tracing::info!(
        width = report.width,
        height = report.height,
        "Done: Image [{}] -> [{}]",
        report.image.display(),
        report.output.display()
    );
    Ok(())
}
