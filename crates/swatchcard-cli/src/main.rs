mod card;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "swatchcard-cli")]
#[command(about = "Inspect product cards: swatches, images, hover preview, sale badge")]
struct Cli {
    /// YAML palette file overriding the built-in swatch colors.
    #[arg(long, global = true)]
    palette: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the card view for a Storefront product JSON file.
    Inspect { product: PathBuf },
    /// Select a color and print the resulting card view.
    Select { product: PathBuf, color: String },
    /// Simulate an intentional hover, preloading the hover image over HTTP.
    Preview {
        product: PathBuf,
        /// Color to select before hovering.
        #[arg(long)]
        color: Option<String>,
        /// How long the pointer stays on the card, in milliseconds.
        #[arg(long, default_value_t = 1_000)]
        hover_ms: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = swatchcard_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let palette = cli.palette.or_else(|| config.palette_path.clone());
    let palette = palette.as_deref();
    match cli.command {
        Some(Commands::Inspect { product }) => {
            card::run_inspect(&config, &product, palette, None).await?;
        }
        Some(Commands::Select { product, color }) => {
            card::run_inspect(&config, &product, palette, Some(&color)).await?;
        }
        Some(Commands::Preview {
            product,
            color,
            hover_ms,
        }) => {
            card::run_preview(&config, &product, palette, color.as_deref(), hover_ms).await?;
        }
        None => println!("swatchcard-cli ready; see --help"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
