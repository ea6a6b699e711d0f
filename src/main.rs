use clap::{Parser, Subcommand};
use property_view::{config, controller::PageController, generate, output, replay};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "property-view")]
#[command(about = "Static property detail page with an interactive photo lightbox")]
#[command(long_about = "\
Static property detail page with an interactive photo lightbox

The content directory holds an optional config.toml describing the listing
(copy, photos, reviews, pricing, map, colors, animation timing) and an
optional assets/ directory copied verbatim to the output.

  content/
  ├── config.toml        # Listing config (optional, overrides the demo listing)
  └── assets/            # Local photos and files → copied to dist/assets/

The first 5 photos are shown inline; the lightbox browses all of them with
wrap-around navigation and 1x-3x zoom.

Run 'property-view gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the landing and property pages
    Generate,
    /// Validate config.toml without writing anything
    Check,
    /// Run a lightbox event script and print each resulting state
    Replay {
        /// Script with one event per line (open N, next, prev, close,
        /// zoom-in, zoom-out, wheel ±1, reset, scroll P, click N, key NAME)
        script: PathBuf,
        /// Print one JSON object per step instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate => {
            println!("==> Generating {} → {}", cli.source.display(), cli.output.display());
            let pages = generate::generate(&cli.source, &cli.output)?;
            output::print_generate_output(&pages);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            output::print_check_output(&config);
            println!("==> Config is valid");
        }
        Command::Replay { script, json } => {
            let config = config::load_config(&cli.source)?;
            let events = replay::load_script(&script)?;
            let mut controller = PageController::new(config.images);
            let steps = replay::replay(&mut controller, &events);
            output::print_replay_output(&steps, json)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
