use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use version_bump_core::{bumper, DEFAULT_MANIFEST_PATH};

mod report;

const DEFAULT_WRITE_PATH: &str = "./testJS.txt";
const DEFAULT_WRITE_CONTENT: &str = "Some content!";

#[derive(Parser)]
#[command(name = "vbump")]
#[command(about = "Increment the version_code field of a mobile app manifest")]
struct Cli {
    /// Path to the manifest file
    #[arg(
        short,
        long,
        global = true,
        env = "VBUMP_MANIFEST",
        default_value = DEFAULT_MANIFEST_PATH
    )]
    manifest: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Increment version_code by one (default)
    Bump {
        /// Report the change without writing the manifest
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the current version_code
    Show,
    /// Write a fixed string to a file
    Write {
        /// File to create or overwrite
        #[arg(default_value = DEFAULT_WRITE_PATH)]
        path: PathBuf,

        /// Content to write
        #[arg(short, long, default_value = DEFAULT_WRITE_CONTENT)]
        content: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "vbump=info,version_bump_core=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let format = report::Format::from_json_flag(cli.json);

    match cli.command {
        Some(Commands::Bump { dry_run: true }) => {
            let bump = bumper::preview(&cli.manifest).context("Failed to preview version_code bump")?;
            report::print_preview(&bump, format)?;
        }
        Some(Commands::Bump { dry_run: false }) | None => {
            // Default: bump the configured manifest
            tracing::debug!("Bumping {}", cli.manifest.display());
            let bump = bumper::bump(&cli.manifest).context("Failed to bump version_code")?;
            report::print_bump(&bump, format)?;
        }
        Some(Commands::Show) => {
            let version_code =
                bumper::read_version(&cli.manifest).context("Failed to read version_code")?;
            report::print_version(version_code, format)?;
        }
        Some(Commands::Write { path, content }) => {
            bumper::write_text(&path, &content).context("Failed to write file")?;
            report::print_write(&path, content.len(), format)?;
        }
    }

    Ok(())
}
