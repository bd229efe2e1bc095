use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use polycheck::config::FileConfig;
use polycheck::fsops::{copy_directory, process_files};
use polycheck::geometry::{Polygon, collides_inspect};
use polycheck::text::top_k_words;

/// Check 2D polygons for boundary collisions, plus small text and
/// filesystem utilities
///
/// Examples:
///   # Do two squares overlap?
///   polycheck collide "0,0 4,0 4,4 0,4" "2,2 6,2 6,6 2,6"
///
///   # Ten most frequent words in a file
///   polycheck wordfreq notes.txt -k 10
///
///   # Line counts for every .rs file under src/
///   polycheck lines src -e .rs
///
///   # Replace backup/ with a fresh copy of data/
///   polycheck copy data backup
#[derive(Parser, Debug)]
#[command(name = "polycheck")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches polycheck.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Test whether the boundaries of two polygons cross or touch
    Collide {
        /// First polygon as space-separated "x,y" vertices
        poly_a: String,
        /// Second polygon as space-separated "x,y" vertices
        poly_b: String,
    },
    /// Show the most frequent words in a text file
    Wordfreq {
        /// Input text file
        file: PathBuf,
        /// How many words to show
        #[arg(short = 'k', long = "top-k")]
        k: Option<usize>,
    },
    /// Count lines in files matching the given extensions
    Lines {
        /// Directory to scan recursively
        dir: PathBuf,
        /// File extensions to include (e.g. -e .rs -e .toml)
        #[arg(short, long)]
        extensions: Vec<String>,
    },
    /// Recursively copy a directory, replacing the target if it exists
    Copy {
        /// Source directory
        source: PathBuf,
        /// Target directory (removed first if present)
        target: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    env_logger::Builder::from_default_env()
        .filter_level(if verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .init();

    match args.command {
        Command::Collide { poly_a, poly_b } => {
            let a: Polygon = poly_a.parse().context("Failed to parse first polygon")?;
            let b: Polygon = poly_b.parse().context("Failed to parse second polygon")?;

            let mut hit = None;
            let colliding = collides_inspect(&a, &b, |i, j| hit = Some((i, j)));

            if colliding {
                info!("Polygons collide");
                println!("Polygons collide");
                if verbose && let Some((i, j)) = hit {
                    println!("  First contact: edge {} of A against edge {} of B", i, j);
                }
            } else {
                info!("Polygons do not collide");
                println!("Polygons do not collide");
            }
        }

        Command::Wordfreq { file, k } => {
            let text = std::fs::read_to_string(&file)
                .context(format!("Failed to read file: {:?}", file))?;
            let k = k
                .or_else(|| file_config.as_ref().map(|c| c.top_k))
                .unwrap_or(10);

            let ranked = top_k_words(&text, k);
            if ranked.is_empty() {
                println!("No words found in {:?}", file);
            } else {
                for (word, count) in &ranked {
                    println!("{:>8}  {}", count, word);
                }
            }
        }

        Command::Lines { dir, extensions } => {
            let extensions = if extensions.is_empty() {
                file_config
                    .as_ref()
                    .and_then(|c| c.extensions.clone())
                    .unwrap_or_default()
            } else {
                extensions
            };
            if extensions.is_empty() {
                bail!("No extensions given. Use -e (e.g. -e .rs) or set them in the config file");
            }

            let spinner = create_spinner("Scanning files...");
            let start = Instant::now();
            let counts = process_files(&dir, &extensions)
                .context(format!("Failed to process directory: {:?}", dir))?;
            spinner.finish_with_message(format!(
                "Processed {} files [{:.1}s]",
                counts.len(),
                start.elapsed().as_secs_f32()
            ));

            for entry in &counts {
                println!("{:>8}  {}", entry.lines, entry.name);
            }
            let total: usize = counts.iter().map(|c| c.lines).sum();
            println!("{:>8}  total", total);
        }

        Command::Copy { source, target } => {
            copy_directory(&source, &target)
                .context(format!("Failed to copy {:?} to {:?}", source, target))?;
            println!("Copied {} to {}", source.display(), target.display());
        }
    }

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
