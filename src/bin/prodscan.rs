use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use prod_scan::config::{ScanConfig, registry_path};
use prod_scan::tools::dataset_iter;
use prod_scan::{
    DirectorySink, Frame, ImageSequenceSource, JsonRegistry, LiveStop, MessageKind, ScanOutcome,
    Scanner,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "prodscan", version, about = "Product authenticity scanner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Verify the product QR code in a single image
    Scan {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        registry: Option<PathBuf>,
    },
    /// Replay a directory of frames as a camera until a code decodes
    Live {
        #[arg(long)]
        frames: PathBuf,
        /// Write every processed frame, outlines included, to this directory
        #[arg(long)]
        save_overlay: Option<PathBuf>,
        #[arg(long)]
        registry: Option<PathBuf>,
    },
    /// Verify every image under a directory
    Batch {
        #[arg(long)]
        root: PathBuf,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        registry: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Scan { image, registry } => scan_cmd(&image, registry),
        Command::Live {
            frames,
            save_overlay,
            registry,
        } => live_cmd(&frames, save_overlay.as_deref(), registry),
        Command::Batch {
            root,
            limit,
            registry,
        } => batch_cmd(&root, limit, registry),
    }
}

fn open_scanner(registry: Option<PathBuf>) -> Result<Scanner<JsonRegistry>> {
    let path = registry_path(registry);
    let registry = JsonRegistry::open(&path)
        .with_context(|| format!("Failed to open product registry {}", path.display()))?;
    Ok(Scanner::with_config(registry, *ScanConfig::global()))
}

fn print_outcome(outcome: &ScanOutcome) {
    let tag = match outcome.kind() {
        MessageKind::Success => "OK",
        MessageKind::Info => "INFO",
        MessageKind::Warning => "WARN",
    };
    println!("[{}] {}", tag, outcome.headline());
    for line in outcome.details() {
        println!("  {}", line);
    }
    if let Some(follow_up) = outcome.follow_up() {
        println!("  -> {}", follow_up.prompt());
    }
}

fn scan_cmd(image: &Path, registry: Option<PathBuf>) -> Result<()> {
    let scanner = open_scanner(registry)?;
    let start = Instant::now();
    let outcome = scanner
        .scan_path(image)
        .with_context(|| format!("Failed to decode image {}", image.display()))?;
    println!("Image: {} ({:.2?})", image.display(), start.elapsed());
    print_outcome(&outcome);
    Ok(())
}

fn live_cmd(frames: &Path, save_overlay: Option<&Path>, registry: Option<PathBuf>) -> Result<()> {
    let scanner = open_scanner(registry)?;
    let source = ImageSequenceSource::open(frames)
        .with_context(|| format!("Failed to open frame source {}", frames.display()))?;

    let (live, outcome) = match save_overlay {
        Some(dir) => {
            let mut sink = DirectorySink::create(dir)
                .with_context(|| format!("Failed to create overlay directory {}", dir.display()))?;
            let result = scanner.scan_live_verified(source, &mut sink);
            println!("Wrote {} overlay frames to {}", sink.written(), dir.display());
            result
        }
        None => scanner.scan_live_verified(source, &mut |_: &Frame| {}),
    };

    match &live.stop {
        LiveStop::Decoded => println!("Decoded on frame {}", live.frames),
        LiveStop::Exhausted => println!("No code found in {} frames", live.frames),
        LiveStop::DeviceFailure(err) => {
            bail!("Frame source failed after {} frames: {}", live.frames, err)
        }
    }
    print_outcome(&outcome);
    Ok(())
}

fn batch_cmd(root: &Path, limit: Option<usize>, registry: Option<PathBuf>) -> Result<()> {
    if !root.is_dir() {
        bail!("Image root not found: {}", root.display());
    }
    let scanner = open_scanner(registry)?;
    let paths: Vec<PathBuf> = dataset_iter(root, limit).collect();
    if paths.is_empty() {
        println!("No images found under {}", root.display());
        return Ok(());
    }

    let start = Instant::now();
    let items = scanner.scan_batch(&paths);
    let elapsed = start.elapsed();

    let mut authorized = 0usize;
    let mut counterfeit = 0usize;
    let mut failed = 0usize;
    for item in &items {
        match &item.outcome {
            Ok(outcome) => {
                match outcome {
                    ScanOutcome::Authorized(_) => authorized += 1,
                    ScanOutcome::Counterfeit(_) => counterfeit += 1,
                    _ => {}
                }
                println!("{}: {}", item.path.display(), outcome.headline());
            }
            Err(err) => {
                failed += 1;
                println!("{}: load_failed ({})", item.path.display(), err);
            }
        }
    }

    println!("\n=====================================");
    println!(
        "Scanned {} images in {:.2?}: {} authorized, {} counterfeit, {} unreadable",
        items.len(),
        elapsed,
        authorized,
        counterfeit,
        failed
    );
    Ok(())
}
