use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use geo_ingest::gazetteer::Gazetteer;
use geo_ingest::pipeline::{self, IngestOutcome};

/// Photo extensions with containers the EXIF reader understands.
const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "tif", "tiff", "heic", "heif"];

#[derive(Parser, Debug)]
#[command(
    name = "geo-ingest",
    version,
    about = "Extract GPS from photos (sidecar JSON or EXIF), assign the nearest neighborhood, and emit privacy-jittered coordinates"
)]
struct Cli {
    /// Photo files or directories to process
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Room/category label attached to every outcome
    #[arg(short, long, value_name = "LABEL", default_value = "general_renovation")]
    room_type: String,

    /// Path to a gazetteer JSON file (default: built-in Ottawa table)
    #[arg(short, long, value_name = "FILE")]
    gazetteer: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if cli.paths.is_empty() {
        anyhow::bail!("No input files or directories specified. Use --help for usage.");
    }

    let photos = collect_photos(&cli.paths);
    if photos.is_empty() {
        anyhow::bail!("No supported photo files found in the specified paths.");
    }

    // Loaded once, read-only for the rest of the run.
    let gazetteer = Gazetteer::load(cli.gazetteer.as_deref())?;
    log::info!(
        "Found {} photo(s) to process ({} gazetteer entries)",
        photos.len(),
        gazetteer.entries().len()
    );

    let mut results: Vec<(PathBuf, Result<IngestOutcome, String>)> = Vec::new();
    let total = photos.len();

    for (i, photo_path) in photos.iter().enumerate() {
        log::info!("[{}/{}] Processing: {}", i + 1, total, photo_path.display());

        let photo_bytes = match std::fs::read(photo_path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("  Failed to read file: {e}");
                results.push((photo_path.clone(), Err(format!("Failed to read file: {e}"))));
                continue;
            }
        };

        let sidecar = read_sidecar(photo_path);
        if sidecar.is_some() {
            log::debug!("  Found sidecar for {}", photo_path.display());
        }

        match pipeline::ingest(&gazetteer, &photo_bytes, sidecar.as_deref(), &cli.room_type) {
            Ok(outcome) => {
                log::info!(
                    "  {} → ({:.5}, {:.5}) via {}",
                    outcome.matched_area,
                    outcome.public_coordinate.latitude,
                    outcome.public_coordinate.longitude,
                    outcome.source
                );
                results.push((photo_path.clone(), Ok(outcome)));
            }
            Err(e) => {
                log::error!("  {e}");
                results.push((photo_path.clone(), Err(e.to_string())));
            }
        }
    }

    // JSON output
    if cli.json {
        let json_results: Vec<serde_json::Value> = results
            .iter()
            .map(|(path, result)| match result {
                Ok(outcome) => serde_json::json!({
                    "path": path.display().to_string(),
                    "outcome": outcome,
                    "error": null,
                }),
                Err(e) => serde_json::json!({
                    "path": path.display().to_string(),
                    "outcome": null,
                    "error": e,
                }),
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&json_results)?);
    }

    // Summary
    let success = results.iter().filter(|(_, r)| r.is_ok()).count();
    let failed = total - success;
    log::info!("Done: {success} succeeded, {failed} failed out of {total} photos");

    Ok(())
}

/// Collect supported photo files from the given paths. Directories are
/// walked recursively, following symlinks.
fn collect_photos(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut photos = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_supported_photo(path) {
                photos.push(path.clone());
            } else {
                log::warn!("Skipping unsupported file: {}", path.display());
            }
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let p = entry.path();
                if p.is_file() && is_supported_photo(p) {
                    photos.push(p.to_path_buf());
                }
            }
        } else {
            log::warn!("Path does not exist: {}", path.display());
        }
    }

    photos
}

/// Check if a file has a supported photo extension.
fn is_supported_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| PHOTO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Look for a Takeout-style sidecar next to the photo: `photo.jpg.json`
/// first (the export convention), then `photo.json`.
fn read_sidecar(photo_path: &Path) -> Option<String> {
    let mut appended = photo_path.as_os_str().to_os_string();
    appended.push(".json");

    for candidate in [PathBuf::from(appended), photo_path.with_extension("json")] {
        if candidate.is_file() {
            match std::fs::read_to_string(&candidate) {
                Ok(text) => return Some(text),
                Err(e) => log::warn!("Failed to read sidecar {}: {e}", candidate.display()),
            }
        }
    }

    None
}
