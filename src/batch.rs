//! Batch driving: input discovery, name bookkeeping, the per-file loop.
use crate::config::GeneratorParams;
use crate::diagnostics::RunSummary;
use crate::error::Error;
use crate::pipeline::Pipeline;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Accepted input extensions, matched literally (no case folding).
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "tiff"];

/// Whether `path` carries one of the accepted extensions.
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

/// Qualifying image files directly under `root`, sorted by file name so
/// batch order is deterministic.
pub fn discover_images(root: &Path) -> Result<Vec<PathBuf>, Error> {
    let entries = std::fs::read_dir(root).map_err(|source| Error::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Io {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && has_image_extension(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Split a file name into base name and extension at the last dot.
///
/// A name without a dot (or with nothing before it) is degenerate: the
/// whole name becomes the base name and the extension is empty, so the
/// persisted edge map ends with a bare trailing dot.
pub fn split_stem(file_name: &str) -> (String, String) {
    match file_name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base.to_string(), ext.to_string()),
        _ => (file_name.to_string(), String::new()),
    }
}

/// Process every qualifying image under `root`.
///
/// Per-output failures are recorded in the file reports and never stop the
/// run. A fatal error (undecodable input) aborts the remaining files; the
/// summary still covers everything processed up to that point.
///
/// # Errors
///
/// Returns an error only when `root` itself cannot be enumerated.
pub fn run_batch(root: &Path, params: GeneratorParams) -> Result<RunSummary, Error> {
    let files = discover_images(root)?;
    info!("{} input files under {}", files.len(), root.display());

    let pipeline = Pipeline::new(params);
    let start = Instant::now();
    let mut reports = Vec::new();
    let mut aborted = false;

    for (index, file) in files.iter().enumerate() {
        info!("processing {} ({}/{})", file.display(), index + 1, files.len());
        match pipeline.process_file(file, root) {
            Ok(report) => reports.push(report),
            Err(err) => {
                error!("aborting batch at {}: {err}", file.display());
                aborted = true;
                break;
            }
        }
    }

    Ok(RunSummary {
        files_found: files.len(),
        files_processed: reports.len(),
        aborted,
        total_ms: start.elapsed().as_secs_f64() * 1000.0,
        reports,
    })
}
