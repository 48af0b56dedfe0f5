//! High-level, ergonomic library API: pad a whole directory of PNGs or a
//! single file, with a typed batch report. Prefer these entrypoints over the
//! low-level processing module when integrating TEXPAD.
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::params::PadParams;
use crate::core::processing::{even_dimensions, pad_to_even};
use crate::error::{Error, Result};
use crate::types::FileOutcome;

/// Result of a directory run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Files written to the output subdirectory
    pub saved: usize,
    /// Files that failed to decode and were skipped
    pub skipped: usize,
}

/// Non-recursive listing of the names in `dir` ending in a case-insensitive
/// `.png`, lexicographically sorted for reproducible processing order.
pub fn list_png_files(dir: &Path) -> Result<Vec<OsString>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().to_lowercase().ends_with(".png") {
            files.push(name);
        }
    }
    files.sort();
    Ok(files)
}

/// Pad every PNG in `target_dir` to even dimensions, writing results under
/// `target_dir/<subdir>` with their original filenames. Source files are
/// never modified; existing output files are overwritten.
///
/// Fails fast with [`Error::NotADirectory`] before touching any file if
/// `target_dir` does not name a directory. Files that fail to decode are
/// skipped and counted in the report, never raised. When the directory holds
/// no PNGs the output subdirectory is not created.
pub fn pad_directory(target_dir: &Path, params: &PadParams) -> Result<BatchReport> {
    if !target_dir.is_dir() {
        return Err(Error::NotADirectory {
            path: target_dir.to_path_buf(),
        });
    }

    let mut report = BatchReport::default();

    let files = list_png_files(target_dir)?;
    if files.is_empty() {
        return Ok(report);
    }

    let out_dir = target_dir.join(&params.subdir);
    fs::create_dir_all(&out_dir)?;

    for name in &files {
        let src = target_dir.join(name);
        match process_file(&src, &out_dir)? {
            FileOutcome::Saved => report.saved += 1,
            FileOutcome::Skipped => report.skipped += 1,
        }
    }

    info!(
        "Directory complete: saved={} skipped={}",
        report.saved, report.skipped
    );
    Ok(report)
}

/// Pad a single PNG file into a `<subdir>` next to it. Returns
/// [`FileOutcome::Skipped`] when the file does not decode as an image.
pub fn pad_file(src: &Path, params: &PadParams) -> Result<FileOutcome> {
    let parent = src.parent().unwrap_or_else(|| Path::new("."));
    let out_dir = parent.join(&params.subdir);
    fs::create_dir_all(&out_dir)?;
    process_file(src, &out_dir)
}

fn process_file(src: &Path, out_dir: &Path) -> Result<FileOutcome> {
    let image = match image::open(src) {
        Ok(image) => image,
        Err(e) => {
            warn!("Skipping unreadable image {:?}: {}", src, e);
            return Ok(FileOutcome::Skipped);
        }
    };

    let name = src.file_name().unwrap();
    let out_path = out_dir.join(name);

    let (w, h) = (image.width(), image.height());
    if even_dimensions(w, h) == (w, h) {
        // Already even: copy the source bytes untouched instead of
        // re-encoding, so the output stays byte-identical to the input.
        fs::copy(src, &out_path)?;
    } else {
        pad_to_even(image).save(&out_path)?;
    }

    info!("Saved: {:?}", out_path);
    Ok(FileOutcome::Saved)
}
