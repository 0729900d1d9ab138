//! Chapter and image discovery.
//!
//! The content root is read exactly one level deep for chapters, and each
//! chapter exactly one level deep for images:
//!
//! ```text
//! manga/                  # Root
//! ├── 1/                  # Chapter "1"
//! │   ├── 001.jpg
//! │   ├── 002.png
//! │   └── notes.txt       # ignored (extension)
//! ├── 2/
//! │   ├── 001.jpg
//! │   └── extras/         # ignored (directory, not scanned)
//! └── cover.jpg           # ignored (file at root)
//! ```
//!
//! ## Image extensions
//!
//! Only names ending in the exact suffixes `.png` and `.jpg` count. The match
//! is case-sensitive: `001.PNG` and `001.jpeg` are skipped.
//!
//! ## Errors
//!
//! A directory that cannot be read is an error, not an empty listing. The
//! caller decides whether that stops the build.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read entry in {}: {source}", path.display())]
    Entry {
        path: PathBuf,
        source: std::io::Error,
    },
}

const IMAGE_SUFFIXES: &[&str] = &[".png", ".jpg"];

/// Names of the immediate subdirectories of `root`, in listing order.
///
/// Symlinks are not followed, so a link to a directory is not a chapter.
pub fn discover_chapters(root: &Path) -> Result<Vec<String>, ScanError> {
    let chapters: Vec<String> = list_entries(root)?
        .into_iter()
        .filter(|(_, is_dir)| *is_dir)
        .map(|(name, _)| name)
        .collect();
    tracing::debug!(root = %root.display(), count = chapters.len(), "discovered chapters");
    Ok(chapters)
}

/// Image filenames directly inside `chapter_dir`, sorted byte-wise.
pub fn discover_images(chapter_dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut images: Vec<String> = list_entries(chapter_dir)?
        .into_iter()
        .filter(|(name, is_dir)| !is_dir && is_image(name))
        .map(|(name, _)| name)
        .collect();
    images.sort();
    tracing::debug!(chapter = %chapter_dir.display(), count = images.len(), "discovered images");
    Ok(images)
}

fn is_image(name: &str) -> bool {
    IMAGE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// `(name, is_dir)` for every entry of `dir`. Non-UTF-8 names are skipped.
fn list_entries(dir: &Path) -> Result<Vec<(String, bool)>, ScanError> {
    let read_dir = fs::read_dir(dir).map_err(|source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| ScanError::Entry {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| ScanError::Entry {
            path: entry.path(),
            source,
        })?;
        match entry.file_name().into_string() {
            Ok(name) => entries.push((name, file_type.is_dir())),
            Err(raw) => {
                tracing::warn!(dir = %dir.display(), name = ?raw, "skipping entry with non UTF-8 name");
            }
        }
    }
    Ok(entries)
}
