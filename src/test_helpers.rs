//! Shared test utilities: content roots built in temp directories.
//!
//! ```rust
//! let tmp = content_root(&[("1", &["001.jpg"]), ("2", &[])]);
//! let report = build(tmp.path(), &BuildOptions::default()).unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create `root/<name>/` holding one fake file per entry of `files`.
pub fn add_chapter(root: &Path, name: &str, files: &[&str]) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    for file in files {
        fs::write(dir.join(file), "fake image").unwrap();
    }
    dir
}

/// A temp content root with the given chapters.
pub fn content_root(chapters: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, files) in chapters {
        add_chapter(tmp.path(), name, files);
    }
    tmp
}

/// A temp directory holding Tera `index.html` and `page.html` templates.
pub fn template_dir(index: &str, page: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("index.html"), index).unwrap();
    fs::write(tmp.path().join("page.html"), page).unwrap();
    tmp
}

/// Read a generated file, panicking with the path on failure.
pub fn read_output(root: &Path, rel: &str) -> String {
    let path = root.join(rel);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

/// Sorted names of everything in `dir`.
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
