//! The build: guards, discovery, ordering, rendering.
//!
//! ```text
//! root exists? ─ pages/ absent? ─ index.html absent?     guards, nothing written
//!        │
//! discover chapters → order them → mkdir pages/
//!        │
//! index.html → for each chapter: discover images → pages/<chapter>.html
//! ```
//!
//! A guard failure or an unreadable root stops the build before anything is
//! written. Once `pages/` exists, every page is attempted: a failed page is
//! logged and recorded in the [`BuildReport`], and the build moves on.

use crate::generate::{self, PAGES_DIR, RenderError, Templates};
use crate::ordering::{ChapterOrdering, LengthThenLexical};
use crate::probe;
use crate::scan::{self, ScanError};
use crate::types::{ChapterPage, IndexPage, chapter_links};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Data folder doesn't exist: {}", .0.display())]
    MissingRoot(PathBuf),
    #[error("pages folder already exists: {}", .0.display())]
    PagesExists(PathBuf),
    #[error("index.html file already exists: {}", .0.display())]
    IndexExists(PathBuf),
    #[error("Cannot list chapters: {0}")]
    Scan(#[from] ScanError),
    #[error("Create pages folder error: {}: {source}", path.display())]
    CreatePages {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// How pages are rendered and chapters ordered.
pub struct BuildOptions {
    pub templates: Templates,
    pub ordering: Box<dyn ChapterOrdering>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            templates: Templates::Builtin,
            ordering: Box::new(LengthThenLexical),
        }
    }
}

/// What one build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub index: Result<PathBuf, RenderError>,
    /// One entry per chapter, in chapter order.
    pub chapters: Vec<ChapterOutcome>,
}

#[derive(Debug)]
pub struct ChapterOutcome {
    pub name: String,
    pub image_count: usize,
    pub page: Result<PathBuf, RenderError>,
}

impl BuildReport {
    /// Number of pages (index included) that failed.
    pub fn failures(&self) -> usize {
        usize::from(self.index.is_err()) + self.chapters.iter().filter(|c| c.page.is_err()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.failures() == 0
    }

    pub fn generated_chapters(&self) -> usize {
        self.chapters.iter().filter(|c| c.page.is_ok()).count()
    }
}

/// Refuse to run when the root is missing or output already exists.
///
/// An ambiguous stat counts as existing: a root we cannot stat is attempted,
/// output we cannot stat blocks the build.
pub fn check_preconditions(root: &Path) -> Result<(), BuildError> {
    if !probe::exists(root) {
        return Err(BuildError::MissingRoot(root.to_path_buf()));
    }
    let pages = root.join(PAGES_DIR);
    if probe::exists(&pages) {
        return Err(BuildError::PagesExists(pages));
    }
    let index = root.join("index.html");
    if probe::exists(&index) {
        return Err(BuildError::IndexExists(index));
    }
    Ok(())
}

/// Chapters under `root`, sorted with `ordering`.
pub fn ordered_chapters(
    root: &Path,
    ordering: &dyn ChapterOrdering,
) -> Result<Vec<String>, ScanError> {
    let mut chapters = scan::discover_chapters(root)?;
    ordering.sort(&mut chapters);
    Ok(chapters)
}

/// Build the site for `root` in place.
pub fn build(root: &Path, options: &BuildOptions) -> Result<BuildReport, BuildError> {
    check_preconditions(root)?;

    // Listed before pages/ is created so it never shows up as a chapter.
    let chapters = ordered_chapters(root, options.ordering.as_ref())?;

    let pages_dir = root.join(PAGES_DIR);
    fs::create_dir(&pages_dir).map_err(|source| BuildError::CreatePages {
        path: pages_dir.clone(),
        source,
    })?;

    let index = generate::write_index(root, &options.templates, &IndexPage::new(&chapters));

    let chapters = chapter_links(&chapters)
        .into_iter()
        .map(|links| {
            let images = scan::discover_images(&root.join(links.chapter)).unwrap_or_else(|e| {
                tracing::warn!(chapter = links.chapter, error = %e, "cannot list images, rendering an empty chapter");
                Vec::new()
            });
            let image_count = images.len();
            let page = ChapterPage::new(&links, images);
            ChapterOutcome {
                name: page.title.clone(),
                image_count,
                page: generate::write_chapter(root, &options.templates, &page),
            }
        })
        .collect();

    Ok(BuildReport { index, chapters })
}
