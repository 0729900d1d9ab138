//! Page rendering.
//!
//! Turns [`IndexPage`] and [`ChapterPage`] records into HTML files under the
//! content root.
//!
//! ## Output Structure
//!
//! ```text
//! manga/
//! ├── index.html          # Chapter list
//! ├── pages/
//! │   ├── 1.html          # Chapter viewer, images loaded from ../1/
//! │   └── 2.html
//! ├── 1/
//! │   └── 001.jpg         # Source images, referenced in place
//! └── 2/
//! ```
//!
//! ## Template Sets
//!
//! - [`Templates::Builtin`]: [maud](https://maud.lambda.xyz/) markup compiled
//!   into the binary, with CSS and the keyboard navigation script embedded
//!   from `static/`.
//! - [`Templates::Directory`]: `index.html` and `page.html` Tera templates read
//!   from disk on every render, so one broken template only fails the pages
//!   that use it.
//!
//! Both escape interpolated text. Pages are rendered to a string before the
//! output file is touched, so a failed render never leaves a partial file.

use crate::types::{ChapterPage, IndexPage};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/nav.js");

/// Template file names looked up by [`Templates::Directory`].
pub const INDEX_TEMPLATE: &str = "index.html";
pub const PAGE_TEMPLATE: &str = "page.html";

/// Directory that chapter pages are written to, relative to the root.
pub const PAGES_DIR: &str = "pages";

/// Bytes escaped in a URL path segment. Non-ASCII is always escaped.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Which templates pages are rendered with.
#[derive(Debug, Clone, Default)]
pub enum Templates {
    #[default]
    Builtin,
    Directory(PathBuf),
}

impl Templates {
    pub fn render_index(&self, page: &IndexPage) -> Result<String, RenderError> {
        match self {
            Templates::Builtin => Ok(render_index(page).into_string()),
            Templates::Directory(dir) => render_file(dir, INDEX_TEMPLATE, page),
        }
    }

    pub fn render_chapter(&self, page: &ChapterPage) -> Result<String, RenderError> {
        match self {
            Templates::Builtin => Ok(render_chapter(page).into_string()),
            Templates::Directory(dir) => render_file(dir, PAGE_TEMPLATE, page),
        }
    }
}

/// Path of the chapter page for `chapter` under `root`.
pub fn chapter_page_path(root: &Path, chapter: &str) -> PathBuf {
    root.join(PAGES_DIR).join(format!("{chapter}.html"))
}

/// Render and write `<root>/index.html`.
///
/// Failures are logged and returned; nothing else is undone.
pub fn write_index(
    root: &Path,
    templates: &Templates,
    page: &IndexPage,
) -> Result<PathBuf, RenderError> {
    let path = root.join("index.html");
    let result = templates
        .render_index(page)
        .and_then(|html| write_page(&path, html));
    log_outcome(&path, &result);
    result
}

/// Render and write `<root>/pages/<chapter>.html`.
///
/// `<root>/pages` must already exist.
pub fn write_chapter(
    root: &Path,
    templates: &Templates,
    page: &ChapterPage,
) -> Result<PathBuf, RenderError> {
    let path = chapter_page_path(root, &page.title);
    let result = templates
        .render_chapter(page)
        .and_then(|html| write_page(&path, html));
    log_outcome(&path, &result);
    result
}

fn write_page(path: &Path, html: String) -> Result<PathBuf, RenderError> {
    fs::write(path, html).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

fn log_outcome(path: &Path, result: &Result<PathBuf, RenderError>) {
    match result {
        Ok(_) => tracing::info!(page = %path.display(), "generated page"),
        Err(e) => tracing::error!(page = %path.display(), error = %error_chain(e), "failed to generate page"),
    }
}

/// `Display` of an error followed by its sources. Tera keeps the useful part
/// of parse errors (line, column) in the source chain.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn render_file(dir: &Path, name: &str, data: &impl Serialize) -> Result<String, RenderError> {
    let mut tera = Tera::default();
    tera.add_template_file(dir.join(name), Some(name))?;
    let context = tera::Context::from_serialize(data)?;
    Ok(tera.render(name, &context)?)
}

// ============================================================================
// Built-in templates
// ============================================================================

/// A chapter or image name as one relative URL segment: `Ch #1` → `Ch%20%231`.
fn url_segment(name: &str) -> String {
    utf8_percent_encode(name, PATH_SEGMENT).to_string()
}

fn base_document(title: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

fn render_index(page: &IndexPage) -> Markup {
    let content = html! {
        header.site-header {
            h1 { (page.title) }
        }
        main.index-page {
            @if page.chapters.is_empty() {
                p.empty { "No chapters yet." }
            } @else {
                ol.chapter-list {
                    @for chapter in &page.chapters {
                        li {
                            a href={ (PAGES_DIR) "/" (url_segment(chapter)) ".html" } { (chapter) }
                        }
                    }
                }
            }
        }
    };

    base_document(&page.title, None, content)
}

/// Prev/index/next bar. Edge links that point back at the current chapter
/// are left out.
fn chapter_nav(page: &ChapterPage) -> Markup {
    html! {
        nav.chapter-nav {
            @if !page.is_first() {
                a.prev rel="prev" href={ (url_segment(&page.previous_chapter)) ".html" } { "‹ " (page.previous_chapter) }
            }
            a.home href="../index.html" { "Index" }
            @if !page.is_last() {
                a.next rel="next" href={ (url_segment(&page.next_chapter)) ".html" } { (page.next_chapter) " ›" }
            }
        }
    }
}

fn render_chapter(page: &ChapterPage) -> Markup {
    let content = html! {
        header.site-header {
            h1 { (page.title) }
        }
        (chapter_nav(page))
        main.chapter-page {
            @for (idx, image) in page.images.iter().enumerate() {
                img src={ "../" (url_segment(&page.title)) "/" (url_segment(image)) } alt={ (page.title) " - " (idx + 1) } loading="lazy";
            }
        }
        (chapter_nav(page))
        script { (PreEscaped(JS)) }
    };

    base_document(&page.title, Some("chapter-view"), content)
}
