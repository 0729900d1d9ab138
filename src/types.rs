//! Data records handed to the page templates.
//!
//! Field names serialize in `PascalCase` (`Title`, `PreviousChapter`, ...)
//! because that is what directory templates refer to.

use serde::Serialize;

/// Title shown on the index page.
pub const SITE_TITLE: &str = "Phong Van";

/// Data for `index.html`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexPage {
    pub title: String,
    /// Chapter names in reading order.
    pub chapters: Vec<String>,
}

impl IndexPage {
    pub fn new(chapters: &[String]) -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            chapters: chapters.to_vec(),
        }
    }
}

/// Data for `pages/<chapter>.html`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChapterPage {
    /// The chapter name.
    pub title: String,
    pub previous_chapter: String,
    pub next_chapter: String,
    /// Image filenames in reading order.
    pub images: Vec<String>,
}

impl ChapterPage {
    pub fn new(links: &ChapterLinks<'_>, images: Vec<String>) -> Self {
        Self {
            title: links.chapter.to_string(),
            previous_chapter: links.previous.to_string(),
            next_chapter: links.next.to_string(),
            images,
        }
    }

    pub fn is_first(&self) -> bool {
        self.previous_chapter == self.title
    }

    pub fn is_last(&self) -> bool {
        self.next_chapter == self.title
    }
}

/// A chapter with its neighbours in the ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterLinks<'a> {
    pub chapter: &'a str,
    pub previous: &'a str,
    pub next: &'a str,
}

/// Pair every chapter with its neighbours.
///
/// The first chapter is its own previous and the last chapter its own next.
/// There is no wraparound.
pub fn chapter_links(chapters: &[String]) -> Vec<ChapterLinks<'_>> {
    chapters
        .iter()
        .enumerate()
        .map(|(idx, chapter)| {
            let previous = idx
                .checked_sub(1)
                .and_then(|i| chapters.get(i))
                .unwrap_or(chapter);
            let next = chapters.get(idx + 1).unwrap_or(chapter);
            ChapterLinks {
                chapter: chapter.as_str(),
                previous: previous.as_str(),
                next: next.as_str(),
            }
        })
        .collect()
}
