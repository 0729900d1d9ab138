//! # Manga Builder
//!
//! Turns a folder of manga chapters into a static reading site. The folder is
//! the data source: each subdirectory is a chapter, each `.png`/`.jpg` inside
//! it a page. The site is written next to the content, into the same folder.
//!
//! # Pipeline
//!
//! ```text
//! guards   →  root exists, pages/ and index.html do not
//! scan     →  chapter directories                       (scan)
//! order    →  shortest name first, then byte order     (ordering)
//! render   →  index.html, pages/<chapter>.html          (generate)
//! ```
//!
//! A build runs once per content folder. Existing output is never replaced:
//! delete `pages/` and `index.html` to rebuild.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pipeline`] | Guards, chapter loop, and the [`pipeline::BuildReport`] |
//! | [`probe`] | Path existence checks that keep "not found" apart from other stat errors |
//! | [`scan`] | Chapter and image discovery |
//! | [`ordering`] | Chapter ordering strategies |
//! | [`types`] | Template data records and prev/next linking |
//! | [`generate`] | Built-in Maud templates, Tera directory templates, page writing |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Length-first chapter order
//!
//! Chapter folders are usually bare numbers. Sorting shorter names first puts
//! `9` before `10` without parsing numbers, and it is the order existing sites
//! were published with. See [`ordering`].
//!
//! ## Self-linking edges
//!
//! The first chapter's previous link and the last chapter's next link point
//! at the chapter itself rather than being absent, so every template always
//! gets all three names. The built-in templates hide those links.
//!
//! ## Partial output over aborting
//!
//! Once the `pages/` directory is created, a page that fails to render is
//! logged and skipped. The remaining chapters are still written.

pub mod generate;
pub mod ordering;
pub mod output;
pub mod pipeline;
pub mod probe;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
