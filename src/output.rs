//! CLI output for a finished build.
//!
//! One line per page, chapters numbered by their position in reading order:
//!
//! ```text
//! Home → index.html
//! 001 1 (24 images) → pages/1.html
//! 002 2 (0 images) → pages/2.html
//! 003 2.5 (18 images) → FAILED: template error: ...
//!
//! Generated 2 of 3 chapter pages
//! ```
//!
//! [`format_build_output`] is pure so it can be tested; [`print_build_output`]
//! writes its lines to stdout.

use crate::generate::{RenderError, error_chain};
use crate::pipeline::BuildReport;
use std::path::{Path, PathBuf};

/// Format a 1-based position as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Where a page went, relative to the content root.
fn page_target(root: &Path, page: &Result<PathBuf, RenderError>) -> String {
    match page {
        Ok(path) => path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/"),
        Err(e) => format!("FAILED: {}", error_chain(e)),
    }
}

pub fn format_build_output(report: &BuildReport, root: &Path) -> Vec<String> {
    let mut lines = vec![format!("Home → {}", page_target(root, &report.index))];

    for (i, chapter) in report.chapters.iter().enumerate() {
        lines.push(format!(
            "{} {} ({}) → {}",
            format_index(i + 1),
            chapter.name,
            plural(chapter.image_count, "image", "images"),
            page_target(root, &chapter.page)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} of {} chapter pages",
        report.generated_chapters(),
        report.chapters.len()
    ));
    lines
}

pub fn print_build_output(report: &BuildReport, root: &Path) {
    for line in format_build_output(report, root) {
        println!("{}", line);
    }
}
