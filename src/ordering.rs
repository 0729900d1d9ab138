//! Chapter ordering strategies.
//!
//! Chapter folders are usually bare numbers (`1`, `2`, ..., `10`, `11`), and a
//! plain string sort would put `10` before `9`. The default strategy,
//! [`LengthThenLexical`], sorts shorter names first and only compares bytes
//! between names of the same length:
//!
//! ```text
//! 1  2  9  10  11  100        (not 1 10 100 11 2 9)
//! ```
//!
//! This is not a numeric sort. Names of equal length still compare byte-wise,
//! so `"09"` sorts before `"10"` but `"9"` also sorts before `"09"`, and
//! `"6.5"` lands after `"10"`. Sites already published with this order depend
//! on it, so other strategies must be opt-in through [`ChapterOrdering`].

use std::cmp::Ordering;

/// A total order over chapter names.
pub trait ChapterOrdering {
    fn compare(&self, a: &str, b: &str) -> Ordering;

    /// Sort `chapters` in place. The sort is stable.
    fn sort(&self, chapters: &mut [String]) {
        chapters.sort_by(|a, b| self.compare(a, b));
    }
}

/// Shorter names first, byte-wise lexicographic among equal lengths.
///
/// Length is measured in bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct LengthThenLexical;

impl ChapterOrdering for LengthThenLexical {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

/// Sort with the default strategy.
pub fn sort_chapters(chapters: &mut [String]) {
    LengthThenLexical.sort(chapters);
}
