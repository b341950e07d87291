//! Single-shot KMP search.
//!
//! Every entry point funnels into [`Matches`], a lazy scan over the text.
//! `search_all` collects it, `search_first` stops at its first item.

use crate::error::KmpError;
use crate::failure::{build_failure_function, FailureFunction};
use crate::format::format_failure_function;
use serde::Serialize;
use std::fmt;
use tracing::trace;

// =============================================================================
// MatchSet
// =============================================================================

/// Start offsets of every occurrence, strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchSet {
    positions: Vec<usize>,
}

impl MatchSet {
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn first(&self) -> Option<usize> {
        self.positions.first().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.positions.iter()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.positions
    }
}

impl FromIterator<usize> for MatchSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        MatchSet {
            positions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MatchSet {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

impl fmt::Display for MatchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_failure_function(&self.positions))
    }
}

// =============================================================================
// Matches: the scan itself
// =============================================================================

/// Lazy iterator over match offsets.
///
/// Holds the `(i, j)` cursors, so each search owns its own state and the
/// pattern and failure function are only borrowed.
#[derive(Debug, Clone)]
pub struct Matches<'a, T> {
    text: &'a [T],
    pattern: &'a [T],
    failure: &'a [usize],
    i: usize,
    j: usize,
}

impl<'a, T: PartialEq> Matches<'a, T> {
    pub(crate) fn new(text: &'a [T], pattern: &'a [T], failure: &'a FailureFunction) -> Self {
        // m > n can never match; start exhausted
        let i = if pattern.len() > text.len() { text.len() } else { 0 };
        Matches {
            text,
            pattern,
            failure: failure.as_slice(),
            i,
            j: 0,
        }
    }
}

impl<T: PartialEq> Iterator for Matches<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let n = self.text.len();
        let m = self.pattern.len();

        while self.i < n {
            if self.pattern[self.j] == self.text[self.i] {
                self.i += 1;
                self.j += 1;
            }

            if self.j == m {
                let start = self.i - self.j;
                // keep the border so overlapping occurrences are found
                self.j = self.failure[self.j - 1];
                return Some(start);
            } else if self.i < n && self.pattern[self.j] != self.text[self.i] {
                if self.j != 0 {
                    self.j = self.failure[self.j - 1];
                } else {
                    self.i += 1;
                }
            }
        }

        None
    }
}

impl<T: PartialEq> std::iter::FusedIterator for Matches<'_, T> {}

// =============================================================================
// Free functions
// =============================================================================

fn check_failure<T>(pattern: &[T], failure: &FailureFunction) -> Result<(), KmpError> {
    if pattern.is_empty() {
        return Err(KmpError::EmptyPattern);
    }
    if failure.len() != pattern.len() {
        return Err(KmpError::length_mismatch(pattern.len(), failure.len()));
    }
    Ok(())
}

/// All (possibly overlapping) occurrences of `pattern` in `text`.
///
/// Empty text, or a pattern longer than the text, gives an empty set.
/// An empty pattern is an error.
pub fn search_all<T: PartialEq>(text: &[T], pattern: &[T]) -> Result<MatchSet, KmpError> {
    let failure = build_failure_function(pattern)?;
    search_all_with(text, pattern, &failure)
}

/// [`search_all`] with a failure function built earlier for `pattern`.
///
/// `failure` must come from [`build_failure_function`] on this same pattern
/// (or one with the same prefix/suffix structure). Only the length is
/// checked; a failure function of another pattern with equal length is not
/// detected and gives wrong offsets.
pub fn search_all_with<T: PartialEq>(
    text: &[T],
    pattern: &[T],
    failure: &FailureFunction,
) -> Result<MatchSet, KmpError> {
    check_failure(pattern, failure)?;
    let matches: MatchSet = Matches::new(text, pattern, failure).collect();
    trace!(
        text_len = text.len(),
        pattern_len = pattern.len(),
        found = matches.len(),
        "search_all"
    );
    Ok(matches)
}

/// Offset of the first occurrence, or `None` when there is none.
///
/// ```
/// use kmp_search::search_first;
///
/// assert_eq!(search_first(b"hello world", b"world").unwrap(), Some(6));
/// assert_eq!(search_first(b"hello world", b"xyz").unwrap(), None);
/// ```
pub fn search_first<T: PartialEq>(text: &[T], pattern: &[T]) -> Result<Option<usize>, KmpError> {
    let failure = build_failure_function(pattern)?;
    search_first_with(text, pattern, &failure)
}

/// [`search_first`] with a precomputed failure function; same contract as
/// [`search_all_with`].
pub fn search_first_with<T: PartialEq>(
    text: &[T],
    pattern: &[T],
    failure: &FailureFunction,
) -> Result<Option<usize>, KmpError> {
    check_failure(pattern, failure)?;
    let first = Matches::new(text, pattern, failure).next();
    trace!(
        text_len = text.len(),
        pattern_len = pattern.len(),
        ?first,
        "search_first"
    );
    Ok(first)
}

pub fn contains<T: PartialEq>(text: &[T], pattern: &[T]) -> Result<bool, KmpError> {
    Ok(search_first(text, pattern)?.is_some())
}

/// ASCII case-insensitive [`search_all`].
///
/// Folding keeps byte lengths, so offsets point into the original text.
pub fn search_all_ignore_ascii_case(text: &[u8], pattern: &[u8]) -> Result<MatchSet, KmpError> {
    let text = text.to_ascii_lowercase();
    let pattern = pattern.to_ascii_lowercase();
    search_all(&text, &pattern)
}

// =============================================================================
// Tests
// =============================================================================
