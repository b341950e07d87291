//! Failure function (LPS array) construction.
//!
//! `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
//! that is also a suffix of it. On a mismatch after `j` matched elements the
//! search resumes at `lps[j - 1]` instead of starting over.

use crate::error::KmpError;
use crate::format::format_failure_function;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FailureFunction {
    lps: Vec<usize>,
}

impl FailureFunction {
    pub fn as_slice(&self) -> &[usize] {
        &self.lps
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.lps
    }
}

impl Deref for FailureFunction {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.lps
    }
}

impl fmt::Display for FailureFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_failure_function(&self.lps))
    }
}

/// Builds the failure function for a non-empty pattern in O(m).
///
/// `len` only grows together with `i`, and every fallback strictly shrinks
/// it, so the loop runs at most `2m` times.
///
/// ```
/// use kmp_search::build_failure_function;
///
/// let lps = build_failure_function(b"ABABCABAB").unwrap();
/// assert_eq!(lps.as_slice(), &[0, 0, 1, 2, 0, 1, 2, 3, 4]);
/// ```
pub fn build_failure_function<T: PartialEq>(pattern: &[T]) -> Result<FailureFunction, KmpError> {
    if pattern.is_empty() {
        return Err(KmpError::EmptyPattern);
    }

    let m = pattern.len();
    let mut lps = vec![0; m];
    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len > 0 {
            // i stays put; retry against a shorter border
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    Ok(FailureFunction { lps })
}

// =============================================================================
// Tests
// =============================================================================
