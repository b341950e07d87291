//! Reusable matcher: preprocess a pattern once, search many texts.

use crate::error::KmpError;
use crate::failure::{build_failure_function, FailureFunction};
use crate::search::{MatchSet, Matches};
use tracing::debug;

/// A pattern bundled with its failure function.
///
/// Nothing is mutated after construction, so a matcher can be shared
/// freely between threads.
///
/// ```
/// use kmp_search::KmpMatcher;
///
/// let matcher: KmpMatcher = KmpMatcher::new("world").unwrap();
/// assert_eq!(matcher.search_first(b"hello world"), Some(6));
/// assert!(!matcher.contains(b"goodbye"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmpMatcher<T = u8> {
    pattern: Vec<T>,
    failure: FailureFunction,
}

impl<T: PartialEq> KmpMatcher<T> {
    pub fn new(pattern: impl Into<Vec<T>>) -> Result<Self, KmpError> {
        let pattern = pattern.into();
        let failure = build_failure_function(&pattern)?;
        debug!(pattern_len = pattern.len(), failure = %failure, "built KMP matcher");
        Ok(KmpMatcher { pattern, failure })
    }

    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    pub fn failure_function(&self) -> &FailureFunction {
        &self.failure
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always false: `new` rejects empty patterns.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn find_iter<'a>(&'a self, text: &'a [T]) -> Matches<'a, T> {
        Matches::new(text, &self.pattern, &self.failure)
    }

    pub fn search_all(&self, text: &[T]) -> MatchSet {
        self.find_iter(text).collect()
    }

    pub fn search_first(&self, text: &[T]) -> Option<usize> {
        self.find_iter(text).next()
    }

    pub fn contains(&self, text: &[T]) -> bool {
        self.search_first(text).is_some()
    }

    pub fn count(&self, text: &[T]) -> usize {
        self.find_iter(text).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_matcher_search() {
        let matcher: KmpMatcher = KmpMatcher::new("ABABCAB").unwrap();
        let matches = matcher.search_all(b"ABABDABACDABABCABCABCABCABC");
        assert_eq!(matches.positions(), &[10]);
        assert_eq!(matcher.search_first(b"ABABDABACDABABCABCABCABCABC"), Some(10));
    }

    #[test]
    fn test_matcher_accessors() {
        let matcher: KmpMatcher = KmpMatcher::new("ana").unwrap();
        assert_eq!(matcher.pattern(), b"ana");
        assert_eq!(matcher.failure_function().as_slice(), &[0, 0, 1]);
        assert_eq!(matcher.len(), 3);
        assert!(!matcher.is_empty());
    }

    #[test]
    fn test_matcher_reused_across_texts() {
        let matcher: KmpMatcher = KmpMatcher::new("AB").unwrap();
        assert_eq!(matcher.search_all(b"ABABAB").positions(), &[0, 2, 4]);
        assert_eq!(matcher.search_all(b"xxAB").positions(), &[2]);
        assert!(matcher.search_all(b"").is_empty());
        assert_eq!(matcher.count(b"ABAB"), 2);
    }

    #[test]
    fn test_matcher_contains() {
        let matcher: KmpMatcher = KmpMatcher::new("hello").unwrap();
        for (text, expected) in [("hello world", true), ("goodbye world", false), ("hello there", true)] {
            assert_eq!(matcher.contains(text.as_bytes()), expected, "{text}");
        }
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        assert_eq!(KmpMatcher::<u8>::new(""), Err(KmpError::EmptyPattern));
        assert_eq!(KmpMatcher::<char>::new(Vec::new()), Err(KmpError::EmptyPattern));
    }

    #[test]
    fn test_char_matcher() {
        let matcher = KmpMatcher::new("ana".chars().collect::<Vec<char>>()).unwrap();
        let text: Vec<char> = "banana".chars().collect();
        assert_eq!(matcher.search_all(&text).positions(), &[1, 3]);
    }

    #[test]
    fn test_shared_between_threads() {
        let matcher: KmpMatcher = KmpMatcher::new("AA").unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| matcher.search_all(b"AAAAA")))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().positions(), &[0, 1, 2, 3]);
            }
        });
    }

    proptest! {
        #[test]
        fn test_search_is_idempotent(
            text in prop::collection::vec(0u8..3, 0..50),
            pattern in prop::collection::vec(0u8..3, 1..5),
        ) {
            let matcher = KmpMatcher::new(pattern).unwrap();
            let before = matcher.failure_function().clone();
            let first = matcher.search_all(&text);
            let second = matcher.search_all(&text);
            prop_assert_eq!(first, second);
            prop_assert_eq!(matcher.failure_function(), &before);
        }
    }
}
