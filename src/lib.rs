//! # Knuth-Morris-Pratt Substring Search
//!
//! Single-pattern exact substring search in O(n + m) time.
//!
//! ## Pieces
//!
//! 1. **Failure function** (`failure`)
//!    - Longest proper prefix that is also a suffix, per pattern position
//!    - Built once in O(m)
//!
//! 2. **Search** (`search`)
//!    - All occurrences, overlapping ones included
//!    - First occurrence as `Option<usize>`
//!    - Lazy `Matches` iterator underneath both
//!
//! 3. **Reusable matcher** (`matcher`)
//!    - Owns a pattern and its failure function
//!    - Search many texts without rebuilding
//!
//! 4. **Formatting, config and reports** (`format`, `config`, `report`)
//!    - What the `kmp_demo` binary prints
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --bin kmp_demo
//! cargo run --bin kmp_demo -- demos/cases.toml
//! cargo run --bin kmp_demo -- demos/cases.toml --json
//! ```
//!
//! ## Quick Example
//!
//! ```
//! use kmp_search::{search_all, KmpMatcher};
//!
//! let matches = search_all(b"AABAACAADAABAABA", b"AABA").unwrap();
//! assert_eq!(matches.positions(), &[0, 9, 12]);
//!
//! let matcher: KmpMatcher = KmpMatcher::new("ana").unwrap();
//! assert_eq!(matcher.search_all(b"banana").positions(), &[1, 3]);
//! ```

pub mod config;
pub mod error;
pub mod failure;
pub mod format;
pub mod matcher;
pub mod report;
pub mod search;

pub use config::{DemoCase, DemoConfig};
pub use error::{ConfigError, ErrorKind, KmpError};
pub use failure::{build_failure_function, FailureFunction};
pub use format::{format_failure_function, format_failure_function_bounded, format_positions};
pub use matcher::KmpMatcher;
pub use report::{failure_table, run_case, run_cases, CaseReport, FailureRow};
pub use search::{
    contains, search_all, search_all_ignore_ascii_case, search_all_with, search_first,
    search_first_with, MatchSet, Matches,
};
