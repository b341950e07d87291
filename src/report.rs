//! Running demo cases and rendering what they found.

use crate::config::DemoCase;
use crate::error::KmpError;
use crate::failure::{build_failure_function, FailureFunction};
use crate::format::{format_failure_function_bounded, format_positions};
use crate::matcher::KmpMatcher;
use crate::search::{search_all_ignore_ascii_case, MatchSet};
use colored::Colorize;
use serde::Serialize;
use tracing::{debug, info};

// =============================================================================
// Case reports
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub text: String,
    pub pattern: String,
    pub ignore_case: bool,
    pub failure_function: FailureFunction,
    pub matches: MatchSet,
    pub first: Option<usize>,
}

/// Runs one case: a [`KmpMatcher`] for exact cases,
/// [`search_all_ignore_ascii_case`] for `ignore_case` ones.
pub fn run_case(case: &DemoCase) -> Result<CaseReport, KmpError> {
    let (failure_function, matches, first) = if case.ignore_case {
        let matches = search_all_ignore_ascii_case(case.text.as_bytes(), case.pattern.as_bytes())?;
        let failure_function = build_failure_function(&case.pattern.as_bytes().to_ascii_lowercase())?;
        let first = matches.first();
        (failure_function, matches, first)
    } else {
        let matcher: KmpMatcher = KmpMatcher::new(case.pattern.as_str())?;
        let matches = matcher.search_all(case.text.as_bytes());
        let first = matcher.search_first(case.text.as_bytes());
        (matcher.failure_function().clone(), matches, first)
    };
    debug!(case = %case.name, found = matches.len(), "ran case");

    Ok(CaseReport {
        name: case.name.clone(),
        text: case.text.clone(),
        pattern: case.pattern.clone(),
        ignore_case: case.ignore_case,
        failure_function,
        matches,
        first,
    })
}

pub fn run_cases(cases: &[DemoCase]) -> Result<Vec<CaseReport>, KmpError> {
    let reports = cases.iter().map(run_case).collect::<Result<Vec<_>, _>>()?;
    info!(cases = reports.len(), "all cases ran");
    Ok(reports)
}

impl CaseReport {
    /// Matched slices of the original text, in match order.
    pub fn matched_slices(&self) -> Vec<&str> {
        let len = self.pattern.len();
        self.matches
            .iter()
            .filter_map(|&pos| self.text.get(pos..pos + len))
            .collect()
    }

    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();
        let title = format!("=== {} ===", self.name);
        out.push_str(&paint(&title, color, |s| s.bold().cyan().to_string()));
        out.push('\n');
        out.push_str(&format!("Text:    '{}'\n", self.text));
        out.push_str(&format!("Pattern: '{}'", self.pattern));
        if self.ignore_case {
            out.push_str(" (ASCII case-insensitive)");
        }
        out.push('\n');
        out.push_str(&format!("Failure function: {}\n", self.failure_function));

        let positions = format_positions(self.matches.positions());
        let positions = if self.matches.is_empty() {
            paint(&positions, color, |s| s.yellow().to_string())
        } else {
            paint(&positions, color, |s| s.green().to_string())
        };
        out.push_str(&format!(
            "Matches found at positions: {} ({} matches)\n",
            positions,
            self.matches.len()
        ));

        match self.first {
            Some(pos) => out.push_str(&format!("First match: {pos}\n")),
            None => out.push_str("First match: not found\n"),
        }

        for (pos, slice) in self.matches.iter().zip(self.matched_slices()) {
            out.push_str(&format!("  Position {pos}: '{slice}'\n"));
        }

        out
    }
}

// =============================================================================
// Failure-function table
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRow {
    pub pattern: String,
    pub failure_function: FailureFunction,
    /// Rendering cut to the configured byte limit.
    pub bounded: String,
}

pub fn failure_table(patterns: &[String], max_len: usize) -> Result<Vec<FailureRow>, KmpError> {
    patterns
        .iter()
        .map(|pattern| -> Result<FailureRow, KmpError> {
            let failure_function = build_failure_function(pattern.as_bytes())?;
            let bounded = format_failure_function_bounded(&failure_function, max_len)?;
            Ok(FailureRow {
                pattern: pattern.clone(),
                failure_function,
                bounded,
            })
        })
        .collect()
}

impl FailureRow {
    pub fn render(&self, color: bool) -> String {
        format!(
            "Pattern: {}\nLPS: {}\nAs string: {}\n",
            paint(&self.pattern, color, |s| s.bold().to_string()),
            self.failure_function,
            self.bounded
        )
    }
}

fn paint(text: &str, color: bool, style: impl Fn(&str) -> String) -> String {
    if color {
        style(text)
    } else {
        text.to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
