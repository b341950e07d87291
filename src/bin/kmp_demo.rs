//! KMP search demo.
//!
//! Run with:
//!   cargo run --bin kmp_demo
//!   cargo run --bin kmp_demo -- demos/cases.toml
//!   cargo run --bin kmp_demo -- demos/cases.toml --json

use colored::Colorize;
use kmp_search::{
    failure_table, run_cases, search_all, CaseReport, DemoConfig, FailureRow, KmpMatcher,
};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

const USAGE: &str = "usage: kmp_demo [CONFIG.toml|CONFIG.json] [--json]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    json: bool,
    help: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(raw: I) -> Result<Args, String> {
    let mut args = Args::default();
    for arg in raw {
        match arg.as_str() {
            "--json" => args.json = true,
            "-h" | "--help" => args.help = true,
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option '{flag}'\n{USAGE}"));
            }
            _ if args.config.is_some() => {
                return Err(format!("more than one config file given\n{USAGE}"));
            }
            _ => args.config = Some(PathBuf::from(&arg)),
        }
    }
    Ok(args)
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    cases: &'a [CaseReport],
    failure_functions: &'a [FailureRow],
}

fn should_use_colors(config: &DemoConfig) -> bool {
    config.color && std::env::var("NO_COLOR").is_err()
}

fn paint(text: &str, color: bool, style: impl Fn(&str) -> String) -> String {
    if color {
        style(text)
    } else {
        text.to_string()
    }
}

fn heading(text: &str, color: bool) -> String {
    paint(text, color, |s| s.bold().cyan().to_string())
}

fn render_text(reports: &[CaseReport], rows: &[FailureRow], color: bool) -> String {
    let mut out = String::new();

    out.push_str(&paint("KMP String Matching Algorithm Demo", color, |s| {
        s.bold().to_string()
    }));
    out.push('\n');
    out.push_str(&"=".repeat(40));
    out.push_str("\n\n");

    for report in reports {
        out.push_str(&report.render(color));
        out.push('\n');
    }

    out.push_str(&heading("=== Failure Function (LPS Array) ===", color));
    out.push('\n');
    for row in rows {
        out.push_str(&row.render(color));
        out.push('\n');
    }

    out.push_str(&heading("=== Empty Pattern ===", color));
    out.push('\n');
    let warn = |message: String| paint(&message, color, |s| s.yellow().to_string());
    match search_all(b"text", b"") {
        Ok(matches) => out.push_str(&format!("Empty pattern search: {} matches\n", matches.len())),
        Err(err) => out.push_str(&format!("Empty pattern search: {}\n", warn(err.to_string()))),
    }
    match KmpMatcher::<u8>::new("") {
        Ok(_) => out.push_str("Empty pattern matcher: created\n"),
        Err(err) => out.push_str(&format!("Empty pattern matcher: {}\n", warn(err.to_string()))),
    }

    out.push_str("\n=== Key Points ===\n");
    out.push_str("1. O(M) preprocessing to build failure function\n");
    out.push_str("2. O(N) search - each text character examined once\n");
    out.push_str("3. No backtracking in text - linear time guaranteed\n");
    out.push_str("4. Overlapping matches are reported\n");
    out
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.tracing_level()?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(
        source = ?args.config,
        cases = config.cases.len(),
        "loaded demo config"
    );

    let reports = run_cases(&config.cases)?;
    let rows = failure_table(&config.failure_patterns, config.max_format_len)?;

    if args.json {
        let output = JsonOutput {
            cases: &reports,
            failure_functions: &rows,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_text(&reports, &rows, should_use_colors(&config)));
    }

    Ok(())
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) if args.help => {
            println!("{USAGE}");
            return;
        }
        Ok(args) => args,
        Err(message) => {
            eprintln!("{} {}", "error:".bold().red(), message);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{} {}", "error:".bold().red(), err);
        std::process::exit(1);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(args(&[]).unwrap(), Args::default());
    }

    #[test]
    fn test_parse_config_and_json() {
        let parsed = args(&["cases.toml", "--json"]).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("cases.toml")));
        assert!(parsed.json);
        assert!(!parsed.help);
    }

    #[test]
    fn test_parse_help() {
        assert!(args(&["--help"]).unwrap().help);
        assert!(args(&["-h"]).unwrap().help);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = args(&["--jsn"]).unwrap_err();
        assert!(err.contains("unknown option '--jsn'"));
        assert!(err.contains("usage: kmp_demo"));
        assert!(args(&["cases.toml", "--verbose"]).is_err());
    }

    #[test]
    fn test_second_config_rejected() {
        let err = args(&["a.toml", "b.toml"]).unwrap_err();
        assert!(err.contains("more than one config file"));
    }

    #[test]
    fn test_render_without_color_has_no_escapes() {
        colored::control::set_override(true);
        let config = DemoConfig::default();
        let reports = run_cases(&config.cases).unwrap();
        let rows = failure_table(&config.failure_patterns, config.max_format_len).unwrap();

        let plain = render_text(&reports, &rows, false);
        assert!(!plain.contains('\x1b'));
        assert!(plain.starts_with("KMP String Matching Algorithm Demo\n"));
        assert!(plain.contains("=== Failure Function (LPS Array) ===\n"));
        assert!(plain.contains("Empty pattern search: pattern must not be empty"));

        let colored_output = render_text(&reports, &rows, true);
        assert!(colored_output.contains('\x1b'));
    }
}
