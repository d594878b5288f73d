//! # cntr
//!
//! Count files, bytes and lines per source-file category across directory
//! trees.
//!
//! ## Overview
//!
//! cntr is built on top of cntrlib and provides the command-line interface:
//! it parses the search roots and exclusions, shows a spinner while the walk
//! runs, and prints one table row per category that matched at least one
//! file.
//!
//! ## Usage
//!
//! ```bash
//! # Count everything under src/ and include/
//! cntr --path src,include
//!
//! # Skip every entry named build or .git, at any depth
//! cntr --path . --exclude build,.git
//!
//! # Machine-readable output
//! cntr --path . --format json
//!
//! # Show per-file scan events
//! cntr --path . -vv
//! ```

mod progress;
mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use cntrlib::{count_paths_with_progress, CountOptions, CountResult, ExcludeFilter, StatsTable};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use progress::ScanProgress;

/// JSON output: raw totals plus the table rows
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a CountResult,
    table: &'a StatsTable,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("cntr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count the number of lines in src file(s)")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .long("path")
                .value_name("PATHS")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("comma separated list of paths where to search for files"),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .value_name("NAMES")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("comma separated list of entry names to exclude from the search"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Do not show the progress spinner"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides"),
        )
}

/// Install the stderr log subscriber
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Extract a multi-valued string option
fn extract_list(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Parse the command line. A flag missing its value also gets the usage line,
/// which clap leaves out for that error.
fn parse_args() -> ArgMatches {
    match build_command().try_get_matches() {
        Ok(matches) => matches,
        Err(err) if err.kind() == ErrorKind::InvalidValue => {
            eprint!("{err}");
            eprintln!();
            eprintln!("{}", build_command().render_usage());
            std::process::exit(err.exit_code());
        }
        Err(err) => err.exit(),
    }
}

/// Print one line per skipped path on stderr
fn report_skipped(result: &CountResult) {
    for entry in &result.skipped {
        eprintln!("Warning: {}", entry.reason);
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let roots = extract_list(matches, "path");
    let excluded = extract_list(matches, "exclude");
    debug!(?roots, exclude = ?excluded, "parsed arguments");

    let exclude = ExcludeFilter::new().exclude_many(excluded);
    let options = CountOptions::new().exclude(exclude);

    let progress = ScanProgress::new(matches.get_flag("quiet"));
    let result = count_paths_with_progress(&roots, &options, |_| progress.inc());
    progress.finish();
    report_skipped(&result);

    let table = StatsTable::from_totals(&result.totals);

    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("table");

    if format == "json" {
        let report = JsonReport {
            result: &result,
            table: &table,
        };
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{json}");
    } else {
        print!("{}", render::render_table(&table));
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = parse_args();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_comma_separated_lists() {
        let matches = build_command()
            .try_get_matches_from(["cntr", "--path", "src,include", "--exclude", "build"])
            .unwrap();
        assert_eq!(extract_list(&matches, "path"), vec!["src", "include"]);
        assert_eq!(extract_list(&matches, "exclude"), vec!["build"]);
    }

    #[test]
    fn test_repeated_flags_accumulate() {
        let matches = build_command()
            .try_get_matches_from(["cntr", "--path", "a", "--path", "b,c"])
            .unwrap();
        assert_eq!(extract_list(&matches, "path"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let err = build_command()
            .try_get_matches_from(["cntr", "--path"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(build_command()
            .render_usage()
            .to_string()
            .starts_with("Usage: cntr"));
    }

    #[test]
    fn test_flag_as_value_is_missing_value() {
        let err = build_command()
            .try_get_matches_from(["cntr", "--path", "--exclude", "build"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let err = build_command()
            .try_get_matches_from(["cntr", "--bogus"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_no_arguments_shows_help() {
        let err = build_command().try_get_matches_from(["cntr"]).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }
}
