//! CLI parse tests.

use super::Cli;
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_defaults() {
    let cli = parse(&["tikdl", "user_data.json"]);
    assert_eq!(cli.filename, Path::new("user_data.json"));
    assert_eq!(cli.dest, Path::new("./videos"));
    assert!(!cli.verbose);
}

#[test]
fn cli_parse_short_flags() {
    let cli = parse(&["tikdl", "-d", "/tmp/tt", "-v", "data.json"]);
    assert_eq!(cli.filename, Path::new("data.json"));
    assert_eq!(cli.dest, Path::new("/tmp/tt"));
    assert!(cli.verbose);
}

#[test]
fn cli_parse_long_flags() {
    let cli = parse(&["tikdl", "data.json", "--dest", "out", "--verbose"]);
    assert_eq!(cli.dest, Path::new("out"));
    assert!(cli.verbose);
}

#[test]
fn cli_requires_filename() {
    assert!(Cli::try_parse_from(["tikdl"]).is_err());
    assert!(Cli::try_parse_from(["tikdl", "-v"]).is_err());
}

#[test]
fn cli_rejects_subcommand_like_extras() {
    assert!(Cli::try_parse_from(["tikdl", "a.json", "b.json"]).is_err());
}

#[test]
fn cli_debug_assert() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
