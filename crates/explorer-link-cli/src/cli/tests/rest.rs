//! Tests for from-map and completions.

use super::{parse, parse_err};
use crate::cli::{CliCommand, OutputKind};
use clap::error::ErrorKind;
use std::path::PathBuf;

#[test]
fn cli_parse_from_map_default_output() {
    match parse(&["explorer-link", "from-map", "/tmp/view.json"]) {
        CliCommand::FromMap { path, output } => {
            assert_eq!(path, PathBuf::from("/tmp/view.json"));
            assert_eq!(output, OutputKind::Uri);
        }
        _ => panic!("expected FromMap"),
    }
}

#[test]
fn cli_parse_from_map_share_output() {
    match parse(&["explorer-link", "from-map", "view.toml", "--output", "share"]) {
        CliCommand::FromMap { output, .. } => assert_eq!(output, OutputKind::Share),
        _ => panic!("expected FromMap"),
    }
}

#[test]
fn cli_rejects_unknown_output() {
    let kind = parse_err(&["explorer-link", "from-map", "view.json", "--output", "email"]);
    assert_eq!(kind, ErrorKind::InvalidValue);
}

#[test]
fn cli_parse_completions() {
    match parse(&["explorer-link", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_command_is_consistent() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}
