//! Command-line interface for brace-expand
//! This binary expands brace patterns and prints the results, one pattern per line.
//!
//! Usage:
//!   brace `<pattern>`... [--format `<format>`] [--separator `<sep>`] [--strict]
//!   brace --config `<file>` `<pattern>`...   - Layer a configuration file over the defaults
//!   brace --list-formats                   - List all available output formats
//!
//! With no patterns, patterns are read from stdin, one per line.

use brace_expand::braces::config::{BraceConfig, Loader};
use brace_expand::braces::processor::{default_formats, process, ProcessingError};
use clap::{Arg, ArgAction, Command};
use std::io::{self, BufRead};

/// Per-directory configuration picked up when no `--config` is given.
const LOCAL_CONFIG: &str = ".brace.toml";

fn main() {
    let matches = Command::new("brace")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand shell-style brace patterns")
        .arg(
            Arg::new("patterns")
                .help("Patterns to expand (read from stdin when omitted)")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'text', 'json', 'ast-treeviz')"),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .short('s')
                .help("Separator between expansions for the text format"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject unbalanced braces and empty alternatives")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let patterns: Vec<String> = match matches.get_many::<String>("patterns") {
        Some(values) => values.cloned().collect(),
        None => io::stdin()
            .lock()
            .lines()
            .collect::<Result<_, _>>()
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            }),
    };

    for pattern in &patterns {
        handle_expand_command(pattern, &config);
    }
}

/// Build the configuration: defaults, then a config file, then flags.
fn load_config(matches: &clap::ArgMatches) -> Result<BraceConfig, ProcessingError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };

    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(separator) = matches.get_one::<String>("separator") {
        loader = loader.set_override("output.separator", separator.as_str())?;
    }
    if matches.get_flag("strict") {
        loader = loader.set_override("parsing.strict", true)?;
    }

    Ok(loader.build()?)
}

/// Handle a single pattern
fn handle_expand_command(pattern: &str, config: &BraceConfig) {
    match process(pattern, config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let formats = default_formats();
    println!("Available output formats:\n");

    for name in formats.list_formats() {
        if let Some(formatter) = formats.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
