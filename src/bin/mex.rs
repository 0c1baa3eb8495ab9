//! Command-line interface for mex
//! This binary expands mex documents: comments are stripped, macros and
//! builtins are applied, and the full result is written to stdout only when
//! expansion succeeds.
//!
//! Usage:
//!   mex `<files...>`                 - Expand the concatenation of the files
//!   mex                            - Expand standard input
//!   mex --format tokens `<files...>` - Dump the token stream as JSON

use clap::{Arg, Command};
use mex::mex::processor::{process, OutputFormat};

fn main() {
    let matches = Command::new("mex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for expanding mex macro documents")
        .arg(
            Arg::new("paths")
                .help("Input files, expanded in order (stdin when omitted)")
                .num_args(0..)
                .value_name("FILE")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (text or tokens)")
                .default_value("text"),
        )
        .get_matches();

    let paths: Vec<String> = matches
        .get_many::<String>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let format_name = matches.get_one::<String>("format").unwrap();

    handle_process_command(&paths, format_name);
}

/// Expand the inputs and write the result to stdout
fn handle_process_command(paths: &[String], format_name: &str) {
    let result = OutputFormat::from_name(format_name).and_then(|format| process(paths, format));
    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
