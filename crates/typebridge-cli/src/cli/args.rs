//! Argument builders for the CLI.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Symbol dump files (positional, one or more).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUTS")
        .required(true)
        .num_args(1..)
        .action(ArgAction::Append)
        .value_parser(value_parser!(PathBuf))
        .help("Symbol dump files, one per source unit")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Output file (.d.ts, .d.mts or .d.cts emits ambient declarations)")
}

/// Reference catalog (-r/--reference), repeatable.
pub fn reference_arg() -> Arg {
    Arg::new("reference")
        .short('r')
        .long("reference")
        .value_name("FILE")
        .action(ArgAction::Append)
        .value_parser(value_parser!(PathBuf))
        .help("Metadata catalog of referenced library types")
}

/// Enum handling in declaration mode (--ambient-enums).
pub fn ambient_enums_arg() -> Arg {
    Arg::new("ambient_enums")
        .long("ambient-enums")
        .value_name("MODE")
        .default_value("reject")
        .value_parser(["reject", "declare"])
        .help("Enums in declaration mode: fail, or emit `declare enum`")
}
