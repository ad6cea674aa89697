//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("typebridge")
        .about("Generate TypeScript declarations from resolved C# symbols")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .override_usage("typebridge <INPUTS>... -o <FILE> [-r <FILE>]...")
        .after_help(
            r#"EXAMPLES:
  typebridge model.json -o model.ts                 # exported interfaces and enums
  typebridge a.json b.json -o types.d.ts            # ambient declarations
  typebridge model.json -r lib.json -o model.ts     # with a library catalog
  typebridge model.json -o types.d.ts --ambient-enums declare"#,
        )
        .arg(inputs_arg())
        .arg(output_arg())
        .arg(reference_arg())
        .arg(ambient_enums_arg())
}
