use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use typebridge_compiler::{AmbientEnums, Config, Processor, is_declaration_file};

pub struct GenerateArgs {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub references: Vec<PathBuf>,
    pub ambient_enums: AmbientEnums,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("cannot create '{}': {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Compile(#[from] typebridge_compiler::Error),
}

pub fn run(args: GenerateArgs) {
    if let Err(e) = execute(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Generate declarations into `args.output`.
///
/// The output file is created before any input is read. Blocks written before
/// a failure stay in the file.
pub fn execute(args: &GenerateArgs) -> Result<(), GenerateError> {
    let file = File::create(&args.output).map_err(|source| GenerateError::CreateOutput {
        path: args.output.clone(),
        source,
    })?;
    let mut out = BufWriter::new(file);

    let config = Config::new()
        .declaration_mode(is_declaration_file(&args.output))
        .ambient_enums(args.ambient_enums);
    tracing::debug!(
        output = %args.output.display(),
        declaration_mode = config.is_declaration_mode(),
        inputs = args.inputs.len(),
        references = args.references.len(),
        "generating"
    );

    let result = Processor::load(&args.inputs, &args.references, config)
        .and_then(|processor| processor.write(&mut out));
    out.flush().map_err(typebridge_compiler::Error::from)?;
    Ok(result?)
}
