//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::AmbientEnumsChoice;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub references: Vec<PathBuf>,
    pub ambient_enums: AmbientEnumsChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: paths(m, "inputs"),
            output: m.get_one::<PathBuf>("output").cloned().unwrap_or_default(),
            references: paths(m, "reference"),
            ambient_enums: m
                .get_one::<String>("ambient_enums")
                .map(|s| AmbientEnumsChoice::parse(s))
                .unwrap_or_default(),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            inputs: p.inputs,
            output: p.output,
            references: p.references,
            ambient_enums: p.ambient_enums.into(),
        }
    }
}

fn paths(m: &ArgMatches, id: &str) -> Vec<PathBuf> {
    m.get_many::<PathBuf>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
