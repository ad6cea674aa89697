mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::GenerateParams;

use typebridge_compiler::AmbientEnums;

/// Enum handling in declaration mode (--ambient-enums).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmbientEnumsChoice {
    #[default]
    Reject,
    Declare,
}

impl AmbientEnumsChoice {
    fn parse(value: &str) -> Self {
        match value {
            "declare" => Self::Declare,
            _ => Self::Reject,
        }
    }
}

impl From<AmbientEnumsChoice> for AmbientEnums {
    fn from(choice: AmbientEnumsChoice) -> Self {
        match choice {
            AmbientEnumsChoice::Reject => AmbientEnums::Reject,
            AmbientEnumsChoice::Declare => AmbientEnums::Declare,
        }
    }
}
