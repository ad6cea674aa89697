//! Output rendering methods.

use typebridge_core::{EnumDeclaration, TypeDeclaration};

use super::Emitter;
use super::config::AmbientEnums;
use crate::resolve::{MemberDeclaration, assign_values, resolve_extends, resolve_indexer};
use crate::{Error, Result};

const INDENT: &str = "  ";

impl Emitter {
    /// `<visibility> interface Name[ extends Base] { .. }`
    pub(super) fn emit_interface(&mut self, decl: &TypeDeclaration) {
        self.output.push_str(self.config.visibility());
        self.output.push_str(" interface ");
        self.output.push_str(&decl.name);
        if let Some(base) = resolve_extends(decl) {
            self.output.push_str(" extends ");
            self.output.push_str(base);
        }
        self.output.push_str(" {\n");

        if let Some(indexer) = resolve_indexer(decl) {
            self.push_line(&indexer.render());
        }

        for symbol in &decl.members {
            let member = MemberDeclaration::from_symbol(symbol);
            let optional = if member.is_optional() { "?" } else { "" };
            let line = format!(
                "{}{}: {};",
                member.resolve_name(),
                optional,
                member.ty.render()
            );
            self.push_line(&line);
        }

        self.output.push_str("}\n\n");
    }

    /// `export enum Name { .. }`, or `declare enum` when ambient enums are
    /// allowed in declaration mode.
    pub(super) fn emit_enum(&mut self, decl: &EnumDeclaration) -> Result<()> {
        let keyword = match (self.config.declaration_mode, self.config.ambient_enums) {
            (false, _) => "export",
            (true, AmbientEnums::Declare) => "declare",
            (true, AmbientEnums::Reject) => {
                return Err(Error::EnumInDeclarationMode {
                    name: decl.name.clone(),
                });
            }
        };

        self.output.push_str(keyword);
        self.output.push_str(" enum ");
        self.output.push_str(&decl.name);
        self.output.push_str(" {\n");

        let lines: Vec<String> = assign_values(decl)
            .iter()
            .map(|v| format!("{INDENT}{} = {}", v.name, v.value))
            .collect();
        if !lines.is_empty() {
            self.output.push_str(&lines.join(",\n"));
            self.output.push('\n');
        }

        self.output.push_str("}\n\n");
        Ok(())
    }

    fn push_line(&mut self, line: &str) {
        self.output.push_str(INDENT);
        self.output.push_str(line);
        self.output.push('\n');
    }
}
