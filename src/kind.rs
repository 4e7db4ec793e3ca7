//! Node kind tags for the external parser's syntax tree.

use serde::{Deserialize, Serialize};

/// Category tag of a syntax tree node.
///
/// The variants mirror the declaration categories of the external parser's
/// grammar. Named constants beat magic strings: rules match on these, and the
/// trace stream prints their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Top-level container for one source file's tree.
    CompilationUnit,
    /// A class declaration.
    ClassDefinition,
    /// A single constant inside an enum body.
    EnumConstant,
    /// An enum declaration.
    EnumDefinition,
    /// The header clause of an enhanced for-loop (`for (x : xs)`).
    ForEachHeader,
    /// The init clause of a classic for-loop (`for (int i = 0; ...)`).
    ForInitHeader,
    /// An interface declaration.
    InterfaceDefinition,
    /// A method declaration.
    MethodDefinition,
    /// A formal parameter declaration.
    Parameter,
    /// A local variable declaration.
    LocalVariableDefinition,
    /// A name token attached to a declaration.
    Identifier,
    /// A braces-delimited statement block.
    Block,
}

impl NodeKind {
    /// Returns the human-readable label used in trace output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CompilationUnit => "COMPILATION_UNIT",
            Self::ClassDefinition => "CLASS_DEF",
            Self::EnumConstant => "ENUM_CONSTANT_DEF",
            Self::EnumDefinition => "ENUM_DEF",
            Self::ForEachHeader => "FOR_EACH_CLAUSE",
            Self::ForInitHeader => "FOR_INIT",
            Self::InterfaceDefinition => "INTERFACE_DEF",
            Self::MethodDefinition => "METHOD_DEF",
            Self::Parameter => "PARAMETER_DEF",
            Self::LocalVariableDefinition => "VARIABLE_DEF",
            Self::Identifier => "IDENT",
            Self::Block => "SLIST",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_matches_display() {
        assert_eq!(NodeKind::ClassDefinition.label(), "CLASS_DEF");
        assert_eq!(NodeKind::ForEachHeader.to_string(), "FOR_EACH_CLAUSE");
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&NodeKind::LocalVariableDefinition)
            .expect("Failed to serialize");
        assert_eq!(json, "\"local-variable-definition\"");
    }
}
