use std::fmt;

use crate::foundation::core::Provenance;

/// Value shapes the evaluator checks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `triple`
    Triple,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
            ValueType::Triple => "triple",
        })
    }
}

/// Why an expression could not be reduced to a value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An operand reduced to the wrong kind of value.
    #[error("{provenance}: expected a {expected}, got {found}")]
    TypeMismatch {
        /// Location of the offending operand.
        provenance: Provenance,
        /// Required value type.
        expected: ValueType,
        /// Kind name of what the operand reduced to.
        found: &'static str,
    },

    /// A `rule` or `random` placeholder reached the evaluator.
    #[error("{provenance}: cannot evaluate a grammar-only node ({kind})")]
    GrammarOnly {
        /// Location of the placeholder.
        provenance: Provenance,
        /// Placeholder kind name.
        kind: &'static str,
    },
}

impl EvalError {
    /// Location of the node the error is about.
    pub fn provenance(&self) -> Provenance {
        match self {
            EvalError::TypeMismatch { provenance, .. }
            | EvalError::GrammarOnly { provenance, .. } => *provenance,
        }
    }
}
