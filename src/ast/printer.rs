//! Debug text dump in prefix notation.
//!
//! ```text
//! add(x,mult(y,0.500000))
//! if gt(x,y) then (x,y,x) else (y,x,y)
//! 0 ::= (rule(2),rule(2),rule(2)) [1.00]
//! ```
//!
//! The output is diagnostic only and is never parsed back.

use std::fmt;

use crate::ast::node::{NodeId, NodeKind};
use crate::ast::store::NodeStore;
use crate::grammar::model::Grammar;

/// [`fmt::Display`] adapter for the tree rooted at a node.
pub struct NodeDisplay<'a> {
    store: &'a NodeStore,
    root: NodeId,
}

impl NodeStore {
    /// Display the tree rooted at `root`.
    pub fn display(&self, root: NodeId) -> NodeDisplay<'_> {
        NodeDisplay { store: self, root }
    }
}

impl fmt::Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.store, self.root)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, store: &NodeStore, id: NodeId) -> fmt::Result {
    match store.kind(id) {
        NodeKind::X => f.write_str("x"),
        NodeKind::Y => f.write_str("y"),
        NodeKind::Random => f.write_str("random"),
        NodeKind::Rule(index) => write!(f, "rule({index})"),
        NodeKind::Number(value) => write!(f, "{value:.6}"),
        NodeKind::Boolean(value) => write!(f, "{value}"),
        NodeKind::Binary { op, lhs, rhs } => {
            write!(f, "{}(", op.name())?;
            write_node(f, store, lhs)?;
            f.write_str(",")?;
            write_node(f, store, rhs)?;
            f.write_str(")")
        }
        NodeKind::Triple {
            first,
            second,
            third,
        } => {
            f.write_str("(")?;
            write_node(f, store, first)?;
            f.write_str(",")?;
            write_node(f, store, second)?;
            f.write_str(",")?;
            write_node(f, store, third)?;
            f.write_str(")")
        }
        NodeKind::If { cond, then, elze } => {
            f.write_str("if ")?;
            write_node(f, store, cond)?;
            f.write_str(" then ")?;
            write_node(f, store, then)?;
            f.write_str(" else ")?;
            write_node(f, store, elze)
        }
    }
}

/// [`fmt::Display`] adapter dumping a grammar one rule per line.
pub struct GrammarDisplay<'a> {
    grammar: &'a Grammar,
    store: &'a NodeStore,
}

impl Grammar {
    /// Display every rule as `<index> ::= <branch> [<weight>] | ...`.
    pub fn display<'a>(&'a self, store: &'a NodeStore) -> GrammarDisplay<'a> {
        GrammarDisplay {
            grammar: self,
            store,
        }
    }
}

impl fmt::Display for GrammarDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, rule) in self.grammar.rules().iter().enumerate() {
            write!(f, "{index} ::= ")?;
            for (j, branch) in rule.branches().iter().enumerate() {
                if j > 0 {
                    f.write_str(" | ")?;
                }
                write_node(f, self.store, branch.node)?;
                write!(f, " [{:.2}]", branch.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ast/printer.rs"]
mod tests;
