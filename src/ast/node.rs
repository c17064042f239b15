use std::fmt;

use crate::foundation::core::Provenance;

/// Stable handle to a node owned by a [`NodeStore`](crate::NodeStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Binary operators. Arithmetic operators yield numbers, comparisons yield booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `lhs + rhs`
    Add,
    /// `lhs * rhs`
    Mult,
    /// Floating-point remainder; the sign follows `lhs`.
    Mod,
    /// `lhs > rhs`
    Gt,
    /// `lhs < rhs`
    Lt,
    /// `lhs >= rhs`
    Gteq,
    /// `lhs <= rhs`
    Lteq,
}

impl BinaryOp {
    /// Lowercase operator name used by the printer and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Mult => "mult",
            BinaryOp::Mod => "mod",
            BinaryOp::Gt => "gt",
            BinaryOp::Lt => "lt",
            BinaryOp::Gteq => "gteq",
            BinaryOp::Lteq => "lteq",
        }
    }
}

/// The expression language. Child links are handles into the owning store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    /// Free variable bound to the horizontal coordinate.
    X,
    /// Free variable bound to the vertical coordinate.
    Y,
    /// Grammar-only placeholder, resolved to a literal in `[-1, 1)` during generation.
    Random,
    /// Grammar-only reference to a rule by index.
    Rule(usize),
    /// Number literal.
    Number(f32),
    /// Boolean literal.
    Boolean(bool),
    /// Arithmetic or comparison over two operands.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        lhs: NodeId,
        /// Right operand.
        rhs: NodeId,
    },
    /// Three-component value; the shape a color expression reduces to.
    Triple {
        /// First component.
        first: NodeId,
        /// Second component.
        second: NodeId,
        /// Third component.
        third: NodeId,
    },
    /// Conditional. Only the selected branch is evaluated.
    If {
        /// Condition, must reduce to a boolean.
        cond: NodeId,
        /// Value when `cond` is true.
        then: NodeId,
        /// Value when `cond` is false.
        elze: NodeId,
    },
}

impl NodeKind {
    /// Short kind name, matching the printer's vocabulary.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::X => "x",
            NodeKind::Y => "y",
            NodeKind::Random => "random",
            NodeKind::Rule(_) => "rule",
            NodeKind::Number(_) => "number",
            NodeKind::Boolean(_) => "boolean",
            NodeKind::Binary { op, .. } => op.name(),
            NodeKind::Triple { .. } => "triple",
            NodeKind::If { .. } => "if",
        }
    }

    /// `true` for placeholders that only make sense before generation.
    pub fn is_grammar_only(&self) -> bool {
        matches!(self, NodeKind::Random | NodeKind::Rule(_))
    }

    /// Child handles in evaluation order.
    pub fn children(&self) -> Children {
        match *self {
            NodeKind::X
            | NodeKind::Y
            | NodeKind::Random
            | NodeKind::Rule(_)
            | NodeKind::Number(_)
            | NodeKind::Boolean(_) => Children::new(&[]),
            NodeKind::Binary { lhs, rhs, .. } => Children::new(&[lhs, rhs]),
            NodeKind::Triple {
                first,
                second,
                third,
            } => Children::new(&[first, second, third]),
            NodeKind::If { cond, then, elze } => Children::new(&[cond, then, elze]),
        }
    }
}

/// Up to three child handles, iterable without allocation.
#[derive(Debug, Clone, Copy)]
pub struct Children {
    ids: [NodeId; 3],
    len: usize,
    pos: usize,
}

impl Children {
    fn new(ids: &[NodeId]) -> Self {
        let mut buf = [NodeId(0); 3];
        buf[..ids.len()].copy_from_slice(ids);
        Self {
            ids: buf,
            len: ids.len(),
            pos: 0,
        }
    }
}

impl Iterator for Children {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.pos >= self.len {
            return None;
        }
        let id = self.ids[self.pos];
        self.pos += 1;
        Some(id)
    }
}

/// One immutable expression node plus the location it was built at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Variant and payload.
    pub kind: NodeKind,
    /// Construction site, used only for diagnostics.
    pub provenance: Provenance,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ast/node.rs"]
mod tests;
