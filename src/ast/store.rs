use crate::ast::node::{BinaryOp, Node, NodeId, NodeKind};
use crate::foundation::core::Provenance;

/// Append-only arena owning every node of a generation + render run.
///
/// Nodes are never freed individually. The whole store is dropped at once, or a suffix of it is
/// discarded with [`NodeStore::rewind`].
#[derive(Debug, Default, Clone)]
pub struct NodeStore {
    nodes: Vec<Node>,
}

/// Allocation watermark returned by [`NodeStore::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreMark(usize);

impl NodeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node with an explicit provenance.
    ///
    /// # Panics
    ///
    /// Panics when more than `u32::MAX` nodes are live. Allocation volume is bounded by the
    /// generation depth and the per-pixel rewind, so exhaustion is treated as fatal.
    pub fn alloc(&mut self, kind: NodeKind, provenance: Provenance) -> NodeId {
        let index = u32::try_from(self.nodes.len()).expect("node store exhausted");
        self.nodes.push(Node { kind, provenance });
        NodeId(index)
    }

    /// Borrow a node.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Copy out a node's kind.
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.index()].kind
    }

    /// Where a node was constructed.
    pub fn provenance(&self, id: NodeId) -> Provenance {
        self.nodes[id.index()].provenance
    }

    /// Number of nodes currently allocated.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when nothing has been allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Record the current allocation watermark.
    pub fn mark(&self) -> StoreMark {
        StoreMark(self.nodes.len())
    }

    /// Drop every node allocated after `mark` in one step.
    ///
    /// Handles obtained after `mark` must not be used afterwards: their indices are reused by
    /// subsequent allocations.
    pub fn rewind(&mut self, mark: StoreMark) {
        self.nodes.truncate(mark.0);
    }

    /// Drop every node.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    /// Number of nodes reachable from `root`, a shared subtree counted once for each place it is
    /// referenced.
    pub fn tree_size(&self, root: NodeId) -> usize {
        1 + self
            .kind(root)
            .children()
            .map(|child| self.tree_size(child))
            .sum::<usize>()
    }

    /// Height of the tree under `root`; a lone terminal has depth 1.
    pub fn tree_depth(&self, root: NodeId) -> usize {
        1 + self
            .kind(root)
            .children()
            .map(|child| self.tree_depth(child))
            .max()
            .unwrap_or(0)
    }

    /// `true` when any node under `root` is a `rule` or `random` placeholder.
    pub fn contains_grammar_only(&self, root: NodeId) -> bool {
        let kind = self.kind(root);
        kind.is_grammar_only()
            || kind
                .children()
                .any(|child| self.contains_grammar_only(child))
    }

    /// `x` at the caller's location.
    #[track_caller]
    pub fn x(&mut self) -> NodeId {
        self.alloc(NodeKind::X, Provenance::caller())
    }

    /// `y` at the caller's location.
    #[track_caller]
    pub fn y(&mut self) -> NodeId {
        self.alloc(NodeKind::Y, Provenance::caller())
    }

    /// `random` placeholder at the caller's location.
    #[track_caller]
    pub fn random(&mut self) -> NodeId {
        self.alloc(NodeKind::Random, Provenance::caller())
    }

    /// `rule(index)` placeholder at the caller's location.
    #[track_caller]
    pub fn rule(&mut self, index: usize) -> NodeId {
        self.alloc(NodeKind::Rule(index), Provenance::caller())
    }

    /// Number literal at the caller's location.
    #[track_caller]
    pub fn number(&mut self, value: f32) -> NodeId {
        self.alloc(NodeKind::Number(value), Provenance::caller())
    }

    /// Boolean literal at the caller's location.
    #[track_caller]
    pub fn boolean(&mut self, value: bool) -> NodeId {
        self.alloc(NodeKind::Boolean(value), Provenance::caller())
    }

    /// Binary node at the caller's location.
    #[track_caller]
    pub fn binary(&mut self, op: BinaryOp, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.alloc(NodeKind::Binary { op, lhs, rhs }, Provenance::caller())
    }

    /// `add(lhs, rhs)`
    #[track_caller]
    pub fn add(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.binary(BinaryOp::Add, lhs, rhs)
    }

    /// `mult(lhs, rhs)`
    #[track_caller]
    pub fn mult(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.binary(BinaryOp::Mult, lhs, rhs)
    }

    /// `mod(lhs, rhs)`
    #[track_caller]
    pub fn modulo(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.binary(BinaryOp::Mod, lhs, rhs)
    }

    /// `gt(lhs, rhs)`
    #[track_caller]
    pub fn gt(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.binary(BinaryOp::Gt, lhs, rhs)
    }

    /// `lt(lhs, rhs)`
    #[track_caller]
    pub fn lt(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.binary(BinaryOp::Lt, lhs, rhs)
    }

    /// `gteq(lhs, rhs)`
    #[track_caller]
    pub fn gteq(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.binary(BinaryOp::Gteq, lhs, rhs)
    }

    /// `lteq(lhs, rhs)`
    #[track_caller]
    pub fn lteq(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.binary(BinaryOp::Lteq, lhs, rhs)
    }

    /// `(first, second, third)`
    #[track_caller]
    pub fn triple(&mut self, first: NodeId, second: NodeId, third: NodeId) -> NodeId {
        self.alloc(
            NodeKind::Triple {
                first,
                second,
                third,
            },
            Provenance::caller(),
        )
    }

    /// `if cond then then else elze`
    #[track_caller]
    pub fn if_then_else(&mut self, cond: NodeId, then: NodeId, elze: NodeId) -> NodeId {
        self.alloc(NodeKind::If { cond, then, elze }, Provenance::caller())
    }
}

impl std::ops::Index<NodeId> for NodeStore {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.get(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ast/store.rs"]
mod tests;
