use rand::Rng;

use crate::ast::node::{NodeId, NodeKind};
use crate::ast::store::NodeStore;
use crate::grammar::model::Grammar;

/// Branch draws per rule expansion before the expansion gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Why a grammar could not be expanded into a tree.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Every attempt ran out of depth before reaching terminals.
    #[error("rule {rule} could not terminate within depth {depth}")]
    Exhausted {
        /// Start rule.
        rule: usize,
        /// Depth budget the expansion started with.
        depth: u32,
    },

    /// Start rule is not part of the grammar.
    #[error("rule {rule} is out of range for a grammar of {rule_count} rules")]
    UnknownRule {
        /// Requested rule index.
        rule: usize,
        /// Number of rules in the grammar.
        rule_count: usize,
    },
}

/// Counters collected while expanding a grammar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// `expand_rule` calls with depth left, i.e. that drew at least once.
    pub rule_expansions: u64,
    /// Branch draws across all expansions.
    pub attempts: u64,
    /// Draws whose branch could not be expanded.
    pub failed_attempts: u64,
    /// Nodes left allocated in the store. Abandoned attempts are rewound and not counted.
    pub nodes_allocated: u64,
}

/// Depth-bounded, weighted expansion of grammar rules into trees.
///
/// Only rule expansion consumes depth: a rule expands its chosen template at `depth - 1`, and a
/// `rule(i)` placeholder inside a template expands rule `i` at `depth - 1` again. Plain tree
/// recursion keeps the depth it was given.
pub struct Generator<'a, R> {
    grammar: &'a Grammar,
    store: &'a mut NodeStore,
    rng: &'a mut R,
    max_attempts: usize,
    stats: GenerationStats,
}

impl<'a, R: Rng> Generator<'a, R> {
    /// Create a generator allocating into `store` and drawing from `rng`.
    pub fn new(grammar: &'a Grammar, store: &'a mut NodeStore, rng: &'a mut R) -> Self {
        Self {
            grammar,
            store,
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            stats: GenerationStats::default(),
        }
    }

    /// Override the per-rule retry budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Counters accumulated by every `generate` call so far.
    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// Expand `start_rule` into a tree free of `rule` and `random` nodes.
    ///
    /// The result may still contain `x` and `y`. On failure nothing is salvaged, and the store is
    /// left as it was before the call.
    #[tracing::instrument(skip(self), fields(rules = self.grammar.len()))]
    pub fn generate(
        &mut self,
        start_rule: usize,
        max_depth: u32,
    ) -> Result<NodeId, GenerationError> {
        if start_rule >= self.grammar.len() {
            return Err(GenerationError::UnknownRule {
                rule: start_rule,
                rule_count: self.grammar.len(),
            });
        }

        let before = self.store.len();
        let result = self.expand_rule(start_rule, max_depth);
        self.stats.nodes_allocated += (self.store.len() - before) as u64;

        tracing::debug!(
            rule_expansions = self.stats.rule_expansions,
            attempts = self.stats.attempts,
            failed_attempts = self.stats.failed_attempts,
            nodes_allocated = self.stats.nodes_allocated,
            ok = result.is_some(),
            "grammar expansion finished"
        );

        result.ok_or(GenerationError::Exhausted {
            rule: start_rule,
            depth: max_depth,
        })
    }

    fn expand_rule(&mut self, rule: usize, depth: u32) -> Option<NodeId> {
        if depth == 0 {
            return None;
        }

        let grammar = self.grammar;
        let rule = &grammar.rules()[rule];
        self.stats.rule_expansions += 1;

        for _ in 0..self.max_attempts {
            let p: f32 = self.rng.r#gen();
            let template = rule.select(p).node;
            self.stats.attempts += 1;
            let mark = self.store.mark();
            match self.expand_node(template, depth - 1) {
                Some(node) => return Some(node),
                None => {
                    self.stats.failed_attempts += 1;
                    self.store.rewind(mark);
                }
            }
        }
        None
    }

    fn expand_node(&mut self, node: NodeId, depth: u32) -> Option<NodeId> {
        let template = *self.store.get(node);
        match template.kind {
            NodeKind::X | NodeKind::Y | NodeKind::Number(_) | NodeKind::Boolean(_) => Some(node),
            NodeKind::Random => {
                let value: f32 = self.rng.gen_range(-1.0..1.0);
                Some(
                    self.store
                        .alloc(NodeKind::Number(value), template.provenance),
                )
            }
            NodeKind::Rule(index) => self.expand_rule(index, depth.saturating_sub(1)),
            NodeKind::Binary { op, lhs, rhs } => {
                let lhs = self.expand_node(lhs, depth)?;
                let rhs = self.expand_node(rhs, depth)?;
                Some(
                    self.store
                        .alloc(NodeKind::Binary { op, lhs, rhs }, template.provenance),
                )
            }
            NodeKind::Triple {
                first,
                second,
                third,
            } => {
                let first = self.expand_node(first, depth)?;
                let second = self.expand_node(second, depth)?;
                let third = self.expand_node(third, depth)?;
                Some(self.store.alloc(
                    NodeKind::Triple {
                        first,
                        second,
                        third,
                    },
                    template.provenance,
                ))
            }
            NodeKind::If { cond, then, elze } => {
                let cond = self.expand_node(cond, depth)?;
                let then = self.expand_node(then, depth)?;
                let elze = self.expand_node(elze, depth)?;
                Some(
                    self.store
                        .alloc(NodeKind::If { cond, then, elze }, template.provenance),
                )
            }
        }
    }
}

/// Expand `start_rule` with the default retry budget.
///
/// Shorthand for [`Generator::new`] followed by [`Generator::generate`].
pub fn generate<R: Rng>(
    grammar: &Grammar,
    store: &mut NodeStore,
    rng: &mut R,
    start_rule: usize,
    max_depth: u32,
) -> Result<NodeId, GenerationError> {
    Generator::new(grammar, store, rng).generate(start_rule, max_depth)
}

#[cfg(test)]
#[path = "../../tests/unit/grammar/generate.rs"]
mod tests;
