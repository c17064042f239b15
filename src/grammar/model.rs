use crate::ast::node::{NodeId, NodeKind};
use crate::ast::store::NodeStore;
use crate::foundation::error::{RandomartError, RandomartResult};

/// Tolerance when checking that a rule's input weights already sum to one.
const WEIGHT_SUM_TOLERANCE: f32 = 1e-4;

/// A node template plus its selection weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    /// Template; may contain `rule` and `random` placeholders.
    pub node: NodeId,
    /// Selection weight. Normalized so a rule's weights sum to 1 once built.
    pub weight: f32,
}

impl Branch {
    /// Pair a template with a weight.
    pub fn new(node: NodeId, weight: f32) -> Self {
        Self { node, weight }
    }
}

/// A production point: a non-empty, ordered list of weighted branches.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    branches: Vec<Branch>,
}

impl Rule {
    /// Branches in declaration order.
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Pick a branch for a uniform draw `p` in `[0, 1)` by inverse-CDF walk.
    ///
    /// Zero-weight branches are never picked. A draw above the final cumulative sum (float
    /// rounding) lands on the last positive-weight branch.
    pub fn select_index(&self, p: f32) -> usize {
        let mut cumulative = 0.0f32;
        let mut last_positive = 0;
        for (i, branch) in self.branches.iter().enumerate() {
            if branch.weight <= 0.0 {
                continue;
            }
            cumulative += branch.weight;
            last_positive = i;
            if cumulative >= p {
                return i;
            }
        }
        last_positive
    }

    /// Branch picked for the draw `p`. See [`Rule::select_index`].
    pub fn select(&self, p: f32) -> &Branch {
        &self.branches[self.select_index(p)]
    }
}

/// Ordered set of rules. Rule indices are positions in this list.
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    /// All rules in index order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rule at `index`, if any.
    pub fn rule(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// `true` when the grammar has no rules. Built grammars never are.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// In-memory builder for a [`Grammar`].
///
/// Rules are referenced by the index [`GrammarBuilder::push_rule`] returns, so forward references
/// are written with the index the rule will get.
#[derive(Debug, Default, Clone)]
pub struct GrammarBuilder {
    rules: Vec<Vec<Branch>>,
}

impl GrammarBuilder {
    /// Start an empty grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule and return its index.
    pub fn push_rule(&mut self, branches: impl IntoIterator<Item = Branch>) -> usize {
        self.rules.push(branches.into_iter().collect());
        self.rules.len() - 1
    }

    /// Builder-style [`GrammarBuilder::push_rule`].
    pub fn rule(mut self, branches: impl IntoIterator<Item = Branch>) -> Self {
        self.push_rule(branches);
        self
    }

    /// Index the next pushed rule will get.
    pub fn next_index(&self) -> usize {
        self.rules.len()
    }

    /// Validate and normalize.
    ///
    /// Rejects empty grammars, empty rules, negative or non-finite weights, rules whose weights
    /// sum to zero, and `rule(i)` references outside the grammar. Weights are rescaled so each
    /// rule sums to one.
    pub fn build(self, store: &NodeStore) -> RandomartResult<Grammar> {
        if self.rules.is_empty() {
            return Err(RandomartError::validation("grammar must have at least one rule"));
        }

        let rule_count = self.rules.len();
        let mut rules = Vec::with_capacity(rule_count);
        for (index, mut branches) in self.rules.into_iter().enumerate() {
            if branches.is_empty() {
                return Err(RandomartError::validation(format!(
                    "rule {index} has no branches"
                )));
            }

            let mut total = 0.0f32;
            for (j, branch) in branches.iter().enumerate() {
                if !branch.weight.is_finite() || branch.weight < 0.0 {
                    return Err(RandomartError::validation(format!(
                        "rule {index} branch {j} has invalid weight {}",
                        branch.weight
                    )));
                }
                check_rule_refs(store, branch.node, index, rule_count)?;
                total += branch.weight;
            }
            if total <= 0.0 {
                return Err(RandomartError::validation(format!(
                    "rule {index} weights sum to zero"
                )));
            }
            if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                tracing::warn!(rule = index, total, "normalizing rule weights");
            }
            for branch in &mut branches {
                branch.weight /= total;
            }

            rules.push(Rule { branches });
        }

        Ok(Grammar { rules })
    }
}

fn check_rule_refs(
    store: &NodeStore,
    node: NodeId,
    owner: usize,
    rule_count: usize,
) -> RandomartResult<()> {
    if let NodeKind::Rule(target) = store.kind(node)
        && target >= rule_count
    {
        return Err(RandomartError::validation(format!(
            "{}: rule {owner} references rule {target}, grammar has {rule_count} rules",
            store.provenance(node)
        )));
    }
    for child in store.kind(node).children() {
        check_rule_refs(store, child, owner, rule_count)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/grammar/model.rs"]
mod tests;
