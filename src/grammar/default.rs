use crate::ast::store::NodeStore;
use crate::foundation::error::RandomartResult;
use crate::grammar::model::{Branch, Grammar, GrammarBuilder};

/// Start rule of [`default_grammar`].
pub const DEFAULT_START_RULE: usize = 0;

/// Depth budget that reliably terminates [`default_grammar`].
pub const DEFAULT_MAX_DEPTH: u32 = 20;

/// The built-in rule set.
///
/// ```text
/// E ::= (C, C, C)
/// A ::= random [1/3] | x [1/3] | y [1/3]
/// C ::= A [1/4] | add(C, C) [3/8] | mult(C, C) [3/8]
/// ```
///
/// `E` is rule 0, `A` rule 1 and `C` rule 2.
pub fn default_grammar(store: &mut NodeStore) -> RandomartResult<Grammar> {
    const E: usize = 0;
    const A: usize = 1;
    const C: usize = 2;

    let mut builder = GrammarBuilder::new();

    let (r, g, b) = (store.rule(C), store.rule(C), store.rule(C));
    let color = store.triple(r, g, b);
    let e = builder.push_rule([Branch::new(color, 1.0)]);
    debug_assert_eq!(e, E);

    let random = store.random();
    let x = store.x();
    let y = store.y();
    let a = builder.push_rule([
        Branch::new(random, 1.0 / 3.0),
        Branch::new(x, 1.0 / 3.0),
        Branch::new(y, 1.0 / 3.0),
    ]);
    debug_assert_eq!(a, A);

    let leaf = store.rule(A);
    let (lhs, rhs) = (store.rule(C), store.rule(C));
    let add = store.add(lhs, rhs);
    let (lhs, rhs) = (store.rule(C), store.rule(C));
    let mult = store.mult(lhs, rhs);
    let c = builder.push_rule([
        Branch::new(leaf, 1.0 / 4.0),
        Branch::new(add, 3.0 / 8.0),
        Branch::new(mult, 3.0 / 8.0),
    ]);
    debug_assert_eq!(c, C);

    builder.build(store)
}

#[cfg(test)]
#[path = "../../tests/unit/grammar/default.rs"]
mod tests;
