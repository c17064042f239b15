use super::*;
use crate::ast::node::NodeKind;
use crate::grammar::generate::generate;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn has_three_normalized_rules() {
    let mut store = NodeStore::new();
    let grammar = default_grammar(&mut store).unwrap();
    assert_eq!(grammar.len(), 3);

    let counts: Vec<usize> = grammar.rules().iter().map(|r| r.branches().len()).collect();
    assert_eq!(counts, vec![1, 3, 3]);
    for rule in grammar.rules() {
        let total: f32 = rule.branches().iter().map(|b| b.weight).sum();
        assert!((total - 1.0).abs() < 1e-6, "{total}");
    }
}

#[test]
fn dump_lists_rules_in_order() {
    let mut store = NodeStore::new();
    let grammar = default_grammar(&mut store).unwrap();
    let dump = grammar.display(&store).to_string();
    let lines: Vec<&str> = dump.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "0 ::= (rule(2),rule(2),rule(2)) [1.00]");
    assert_eq!(lines[1], "1 ::= random [0.33] | x [0.33] | y [0.33]");
    assert!(lines[2].starts_with("2 ::= rule(1) [0.25] | add(rule(2),rule(2)) ["));
    assert!(lines[2].contains(" | mult(rule(2),rule(2)) ["));
}

#[test]
fn default_depth_terminates_and_yields_a_color_tree() {
    let mut store = NodeStore::new();
    let grammar = default_grammar(&mut store).unwrap();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let root = generate(
            &grammar,
            &mut store,
            &mut rng,
            DEFAULT_START_RULE,
            DEFAULT_MAX_DEPTH,
        )
        .unwrap();
        assert!(matches!(store.kind(root), NodeKind::Triple { .. }));
        assert!(!store.contains_grammar_only(root));
    }
}
