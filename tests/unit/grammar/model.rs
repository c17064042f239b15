use super::*;

fn leaves(store: &mut NodeStore) -> (NodeId, NodeId, NodeId) {
    (store.x(), store.y(), store.random())
}

#[test]
fn select_walks_cumulative_weights() {
    let mut store = NodeStore::new();
    let (x, y, random) = leaves(&mut store);
    let grammar = GrammarBuilder::new()
        .rule([
            Branch::new(x, 0.25),
            Branch::new(y, 0.25),
            Branch::new(random, 0.5),
        ])
        .build(&store)
        .unwrap();
    let rule = grammar.rule(0).unwrap();

    assert_eq!(rule.select_index(0.0), 0);
    assert_eq!(rule.select_index(0.25), 0);
    assert_eq!(rule.select_index(0.26), 1);
    assert_eq!(rule.select_index(0.5), 1);
    assert_eq!(rule.select_index(0.51), 2);
    assert_eq!(rule.select_index(0.999), 2);
    assert_eq!(rule.select(0.1).node, x);
}

#[test]
fn draw_past_rounded_total_lands_on_last_positive_branch() {
    let mut store = NodeStore::new();
    let (x, y, random) = leaves(&mut store);
    let grammar = GrammarBuilder::new()
        .rule([
            Branch::new(x, 0.5),
            Branch::new(y, 0.5),
            Branch::new(random, 0.0),
        ])
        .build(&store)
        .unwrap();
    let rule = grammar.rule(0).unwrap();

    assert_eq!(rule.select_index(1.5), 1);
}

#[test]
fn zero_weight_branches_are_never_selected() {
    let mut store = NodeStore::new();
    let (x, y, _) = leaves(&mut store);
    let grammar = GrammarBuilder::new()
        .rule([Branch::new(x, 0.0), Branch::new(y, 1.0)])
        .build(&store)
        .unwrap();
    let rule = grammar.rule(0).unwrap();

    assert_eq!(rule.select_index(0.0), 1);
    assert_eq!(rule.select_index(0.7), 1);
}

#[test]
fn build_normalizes_weights() {
    let mut store = NodeStore::new();
    let (x, y, _) = leaves(&mut store);
    let grammar = GrammarBuilder::new()
        .rule([Branch::new(x, 2.0), Branch::new(y, 6.0)])
        .build(&store)
        .unwrap();
    let weights: Vec<f32> = grammar.rules()[0]
        .branches()
        .iter()
        .map(|b| b.weight)
        .collect();
    assert_eq!(weights, vec![0.25, 0.75]);
}

#[test]
fn build_rejects_bad_input() {
    let mut store = NodeStore::new();
    let (x, y, _) = leaves(&mut store);

    let empty = GrammarBuilder::new().build(&store);
    assert!(matches!(empty, Err(RandomartError::Validation(_))));

    let no_branches = GrammarBuilder::new().rule([]).build(&store);
    assert!(no_branches.unwrap_err().to_string().contains("no branches"));

    let negative = GrammarBuilder::new()
        .rule([Branch::new(x, -0.5), Branch::new(y, 1.5)])
        .build(&store);
    assert!(negative.unwrap_err().to_string().contains("invalid weight"));

    let nan = GrammarBuilder::new()
        .rule([Branch::new(x, f32::NAN)])
        .build(&store);
    assert!(nan.is_err());

    let zero = GrammarBuilder::new()
        .rule([Branch::new(x, 0.0), Branch::new(y, 0.0)])
        .build(&store);
    assert!(zero.unwrap_err().to_string().contains("sum to zero"));
}

#[test]
fn build_rejects_out_of_range_rule_reference() {
    let mut store = NodeStore::new();
    let x = store.x();
    let dangling = store.rule(5);
    let nested = store.add(x, dangling);

    let err = GrammarBuilder::new()
        .rule([Branch::new(nested, 1.0)])
        .build(&store)
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("references rule 5"), "{msg}");
    assert!(msg.contains("model.rs"), "{msg}");
}

#[test]
fn push_rule_returns_indices_in_order() {
    let mut store = NodeStore::new();
    let (x, y, _) = leaves(&mut store);
    let mut builder = GrammarBuilder::new();
    assert_eq!(builder.next_index(), 0);
    assert_eq!(builder.push_rule([Branch::new(x, 1.0)]), 0);
    assert_eq!(builder.push_rule([Branch::new(y, 1.0)]), 1);
    let grammar = builder.build(&store).unwrap();
    assert_eq!(grammar.len(), 2);
    assert!(!grammar.is_empty());
    assert!(grammar.rule(2).is_none());
}
