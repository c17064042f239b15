use super::*;

#[test]
fn kind_names_cover_all_fifteen_kinds() {
    let id = NodeId(0);
    let mut names: Vec<&str> = vec![
        NodeKind::X.name(),
        NodeKind::Y.name(),
        NodeKind::Random.name(),
        NodeKind::Rule(0).name(),
        NodeKind::Number(0.0).name(),
        NodeKind::Boolean(true).name(),
        NodeKind::Triple {
            first: id,
            second: id,
            third: id,
        }
        .name(),
        NodeKind::If {
            cond: id,
            then: id,
            elze: id,
        }
        .name(),
    ];
    names.extend(
        [
            BinaryOp::Add,
            BinaryOp::Mult,
            BinaryOp::Mod,
            BinaryOp::Gt,
            BinaryOp::Lt,
            BinaryOp::Gteq,
            BinaryOp::Lteq,
        ]
        .map(BinaryOp::name),
    );

    assert_eq!(names.len(), 15);
    let mut unique = names.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), 15);
}

#[test]
fn only_rule_and_random_are_grammar_only() {
    assert!(NodeKind::Random.is_grammar_only());
    assert!(NodeKind::Rule(3).is_grammar_only());
    assert!(!NodeKind::X.is_grammar_only());
    assert!(!NodeKind::Number(1.0).is_grammar_only());
}

#[test]
fn children_follow_evaluation_order() {
    let kind = NodeKind::If {
        cond: NodeId(4),
        then: NodeId(5),
        elze: NodeId(6),
    };
    assert_eq!(
        kind.children().collect::<Vec<_>>(),
        vec![NodeId(4), NodeId(5), NodeId(6)]
    );

    let kind = NodeKind::Binary {
        op: BinaryOp::Mod,
        lhs: NodeId(1),
        rhs: NodeId(2),
    };
    assert_eq!(kind.children().collect::<Vec<_>>(), vec![NodeId(1), NodeId(2)]);
    assert_eq!(NodeKind::Y.children().count(), 0);
}
