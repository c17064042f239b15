use super::*;
use crate::eval::error::{EvalError, ValueType};
use crate::foundation::error::RandomartError;

fn xy_zero(store: &mut NodeStore) -> NodeId {
    let (x, y, zero) = (store.x(), store.y(), store.number(0.0));
    store.triple(x, y, zero)
}

#[test]
fn pixels_follow_the_coordinate_mapping() {
    let mut store = NodeStore::new();
    let root = xy_zero(&mut store);
    let frame = render_frame(&mut store, root, Canvas::new(4, 4).unwrap()).unwrap();

    assert_eq!((frame.width, frame.height), (4, 4));
    assert_eq!(frame.data.len(), 4 * 4 * 4);
    assert_eq!(frame.pixel(0, 0), [0, 0, 127, 255]);
    // px 3 -> x = 0.5, py 1 -> y = -0.5
    assert_eq!(frame.pixel(3, 1), [191, 63, 127, 255]);
    assert_eq!(frame.pixel(2, 2), [127, 127, 127, 255]);
}

#[test]
fn rows_are_row_major() {
    let mut store = NodeStore::new();
    let root = xy_zero(&mut store);
    let frame = render_frame(&mut store, root, Canvas::new(2, 3).unwrap()).unwrap();

    assert_eq!(frame.data.len(), 2 * 3 * 4);
    // second pixel in memory is (1, 0): x = 0, y = -1
    assert_eq!(&frame.data[4..8], &[127, 0, 127, 255]);
    assert_eq!(frame.pixel(1, 0), [127, 0, 127, 255]);
}

#[test]
fn store_returns_to_its_size() {
    let mut store = NodeStore::new();
    let root = xy_zero(&mut store);
    let before = store.len();

    let (_, stats) =
        render_frame_with_stats(&mut store, root, Canvas::new(8, 5).unwrap()).unwrap();

    assert_eq!(store.len(), before);
    assert_eq!(stats.pixels, 40);
    // x, y and the rebuilt triple
    assert_eq!(stats.peak_nodes_per_pixel, 3);
}

#[test]
fn constant_tree_fills_the_frame() {
    let mut store = NodeStore::new();
    let (one, zero, neg) = (store.number(1.0), store.number(0.0), store.number(-1.0));
    let root = store.triple(one, zero, neg);
    let frame = render_frame(&mut store, root, Canvas::new(3, 3).unwrap()).unwrap();
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, &[255, 127, 0, 255]);
    }
}

#[test]
fn first_failure_aborts_the_render() {
    let mut store = NodeStore::new();
    let x = store.x();
    let zero = store.number(0.0);
    let cond = store.gt(x, zero);
    let bad = store.boolean(true);
    let blue = store.if_then_else(cond, zero, bad);
    let root = store.triple(x, x, blue);
    let before = store.len();

    let err = render_frame(&mut store, root, Canvas::new(4, 4).unwrap()).unwrap_err();
    match err {
        RandomartError::Evaluation(EvalError::TypeMismatch {
            provenance,
            expected,
            ..
        }) => {
            assert_eq!(provenance, store.provenance(bad));
            assert_eq!(expected, ValueType::Number);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.len(), before);
}

#[test]
fn grammar_nodes_cannot_be_rendered() {
    let mut store = NodeStore::new();
    let r = store.rule(0);
    let root = store.triple(r, r, r);
    let err = render_frame(&mut store, root, Canvas::new(1, 1).unwrap()).unwrap_err();
    assert!(matches!(
        err,
        RandomartError::Evaluation(EvalError::GrammarOnly { kind: "rule", .. })
    ));
}
