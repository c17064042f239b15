use crate::ast::node::{BinaryOp, NodeId, NodeKind};
use crate::ast::store::NodeStore;
use crate::eval::error::{EvalError, ValueType};
use crate::foundation::core::Color;

/// Reduce `node` to a value node at the coordinate `(x, y)`.
///
/// Values are `number`, `boolean`, or a `triple` of evaluated components. Literals are returned as
/// is; every computed value is a fresh node in `store` carrying the provenance of the expression
/// that produced it. The first failure aborts the whole evaluation.
///
/// `if` evaluates only the selected branch and returns its value without checking its type;
/// callers that need a specific shape check it themselves, as [`evaluate_as_color`] does.
pub fn evaluate(
    store: &mut NodeStore,
    node: NodeId,
    x: f32,
    y: f32,
) -> Result<NodeId, EvalError> {
    let expr = *store.get(node);
    match expr.kind {
        NodeKind::X => Ok(store.alloc(NodeKind::Number(x), expr.provenance)),
        NodeKind::Y => Ok(store.alloc(NodeKind::Number(y), expr.provenance)),
        NodeKind::Number(_) | NodeKind::Boolean(_) => Ok(node),
        NodeKind::Random | NodeKind::Rule(_) => Err(EvalError::GrammarOnly {
            provenance: expr.provenance,
            kind: expr.kind.name(),
        }),
        NodeKind::Binary { op, lhs, rhs } => {
            let lhs = evaluate(store, lhs, x, y)?;
            let lhs = expect_number(store, lhs)?;
            let rhs = evaluate(store, rhs, x, y)?;
            let rhs = expect_number(store, rhs)?;
            let kind = match op {
                BinaryOp::Add => NodeKind::Number(lhs + rhs),
                BinaryOp::Mult => NodeKind::Number(lhs * rhs),
                BinaryOp::Mod => NodeKind::Number(lhs % rhs),
                BinaryOp::Gt => NodeKind::Boolean(lhs > rhs),
                BinaryOp::Lt => NodeKind::Boolean(lhs < rhs),
                BinaryOp::Gteq => NodeKind::Boolean(lhs >= rhs),
                BinaryOp::Lteq => NodeKind::Boolean(lhs <= rhs),
            };
            Ok(store.alloc(kind, expr.provenance))
        }
        NodeKind::Triple {
            first,
            second,
            third,
        } => {
            let first = evaluate(store, first, x, y)?;
            let second = evaluate(store, second, x, y)?;
            let third = evaluate(store, third, x, y)?;
            Ok(store.alloc(
                NodeKind::Triple {
                    first,
                    second,
                    third,
                },
                expr.provenance,
            ))
        }
        NodeKind::If { cond, then, elze } => {
            let cond = evaluate(store, cond, x, y)?;
            if expect_boolean(store, cond)? {
                evaluate(store, then, x, y)
            } else {
                evaluate(store, elze, x, y)
            }
        }
    }
}

/// Evaluate `node` and read the result as a color.
///
/// The value must be a `triple` whose three components are numbers. Channels keep whatever range
/// the expression produced.
pub fn evaluate_as_color(
    store: &mut NodeStore,
    node: NodeId,
    x: f32,
    y: f32,
) -> Result<Color, EvalError> {
    let value = evaluate(store, node, x, y)?;
    let NodeKind::Triple {
        first,
        second,
        third,
    } = store.kind(value)
    else {
        return Err(mismatch(store, value, ValueType::Triple));
    };
    Ok(Color::new(
        expect_number(store, first)?,
        expect_number(store, second)?,
        expect_number(store, third)?,
    ))
}

fn expect_number(store: &NodeStore, value: NodeId) -> Result<f32, EvalError> {
    match store.kind(value) {
        NodeKind::Number(n) => Ok(n),
        _ => Err(mismatch(store, value, ValueType::Number)),
    }
}

fn expect_boolean(store: &NodeStore, value: NodeId) -> Result<bool, EvalError> {
    match store.kind(value) {
        NodeKind::Boolean(b) => Ok(b),
        _ => Err(mismatch(store, value, ValueType::Boolean)),
    }
}

fn mismatch(store: &NodeStore, value: NodeId, expected: ValueType) -> EvalError {
    let node = store.get(value);
    EvalError::TypeMismatch {
        provenance: node.provenance,
        expected,
        found: node.kind.name(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
