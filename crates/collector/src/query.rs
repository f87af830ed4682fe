use crate::{
    compiler::FilterCompiler,
    error::{CollectorError, Result},
    eval::{EvalContext, eval_scalar},
};
use mcl_syntax::ast::expr::{Expression, ExpressionKind};
use model::core::value::Value;
use serde::{Serialize, Serializer};

/// Serializable form of a collection filter for an external query backend.
///
/// The wire shape is a compatibility surface: every binary node serializes
/// as the 3-element array `[left, operator, right]` with the operator text
/// exactly as it appears in source (`"and"`, `"or"`, `"=="`, `"!="`), and
/// terminals as bare scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryTree {
    Branch {
        left: Box<QueryTree>,
        operator: String,
        right: Box<QueryTree>,
    },
    Scalar(Value),
}

impl QueryTree {
    pub fn branch(left: QueryTree, operator: &str, right: QueryTree) -> Self {
        QueryTree::Branch {
            left: Box::new(left),
            operator: operator.to_string(),
            right: Box::new(right),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            QueryTree::Branch {
                left,
                operator,
                right,
            } => serde_json::Value::Array(vec![
                left.to_json(),
                serde_json::Value::from(operator.clone()),
                right.to_json(),
            ]),
            QueryTree::Scalar(value) => value.to_json(),
        }
    }
}

impl Serialize for QueryTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Lowers a filter expression into a [`QueryTree`]. Both comparison
/// operands are opaque scalars here; interpreting the left side as an
/// attribute name is the backend's concern.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryTreeCompiler;

impl QueryTreeCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl FilterCompiler for QueryTreeCompiler {
    type Output = QueryTree;

    fn compile(&self, expr: &Expression, ctx: &EvalContext<'_>) -> Result<QueryTree> {
        match &expr.kind {
            ExpressionKind::And { left, right } => Ok(QueryTree::branch(
                self.compile(left, ctx)?,
                "and",
                self.compile(right, ctx)?,
            )),
            ExpressionKind::Or { left, right } => Ok(QueryTree::branch(
                self.compile(left, ctx)?,
                "or",
                self.compile(right, ctx)?,
            )),
            ExpressionKind::Comparison {
                left,
                operator,
                right,
            } => Ok(QueryTree::branch(
                self.compile(left, ctx)?,
                &operator.to_string(),
                self.compile(right, ctx)?,
            )),
            ExpressionKind::Parenthesized(inner) => self.compile(inner, ctx),
            ExpressionKind::Variable(_)
            | ExpressionKind::BooleanLiteral(_)
            | ExpressionKind::StringLiteral(_)
            | ExpressionKind::InterpolatedString(_)
            | ExpressionKind::NumberLiteral(_)
            | ExpressionKind::Name(_) => Ok(QueryTree::Scalar(eval_scalar(expr, ctx)?)),
            ExpressionKind::Nop => Err(CollectorError::UnsupportedExpression(
                expr.kind.kind_name().to_string(),
            )),
        }
    }
}
