use crate::ast::{
    expr::{Expression, ExpressionKind},
    operator::AttributeOperator,
    span::{SourceLocation, Span},
};
use serde::{Deserialize, Serialize};

/// Where a collection statement matches: resources declared in the current
/// compilation (`<| ... |>`) or resources exported by other compilations
/// (`<<| ... |>>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectKind {
    Virtual,
    Exported,
}

/// A parsed collection statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectExpression {
    /// Must be a simple type `Name` to be collectable.
    pub type_expr: Expression,
    pub kind: CollectKind,
    /// The boolean filter, if any. `None` and `Nop` both mean
    /// "match everything".
    pub filter: Option<Expression>,
    /// Attribute overrides in source order.
    pub operations: Vec<AttributeOperation>,
    pub location: SourceLocation,
}

impl CollectExpression {
    /// The filter expression, unless it is absent or the no-op marker.
    pub fn filter_expr(&self) -> Option<&Expression> {
        self.filter
            .as_ref()
            .filter(|expr| !matches!(expr.kind, ExpressionKind::Nop))
    }
}

/// One `name => expr` or `name +> expr` operation in the statement body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeOperation {
    pub attribute: String,
    pub operator: AttributeOperator,
    pub value: Expression,
    pub span: Span,
}
