use crate::ast::{operator::ComparisonOperator, span::Span};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: Span,
}

impl Expression {
    pub fn new(kind: ExpressionKind, span: Span) -> Self {
        Expression { kind, span }
    }
}

/// The closed set of node kinds a collection filter may contain. The
/// collector compiler matches exhaustively over this enum, so growing the
/// filter grammar is a compile-time-checked change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    And {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Or {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Comparison {
        left: Box<Expression>,
        operator: ComparisonOperator,
        right: Box<Expression>,
    },
    Variable(String),
    BooleanLiteral(bool),
    StringLiteral(String),
    InterpolatedString(Vec<StringSegment>),
    NumberLiteral(f64),
    Name(String),
    Parenthesized(Box<Expression>),
    /// Empty-filter marker. Valid only as a whole filter, never inside one.
    Nop,
}

impl ExpressionKind {
    /// Stable kind name used in unsupported-expression diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ExpressionKind::And { .. } => "and",
            ExpressionKind::Or { .. } => "or",
            ExpressionKind::Comparison { .. } => "comparison",
            ExpressionKind::Variable(_) => "variable",
            ExpressionKind::BooleanLiteral(_) => "boolean literal",
            ExpressionKind::StringLiteral(_) => "string literal",
            ExpressionKind::InterpolatedString(_) => "interpolated string",
            ExpressionKind::NumberLiteral(_) => "number literal",
            ExpressionKind::Name(_) => "name",
            ExpressionKind::Parenthesized(_) => "parenthesized expression",
            ExpressionKind::Nop => "nop",
        }
    }
}

/// One piece of an interpolated string: literal text or an embedded
/// variable reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StringSegment {
    Literal(String),
    Variable(String),
}
