#![allow(dead_code)]

use collector::{CollectionSink, Collector};
use mcl_syntax::ast::{
    collect::{AttributeOperation, CollectExpression, CollectKind},
    expr::{Expression, ExpressionKind},
    operator::{AttributeOperator, ComparisonOperator},
    span::{SourceLocation, Span},
};
use model::{
    core::value::Value,
    resource::candidate::{CandidateResource, Resource},
};
use std::cell::Cell;
use tracing_subscriber::EnvFilter;

/// Install the test log subscriber; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

pub fn expr(kind: ExpressionKind) -> Expression {
    Expression::new(kind, Span::default())
}

pub fn name(value: &str) -> Expression {
    expr(ExpressionKind::Name(value.to_string()))
}

pub fn string(value: &str) -> Expression {
    expr(ExpressionKind::StringLiteral(value.to_string()))
}

pub fn number(value: f64) -> Expression {
    expr(ExpressionKind::NumberLiteral(value))
}

pub fn variable(value: &str) -> Expression {
    expr(ExpressionKind::Variable(value.to_string()))
}

pub fn eq(left: Expression, right: Expression) -> Expression {
    expr(ExpressionKind::Comparison {
        left: Box::new(left),
        operator: ComparisonOperator::Eq,
        right: Box::new(right),
    })
}

pub fn ne(left: Expression, right: Expression) -> Expression {
    expr(ExpressionKind::Comparison {
        left: Box::new(left),
        operator: ComparisonOperator::Ne,
        right: Box::new(right),
    })
}

pub fn and(left: Expression, right: Expression) -> Expression {
    expr(ExpressionKind::And {
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn or(left: Expression, right: Expression) -> Expression {
    expr(ExpressionKind::Or {
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn parens(inner: Expression) -> Expression {
    expr(ExpressionKind::Parenthesized(Box::new(inner)))
}

pub fn statement(
    kind: CollectKind,
    type_name: &str,
    filter: Option<Expression>,
) -> CollectExpression {
    CollectExpression {
        type_expr: name(type_name),
        kind,
        filter,
        operations: vec![],
        location: SourceLocation::new("site.mcl", 1, 1),
    }
}

pub fn operation(attribute: &str, operator: AttributeOperator, value: Expression) -> AttributeOperation {
    AttributeOperation {
        attribute: attribute.to_string(),
        operator,
        value,
        span: Span::default(),
    }
}

/// Records every registered collector.
#[derive(Default)]
pub struct RecordingSink {
    pub collected: Vec<Collector>,
}

impl CollectionSink for RecordingSink {
    fn add_collection(&mut self, collector: Collector) {
        self.collected.push(collector);
    }
}

/// Candidate that counts attribute lookups, for observing short-circuit
/// evaluation.
pub struct ProbeResource {
    inner: Resource,
    pub lookups: Cell<usize>,
}

impl ProbeResource {
    pub fn new(inner: Resource) -> Self {
        ProbeResource {
            inner,
            lookups: Cell::new(0),
        }
    }
}

impl CandidateResource for ProbeResource {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.attribute(name)
    }

    fn has_tag(&self, value: &Value) -> bool {
        self.inner.has_tag(value)
    }
}
