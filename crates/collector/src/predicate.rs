use crate::{
    compiler::FilterCompiler,
    error::{CollectorError, Result},
    eval::{EvalContext, eval_scalar},
};
use mcl_syntax::ast::{
    expr::{Expression, ExpressionKind},
    operator::ComparisonOperator,
};
use model::{
    core::{compare::CompareOperator, value::Value},
    resource::candidate::CandidateResource,
};
use std::fmt;
use std::sync::Arc;

/// Attribute name with tag-membership semantics under `==`.
pub const TAG_ATTRIBUTE: &str = "tag";

/// Executable form of a collection filter: a pure test over one candidate
/// resource. Closes only over compile-time-constant operands, so it is
/// safe to invoke repeatedly and concurrently.
#[derive(Clone)]
pub struct ResourcePredicate {
    test: Arc<dyn Fn(&dyn CandidateResource) -> bool + Send + Sync>,
}

impl ResourcePredicate {
    pub fn new(test: impl Fn(&dyn CandidateResource) -> bool + Send + Sync + 'static) -> Self {
        ResourcePredicate {
            test: Arc::new(test),
        }
    }

    pub fn matches(&self, resource: &dyn CandidateResource) -> bool {
        (self.test)(resource)
    }
}

impl fmt::Debug for ResourcePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResourcePredicate")
    }
}

/// Intermediate result of compiling one filter node: either a finished
/// test, or a scalar operand waiting for its enclosing comparison.
enum QueryPart {
    Test(ResourcePredicate),
    Operand(Value),
}

/// Lowers a filter expression into a [`ResourcePredicate`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PredicateCompiler {
    compare: CompareOperator,
}

impl PredicateCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    fn compile_part(&self, expr: &Expression, ctx: &EvalContext<'_>) -> Result<QueryPart> {
        match &expr.kind {
            ExpressionKind::And { left, right } => {
                let left = self.compile_test(left, ctx)?;
                let right = self.compile_test(right, ctx)?;
                Ok(QueryPart::Test(ResourcePredicate::new(move |resource| {
                    left.matches(resource) && right.matches(resource)
                })))
            }
            ExpressionKind::Or { left, right } => {
                let left = self.compile_test(left, ctx)?;
                let right = self.compile_test(right, ctx)?;
                Ok(QueryPart::Test(ResourcePredicate::new(move |resource| {
                    left.matches(resource) || right.matches(resource)
                })))
            }
            ExpressionKind::Comparison {
                left,
                operator,
                right,
            } => self
                .compile_comparison(left, *operator, right, ctx)
                .map(QueryPart::Test),
            ExpressionKind::Parenthesized(inner) => self.compile_part(inner, ctx),
            ExpressionKind::Variable(_)
            | ExpressionKind::BooleanLiteral(_)
            | ExpressionKind::StringLiteral(_)
            | ExpressionKind::InterpolatedString(_)
            | ExpressionKind::NumberLiteral(_)
            | ExpressionKind::Name(_) => Ok(QueryPart::Operand(eval_scalar(expr, ctx)?)),
            ExpressionKind::Nop => Err(CollectorError::UnsupportedExpression(
                expr.kind.kind_name().to_string(),
            )),
        }
    }

    fn compile_test(&self, expr: &Expression, ctx: &EvalContext<'_>) -> Result<ResourcePredicate> {
        match self.compile_part(expr, ctx)? {
            QueryPart::Test(predicate) => Ok(predicate),
            QueryPart::Operand(_) => Err(CollectorError::UnsupportedExpression(
                expr.kind.kind_name().to_string(),
            )),
        }
    }

    fn compile_operand(&self, expr: &Expression, ctx: &EvalContext<'_>) -> Result<Value> {
        match self.compile_part(expr, ctx)? {
            QueryPart::Operand(value) => Ok(value),
            QueryPart::Test(_) => Err(CollectorError::UnsupportedExpression(
                expr.kind.kind_name().to_string(),
            )),
        }
    }

    fn compile_comparison(
        &self,
        left: &Expression,
        operator: ComparisonOperator,
        right: &Expression,
        ctx: &EvalContext<'_>,
    ) -> Result<ResourcePredicate> {
        let left_value = self.compile_operand(left, ctx)?;
        let right_value = self.compile_operand(right, ctx)?;
        let compare = self.compare;

        match operator {
            ComparisonOperator::Eq => {
                if matches!(&left_value, Value::String(name) if name == TAG_ATTRIBUTE) {
                    return Ok(ResourcePredicate::new(move |resource| {
                        resource.has_tag(&right_value)
                    }));
                }
                let attribute = left_value.as_string().unwrap_or_default();
                Ok(ResourcePredicate::new(move |resource| {
                    match resource.attribute(&attribute) {
                        Some(Value::Array(items)) => compare.contains(items, &right_value),
                        Some(value) => compare.equals(value, &right_value),
                        None => compare.equals(&Value::Null, &right_value),
                    }
                }))
            }
            // `!=` is the plain negation of equality on the raw attribute
            // value. Unlike `==` it applies neither tag-membership nor
            // array-inclusion semantics; downstream behavior relies on
            // this asymmetry.
            ComparisonOperator::Ne => {
                let attribute = left_value.as_string().unwrap_or_default();
                Ok(ResourcePredicate::new(move |resource| {
                    let value = resource.attribute(&attribute).cloned().unwrap_or(Value::Null);
                    !compare.equals(&value, &right_value)
                }))
            }
        }
    }
}

impl FilterCompiler for PredicateCompiler {
    type Output = ResourcePredicate;

    fn compile(&self, expr: &Expression, ctx: &EvalContext<'_>) -> Result<ResourcePredicate> {
        self.compile_test(expr, ctx)
    }
}
