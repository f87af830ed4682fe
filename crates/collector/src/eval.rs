use crate::error::{CollectorError, Result};
use mcl_syntax::ast::expr::{Expression, ExpressionKind, StringSegment};
use model::core::value::Value;
use std::collections::HashMap;
use tracing::warn;

/// Compile-time evaluation context: the variable bindings visible where the
/// collection statement appears.
pub struct EvalContext<'a> {
    variables: &'a HashMap<String, Value>,
}

impl<'a> EvalContext<'a> {
    pub fn new(variables: &'a HashMap<String, Value>) -> Self {
        EvalContext { variables }
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}

/// Evaluate a terminal filter expression to a scalar at compile time.
///
/// Unresolved variables evaluate to `Null` rather than failing, matching
/// the language's undefined-variable semantics. Non-terminal kinds are a
/// hard error; the filter compilers handle those themselves.
pub fn eval_scalar(expr: &Expression, ctx: &EvalContext<'_>) -> Result<Value> {
    match &expr.kind {
        ExpressionKind::BooleanLiteral(value) => Ok(Value::Boolean(*value)),
        ExpressionKind::StringLiteral(value) => Ok(Value::String(value.clone())),
        ExpressionKind::NumberLiteral(value) => Ok(Value::Float(*value)),
        ExpressionKind::Name(name) => Ok(Value::String(name.clone())),
        ExpressionKind::Variable(name) => Ok(ctx.lookup(name).cloned().unwrap_or_else(|| {
            warn!(variable = %name, "unresolved variable in collection filter");
            Value::Null
        })),
        ExpressionKind::InterpolatedString(segments) => {
            let mut out = String::new();
            for segment in segments {
                match segment {
                    StringSegment::Literal(text) => out.push_str(text),
                    StringSegment::Variable(name) => {
                        match ctx.lookup(name).and_then(Value::as_string) {
                            Some(text) => out.push_str(&text),
                            None => {
                                warn!(variable = %name, "unresolved variable in interpolation");
                            }
                        }
                    }
                }
            }
            Ok(Value::String(out))
        }
        other => Err(CollectorError::UnsupportedExpression(
            other.kind_name().to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcl_syntax::ast::span::Span;

    fn expr(kind: ExpressionKind) -> Expression {
        Expression::new(kind, Span::default())
    }

    #[test]
    fn test_literals() {
        let vars = HashMap::new();
        let ctx = EvalContext::new(&vars);

        assert_eq!(
            eval_scalar(&expr(ExpressionKind::BooleanLiteral(true)), &ctx).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            eval_scalar(&expr(ExpressionKind::NumberLiteral(1.5)), &ctx).unwrap(),
            Value::Float(1.5)
        );
        assert_eq!(
            eval_scalar(&expr(ExpressionKind::Name("mode".to_string())), &ctx).unwrap(),
            Value::from("mode")
        );
    }

    #[test]
    fn test_variable_lookup() {
        let mut vars = HashMap::new();
        vars.insert("env".to_string(), Value::from("prod"));
        let ctx = EvalContext::new(&vars);

        assert_eq!(
            eval_scalar(&expr(ExpressionKind::Variable("env".to_string())), &ctx).unwrap(),
            Value::from("prod")
        );
    }

    #[test]
    fn test_unresolved_variable_is_null() {
        let vars = HashMap::new();
        let ctx = EvalContext::new(&vars);

        assert_eq!(
            eval_scalar(&expr(ExpressionKind::Variable("missing".to_string())), &ctx).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_interpolation() {
        let mut vars = HashMap::new();
        vars.insert("host".to_string(), Value::from("db01"));
        let ctx = EvalContext::new(&vars);

        let segments = vec![
            StringSegment::Literal("name-".to_string()),
            StringSegment::Variable("host".to_string()),
            StringSegment::Variable("gone".to_string()),
        ];
        assert_eq!(
            eval_scalar(&expr(ExpressionKind::InterpolatedString(segments)), &ctx).unwrap(),
            Value::from("name-db01")
        );
    }

    #[test]
    fn test_non_terminal_is_rejected() {
        let vars = HashMap::new();
        let ctx = EvalContext::new(&vars);

        let and = ExpressionKind::And {
            left: Box::new(expr(ExpressionKind::BooleanLiteral(true))),
            right: Box::new(expr(ExpressionKind::BooleanLiteral(false))),
        };
        let err = eval_scalar(&expr(and), &ctx).unwrap_err();
        assert!(matches!(err, CollectorError::UnsupportedExpression(kind) if kind == "and"));
    }
}
