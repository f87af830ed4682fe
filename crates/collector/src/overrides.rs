use mcl_syntax::ast::{
    collect::{AttributeOperation, CollectExpression},
    expr::Expression,
    span::SourceLocation,
};
use serde::{Deserialize, Serialize};

/// A deferred attribute override applied to every resource a collector
/// matches. The value expression is kept unevaluated; the collaborator
/// that applies overrides evaluates it against its own context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideRecord {
    pub attribute: String,
    pub value: Expression,
    /// True for the `+>` append form.
    pub additive: bool,
    pub location: SourceLocation,
}

impl OverrideRecord {
    fn from_operation(operation: &AttributeOperation, location: &SourceLocation) -> Self {
        OverrideRecord {
            attribute: operation.attribute.clone(),
            value: operation.value.clone(),
            additive: operation.operator.is_append(),
            location: location.clone(),
        }
    }
}

/// Build the override records for a statement, in source order. Repeated
/// overrides of one attribute are passed through as-is; resolving them is
/// the applying collaborator's concern. A statement without operations
/// yields `None`, distinguishable from an empty override list.
pub fn build_overrides(statement: &CollectExpression) -> Option<Vec<OverrideRecord>> {
    if statement.operations.is_empty() {
        return None;
    }
    Some(
        statement
            .operations
            .iter()
            .map(|operation| OverrideRecord::from_operation(operation, &statement.location))
            .collect(),
    )
}
