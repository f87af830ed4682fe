use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators allowed in a collection filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Eq,
    Ne,
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOperator::Eq => write!(f, "=="),
            ComparisonOperator::Ne => write!(f, "!="),
        }
    }
}

/// Attribute-operation operators: plain assignment or the append form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeOperator {
    Assign,
    Append,
}

impl AttributeOperator {
    pub fn is_append(&self) -> bool {
        matches!(self, AttributeOperator::Append)
    }
}

impl fmt::Display for AttributeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeOperator::Assign => write!(f, "=>"),
            AttributeOperator::Append => write!(f, "+>"),
        }
    }
}
