use crate::core::value::Value;

/// Type-aware equality and membership used when a compiled predicate is
/// applied to a candidate resource. Numeric values compare numerically
/// across Int/Float, strings by content; values of incompatible types are
/// never equal.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompareOperator;

impl CompareOperator {
    pub fn equals(&self, left: &Value, right: &Value) -> bool {
        use Value::*;

        match (left, right) {
            (Int(l), Int(r)) => l == r,
            (Int(_), Float(_)) | (Float(_), Int(_)) | (Float(_), Float(_)) => {
                match (left.as_f64(), right.as_f64()) {
                    (Some(l), Some(r)) => (l - r).abs() < f64::EPSILON,
                    _ => false,
                }
            }
            (String(l), String(r)) => l == r,
            (Boolean(l), Boolean(r)) => l == r,
            (Array(l), Array(r)) => {
                l.len() == r.len() && l.iter().zip(r).all(|(a, b)| self.equals(a, b))
            }
            (Null, Null) => true,
            _ => false,
        }
    }

    /// True when any element of `items` equals `value`.
    pub fn contains(&self, items: &[Value], value: &Value) -> bool {
        items.iter().any(|item| self.equals(item, value))
    }
}
