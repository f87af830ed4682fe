pub mod collect;
pub mod expr;
pub mod operator;
pub mod span;
