use crate::{error::Result, eval::EvalContext};
use mcl_syntax::ast::expr::Expression;

/// A trait for compiling a filter expression into a specific target
/// representation.
///
/// The two implementations walk the same grammar but produce structurally
/// different results, so each keeps its own exhaustive dispatch over the
/// node kinds.
pub trait FilterCompiler {
    /// The representation this compiler produces.
    type Output;

    /// Compile the filter AST, evaluating terminal operands against `ctx`.
    fn compile(&self, expr: &Expression, ctx: &EvalContext<'_>) -> Result<Self::Output>;
}
