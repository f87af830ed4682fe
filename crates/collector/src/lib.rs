//! Compiles MCL collection statements into collectors.
//!
//! The same filter grammar is lowered into two target representations: an
//! executable [`ResourcePredicate`] applied in-process against candidate
//! resources, and a serializable [`QueryTree`] handed to an external store
//! for exported collection. [`CollectorBuilder`] validates the statement,
//! runs the compilers, and registers the resulting [`Collector`] with the
//! compiling context.

pub mod builder;
pub mod collection;
pub mod compiler;
pub mod error;
pub mod eval;
pub mod overrides;
pub mod predicate;
pub mod query;

pub use builder::CollectorBuilder;
pub use collection::{CollectionSink, Collector};
pub use compiler::FilterCompiler;
pub use error::{CollectorError, Result};
pub use eval::{EvalContext, eval_scalar};
pub use overrides::{OverrideRecord, build_overrides};
pub use predicate::{PredicateCompiler, ResourcePredicate};
pub use query::{QueryTree, QueryTreeCompiler};
