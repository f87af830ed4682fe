//! AST for the MCL configuration language, reduced to the constructs a
//! collection statement can contain. Parsing lives elsewhere; this crate
//! only defines the tree shapes the collector compiler consumes.

pub mod ast;
