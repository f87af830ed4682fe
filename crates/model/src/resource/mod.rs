pub mod candidate;
pub mod registry;
