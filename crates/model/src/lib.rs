pub mod core;
pub mod resource;
