pub mod compare;
pub mod value;
