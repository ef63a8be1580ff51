//! Value types used as comparison operands

pub mod value;

pub use value::Value;
