//! Constant values shared by the tcrypt primitives

pub mod hash;
pub mod ternary;
