//! Constant values for tcrypt cryptographic operations
//!
//! This crate provides the constants and parameter sets used across the tcrypt
//! project. It has no dependencies and is always `no_std`.

#![no_std]

pub mod pqc;
pub mod utils;
