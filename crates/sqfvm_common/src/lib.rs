//! Shared foundational types used across the sqfvm toolchain.
//!
//! This crate provides the script value type enumeration carried by runtime
//! diagnostics and the common internal result types.

#![warn(missing_docs)]

pub mod result;
pub mod value_type;

pub use result::{InternalError, SqfResult};
pub use value_type::ValueType;
