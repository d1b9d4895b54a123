//! Common types for the HIL-to-TypeScript transpiler.
//!
//! This crate provides the foundational types shared across the transpiler
//! crates:
//!
//! - **Source AST**: `HilExpr` and friends, the shape of a parsed Terraform
//!   interpolation expression as handed to the binder.
//! - **Variable classification**: `InterpolatedVariable`, the prefix-based
//!   classification of `${...}` variable names (`var.*`, `count.index`,
//!   resource attributes, and the rest).
//! - **Bound types**: `BoundType`, the bit-encoded type lattice the binder
//!   attaches to every bound node.
//! - **Names**: canonicalization of Terraform identifiers into TypeScript
//!   identifiers, shared with the surrounding program generator.

mod ast;
mod types;
mod vars;

pub mod names;

pub use ast::{ArithmeticOp, HilExpr, LiteralValue};
pub use types::BoundType;
pub use vars::{InterpolatedVariable, ResourceIndex, ResourceVariable};
