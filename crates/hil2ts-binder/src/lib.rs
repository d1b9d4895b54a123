//! Binder for the HIL-to-TypeScript transpiler.
//!
//! This crate turns an untyped interpolation AST into a typed,
//! environment-resolved bound tree. Binding performs three jobs in one
//! recursive pass:
//!
//! - **Type inference**: every bound node carries a
//!   [`BoundType`](hil2ts_common::BoundType) derived from literals, provider
//!   schemas, and input-variable defaults.
//! - **Environment resolution**: variable accesses are resolved to handles
//!   into the hosting [`Environment`]; unknown names fail the bind.
//! - **Structural projection**: a string interpolation with a single part is
//!   collapsed to that part, so the emitter never sees the degenerate form.
//!
//! Binding is pure: it never mutates the source AST or the environment, and
//! binding the same expression twice yields structurally equal trees.
//!
//! # Example
//!
//! ```
//! use hil2ts_binder::{bind, BindOptions, Environment, InputVariable};
//! use hil2ts_common::{BoundType, HilExpr};
//!
//! let env = Environment::new().with_variable(InputVariable::string("name", "x"));
//! let ast = HilExpr::Output(vec![HilExpr::Variable("var.name".to_string())]);
//!
//! let bound = bind(&ast, &env, BindOptions::default()).unwrap();
//! assert_eq!(bound.typ(), BoundType::STRING);
//! ```

mod binder;
mod bound;
mod env;
mod error;
mod schema;

pub use binder::{bind, BindOptions};
pub use bound::{BoundExpr, BoundVariable, EnvHandle};
pub use env::{Environment, InputVariable, Provider, Resource};
pub use error::BindError;
pub use schema::{Elem, FieldInfo, FieldSchema, FieldType, SchemaMap, SchemaPath};
