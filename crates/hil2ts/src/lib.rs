//! Transpiler core turning Terraform interpolation expressions into
//! equivalent TypeScript expressions.
//!
//! The core is a two-pass expression compiler:
//!
//! - [`bind`] walks the untyped interpolation AST and produces a typed,
//!   environment-resolved bound tree, resolving resource and input-variable
//!   references against an [`Environment`] and deriving types from provider
//!   schemas.
//! - [`emit`] walks the bound tree and prints a compact TypeScript
//!   expression, using the bound types to choose between value-level and
//!   string-interpolation output forms.
//!
//! The interpolation parser, the graph model hosting resources, and the
//! program generator that wraps emitted expressions in declarations are all
//! external collaborators; this crate only consumes their narrow contracts.
//!
//! # Quick Start
//!
//! ```
//! use hil2ts::{transpile, BindOptions, EmitContext, Environment, InputVariable};
//! use hil2ts_common::{HilExpr, LiteralValue};
//!
//! let env = Environment::new().with_variable(InputVariable::string("name", "x"));
//!
//! // The AST for `hello ${var.name}`, as the interpolation parser produces it.
//! let ast = HilExpr::Output(vec![
//!     HilExpr::Literal(LiteralValue::String("hello ".to_string())),
//!     HilExpr::Variable("var.name".to_string()),
//! ]);
//!
//! let ts = transpile(&ast, &env, BindOptions::default(), &EmitContext::default()).unwrap();
//! assert_eq!(ts, r#""hello " + name"#);
//! ```

pub mod emitter;

pub use emitter::{emit, EmitContext};

pub use hil2ts_binder::{
    bind, BindError, BindOptions, BoundExpr, BoundVariable, Elem, EnvHandle, Environment,
    FieldInfo, FieldSchema, FieldType, InputVariable, Provider, Resource, SchemaMap, SchemaPath,
};
pub use hil2ts_common::{
    names, ArithmeticOp, BoundType, HilExpr, InterpolatedVariable, LiteralValue, ResourceIndex,
    ResourceVariable,
};

/// Bind and emit in one step.
///
/// Convenience for callers that have no use for the intermediate bound
/// tree. Errors are binding errors; emission of a successfully bound tree
/// cannot fail.
pub fn transpile(
    expr: &HilExpr,
    env: &Environment,
    opts: BindOptions,
    ctx: &EmitContext,
) -> Result<String, BindError> {
    let bound = bind(expr, env, opts)?;
    Ok(emit(&bound, ctx))
}
