//! The typed, environment-resolved expression tree.
//!
//! A bound tree is what the binder produces and the emitter consumes. It is
//! a tree proper: the source AST is a tree and binding introduces no sharing
//! beyond handles into the environment, so the whole result is owned by the
//! bind and freed wholesale. Environment handles borrow from the
//! [`Environment`](crate::Environment) the expression was bound against.

use hil2ts_common::{ArithmeticOp, BoundType, InterpolatedVariable, LiteralValue};

use crate::env::{InputVariable, Resource};

/// Handle to the environment entity a variable access resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvHandle<'a> {
    Resource(&'a Resource),
    Variable(&'a InputVariable),
}

/// A resolved variable access.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundVariable<'a> {
    /// The source classification of the accessed name.
    pub var: InterpolatedVariable,
    /// The dotted field path of a resource access, split into elements.
    pub elements: Vec<String>,
    pub expr_type: BoundType,
    /// The resolved environment entity. Absent only for `count.index`,
    /// which resolves against the enclosing resource scope rather than the
    /// environment.
    pub handle: Option<EnvHandle<'a>>,
}

/// A bound expression node.
///
/// The tree is a closed sum; each variant carries its payload and the
/// inferred type is recovered through [`BoundExpr::typ`]. Variants whose
/// type is fixed by construction (`Arithmetic` is always a number, `Output`
/// always a string) do not store it.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundExpr<'a> {
    Arithmetic {
        op: ArithmeticOp,
        exprs: Vec<BoundExpr<'a>>,
    },
    Call {
        func: String,
        expr_type: BoundType,
        args: Vec<BoundExpr<'a>>,
    },
    Conditional {
        expr_type: BoundType,
        cond: Box<BoundExpr<'a>>,
        true_expr: Box<BoundExpr<'a>>,
        false_expr: Box<BoundExpr<'a>>,
    },
    Index {
        expr_type: BoundType,
        target: Box<BoundExpr<'a>>,
        key: Box<BoundExpr<'a>>,
    },
    Literal {
        expr_type: BoundType,
        value: LiteralValue,
    },
    /// A string interpolation with two or more parts; the single-part form
    /// is collapsed away during binding.
    Output {
        exprs: Vec<BoundExpr<'a>>,
    },
    Variable(BoundVariable<'a>),
}

impl BoundExpr<'_> {
    /// The inferred type of this node.
    pub fn typ(&self) -> BoundType {
        match self {
            BoundExpr::Arithmetic { .. } => BoundType::NUMBER,
            BoundExpr::Call { expr_type, .. } => *expr_type,
            BoundExpr::Conditional { expr_type, .. } => *expr_type,
            BoundExpr::Index { expr_type, .. } => *expr_type,
            BoundExpr::Literal { expr_type, .. } => *expr_type,
            BoundExpr::Output { .. } => BoundType::STRING,
            BoundExpr::Variable(var) => var.expr_type,
        }
    }
}
