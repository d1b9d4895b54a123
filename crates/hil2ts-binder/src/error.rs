//! Binder error kinds surfaced at the crate boundary.

use thiserror::Error;

/// Errors produced while binding a source expression.
///
/// Every variant is recoverable at the call site: the caller may abort the
/// enclosing translation unit or skip the expression. A bind either succeeds
/// or fails with one of these; no partial bound tree is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A resource access named a resource the environment does not host.
    #[error("unknown resource {0}")]
    UnknownResource(String),

    /// A `var.` access named an input variable the environment does not host.
    #[error("unknown variable {0}")]
    UnknownVariable(String),

    /// A `count.` access to a field other than `index`.
    #[error("unsupported count variable count.{0}")]
    UnsupportedCountField(String),

    /// `count.index` referenced outside a counted resource.
    #[error("no count index in scope")]
    CountIndexNotInScope,

    /// A call to a function outside the supported set.
    #[error("NYI: call to {0}")]
    UnsupportedCall(String),

    /// A variable kind this revision does not translate.
    #[error("NYI: {0}")]
    NotImplemented(&'static str),

    /// A source AST node kind the binder does not recognize.
    #[error("unexpected source node kind")]
    UnexpectedNodeKind,

    /// A literal whose value is not one of the four scalar kinds.
    #[error("unexpected literal type")]
    UnexpectedLiteralType,
}
