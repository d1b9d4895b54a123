//! Recursive-descent binder: source AST → bound tree.

use serde_json::Value;

use hil2ts_common::{
    ArithmeticOp, BoundType, HilExpr, InterpolatedVariable, LiteralValue, ResourceIndex,
};

use crate::bound::{BoundExpr, BoundVariable, EnvHandle};
use crate::env::Environment;
use crate::error::BindError;
use crate::schema::SchemaPath;

/// Flags governing a single bind.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindOptions {
    /// Whether the enclosing resource declares `count`, making
    /// `count.index` referenceable.
    pub has_count_index: bool,
}

/// Bind a source expression against an environment.
///
/// Returns the typed, environment-resolved bound tree, or the first error
/// encountered. Binding never mutates `expr` or `env`.
pub fn bind<'a>(
    expr: &HilExpr,
    env: &'a Environment,
    opts: BindOptions,
) -> Result<BoundExpr<'a>, BindError> {
    let binder = Binder {
        env,
        has_count_index: opts.has_count_index,
    };
    binder.bind_expr(expr)
}

struct Binder<'a> {
    env: &'a Environment,
    has_count_index: bool,
}

impl<'a> Binder<'a> {
    fn bind_expr(&self, expr: &HilExpr) -> Result<BoundExpr<'a>, BindError> {
        match expr {
            HilExpr::Arithmetic { op, exprs } => self.bind_arithmetic(*op, exprs),
            HilExpr::Call { func, args } => self.bind_call(func, args),
            HilExpr::Conditional {
                cond,
                true_expr,
                false_expr,
            } => self.bind_conditional(cond, true_expr, false_expr),
            HilExpr::Index { target, key } => self.bind_index(target, key),
            HilExpr::Literal(value) => self.bind_literal(value),
            HilExpr::Output(exprs) => self.bind_output(exprs),
            HilExpr::Variable(name) => self.bind_variable(name),
            _ => Err(BindError::UnexpectedNodeKind),
        }
    }

    fn bind_exprs(&self, exprs: &[HilExpr]) -> Result<Vec<BoundExpr<'a>>, BindError> {
        exprs.iter().map(|e| self.bind_expr(e)).collect()
    }

    fn bind_arithmetic(
        &self,
        op: ArithmeticOp,
        exprs: &[HilExpr],
    ) -> Result<BoundExpr<'a>, BindError> {
        let exprs = self.bind_exprs(exprs)?;
        Ok(BoundExpr::Arithmetic { op, exprs })
    }

    fn bind_call(&self, func: &str, args: &[HilExpr]) -> Result<BoundExpr<'a>, BindError> {
        let args = self.bind_exprs(args)?;

        let expr_type = match func {
            "element" | "lookup" => BoundType::UNKNOWN,
            "file" => BoundType::STRING,
            "split" => BoundType::LIST,
            _ => return Err(BindError::UnsupportedCall(func.to_string())),
        };

        Ok(BoundExpr::Call {
            func: func.to_string(),
            expr_type,
            args,
        })
    }

    fn bind_conditional(
        &self,
        cond: &HilExpr,
        true_expr: &HilExpr,
        false_expr: &HilExpr,
    ) -> Result<BoundExpr<'a>, BindError> {
        let cond = self.bind_expr(cond)?;
        let true_expr = self.bind_expr(true_expr)?;
        let false_expr = self.bind_expr(false_expr)?;

        let mut expr_type = true_expr.typ();
        if expr_type != false_expr.typ() {
            expr_type = BoundType::UNKNOWN;
        }

        Ok(BoundExpr::Conditional {
            expr_type,
            cond: Box::new(cond),
            true_expr: Box::new(true_expr),
            false_expr: Box::new(false_expr),
        })
    }

    fn bind_index(&self, target: &HilExpr, key: &HilExpr) -> Result<BoundExpr<'a>, BindError> {
        let target = self.bind_expr(target)?;
        let key = self.bind_expr(key)?;

        let target_type = target.typ();
        let expr_type = if target_type.is_list() {
            target_type.element_type()
        } else {
            BoundType::UNKNOWN
        };

        Ok(BoundExpr::Index {
            expr_type,
            target: Box::new(target),
            key: Box::new(key),
        })
    }

    fn bind_literal(&self, value: &LiteralValue) -> Result<BoundExpr<'a>, BindError> {
        let expr_type = match value {
            LiteralValue::Bool(_) => BoundType::BOOL,
            LiteralValue::Int(_) | LiteralValue::Float(_) => BoundType::NUMBER,
            LiteralValue::String(_) => BoundType::STRING,
            LiteralValue::List(_) | LiteralValue::Map(_) => {
                return Err(BindError::UnexpectedLiteralType)
            }
        };

        Ok(BoundExpr::Literal {
            expr_type,
            value: value.clone(),
        })
    }

    fn bind_output(&self, exprs: &[HilExpr]) -> Result<BoundExpr<'a>, BindError> {
        let mut exprs = self.bind_exprs(exprs)?;

        // Project a single-part interpolation to the part itself.
        if exprs.len() == 1 {
            return Ok(exprs.remove(0));
        }

        Ok(BoundExpr::Output { exprs })
    }

    fn bind_variable(&self, name: &str) -> Result<BoundExpr<'a>, BindError> {
        let var = InterpolatedVariable::classify(name);

        let (elements, expr_type, handle) = match &var {
            InterpolatedVariable::Count { field } => {
                if field != "index" {
                    return Err(BindError::UnsupportedCountField(field.clone()));
                }
                if !self.has_count_index {
                    return Err(BindError::CountIndexNotInScope);
                }
                (Vec::new(), BoundType::NUMBER, None)
            }
            InterpolatedVariable::Local { .. } => {
                return Err(BindError::NotImplemented("local variables"))
            }
            InterpolatedVariable::Module { .. } => {
                return Err(BindError::NotImplemented("module variables"))
            }
            InterpolatedVariable::Path { .. } => {
                return Err(BindError::NotImplemented("path variables"))
            }
            InterpolatedVariable::SelfRef { .. } => {
                return Err(BindError::NotImplemented("self variables"))
            }
            InterpolatedVariable::Simple { .. } => {
                return Err(BindError::NotImplemented("simple variables"))
            }
            InterpolatedVariable::Terraform { .. } => {
                return Err(BindError::NotImplemented("terraform variables"))
            }
            InterpolatedVariable::User { name, elem } => {
                if elem.is_some() {
                    return Err(BindError::NotImplemented("user variable elements"));
                }

                let variable = self
                    .env
                    .variable(name)
                    .ok_or_else(|| BindError::UnknownVariable(name.clone()))?;

                // A variable without a default is a string. With a default,
                // it is a string iff the default is one; we don't try any
                // harder than that.
                let mut expr_type = BoundType::STRING;
                if let Some(default) = &variable.default {
                    if !matches!(default, Value::String(_)) {
                        expr_type = BoundType::UNKNOWN;
                    }
                }

                (Vec::new(), expr_type, Some(EnvHandle::Variable(variable)))
            }
            InterpolatedVariable::Resource(rv) => {
                let resource = self
                    .env
                    .resource(&rv.resource_id())
                    .ok_or_else(|| BindError::UnknownResource(rv.resource_id()))?;

                let elements: Vec<String> = if rv.field.is_empty() {
                    Vec::new()
                } else {
                    rv.field.split('.').map(str::to_string).collect()
                };

                let mut path = SchemaPath::for_resource(&resource.provider, &rv.resource_type);
                for element in &elements {
                    path = path.descend(element);
                }

                let mut expr_type = path.bound_type();
                if rv.index == Some(ResourceIndex::Splat) {
                    expr_type = expr_type.list_of();
                }

                (elements, expr_type, Some(EnvHandle::Resource(resource)))
            }
        };

        Ok(BoundExpr::Variable(BoundVariable {
            var,
            elements,
            expr_type,
            handle,
        }))
    }
}
