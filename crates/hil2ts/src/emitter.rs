//! Bound tree → TypeScript source.
//!
//! The emitter prints a compact linearized expression; it does no
//! pretty-printing. Deferred (output-typed) values are currently emitted as
//! ordinary references. Folding nested deferred references into a top-level
//! combinator application is a future tree-to-tree pass over the bound tree,
//! slotting in between binding and emission.
//!
//! Emission is total over well-typed bound trees. A malformed tree (a call
//! to a function the binder never admits, an aggregate literal, a variable
//! kind the binder rejects) is a contract violation and panics.

use std::fmt::Write;

use hil2ts_binder::{BoundExpr, BoundVariable};
use hil2ts_common::{
    names, ArithmeticOp, BoundType, InterpolatedVariable, LiteralValue, ResourceIndex,
};

/// Context for a single emission.
#[derive(Debug, Clone, Default)]
pub struct EmitContext {
    /// The identifier a `count.index` reference resolves to in the enclosing
    /// resource scope.
    pub count_index: String,
}

/// Emit a bound expression as TypeScript source.
///
/// The result carries no surrounding statement punctuation; it is intended
/// for inline embedding in a larger generated program.
pub fn emit(expr: &BoundExpr<'_>, ctx: &EmitContext) -> String {
    let mut emitter = Emitter {
        out: String::new(),
        count_index: &ctx.count_index,
    };
    emitter.emit_expr(expr);
    emitter.out
}

struct Emitter<'c> {
    out: String,
    count_index: &'c str,
}

impl Emitter<'_> {
    fn emit_expr(&mut self, expr: &BoundExpr<'_>) {
        match expr {
            BoundExpr::Arithmetic { op, exprs } => self.emit_arithmetic(*op, exprs),
            BoundExpr::Call { func, args, .. } => self.emit_call(func, args),
            BoundExpr::Conditional {
                cond,
                true_expr,
                false_expr,
                ..
            } => self.emit_conditional(cond, true_expr, false_expr),
            BoundExpr::Index { target, key, .. } => self.emit_index(target, key),
            BoundExpr::Literal { value, .. } => self.emit_literal(value),
            BoundExpr::Output { exprs } => self.emit_output(exprs),
            BoundExpr::Variable(var) => self.emit_variable(var),
        }
    }

    fn emit_arithmetic(&mut self, op: ArithmeticOp, exprs: &[BoundExpr<'_>]) {
        self.out.push('(');
        for (i, expr) in exprs.iter().enumerate() {
            if i != 0 {
                self.out.push(' ');
                self.out.push_str(op_symbol(op));
                self.out.push(' ');
            }
            self.emit_expr(expr);
        }
        self.out.push(')');
    }

    fn emit_call(&mut self, func: &str, args: &[BoundExpr<'_>]) {
        match func {
            "element" => {
                self.emit_expr(&args[0]);
                self.out.push('[');
                self.emit_expr(&args[1]);
                self.out.push(']');
            }
            "file" => {
                self.out.push_str("fs.readFileSync(");
                self.emit_expr(&args[0]);
                self.out.push_str(", \"utf-8\")");
            }
            "lookup" => {
                let has_default = args.len() == 3;
                if has_default {
                    self.out.push('(');
                }
                self.out.push_str("(<any>");
                self.emit_expr(&args[0]);
                self.out.push_str(")[");
                self.emit_expr(&args[1]);
                self.out.push(']');
                if has_default {
                    self.out.push_str(" || ");
                    self.emit_expr(&args[2]);
                    self.out.push(')');
                }
            }
            // Terraform passes the separator first; the target method hangs
            // off the string.
            "split" => {
                self.emit_expr(&args[1]);
                self.out.push_str(".split(");
                self.emit_expr(&args[0]);
                self.out.push(')');
            }
            _ => panic!("unexpected function in emit_call: {func}"),
        }
    }

    fn emit_conditional(
        &mut self,
        cond: &BoundExpr<'_>,
        true_expr: &BoundExpr<'_>,
        false_expr: &BoundExpr<'_>,
    ) {
        self.out.push('(');
        self.emit_expr(cond);
        self.out.push_str(" ? ");
        self.emit_expr(true_expr);
        self.out.push_str(" : ");
        self.emit_expr(false_expr);
        self.out.push(')');
    }

    fn emit_index(&mut self, target: &BoundExpr<'_>, key: &BoundExpr<'_>) {
        self.emit_expr(target);
        self.out.push('[');
        self.emit_expr(key);
        self.out.push(']');
    }

    fn emit_literal(&mut self, value: &LiteralValue) {
        match value {
            LiteralValue::Bool(b) => {
                let _ = write!(self.out, "{b}");
            }
            LiteralValue::Int(n) => {
                let _ = write!(self.out, "{n}");
            }
            LiteralValue::Float(f) => {
                let _ = write!(self.out, "{f}");
            }
            LiteralValue::String(s) => self.emit_quoted(s),
            LiteralValue::List(_) | LiteralValue::Map(_) => {
                panic!("unexpected aggregate literal in emit_literal")
            }
        }
    }

    fn emit_output(&mut self, exprs: &[BoundExpr<'_>]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.out.push_str(" + ");
            }
            if expr.typ() == BoundType::STRING {
                self.emit_expr(expr);
            } else {
                self.out.push_str("`${");
                self.emit_expr(expr);
                self.out.push_str("}`");
            }
        }
    }

    fn emit_variable(&mut self, var: &BoundVariable<'_>) {
        match &var.var {
            InterpolatedVariable::Count { .. } => self.out.push_str(self.count_index),
            InterpolatedVariable::Resource(rv) => {
                let mut receiver = names::resource_name(&rv.resource_type, &rv.name);
                let mut accessor = var.elements.join(".");
                match rv.index {
                    Some(ResourceIndex::Splat) => {
                        accessor = format!("map(v => v.{accessor})");
                    }
                    Some(ResourceIndex::Position(k)) => {
                        receiver = format!("{receiver}[{k}]");
                    }
                    None => {}
                }
                self.out.push_str(&receiver);
                self.out.push('.');
                self.out.push_str(&accessor);
            }
            InterpolatedVariable::User { name, .. } => {
                self.out.push_str(&names::ts_name(name));
            }
            other => panic!("unexpected variable kind in emit_variable: {other:?}"),
        }
    }

    /// Double-quoted string with the C-style escape set.
    fn emit_quoted(&mut self, s: &str) {
        self.out.push('"');
        for c in s.chars() {
            match c {
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(self.out, "\\u{:04x}", c as u32);
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }
}

fn op_symbol(op: ArithmeticOp) -> &'static str {
    match op {
        ArithmeticOp::Add => "+",
        ArithmeticOp::Sub => "-",
        ArithmeticOp::Mul => "*",
        ArithmeticOp::Div => "/",
        ArithmeticOp::Mod => "%",
        ArithmeticOp::LogicalAnd => "&&",
        ArithmeticOp::LogicalOr => "||",
        ArithmeticOp::Equal => "===",
        ArithmeticOp::NotEqual => "!==",
        ArithmeticOp::LessThan => "<",
        ArithmeticOp::LessThanOrEqual => "<=",
        ArithmeticOp::GreaterThan => ">",
        ArithmeticOp::GreaterThanOrEqual => ">=",
    }
}
