//! End-to-end tests: source AST in, TypeScript expression out.

mod common;

use hil2ts::{bind, emit, transpile, BindError, BindOptions, EmitContext};
use hil2ts_common::{ArithmeticOp, HilExpr};

use common::{bucket_env, call, lit_bool, lit_int, lit_str, variable};

fn ts(expr: &HilExpr) -> String {
    transpile(
        expr,
        &bucket_env(),
        BindOptions::default(),
        &EmitContext::default(),
    )
    .unwrap()
}

#[test]
fn interpolation_with_variable() {
    let expr = HilExpr::Output(vec![lit_str("hello "), variable("var.name")]);
    assert_eq!(ts(&expr), r#""hello " + name"#);
}

#[test]
fn single_part_interpolation_collapses() {
    let expr = HilExpr::Output(vec![variable("aws_s3_bucket.b.arn")]);
    assert_eq!(ts(&expr), "b.arn");
}

#[test]
fn conditional() {
    let expr = HilExpr::Conditional {
        cond: Box::new(lit_bool(true)),
        true_expr: Box::new(lit_int(1)),
        false_expr: Box::new(lit_int(2)),
    };
    assert_eq!(ts(&expr), "(true ? 1 : 2)");
}

#[test]
fn split_swaps_arguments() {
    let expr = call("split", vec![lit_str(","), lit_str("a,b")]);
    assert_eq!(ts(&expr), r#""a,b".split(",")"#);
}

#[test]
fn count_index_uses_scope_identifier() {
    let env = bucket_env();
    let bound = bind(
        &variable("count.index"),
        &env,
        BindOptions {
            has_count_index: true,
        },
    )
    .unwrap();
    let out = emit(
        &bound,
        &EmitContext {
            count_index: "i".to_string(),
        },
    );
    assert_eq!(out, "i");
}

#[test]
fn count_index_out_of_scope_fails() {
    let result = transpile(
        &variable("count.index"),
        &bucket_env(),
        BindOptions::default(),
        &EmitContext::default(),
    );
    assert_eq!(result.unwrap_err(), BindError::CountIndexNotInScope);
}

#[test]
fn lookup_with_default() {
    let expr = call(
        "lookup",
        vec![variable("aws_s3_bucket.b.tags"), lit_str("k"), lit_str("d")],
    );
    assert_eq!(ts(&expr), r#"((<any>b.tags)["k"] || "d")"#);
}

#[test]
fn lookup_without_default() {
    let expr = call("lookup", vec![variable("aws_s3_bucket.b.tags"), lit_str("k")]);
    assert_eq!(ts(&expr), r#"(<any>b.tags)["k"]"#);
}

#[test]
fn element_indexes_its_argument() {
    let expr = call(
        "element",
        vec![call("split", vec![lit_str(","), lit_str("a,b")]), lit_int(1)],
    );
    assert_eq!(ts(&expr), r#""a,b".split(",")[1]"#);
}

#[test]
fn file_reads_utf8() {
    let expr = call("file", vec![lit_str("init.sh")]);
    assert_eq!(ts(&expr), r#"fs.readFileSync("init.sh", "utf-8")"#);
}

#[test]
fn arithmetic_with_typescript_operator_spellings() {
    let expr = HilExpr::Arithmetic {
        op: ArithmeticOp::Equal,
        exprs: vec![variable("var.name"), lit_str("prod")],
    };
    assert_eq!(ts(&expr), r#"(name === "prod")"#);
}

#[test]
fn nested_arithmetic() {
    let expr = HilExpr::Arithmetic {
        op: ArithmeticOp::Add,
        exprs: vec![
            lit_int(1),
            HilExpr::Arithmetic {
                op: ArithmeticOp::Mul,
                exprs: vec![lit_int(2), lit_int(3)],
            },
        ],
    };
    assert_eq!(ts(&expr), "(1 + (2 * 3))");
}

#[test]
fn all_string_interpolation_concatenates_bare() {
    // Every part is string-typed, so nothing gets template-wrapped.
    let expr = HilExpr::Output(vec![
        lit_str("arn is "),
        variable("aws_s3_bucket.b.arn"),
        lit_str("!"),
    ]);
    assert_eq!(ts(&expr), r#""arn is " + b.arn + "!""#);
}

#[test]
fn non_string_default_variable_is_template_wrapped() {
    // `port` has a numeric default, so its type degrades to unknown and the
    // interpolation part gets template-wrapped instead of concatenated bare.
    let expr = HilExpr::Output(vec![lit_str("port: "), variable("var.port")]);
    assert_eq!(ts(&expr), "\"port: \" + `${port}`");
}

#[test]
fn non_string_interpolation_part_is_template_wrapped() {
    let expr = HilExpr::Output(vec![
        lit_str("n = "),
        HilExpr::Arithmetic {
            op: ArithmeticOp::Add,
            exprs: vec![lit_int(1), lit_int(2)],
        },
    ]);
    assert_eq!(ts(&expr), "\"n = \" + `${(1 + 2)}`");
}

#[test]
fn splat_access_maps_over_instances() {
    let expr = variable("aws_s3_bucket.b.*.arn");
    assert_eq!(ts(&expr), "b.map(v => v.arn)");
}

#[test]
fn indexed_access_subscripts_receiver() {
    let expr = variable("aws_s3_bucket.b.2.arn");
    assert_eq!(ts(&expr), "b[2].arn");
}

#[test]
fn plain_access_on_single_instance_resource() {
    // No splat, no index: the receiver is dotted directly.
    let expr = variable("aws_s3_bucket.b.arn");
    assert_eq!(ts(&expr), "b.arn");
}

// ============================================================================
// Boundary shapes
// ============================================================================

#[test]
fn empty_interpolation_emits_empty_string() {
    let expr = HilExpr::Output(vec![]);
    assert_eq!(ts(&expr), "");
}

#[test]
fn single_operand_arithmetic_is_parenthesized() {
    let expr = HilExpr::Arithmetic {
        op: ArithmeticOp::Add,
        exprs: vec![lit_int(1)],
    };
    assert_eq!(ts(&expr), "(1)");
}

#[test]
fn snake_case_variable_is_camelized() {
    let env = bucket_env().with_variable(hil2ts::InputVariable::new("instance_type"));
    let out = transpile(
        &variable("var.instance_type"),
        &env,
        BindOptions::default(),
        &EmitContext::default(),
    )
    .unwrap();
    assert_eq!(out, "instanceType");
}
