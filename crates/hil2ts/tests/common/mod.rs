//! Shared fixtures for the transpiler integration tests.

use std::sync::Arc;

use hil2ts::{Environment, FieldSchema, InputVariable, Provider, Resource, SchemaMap};
use hil2ts_common::{HilExpr, LiteralValue};

/// An environment with one S3 bucket (`aws_s3_bucket.b`, string `arn`,
/// string-map `tags`) and two input variables: `name` with a string
/// default and `port` with a numeric default.
#[allow(dead_code)]
pub fn bucket_env() -> Environment {
    let mut provider = Provider::default();
    provider.resources.insert(
        "aws_s3_bucket".to_string(),
        SchemaMap::from_iter([
            ("arn".to_string(), FieldSchema::string()),
            ("tags".to_string(), FieldSchema::map(FieldSchema::string())),
        ]),
    );
    let provider = Arc::new(provider);

    Environment::new()
        .with_resource(Resource::new("aws_s3_bucket", "b", provider))
        .with_variable(InputVariable::string("name", "x"))
        .with_variable(InputVariable::with_default("port", serde_json::json!(8080)))
}

#[allow(dead_code)]
pub fn lit_str(s: &str) -> HilExpr {
    HilExpr::Literal(LiteralValue::String(s.to_string()))
}

#[allow(dead_code)]
pub fn lit_int(n: i64) -> HilExpr {
    HilExpr::Literal(LiteralValue::Int(n))
}

#[allow(dead_code)]
pub fn lit_bool(b: bool) -> HilExpr {
    HilExpr::Literal(LiteralValue::Bool(b))
}

#[allow(dead_code)]
pub fn variable(name: &str) -> HilExpr {
    HilExpr::Variable(name.to_string())
}

#[allow(dead_code)]
pub fn call(func: &str, args: Vec<HilExpr>) -> HilExpr {
    HilExpr::Call {
        func: func.to_string(),
        args,
    }
}
