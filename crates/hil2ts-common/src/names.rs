//! Canonicalization of Terraform identifiers into TypeScript identifiers.
//!
//! These conversions are shared with the surrounding program generator so
//! an expression and the declaration it references agree on spelling.

/// Convert a Terraform snake_case (or kebab-case) name to camelCase.
pub fn ts_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        match c {
            '_' | '-' => upper_next = true,
            c if upper_next => {
                out.extend(c.to_uppercase());
                upper_next = false;
            }
            c => out.push(c),
        }
    }
    out
}

/// The identifier under which a resource declared as `<type> "<name>"` is
/// emitted. The type participates in environment resolution, not in the
/// generated name.
pub fn resource_name(_resource_type: &str, name: &str) -> String {
    ts_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_name() {
        assert_eq!(ts_name("name"), "name");
        assert_eq!(ts_name("instance_type"), "instanceType");
        assert_eq!(ts_name("root_block_device_size"), "rootBlockDeviceSize");
        assert_eq!(ts_name("us-east-1"), "usEast1");
    }

    #[test]
    fn test_ts_name_trailing_separator() {
        assert_eq!(ts_name("name_"), "name");
    }

    #[test]
    fn test_resource_name_ignores_type() {
        assert_eq!(resource_name("aws_s3_bucket", "b"), "b");
        assert_eq!(resource_name("aws_instance", "web_server"), "webServer");
    }
}
