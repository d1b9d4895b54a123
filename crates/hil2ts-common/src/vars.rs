//! Classification of interpolated variable names.
//!
//! Terraform distinguishes variable references by the leading path segment
//! of the name inside `${...}`: `var.`, `count.`, `module.`, and so on, with
//! anything else that contains a dot treated as a resource attribute access.
//! `InterpolatedVariable::classify` reproduces that dispatch.

/// Instance selector of a multi-instance resource access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceIndex {
    /// `type.name.*.field`: the field across every instance.
    Splat,
    /// `type.name.<k>.field`: the field of instance `k`.
    Position(usize),
}

/// A resource attribute access: `<type>.<name>[.<index>].<field>...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceVariable {
    /// The resource type, e.g. `aws_s3_bucket`.
    pub resource_type: String,
    /// The configuration name of the resource.
    pub name: String,
    /// The dotted field path after the name (and index, if any). May be
    /// empty when the reference stops at the resource itself.
    pub field: String,
    /// Present when the reference selects among multiple instances.
    pub index: Option<ResourceIndex>,
}

impl ResourceVariable {
    /// The id under which the environment hosts this resource.
    pub fn resource_id(&self) -> String {
        format!("{}.{}", self.resource_type, self.name)
    }

    /// Whether this access addresses a multi-instance resource.
    pub fn is_multi(&self) -> bool {
        self.index.is_some()
    }
}

/// An interpolated variable, classified by its name prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpolatedVariable {
    /// `count.<field>`: loop metadata inside a multi-instance resource.
    Count { field: String },
    /// `local.<name>`: a local value.
    Local { name: String },
    /// `module.<name>.<field>`: a module output.
    Module { name: String, field: String },
    /// `path.<kind>`: workspace paths (`path.module`, `path.root`, ...).
    Path { kind: String },
    /// `self.<field>`: self-reference inside a provisioner.
    SelfRef { field: String },
    /// A bare name with no dots.
    Simple { name: String },
    /// `terraform.<field>`: terraform metadata.
    Terraform { field: String },
    /// `var.<name>[.<elem>]`: an input variable, with an optional element
    /// path into a collection-typed variable.
    User { name: String, elem: Option<String> },
    /// Everything else with a dot: a resource attribute access.
    Resource(ResourceVariable),
}

impl InterpolatedVariable {
    /// Classify a raw interpolation variable name.
    pub fn classify(name: &str) -> InterpolatedVariable {
        if let Some(rest) = name.strip_prefix("count.") {
            return InterpolatedVariable::Count {
                field: rest.to_string(),
            };
        }
        if let Some(rest) = name.strip_prefix("local.") {
            return InterpolatedVariable::Local {
                name: rest.to_string(),
            };
        }
        if let Some(rest) = name.strip_prefix("module.") {
            let (name, field) = rest.split_once('.').unwrap_or((rest, ""));
            return InterpolatedVariable::Module {
                name: name.to_string(),
                field: field.to_string(),
            };
        }
        if let Some(rest) = name.strip_prefix("path.") {
            return InterpolatedVariable::Path {
                kind: rest.to_string(),
            };
        }
        if let Some(rest) = name.strip_prefix("self.") {
            return InterpolatedVariable::SelfRef {
                field: rest.to_string(),
            };
        }
        if let Some(rest) = name.strip_prefix("terraform.") {
            return InterpolatedVariable::Terraform {
                field: rest.to_string(),
            };
        }
        if let Some(rest) = name.strip_prefix("var.") {
            let (name, elem) = match rest.split_once('.') {
                Some((name, elem)) => (name.to_string(), Some(elem.to_string())),
                None => (rest.to_string(), None),
            };
            return InterpolatedVariable::User { name, elem };
        }
        if !name.contains('.') {
            return InterpolatedVariable::Simple {
                name: name.to_string(),
            };
        }
        InterpolatedVariable::Resource(parse_resource(name))
    }
}

/// Parse `<type>.<name>[.<index>].<field>...` into its parts.
///
/// The segment after the name selects an instance only when it is `*` or a
/// non-negative integer with a field following it; a trailing `*` or
/// integer with no field is an ordinary field access.
fn parse_resource(name: &str) -> ResourceVariable {
    let mut parts = name.splitn(3, '.');
    let resource_type = parts.next().unwrap_or("").to_string();
    let res_name = parts.next().unwrap_or("").to_string();
    let rest = parts.next().unwrap_or("");

    let (index, field) = match rest.split_once('.') {
        Some(("*", field)) => (Some(ResourceIndex::Splat), field),
        Some((seg, field)) => match seg.parse::<usize>() {
            Ok(k) => (Some(ResourceIndex::Position(k)), field),
            Err(_) => (None, rest),
        },
        None => (None, rest),
    };

    ResourceVariable {
        resource_type,
        name: res_name,
        field: field.to_string(),
        index,
    }
}
