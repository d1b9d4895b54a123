//! Read-only lookup environment for binding.
//!
//! The environment hosts the resources and input variables an expression may
//! reference. It is a narrow view over the caller's graph model: the binder
//! only ever looks entities up by id, it never walks or mutates the graph.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{FieldInfo, SchemaMap};

/// An input variable declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputVariable {
    pub name: String,
    /// The declared default, if any. Defaults are arbitrary Terraform
    /// values; binding only cares whether one is a string.
    pub default: Option<Value>,
}

impl InputVariable {
    /// A variable with no default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// A variable with a string default.
    pub fn string(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Some(Value::String(default.into())),
        }
    }

    /// A variable with an arbitrary default value.
    pub fn with_default(name: impl Into<String>, default: Value) -> Self {
        Self {
            name: name.into(),
            default: Some(default),
        }
    }
}

/// A provider binding: field schemas and target-language metadata for every
/// resource type the provider serves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Provider {
    /// Field schemas keyed by resource type name.
    pub resources: IndexMap<String, SchemaMap>,
    /// Renaming tables keyed by resource type name.
    pub overrides: IndexMap<String, FieldInfo>,
}

/// A resource declaration hosted by the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub resource_type: String,
    pub name: String,
    /// The provider serving this resource. Providers are shared between the
    /// resources they serve; the environment never owns one exclusively.
    pub provider: Arc<Provider>,
}

impl Resource {
    pub fn new(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        provider: Arc<Provider>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
            provider,
        }
    }

    /// The id under which the environment hosts this resource.
    pub fn id(&self) -> String {
        format!("{}.{}", self.resource_type, self.name)
    }
}

/// The resources and input variables visible to a bind.
///
/// Lookups are by id; registration order is preserved so that iteration by
/// the surrounding program generator is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    resources: IndexMap<String, Resource>,
    variables: IndexMap<String, InputVariable>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource (builder form).
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.add_resource(resource);
        self
    }

    /// Add an input variable (builder form).
    pub fn with_variable(mut self, variable: InputVariable) -> Self {
        self.add_variable(variable);
        self
    }

    /// Add a resource, keyed by its `type.name` id.
    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.insert(resource.id(), resource);
    }

    /// Add an input variable, keyed by its name.
    pub fn add_variable(&mut self, variable: InputVariable) {
        self.variables.insert(variable.name.clone(), variable);
    }

    /// Look up a resource by its `type.name` id.
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    /// Look up an input variable by name.
    pub fn variable(&self, name: &str) -> Option<&InputVariable> {
        self.variables.get(name)
    }

    /// All hosted resources, in registration order.
    pub fn resources(&self) -> &IndexMap<String, Resource> {
        &self.resources
    }

    /// All hosted input variables, in registration order.
    pub fn variables(&self) -> &IndexMap<String, InputVariable> {
        &self.variables
    }
}
