//! Provider schema model and the field-path walk.
//!
//! Providers declare, for every resource type they serve, a map of field
//! schemas. The binder walks that declaration along the dotted field path of
//! a resource access to derive the access's bound type. Each field may also
//! carry target-language metadata (a renaming table) which the walk threads
//! through for the surrounding program generator to consume.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use hil2ts_common::BoundType;

use crate::env::Provider;

/// Declared type of a provider schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Bool,
    Int,
    Float,
    String,
    List,
    Set,
    Map,
}

/// Element of a collection-typed field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Elem {
    /// A collection of scalars described by a single schema.
    Schema(Box<FieldSchema>),
    /// A nested block with its own field map.
    Block(SchemaMap),
}

/// Schema of a single resource field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub field_type: FieldType,
    /// Element schema for `List`, `Set`, and `Map` fields.
    pub elem: Option<Elem>,
}

/// Field schemas of one resource type, keyed by field name.
pub type SchemaMap = IndexMap<String, FieldSchema>;

impl FieldSchema {
    pub fn bool() -> Self {
        Self::scalar(FieldType::Bool)
    }

    pub fn int() -> Self {
        Self::scalar(FieldType::Int)
    }

    pub fn float() -> Self {
        Self::scalar(FieldType::Float)
    }

    pub fn string() -> Self {
        Self::scalar(FieldType::String)
    }

    fn scalar(field_type: FieldType) -> Self {
        Self {
            field_type,
            elem: None,
        }
    }

    /// A list of the given element schema.
    pub fn list(elem: FieldSchema) -> Self {
        Self {
            field_type: FieldType::List,
            elem: Some(Elem::Schema(Box::new(elem))),
        }
    }

    /// A map of the given element schema.
    pub fn map(elem: FieldSchema) -> Self {
        Self {
            field_type: FieldType::Map,
            elem: Some(Elem::Schema(Box::new(elem))),
        }
    }

    /// A nested block: a list whose element is a field map of its own.
    pub fn block(fields: SchemaMap) -> Self {
        Self {
            field_type: FieldType::List,
            elem: Some(Elem::Block(fields)),
        }
    }

    /// The bound type this schema describes.
    pub fn bound_type(&self) -> BoundType {
        match self.field_type {
            FieldType::Bool => BoundType::BOOL,
            FieldType::Int | FieldType::Float => BoundType::NUMBER,
            FieldType::String => BoundType::STRING,
            FieldType::List | FieldType::Set => self.elem_bound_type().list_of(),
            FieldType::Map => self.elem_bound_type().map_of(),
        }
    }

    /// The element kind of a collection schema, `UNKNOWN` when the element
    /// is a nested block or undeclared.
    fn elem_bound_type(&self) -> BoundType {
        match &self.elem {
            Some(Elem::Schema(elem)) => elem.bound_type().element_type(),
            Some(Elem::Block(_)) | None => BoundType::UNKNOWN,
        }
    }
}

/// Target-language metadata for a field: an optional rename plus overrides
/// for nested fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// The name the field is emitted under, when it differs from the
    /// Terraform name.
    pub name: Option<String>,
    /// Metadata for nested block fields.
    pub fields: IndexMap<String, FieldInfo>,
}

/// One position of a field-path walk through a provider schema.
///
/// A walk starts at a resource type ([`SchemaPath::for_resource`]) and
/// descends one path element at a time. Stepping to a name the schema does
/// not declare yields an empty position whose bound type is `UNKNOWN`;
/// descents from an empty position stay empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaPath<'a> {
    /// The field map descents resolve against, if the current position is a
    /// resource or nested block.
    block: Option<&'a SchemaMap>,
    /// The schema of the field addressed so far.
    field: Option<&'a FieldSchema>,
    /// Target-language metadata for the field addressed so far.
    info: Option<&'a FieldInfo>,
}

impl<'a> SchemaPath<'a> {
    /// The walk's starting position: the declaration of `resource_type`
    /// within `provider`.
    pub fn for_resource(provider: &'a Provider, resource_type: &str) -> SchemaPath<'a> {
        SchemaPath {
            block: provider.resources.get(resource_type),
            field: None,
            info: provider.overrides.get(resource_type),
        }
    }

    /// Descend one path element.
    pub fn descend(&self, name: &str) -> SchemaPath<'a> {
        let field = self.block.and_then(|block| block.get(name));
        let block = field.and_then(|f| match &f.elem {
            Some(Elem::Block(fields)) => Some(fields),
            _ => None,
        });
        let info = self.info.and_then(|info| info.fields.get(name));
        SchemaPath { block, field, info }
    }

    /// The bound type of the field addressed so far; `UNKNOWN` when the walk
    /// has left the declared schema.
    pub fn bound_type(&self) -> BoundType {
        match self.field {
            Some(field) => field.bound_type(),
            None => BoundType::UNKNOWN,
        }
    }

    /// The target-language name override of the field addressed so far.
    pub fn rename(&self) -> Option<&'a str> {
        self.info.and_then(|info| info.name.as_deref())
    }
}
