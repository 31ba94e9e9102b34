//! Reference objects and reference-or-inline values.
//!
//! A [`Reference`] is an unresolved `$ref` pointer. [`ReferenceOr`] is the usual
//! OpenAPI "either a `$ref` or the object itself" slot, and [`SchemaRef`] is that
//! slot specialised to schemas, which are kept untyped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix of pointers into `components.schemas`.
pub const COMPONENT_SCHEMAS_PREFIX: &str = "#/components/schemas/";

/// Reference object (`{"$ref": "..."}`).
///
/// Unknown sibling keys are rejected so that an object carrying `$ref` next to
/// other keys falls through to [`ReferenceOr::Inline`] and is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub r#ref: String,
}

impl Reference {
    pub fn new(r#ref: impl Into<String>) -> Self {
        Self { r#ref: r#ref.into() }
    }

    /// Pointer to a named entry of `components.schemas`.
    pub fn component_schema(name: &str) -> Self {
        Self::new(format!("{COMPONENT_SCHEMAS_PREFIX}{name}"))
    }

    /// Name of the referenced component schema, if this points into `components.schemas`.
    pub fn component_schema_name(&self) -> Option<&str> {
        self.r#ref
            .strip_prefix(COMPONENT_SCHEMAS_PREFIX)
            .filter(|name| !name.is_empty())
    }
}

/// Either a reference or an inline value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferenceOr<T> {
    Ref(Reference),
    Inline(T),
}

impl<T> ReferenceOr<T> {
    pub fn reference(r#ref: impl Into<String>) -> Self {
        Self::Ref(Reference::new(r#ref))
    }

    pub fn is_ref(&self) -> bool {
        matches!(self, Self::Ref(_))
    }

    /// The `$ref` string when this is a reference.
    pub fn ref_path(&self) -> Option<&str> {
        match self {
            Self::Ref(reference) => Some(&reference.r#ref),
            Self::Inline(_) => None,
        }
    }

    pub fn as_inline(&self) -> Option<&T> {
        match self {
            Self::Ref(_) => None,
            Self::Inline(value) => Some(value),
        }
    }

    pub fn into_inline(self) -> Option<T> {
        match self {
            Self::Ref(_) => None,
            Self::Inline(value) => Some(value),
        }
    }
}

impl<T> From<Reference> for ReferenceOr<T> {
    fn from(reference: Reference) -> Self {
        Self::Ref(reference)
    }
}

/// Schema slot: a `$ref` or an untyped inline schema.
pub type SchemaRef = ReferenceOr<Value>;
