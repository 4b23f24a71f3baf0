#![allow(dead_code)]

use crate::schema::SchemaRef;

/// Returns the static schema for a shape type, independent of any instance.
///
/// Implemented by generated shapes and a handful of built-ins (e.g. [`crate::schema::Unit`])
/// whose schema never depends on the value itself, unlike [`crate::serde::shapes::SchemaShape`].
pub trait StaticSchemaShape {
    fn schema() -> &'static SchemaRef;
}

// TODO: Could this be made more efficient?
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeId {
    pub id: String,
    pub namespace: String,
    pub name: String,
    pub member: Option<String>,
}

impl From<&str> for ShapeId {
    fn from(value: &str) -> Self {
        let split = value.split_once("#").expect("Invalid Shape Id");
        let (namespace, mut base_name) = split;
        let mut member = None;
        if let Some((name, split_member)) = base_name.split_once("$") {
            base_name = name;
            member = Some(split_member.to_string());
        }
        ShapeId {
            id: value.to_string(),
            namespace: namespace.to_string(),
            name: base_name.to_string(),
            member,
        }
    }
}

impl ShapeId {
    pub fn from_parts<'a>(namespace: &'a str, name: &'a str, member: Option<&'a str>) -> ShapeId {
        let mut id = namespace.to_string() + "#" + name;
        if let Some(m) = member {
            id = id + "$" + m;
        }
        ShapeId {
            id,
            namespace: namespace.to_string(),
            name: name.to_string(),
            member: member.map(ToString::to_string),
        }
    }

    pub fn with_member(&self, member: &str) -> ShapeId {
        Self::from_parts(&self.namespace, &self.name, Some(member))
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Blob,
    Boolean,
    String,
    Timestamp,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    BigInteger,
    BigDecimal,
    Document,
    Enum,
    IntEnum,
    List,
    Map,
    Structure,
    Union,
    Member,
    Service,
    Resource,
    Operation,
}
