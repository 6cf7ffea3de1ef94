//! Abstract description of a generated routes module
//!
//! A program is a list of default imports followed by the exported route
//! list. Printers in `crate::output` turn it into text.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub imports: Vec<ImportDeclaration>,
    pub routes: Vec<RouteObject>,
}

/// `import <local> from "<source>"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportDeclaration {
    pub local: String,
    pub source: String,
}

/// Keys a route object may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    EntryPoint,
    Path,
    Index,
    Children,
    Element,
}

impl PropertyKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKey::EntryPoint => "entryPoint",
            PropertyKey::Path => "path",
            PropertyKey::Index => "index",
            PropertyKey::Children => "children",
            PropertyKey::Element => "element",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to an imported binding.
    Identifier(String),
    String(String),
    Boolean(bool),
    Array(Vec<RouteObject>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: PropertyKey,
    pub value: Expression,
}

/// A route object literal, properties kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteObject {
    pub properties: Vec<Property>,
}

impl RouteObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: PropertyKey, value: Expression) {
        self.properties.push(Property { key, value });
    }

    pub fn get(&self, key: PropertyKey) -> Option<&Expression> {
        self.properties
            .iter()
            .find(|p| p.key == key)
            .map(|p| &p.value)
    }

    pub fn path(&self) -> Option<&str> {
        match self.get(PropertyKey::Path) {
            Some(Expression::String(path)) => Some(path.as_str()),
            _ => None,
        }
    }

    pub fn entry_point(&self) -> Option<&str> {
        match self.get(PropertyKey::EntryPoint) {
            Some(Expression::Identifier(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn children(&self) -> &[RouteObject] {
        match self.get(PropertyKey::Children) {
            Some(Expression::Array(children)) => children.as_slice(),
            _ => &[],
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self.get(PropertyKey::Index), Some(Expression::Boolean(true)))
    }
}

impl Serialize for PropertyKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expression::Identifier(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("identifier", name)?;
                map.end()
            }
            Expression::String(value) => serializer.serialize_str(value),
            Expression::Boolean(value) => serializer.serialize_bool(*value),
            Expression::Array(items) => items.serialize(serializer),
        }
    }
}

impl Serialize for RouteObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for property in &self.properties {
            map.serialize_entry(&property.key, &property.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_object_serializes_in_property_order() {
        let mut route = RouteObject::new();
        route.push(
            PropertyKey::EntryPoint,
            Expression::Identifier("about_entrypoint_tsx".to_string()),
        );
        route.push(PropertyKey::Path, Expression::String("about".to_string()));

        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(
            json,
            r#"{"entryPoint":{"identifier":"about_entrypoint_tsx"},"path":"about"}"#
        );
    }

    #[test]
    fn test_accessors() {
        let mut index = RouteObject::new();
        index.push(
            PropertyKey::EntryPoint,
            Expression::Identifier("_index_entrypoint_tsx".to_string()),
        );
        index.push(PropertyKey::Index, Expression::Boolean(true));

        let mut root = RouteObject::new();
        root.push(PropertyKey::Children, Expression::Array(vec![index]));

        assert_eq!(root.path(), None);
        assert_eq!(root.entry_point(), None);
        assert_eq!(root.children().len(), 1);
        assert!(root.children()[0].is_index());
        assert_eq!(
            root.children()[0].entry_point(),
            Some("_index_entrypoint_tsx")
        );
    }
}
