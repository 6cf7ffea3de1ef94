//! Route tree to program

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, RouteError};
use crate::route::{DirectoryRoute, LeafRoute, RouteNode};

use super::identifier::make_legal_identifier;
use super::program::{Expression, ImportDeclaration, Program, PropertyKey, RouteObject};

/// Element of the catch-all route emitted when an app defines no routes.
pub const NO_ROUTES_MESSAGE: &str = "ERROR: No routes are defined.";

/// Generate the routes module for a normalized route tree.
///
/// An empty root produces a single `{path: "*", element}` route so the
/// module never exports an empty list.
pub fn generate_routes_file(root: &DirectoryRoute) -> Result<Program> {
    if root.is_empty() {
        return Ok(Program {
            imports: Vec::new(),
            routes: vec![fallback_route()],
        });
    }

    let mut generator = Generator::default();
    let route = generator.directory_route(root)?;
    Ok(Program {
        imports: generator.imports,
        routes: vec![route],
    })
}

fn fallback_route() -> RouteObject {
    let mut route = RouteObject::new();
    route.push(PropertyKey::Path, Expression::String("*".to_string()));
    route.push(
        PropertyKey::Element,
        Expression::String(NO_ROUTES_MESSAGE.to_string()),
    );
    route
}

#[derive(Default)]
struct Generator {
    imports: Vec<ImportDeclaration>,
    /// Identifier to the id it was generated from.
    bindings: HashMap<String, String>,
}

impl Generator {
    /// Import an entry point and start a route object bound to it.
    fn entry_point_route(&mut self, id: &str, entry_point: &Path) -> Result<RouteObject> {
        let identifier = make_legal_identifier(id);
        if let Some(existing) = self.bindings.get(&identifier) {
            return Err(RouteError::IdentifierCollision {
                identifier,
                first: existing.clone(),
                second: id.to_string(),
            });
        }
        self.bindings.insert(identifier.clone(), id.to_string());

        self.imports.push(ImportDeclaration {
            local: identifier.clone(),
            source: entry_point.to_string_lossy().to_string(),
        });

        let mut route = RouteObject::new();
        route.push(PropertyKey::EntryPoint, Expression::Identifier(identifier));
        Ok(route)
    }

    fn directory_route(&mut self, dir: &DirectoryRoute) -> Result<RouteObject> {
        // Layout properties belong to the directory's own route object
        let mut route = match &dir.layout {
            Some(layout) => self.entry_point_route(&layout.id, &layout.entry_point)?,
            None => RouteObject::new(),
        };
        if let Some(path) = &dir.path {
            route.push(PropertyKey::Path, Expression::String(path.clone()));
        }

        let mut children = Vec::with_capacity(dir.children.len() + 1);
        for child in &dir.children {
            children.push(self.route_object(child, dir)?);
        }

        if let Some(index) = &dir.index {
            let mut index_route = self.entry_point_route(&index.id, &index.entry_point)?;
            index_route.push(PropertyKey::Index, Expression::Boolean(true));
            children.push(index_route);
        }

        route.push(PropertyKey::Children, Expression::Array(children));
        Ok(route)
    }

    fn leaf_route(&mut self, leaf: &LeafRoute) -> Result<RouteObject> {
        let mut route = self.entry_point_route(&leaf.id, &leaf.entry_point)?;
        route.push(PropertyKey::Path, Expression::String(leaf.path.clone()));
        Ok(route)
    }

    fn route_object(&mut self, node: &RouteNode, parent: &DirectoryRoute) -> Result<RouteObject> {
        match node {
            RouteNode::Leaf(leaf) => self.leaf_route(leaf),
            RouteNode::Directory(dir) => self.directory_route(dir),
            // Only reachable through the layout and index slots
            RouteNode::Index(_) | RouteNode::Layout(_) => Err(RouteError::Structural {
                kind: node.kind_name(),
                id: node.id().to_string(),
                directory: parent.id.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::normalize;
    use crate::route::LayoutRoute;
    use crate::test_utils::file_tree;
    use pretty_assertions::assert_eq;

    fn generate(paths: &[&str]) -> Result<Program> {
        let root = normalize(&file_tree(paths))?;
        generate_routes_file(&root)
    }

    #[test]
    fn test_empty_root_generates_fallback() {
        let program = generate_routes_file(&DirectoryRoute::root()).unwrap();
        assert!(program.imports.is_empty());
        assert_eq!(program.routes.len(), 1);
        assert_eq!(program.routes[0].path(), Some("*"));
        assert_eq!(
            program.routes[0].get(PropertyKey::Element),
            Some(&Expression::String(NO_ROUTES_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_leaf_route_properties() {
        let program = generate(&["about.entrypoint.tsx"]).unwrap();
        let root = &program.routes[0];
        assert_eq!(root.entry_point(), None);
        assert_eq!(root.path(), None);

        let about = &root.children()[0];
        let keys: Vec<_> = about.properties.iter().map(|p| p.key).collect();
        assert_eq!(keys, vec![PropertyKey::EntryPoint, PropertyKey::Path]);
        assert_eq!(about.entry_point(), Some("about_entrypoint_tsx"));
        assert_eq!(about.path(), Some("about"));

        assert_eq!(
            program.imports,
            vec![ImportDeclaration {
                local: "about_entrypoint_tsx".to_string(),
                source: "/app/about.entrypoint.tsx".to_string(),
            }]
        );
    }

    #[test]
    fn test_directory_with_layout_and_index() {
        let program = generate(&[
            "users/_layout.entrypoint.tsx",
            "users/_index.entrypoint.tsx",
            "users/$id.entrypoint.tsx",
        ])
        .unwrap();
        let users = &program.routes[0].children()[0];
        let keys: Vec<_> = users.properties.iter().map(|p| p.key).collect();
        assert_eq!(
            keys,
            vec![PropertyKey::EntryPoint, PropertyKey::Path, PropertyKey::Children]
        );
        assert_eq!(users.entry_point(), Some("users__layout_entrypoint_tsx"));
        assert_eq!(users.path(), Some("users"));

        let children = users.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].path(), Some(":id"));
        assert!(children[1].is_index());
        assert_eq!(children[1].path(), None);
        assert_eq!(children[1].entry_point(), Some("users__index_entrypoint_tsx"));
    }

    #[test]
    fn test_one_import_per_entry_point() {
        let program = generate(&[
            "_layout.entrypoint.tsx",
            "_index.entrypoint.tsx",
            "a.entrypoint.tsx",
            "b/c.entrypoint.tsx",
        ])
        .unwrap();
        let locals: Vec<_> = program.imports.iter().map(|i| i.local.as_str()).collect();
        assert_eq!(
            locals,
            vec![
                "_layout_entrypoint_tsx",
                "a_entrypoint_tsx",
                "b_c_entrypoint_tsx",
                "_index_entrypoint_tsx",
            ]
        );
    }

    #[test]
    fn test_identifier_collision_is_configuration_error() {
        let err = generate(&["a-b.entrypoint.tsx", "aB.entrypoint.tsx"]).unwrap_err();
        assert!(err.is_configuration_error());
        match err {
            RouteError::IdentifierCollision {
                identifier,
                first,
                second,
            } => {
                assert_eq!(identifier, "aB_entrypoint_tsx");
                assert_eq!(first, "a-b.entrypoint.tsx");
                assert_eq!(second, "aB.entrypoint.tsx");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_layout_in_children_is_structural_error() {
        let mut root = DirectoryRoute::root();
        root.children.push(RouteNode::Layout(LayoutRoute {
            id: "stray.entrypoint.tsx".to_string(),
            entry_point: "/app/stray.entrypoint.tsx".into(),
        }));

        let err = generate_routes_file(&root).unwrap_err();
        assert!(!err.is_configuration_error());
        assert!(matches!(
            err,
            RouteError::Structural { kind: "layout", .. }
        ));
    }
}
