//! The full pipeline from file tree to program

use tracing::debug;

use crate::codegen::{Program, generate_routes_file};
use crate::error::Result;
use crate::route::{
    DirectoryRoute, build_route_tree, compress_directories, prune_empty_directories,
};
use crate::tree::DirectoryNode;

/// Build the route tree for `tree` and run both normalization passes.
///
/// A tree without any routes normalizes to an empty root.
pub fn normalize(tree: &DirectoryNode) -> Result<DirectoryRoute> {
    let route = build_route_tree(tree)?;

    let Some(pruned) = prune_empty_directories(&route) else {
        debug!(root = %tree.path.display(), "route tree pruned to nothing");
        return Ok(DirectoryRoute::root());
    };

    Ok(compress_directories(&pruned).into_owned())
}

/// Render the routes program for an app's file tree.
pub fn render_routes(tree: &DirectoryNode) -> Result<Program> {
    let route = normalize(tree)?;
    let program = generate_routes_file(&route)?;
    debug!(
        root = %tree.path.display(),
        imports = program.imports.len(),
        "generated routes program"
    );
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{NO_ROUTES_MESSAGE, PropertyKey};
    use crate::test_utils::file_tree;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_to_end_example() {
        let tree = file_tree(&[
            "_layout.entrypoint.tsx",
            "_index.entrypoint.tsx",
            "about.entrypoint.tsx",
            "users/$id.entrypoint.tsx",
            "users/(filter).entrypoint.tsx",
        ]);
        let program = render_routes(&tree).unwrap();

        assert_eq!(program.routes.len(), 1);
        let root = &program.routes[0];
        assert_eq!(root.entry_point(), Some("_layout_entrypoint_tsx"));
        assert_eq!(root.path(), None);

        let children: Vec<_> = root
            .children()
            .iter()
            .map(|c| (c.path(), c.entry_point(), c.is_index()))
            .collect();
        assert_eq!(
            children,
            vec![
                (Some("about"), Some("about_entrypoint_tsx"), false),
                (Some("users/:id"), Some("users_$id_entrypoint_tsx"), false),
                (
                    Some("users/filter?"),
                    Some("users__filter__entrypoint_tsx"),
                    false
                ),
                (None, Some("_index_entrypoint_tsx"), true),
            ]
        );
        assert_eq!(program.imports.len(), 5);
    }

    #[test]
    fn test_empty_tree_renders_fallback() {
        let program = render_routes(&file_tree(&[])).unwrap();
        assert!(program.imports.is_empty());
        assert_eq!(program.routes.len(), 1);
        assert_eq!(program.routes[0].path(), Some("*"));
        assert!(program.routes[0].get(PropertyKey::Element).is_some());
        assert!(format!("{:?}", program).contains(NO_ROUTES_MESSAGE));
    }

    #[test]
    fn test_tree_of_reserved_files_renders_fallback() {
        let program = render_routes(&file_tree(&["a/_draft.entrypoint.tsx"])).unwrap();
        assert!(program.imports.is_empty());
        assert_eq!(program.routes[0].path(), Some("*"));
    }

    #[test]
    fn test_route_order_follows_enumeration_order() {
        let tree = file_tree(&[
            "z.entrypoint.tsx",
            "m/b.entrypoint.tsx",
            "m/a.entrypoint.tsx",
            "$.entrypoint.tsx",
            "a.entrypoint.tsx",
        ]);
        let program = render_routes(&tree).unwrap();
        let paths: Vec<_> = program.routes[0]
            .children()
            .iter()
            .map(|c| c.path())
            .collect();
        assert_eq!(
            paths,
            vec![Some("*"), Some("a"), Some("m/a"), Some("m/b"), Some("z")]
        );
    }

    #[test]
    fn test_render_propagates_configuration_errors() {
        let tree = file_tree(&["_layout.entrypoint.js", "_layout.entrypoint.tsx"]);
        assert!(render_routes(&tree).unwrap_err().is_configuration_error());
    }
}
