//! ES module output
//!
//! ```js
//! import about_entrypoint_tsx from "/app/about.entrypoint.tsx";
//!
//! const routes = [
//!   {
//!     "children": [
//!       {
//!         "entryPoint": about_entrypoint_tsx,
//!         "path": "about"
//!       }
//!     ]
//!   }
//! ];
//!
//! export default routes;
//! ```

use crate::codegen::{Expression, Program, RouteObject};
use crate::error::Result;

use super::ProgramPrinter;

/// Prints a program as an ES module exporting the route list by default.
#[derive(Debug, Clone)]
pub struct JavaScriptPrinter {
    indent: String,
}

impl JavaScriptPrinter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent: " ".repeat(indent_width),
        }
    }

    fn write_routes(&self, out: &mut String, routes: &[RouteObject], depth: usize) -> Result<()> {
        if routes.is_empty() {
            out.push_str("[]");
            return Ok(());
        }

        out.push_str("[\n");
        for (i, route) in routes.iter().enumerate() {
            self.write_indent(out, depth + 1);
            self.write_object(out, route, depth + 1)?;
            if i + 1 < routes.len() {
                out.push(',');
            }
            out.push('\n');
        }
        self.write_indent(out, depth);
        out.push(']');
        Ok(())
    }

    fn write_object(&self, out: &mut String, route: &RouteObject, depth: usize) -> Result<()> {
        if route.properties.is_empty() {
            out.push_str("{}");
            return Ok(());
        }

        out.push_str("{\n");
        for (i, property) in route.properties.iter().enumerate() {
            self.write_indent(out, depth + 1);
            out.push_str(&serde_json::to_string(property.key.as_str())?);
            out.push_str(": ");
            self.write_expression(out, &property.value, depth + 1)?;
            if i + 1 < route.properties.len() {
                out.push(',');
            }
            out.push('\n');
        }
        self.write_indent(out, depth);
        out.push('}');
        Ok(())
    }

    fn write_expression(&self, out: &mut String, value: &Expression, depth: usize) -> Result<()> {
        match value {
            Expression::Identifier(name) => out.push_str(name),
            Expression::String(value) => out.push_str(&serde_json::to_string(value)?),
            Expression::Boolean(value) => out.push_str(if *value { "true" } else { "false" }),
            Expression::Array(routes) => self.write_routes(out, routes, depth)?,
        }
        Ok(())
    }

    fn write_indent(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str(&self.indent);
        }
    }
}

impl Default for JavaScriptPrinter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl ProgramPrinter for JavaScriptPrinter {
    fn print(&self, program: &Program) -> Result<String> {
        let mut out = String::new();

        for import in &program.imports {
            out.push_str("import ");
            out.push_str(&import.local);
            out.push_str(" from ");
            out.push_str(&serde_json::to_string(&import.source)?);
            out.push_str(";\n");
        }
        if !program.imports.is_empty() {
            out.push('\n');
        }

        out.push_str("const routes = ");
        self.write_routes(&mut out, &program.routes, 0)?;
        out.push_str(";\n\nexport default routes;\n");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{ImportDeclaration, PropertyKey};
    use crate::render::render_routes;
    use crate::test_utils::file_tree;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_print_module() {
        let program = render_routes(&file_tree(&[
            "_index.entrypoint.tsx",
            "about.entrypoint.tsx",
        ]))
        .unwrap();
        let code = JavaScriptPrinter::default().print(&program).unwrap();

        let expected = r#"import about_entrypoint_tsx from "/app/about.entrypoint.tsx";
import _index_entrypoint_tsx from "/app/_index.entrypoint.tsx";

const routes = [
  {
    "children": [
      {
        "entryPoint": about_entrypoint_tsx,
        "path": "about"
      },
      {
        "entryPoint": _index_entrypoint_tsx,
        "index": true
      }
    ]
  }
];

export default routes;
"#;
        assert_eq!(code, expected);
    }

    #[test]
    fn test_print_fallback_module() {
        let program = render_routes(&file_tree(&[])).unwrap();
        let code = JavaScriptPrinter::new(4).print(&program).unwrap();
        assert_eq!(
            code,
            "const routes = [\n    {\n        \"path\": \"*\",\n        \"element\": \"ERROR: No routes are defined.\"\n    }\n];\n\nexport default routes;\n"
        );
    }

    #[test]
    fn test_strings_are_escaped() {
        let mut route = RouteObject::new();
        route.push(
            PropertyKey::Path,
            Expression::String("quote\"back\\slash".to_string()),
        );
        route.push(PropertyKey::Children, Expression::Array(Vec::new()));
        let program = Program {
            imports: vec![ImportDeclaration {
                local: "x".to_string(),
                source: "C:\\routes\\x.entrypoint.tsx".to_string(),
            }],
            routes: vec![route],
        };

        let code = JavaScriptPrinter::default().print(&program).unwrap();
        assert!(code.contains(r#"import x from "C:\\routes\\x.entrypoint.tsx";"#));
        assert!(code.contains(r#""path": "quote\"back\\slash""#));
        assert!(code.contains(r#""children": []"#));
    }
}
