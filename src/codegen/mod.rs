//! Code generation for the routes module
//!
//! - `program` - Abstract program types (imports, route objects)
//! - `identifier` - Import binding names derived from entry point ids
//! - `generate` - Route tree to program

mod generate;
mod identifier;
mod program;

pub use generate::{NO_ROUTES_MESSAGE, generate_routes_file};
pub use identifier::make_legal_identifier;
pub use program::{Expression, ImportDeclaration, Program, Property, PropertyKey, RouteObject};
