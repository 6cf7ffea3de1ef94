//! Program printing
//!
//! The code generator produces an abstract `Program`. Printers turn it into
//! the text served or written to disk:
//!
//! - `javascript` - ES module source
//! - `json` - the program structure as JSON
//! - `config` - Output configuration types

mod config;
mod javascript;
mod json;

use crate::codegen::Program;
use crate::error::Result;

pub use config::{OutputConfig, OutputFormat};
pub use javascript::JavaScriptPrinter;
pub use json::JsonPrinter;

/// Renders a program to text.
pub trait ProgramPrinter {
    fn print(&self, program: &Program) -> Result<String>;
}

/// Printer for the configured output format.
pub fn printer_for(config: &OutputConfig) -> Box<dyn ProgramPrinter + Send + Sync> {
    match config.format {
        OutputFormat::JavaScript => Box::new(JavaScriptPrinter::new(config.indent_width)),
        OutputFormat::Json => Box::new(JsonPrinter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_routes;
    use crate::test_utils::file_tree;

    #[test]
    fn test_printer_for_format() {
        let program = render_routes(&file_tree(&["about.entrypoint.tsx"])).unwrap();

        let js = printer_for(&OutputConfig::default()).print(&program).unwrap();
        assert!(js.starts_with("import about_entrypoint_tsx from"));

        let json = printer_for(&OutputConfig {
            format: OutputFormat::Json,
            ..Default::default()
        })
        .print(&program)
        .unwrap();
        assert!(json.starts_with('{'));
    }
}
