//! JSON output formatting

use crate::codegen::Program;
use crate::error::Result;

use super::ProgramPrinter;

/// Prints the abstract program as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPrinter;

impl ProgramPrinter for JsonPrinter {
    fn print(&self, program: &Program) -> Result<String> {
        let mut json = serde_json::to_string_pretty(program)?;
        json.push('\n');
        Ok(json)
    }
}
