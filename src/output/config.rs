//! Output configuration types

const DEFAULT_INDENT_WIDTH: usize = 2;

/// Text format of the generated routes module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// ES module source
    #[default]
    JavaScript,
    /// The abstract program as JSON
    Json,
}

/// Configuration for printing a program.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub indent_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}
