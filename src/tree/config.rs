//! Configuration types for the tree walker

/// Configuration for scanning an app root.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Entry names to skip, matched exactly or as glob patterns.
    pub ignore_patterns: Vec<String>,
    /// Number of parallel workers for scanning sibling directories.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub parallel_workers: usize,
}
