use crate::core::config::Config;

/// Result of running a codemod over one file's text.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub content: String,
    /// Number of rewrite sites the codemod acted on.
    pub sites: usize,
    pub changed: bool,
}

impl Transform {
    pub fn new(original: &str, content: String, sites: usize) -> Self {
        let changed = content != original;
        Self {
            content,
            sites,
            changed,
        }
    }

    pub fn unchanged(original: &str) -> Self {
        Self {
            content: original.to_string(),
            sites: 0,
            changed: false,
        }
    }
}

pub trait Codemod: Send + Sync {
    /// Subcommand name this codemod is registered under
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Whether a file (path relative to the root, `/`-separated) must never be touched
    fn excludes(&self, _relative_path: &str) -> bool {
        false
    }

    /// Rewrite one file's content. Must be pure and idempotent.
    fn transform(&self, content: &str, config: &Config) -> Transform;
}
