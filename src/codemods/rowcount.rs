use crate::core::config::Config;

use super::traits::{Codemod, Transform};

pub const ROWCOUNT_PATTERN: &str = "getattr(result, 'rowcount', 0)";

// Same text as the pattern: the hardened form was never settled, so the
// rewrite leaves files byte-identical.
pub const ROWCOUNT_REPLACEMENT: &str = "getattr(result, 'rowcount', 0)";

pub struct RowcountCodemod;

impl Codemod for RowcountCodemod {
    fn name(&self) -> &'static str {
        "rowcount"
    }

    fn description(&self) -> &'static str {
        "Rewrite getattr(result, 'rowcount', 0) lookups"
    }

    fn transform(&self, content: &str, _config: &Config) -> Transform {
        let sites = content.matches(ROWCOUNT_PATTERN).count();
        if sites == 0 {
            return Transform::unchanged(content);
        }
        let replaced = content.replace(ROWCOUNT_PATTERN, ROWCOUNT_REPLACEMENT);
        Transform::new(content, replaced, sites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_occurrences_without_changing() {
        let src = "n = getattr(result, 'rowcount', 0)\nif getattr(result, 'rowcount', 0) == 0:\n    pass\n";
        let t = RowcountCodemod.transform(src, &Config::default());
        assert_eq!(t.sites, 2);
        assert!(!t.changed);
        assert_eq!(t.content, src);
    }

    #[test]
    fn test_no_occurrence() {
        let t = RowcountCodemod.transform("n = result.rowcount\n", &Config::default());
        assert_eq!(t.sites, 0);
        assert!(!t.changed);
    }
}
