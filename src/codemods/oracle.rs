use regex::Regex;
use std::sync::LazyLock;

/// A line that leaves the function before the fetched row can be used.
static CONTROL_TRANSFER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(return|abort|raise|jsonify)\b").unwrap());

/// Decides whether the assignment at a match site is already followed by a
/// null check (or an early exit) within a bounded look-ahead window.
pub struct SkipOracle {
    checks: Vec<Regex>,
}

impl SkipOracle {
    pub fn for_identifier(ident: &str) -> Self {
        let ident = regex::escape(ident);
        let patterns = [
            format!(r"^\s*if\s+{ident}\s+is\s+None\s*:"),
            format!(r"^\s*if\s+not\s+{ident}\s*:"),
            format!(r"^\s*check_row_or_abort\(\s*{ident}\s*[,)]"),
            format!(r"^\s*assert\s+{ident}\s+is\s+not\s+None\b"),
        ];
        let checks = patterns
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect();
        Self { checks }
    }

    /// Inspect up to `window` non-blank lines after `index`. True on the first
    /// line that is a check of the identifier or a control transfer.
    pub fn already_checked(&self, lines: &[&str], index: usize, window: usize) -> bool {
        lines
            .iter()
            .skip(index + 1)
            .filter(|line| !line.trim().is_empty())
            .take(window)
            .any(|line| {
                CONTROL_TRANSFER.is_match(line) || self.checks.iter().any(|re| re.is_match(line))
            })
    }
}
