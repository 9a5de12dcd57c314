//! Insertion of a single import line after a file's leading import block.

use regex::Regex;

/// Whether `content` already imports `symbol` from `module`.
pub fn has_import(content: &str, module: &str, symbol: &str) -> bool {
    let pattern = format!(
        r"(?m)^\s*from\s+{}\s+import\s+.*\b{}\b",
        regex::escape(module),
        regex::escape(symbol)
    );
    Regex::new(&pattern)
        .map(|re| re.is_match(content))
        .unwrap_or(false)
}

/// Index at which a new import line goes.
///
/// Leading blank lines are skipped, then up to `window` lines are scanned.
/// Once an import has been seen, the first blank line ends the block and the
/// insertion point is right after it. Without such a blank line the import
/// lands at the very top.
pub fn insertion_index(lines: &[&str], window: usize) -> usize {
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());

    let mut seen_import = false;
    for (offset, line) in lines.iter().skip(start).take(window).enumerate() {
        let stripped = line.trim();
        if stripped.starts_with("from ") || stripped.starts_with("import ") {
            seen_import = true;
        } else if seen_import && stripped.is_empty() {
            return start + offset + 1;
        }
    }
    0
}

/// Insert `import_line` (without newline) once at the computed index.
pub fn inject_import(content: &str, import_line: &str, window: usize) -> String {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let at = insertion_index(&lines, window);

    let mut out = String::with_capacity(content.len() + import_line.len() + 1);
    for line in &lines[..at] {
        out.push_str(line);
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(import_line);
    out.push('\n');
    for line in &lines[at..] {
        out.push_str(line);
    }
    out
}
