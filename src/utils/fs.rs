use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory names never descended into.
pub const EXCLUDED_DIRS: &[&str] = &["venv", ".venv", "__pycache__"];

/// Extension of the files the codemods rewrite.
pub const SOURCE_EXTENSION: &str = ".py";

/// Collect every file under `root` ending in `ext`, skipping any directory
/// whose name is in `excluded_dirs`. Entries are sorted by file name so the
/// walk order is stable for a given tree.
pub fn find_files_with_extension(
    root: &Path,
    ext: &str,
    excluded_dirs: &[String],
) -> Vec<PathBuf> {
    let mut results = Vec::new();
    let dot_ext = if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    };
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !excluded_dirs.iter().any(|d| name.as_ref() == d.as_str())
        })
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() {
            let name = entry.file_name().to_string_lossy();
            if name.ends_with(&dot_ext) {
                results.push(entry.into_path());
            }
        }
    }
    results
}

/// Path of `path` relative to `root`, with `/` separators.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Split text into lines, each keeping its trailing newline.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}
