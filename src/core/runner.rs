use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::codemods::traits::Codemod;
use crate::core::config::Config;
use crate::core::project::Project;
use crate::utils::fs::{find_files_with_extension, relative_path, SOURCE_EXTENSION};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileChange {
    pub path: String,
    pub sites: usize,
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub codemod: &'static str,
    pub root: PathBuf,
    /// Written files, in walk order.
    pub modified: Vec<FileChange>,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub duration: Duration,
}

enum FileOutcome {
    Unreadable,
    Unchanged,
    Modified(usize),
}

pub struct Runner<'a> {
    codemod: &'a dyn Codemod,
}

impl<'a> Runner<'a> {
    pub fn new(codemod: &'a dyn Codemod) -> Self {
        Self { codemod }
    }

    /// Walk the project, rewrite each candidate file and collect what was
    /// written. `on_file` receives each relative path before it is processed.
    pub fn run_with_progress<F>(&self, project: &Project, mut on_file: F) -> Result<RunResult>
    where
        F: FnMut(&str),
    {
        let start = Instant::now();
        let excluded = project.config.excluded_dirs();
        let files = find_files_with_extension(&project.root, SOURCE_EXTENSION, &excluded);

        let mut modified = Vec::new();
        let mut files_scanned = 0;
        let mut files_skipped = 0;

        for file in files {
            let rel = relative_path(&project.root, &file);
            if self.codemod.excludes(&rel) {
                continue;
            }
            on_file(&rel);

            match self.process_file(&file, &project.config)? {
                FileOutcome::Unreadable => files_skipped += 1,
                FileOutcome::Unchanged => files_scanned += 1,
                FileOutcome::Modified(sites) => {
                    files_scanned += 1;
                    modified.push(FileChange { path: rel, sites });
                }
            }
        }

        Ok(RunResult {
            codemod: self.codemod.name(),
            root: project.root.clone(),
            modified,
            files_scanned,
            files_skipped,
            duration: start.elapsed(),
        })
    }

    fn process_file(&self, path: &Path, config: &Config) -> Result<FileOutcome> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Ok(FileOutcome::Unreadable),
        };

        let transform = self.codemod.transform(&content, config);
        if !transform.changed {
            return Ok(FileOutcome::Unchanged);
        }

        fs::write(path, &transform.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(FileOutcome::Modified(transform.sites))
    }
}
