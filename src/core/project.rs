use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::core::config::Config;

#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    pub fn new(path: &Path) -> anyhow::Result<Self> {
        let root = path
            .canonicalize()
            .with_context(|| format!("cannot resolve project root {}", path.display()))?;
        let config = Config::load(&root);
        Ok(Self { root, config })
    }
}
