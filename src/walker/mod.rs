use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Root is not a directory: {0}")]
    MissingRoot(PathBuf),
    #[error("Failed to walk directory: {0}")]
    Io(#[from] walkdir::Error),
}

/// Lazily enumerates source files under a fixed, ordered set of roots.
pub struct TreeWalker<'a> {
    roots: Vec<PathBuf>,
    config: &'a Config,
}

impl<'a> TreeWalker<'a> {
    /// Relative roots in `config` are resolved against `base`.
    pub fn new(config: &'a Config, base: &Path) -> Self {
        Self { roots: config.resolved_roots(base), config }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Candidate files plus any errors met on the way. Excluded directories
    /// are pruned before descent and never yield anything, errors included.
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf, WalkError>> + '_ {
        self.roots.iter().flat_map(move |root| self.walk_root(root))
    }

    /// Like [`walk`](Self::walk) with errors dropped.
    pub fn files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.walk().filter_map(Result::ok)
    }

    fn walk_root<'b>(
        &'b self,
        root: &'b Path,
    ) -> Box<dyn Iterator<Item = Result<PathBuf, WalkError>> + 'b> {
        if !root.is_dir() {
            return Box::new(std::iter::once(Err(WalkError::MissingRoot(root.to_path_buf()))));
        }

        let entries = WalkDir::new(root)
            .into_iter()
            .filter_entry(move |e| !self.is_pruned(e))
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    if entry.file_type().is_dir() {
                        return None;
                    }
                    if !self.config.is_supported_extension(entry.path()) {
                        return None;
                    }
                    Some(Ok(entry.into_path()))
                }
                Err(e) => Some(Err(WalkError::Io(e))),
            });

        Box::new(entries)
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        entry
            .file_name()
            .to_str()
            .map(|name| self.config.is_excluded_dir(name))
            .unwrap_or(false)
    }
}
