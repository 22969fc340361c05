use std::path::PathBuf;

use crate::collector::ModuleCollector;
use crate::config::Config;
use crate::parser::{self, extract_module_names};
use crate::walker::{TreeWalker, WalkError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Distinct module names, ascending.
    pub modules: Vec<String>,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub roots_missing: Vec<PathBuf>,
}

impl ScanReport {
    pub fn summary(&self) -> String {
        format!(
            "Scanned {} files ({} skipped), modules found: {}",
            self.files_scanned,
            self.files_skipped,
            self.modules.len()
        )
    }
}

pub struct ModuleScanner {
    root: PathBuf,
    config: Config,
    verbose: bool,
}

impl ModuleScanner {
    /// `root` is the base that relative roots in `config` resolve against.
    pub fn new(root: PathBuf, config: Config) -> Self {
        Self { root, config, verbose: false }
    }

    /// Print a warning on stderr for every skipped file or root.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Walks every root and collects external module names. Unreadable files,
    /// missing roots and walk errors are counted or skipped, never fatal.
    pub fn scan(&self) -> ScanReport {
        let walker = TreeWalker::new(&self.config, &self.root);
        let mut collector = ModuleCollector::new();
        let mut roots_missing = Vec::new();

        for entry in walker.walk() {
            let file = match entry {
                Ok(file) => file,
                Err(WalkError::MissingRoot(root)) => {
                    if self.verbose {
                        eprintln!("Warning: Skipping root {}: not a directory", root.display());
                    }
                    roots_missing.push(root);
                    continue;
                }
                Err(e) => {
                    if self.verbose {
                        eprintln!("Warning: {}", e);
                    }
                    continue;
                }
            };

            match parser::read_source(&file) {
                Ok(source) => {
                    collector.extend(extract_module_names(&source));
                    collector.record_scanned();
                }
                Err(e) => {
                    if self.verbose {
                        eprintln!("Warning: Skipping {}: {}", file.display(), e);
                    }
                    collector.record_skipped();
                }
            }
        }

        let files_scanned = collector.files_scanned();
        let files_skipped = collector.files_skipped();

        ScanReport {
            modules: collector.into_sorted(),
            files_scanned,
            files_skipped,
            roots_missing,
        }
    }
}
