/*!
 * Directory scanning
 */

use std::fs;

use crate::config::Config;
use crate::error::{LfError, Result};

/// Immediate children of the target directory, partitioned and sorted
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Subdirectory names, lexicographically ascending
    pub dirs: Vec<String>,
    /// File names, lexicographically ascending
    pub files: Vec<String>,
}

/// Scanner for a single directory level
pub struct Scanner {
    /// Scanner configuration
    config: Config,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// List the direct children of the target directory.
    ///
    /// An entry lands in `dirs` iff resolving it (following symlinks)
    /// yields a directory; the display classifier applies its own
    /// symlink-first rule later, so a symlink to a directory sorts with
    /// the directories but still renders with the symlink glyph.
    pub fn scan(&self) -> Result<Listing> {
        let target = &self.config.target_dir;

        if !target.exists() {
            return Err(LfError::PathNotFound(target.display().to_string()));
        }

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in fs::read_dir(target)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!(
                        "lf: warning: skipping unreadable entry in {}: {}",
                        target.display(),
                        e
                    );
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().to_string();
            if !self.config.show_all && name.starts_with('.') {
                continue;
            }

            if entry.path().is_dir() {
                dirs.push(name);
            } else {
                files.push(name);
            }
        }

        dirs.sort();
        files.sort();

        Ok(Listing { dirs, files })
    }
}
