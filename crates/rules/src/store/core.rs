//! Core [`RuleStore`] struct: direct filesystem reads and atomic writes.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::name::RuleName;

use super::error::{Result, RuleError};

/// Extension shared by every rule file.
pub const RULE_EXTENSION: &str = "yaml";

/// Distinguishes temp files of concurrent writes within one process.
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Filesystem-backed rule store.
///
/// Holds nothing but the directory path, so it is cheap to share and every
/// operation observes the directory as it is at call time.
#[derive(Debug, Clone)]
pub struct RuleStore {
    /// Flat directory containing `<name>.yaml` files.
    rules_dir: PathBuf,
}

impl RuleStore {
    /// Create a store over `rules_dir`. Does not touch the filesystem.
    pub fn new(rules_dir: impl Into<PathBuf>) -> Self {
        Self {
            rules_dir: rules_dir.into(),
        }
    }

    /// Create the rules directory (and parents) if it does not exist.
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.rules_dir.exists() {
            fs::create_dir_all(&self.rules_dir)?;
            info!(path = %self.rules_dir.display(), "created rules directory");
        }
        Ok(())
    }

    /// Get the rules directory path.
    pub fn rules_dir(&self) -> &Path {
        &self.rules_dir
    }

    /// Path of the file backing `name`.
    pub fn path_for(&self, name: &RuleName) -> PathBuf {
        self.rules_dir.join(name.file_name())
    }

    /// List the names of all rules, sorted ascending.
    ///
    /// A rule is any regular file ending in `.yaml`, listed by its stem as
    /// found on disk. Names that [`RuleName`] would reject are still listed.
    /// Any error while enumerating fails the whole listing.
    pub fn list(&self) -> Result<Vec<String>> {
        let read_dir_err = |source| RuleError::ReadDir {
            path: self.rules_dir.clone(),
            source,
        };

        let entries = fs::read_dir(&self.rules_dir).map_err(read_dir_err)?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(read_dir_err)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            match file_name
                .strip_suffix(RULE_EXTENSION)
                .and_then(|n| n.strip_suffix('.'))
            {
                Some("") => debug!(path = %path.display(), "skipping file with empty stem"),
                Some(stem) => names.push(stem.to_string()),
                None => {}
            }
        }

        names.sort();
        Ok(names)
    }

    /// Whether a file backs `name`. Only a missing file counts as absent;
    /// other metadata errors are returned.
    pub fn exists(&self, name: &RuleName) -> Result<bool> {
        match fs::metadata(self.path_for(name)) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(RuleError::Io(e)),
        }
    }

    /// Write `content` as the rule's full contents, replacing any existing
    /// file of the same name.
    pub fn create(&self, name: &RuleName, content: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(name);
        self.write_atomic(name, &path, content)?;
        info!(rule = %name, bytes = content.len(), path = %path.display(), "wrote rule file");
        Ok(path)
    }

    /// Replace the contents of an existing rule.
    ///
    /// Returns [`RuleError::NotFound`] without writing anything if the rule
    /// has no backing file.
    pub fn update(&self, name: &RuleName, content: &[u8]) -> Result<PathBuf> {
        if !self.exists(name)? {
            return Err(RuleError::NotFound(name.to_string()));
        }
        let path = self.path_for(name);
        self.write_atomic(name, &path, content)?;
        info!(rule = %name, bytes = content.len(), path = %path.display(), "updated rule file");
        Ok(path)
    }

    /// Read the rule's raw contents.
    pub fn get(&self, name: &RuleName) -> Result<Vec<u8>> {
        if !self.exists(name)? {
            return Err(RuleError::NotFound(name.to_string()));
        }
        let path = self.path_for(name);
        fs::read(&path).map_err(|source| RuleError::Read { path, source })
    }

    /// Write to a hidden temp file in the same directory, then rename over
    /// the final path so readers never observe a partial file.
    fn write_atomic(&self, name: &RuleName, final_path: &Path, content: &[u8]) -> Result<()> {
        let seq = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp_path = self.rules_dir.join(format!(
            ".{}.{}.{}.tmp",
            name.file_name(),
            std::process::id(),
            seq
        ));

        if let Err(source) = fs::write(&tmp_path, content) {
            discard_temp(&tmp_path);
            return Err(RuleError::Write {
                path: tmp_path,
                source,
            });
        }

        if let Err(source) = fs::rename(&tmp_path, final_path) {
            discard_temp(&tmp_path);
            return Err(RuleError::Write {
                path: final_path.to_path_buf(),
                source,
            });
        }
        Ok(())
    }
}

/// Best-effort removal of a temp file left by a failed write. A write that
/// failed before creating the file leaves nothing to remove.
fn discard_temp(tmp_path: &Path) {
    match fs::remove_file(tmp_path) {
        Ok(()) => debug!(path = %tmp_path.display(), "removed temp file"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %tmp_path.display(), error = %e, "failed to remove temp file"),
    }
}
