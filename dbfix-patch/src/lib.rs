//! Splice engine for dbfix.
//!
//! Responsibilities:
//! - Hold the fixed target list and the setup/teardown boilerplate.
//! - Apply the two regex transforms to a handler's source text.
//! - Read, patch, and overwrite a single target file.
//!
//! The transforms are not idempotent: patching an already-patched file
//! inserts both blocks a second time. Callers own the decision to run at
//! most once per file.

pub mod boilerplate;
mod error;
mod splice;

pub use error::FileOpError;
pub use splice::{inject_setup, inject_teardown, patch_source};

use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use tracing::debug;

/// Counters for a full run over the target list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchSummary {
    pub fixed: u64,
    pub failed: u64,
}

/// Patch one target file in place: read, splice, overwrite.
///
/// `rel` is resolved against `repo_root`. The write replaces the file
/// wholesale; there is no backup, and a read failure leaves the file
/// untouched.
pub fn patch_file(repo_root: &Utf8Path, rel: &Utf8Path) -> Result<(), FileOpError> {
    let abs = abs_path(repo_root, rel);
    let contents = fs::read_to_string(&abs).map_err(FileOpError::Read)?;
    let patched = patch_source(&contents);
    fs::write(&abs, patched).map_err(FileOpError::Write)?;
    debug!("patched {}", rel);
    Ok(())
}

fn abs_path(repo_root: &Utf8Path, rel: &Utf8Path) -> Utf8PathBuf {
    if rel.is_absolute() {
        rel.to_path_buf()
    } else {
        repo_root.join(rel)
    }
}
