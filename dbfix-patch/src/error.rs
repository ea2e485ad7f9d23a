//! Error type for dbfix file operations.

use std::io;

use thiserror::Error;

/// Failure while reading or writing a target file.
///
/// The wrapped errors come from `fs-err`, so their messages already name the
/// operation and the path. The splice transforms themselves are total over
/// the file's text and cannot fail.
#[derive(Debug, Error)]
pub enum FileOpError {
    /// The target could not be opened or read.
    #[error(transparent)]
    Read(io::Error),

    /// The patched text could not be written back.
    #[error(transparent)]
    Write(io::Error),
}
