use crate::error::{RenameError, Result};
use std::io;
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(RenameError::io(
            path,
            io::Error::new(io::ErrorKind::NotFound, "path does not exist"),
        ));
    }
    if !path.is_dir() {
        return Err(RenameError::io(
            path,
            io::Error::new(io::ErrorKind::NotADirectory, "path is not a directory"),
        ));
    }
    Ok(())
}
