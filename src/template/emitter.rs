//! File Emitter
//!
//! Writes rewritten template text to `{output_dir}/{mapped name}`,
//! overwriting whatever is there.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use sha2::{Digest, Sha256};

use super::LogicalTemplate;
use crate::error::{GpuagenError, Result};

/// Record of one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub template: LogicalTemplate,
    pub path: PathBuf,
    pub bytes: usize,
    /// Hex SHA-256 of the written contents.
    pub sha256: String,
}

/// Write `contents` as the output file of `template`.
///
/// Creates `output_dir` if needed. On Unix the file mode is set to 0644.
pub fn emit(
    output_dir: &Path,
    template: LogicalTemplate,
    classname: &str,
    contents: &str,
) -> Result<EmittedFile> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir).map_err(|e| GpuagenError::DirectoryCreateError {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
    }

    let path = output_dir.join(template.output_file_name(classname));
    info!("Writing file to disk: {}", path.display());

    fs::write(&path, contents).map_err(|e| GpuagenError::FileWriteError {
        path: path.clone(),
        source: e,
    })?;
    set_readable_permissions(&path)?;

    Ok(EmittedFile {
        template,
        path,
        bytes: contents.len(),
        sha256: format!("{:x}", Sha256::digest(contents.as_bytes())),
    })
}

#[cfg(unix)]
fn set_readable_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o644)).map_err(|e| {
        GpuagenError::FileWriteError {
            path: path.to_path_buf(),
            source: e,
        }
    })
}

#[cfg(not(unix))]
fn set_readable_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
