//! Error types for gpuaudiogen
//!
//! Every failure is fatal to a run; the variants only differ in what they
//! tell the operator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using GpuagenError
pub type Result<T> = std::result::Result<T, GpuagenError>;

/// All possible errors in gpuaudiogen
#[derive(Error, Debug)]
pub enum GpuagenError {
    // Config errors
    #[error("Failed to read config file: {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    ConfigParseError(#[from] serde_yaml::Error),

    #[error("Invalid source mapping '{entry}': expected original=replacement")]
    InvalidSourceMapping { entry: String },

    // Asset errors
    #[error("Failed to load template {name} from {path}: {source}")]
    TemplateReadError {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Output errors
    #[error("Directory creation failed: {path}: {source}")]
    DirectoryCreateError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GpuagenError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            GpuagenError::ConfigReadError { .. } => "CONFIG_READ",
            GpuagenError::ConfigParseError(_) => "CONFIG_PARSE",
            GpuagenError::InvalidSourceMapping { .. } => "INVALID_SOURCE_MAPPING",
            GpuagenError::TemplateReadError { .. } => "TEMPLATE_READ",
            GpuagenError::DirectoryCreateError { .. } => "DIRECTORY_CREATE",
            GpuagenError::FileWriteError { .. } => "FILE_WRITE",
        }
    }

    /// Returns true if no output file can have been touched yet.
    pub fn is_pre_output(&self) -> bool {
        matches!(
            self,
            GpuagenError::ConfigReadError { .. }
                | GpuagenError::ConfigParseError(_)
                | GpuagenError::InvalidSourceMapping { .. }
        )
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            GpuagenError::ConfigReadError { .. } => {
                Some("Check the --input-config path, or omit it to use the bundled sample.")
            }
            GpuagenError::ConfigParseError(_) => {
                Some("Check the config against the bundled ext_sample_config.yaml.")
            }
            GpuagenError::InvalidSourceMapping { .. } => {
                Some("Use comma-separated original=replacement pairs with no spaces.")
            }
            GpuagenError::TemplateReadError { .. } => {
                Some("Check the replacement paths given to --regenerate-source-mappings.")
            }
            GpuagenError::DirectoryCreateError { .. } | GpuagenError::FileWriteError { .. } => {
                Some("Check that --output-directory is writable.")
            }
        }
    }
}
