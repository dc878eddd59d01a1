//! Buffer layout configuration
//!
//! The YAML document read by the generator: a handful of global parameters
//! and an ordered list of buffers. Buffer order is preserved and becomes the
//! emission order of every generated block.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GpuagenError, Result};

/// Global parameters shared by every generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Parameters {
    /// Identifier used in generated type and file names.
    #[serde(default)]
    pub classname: String,
    /// Sample rate substituted into the templates.
    #[serde(default)]
    pub samplerate: i64,
}

/// Where a buffer lives, which decides its allocation pattern per backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Location {
    Device,
    Shared,
    Hybrid,
    Host,
    /// Any other tag. Kept verbatim so it can be reported.
    Unrecognized(String),
}

impl From<String> for Location {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "device" => Location::Device,
            "shared" => Location::Shared,
            "hybrid" => Location::Hybrid,
            "host" => Location::Host,
            _ => Location::Unrecognized(tag),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::Unrecognized(String::new())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Device => write!(f, "device"),
            Location::Shared => write!(f, "shared"),
            Location::Hybrid => write!(f, "hybrid"),
            Location::Host => write!(f, "host"),
            Location::Unrecognized(tag) => write!(f, "{}", tag),
        }
    }
}

/// Code generation switches for a single buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CodegenParameters {
    /// Accepted but not yet used by any builder.
    #[serde(default)]
    pub init: bool,
}

/// Per-buffer parameter block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BufferParameters {
    #[serde(default)]
    pub codegen: CodegenParameters,
}

/// A single buffer declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Buffer {
    /// Identifier of the generated field.
    #[serde(default)]
    pub name: String,
    /// Element count expression, interpolated verbatim and never evaluated.
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub parameters: BufferParameters,
}

/// The full generator configuration. Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(default)]
    pub buffers: Vec<Buffer>,
}

impl Config {
    /// Parse a config from YAML text. Unknown fields are ignored.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text)?;
        Ok(config)
    }

    /// Read and parse a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| GpuagenError::ConfigReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&text)
    }

    /// The sample config bundled into the binary.
    pub fn bundled_sample() -> Result<Self> {
        Self::from_yaml(crate::template::embedded::SAMPLE_CONFIG)
    }

    pub fn classname(&self) -> &str {
        &self.parameters.classname
    }
}
