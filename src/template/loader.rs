//! Template Loader
//!
//! Resolves a [`LogicalTemplate`] to its text: the bundled asset, or a file
//! on disk when `--regenerate-source-mappings` redirects it.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::LogicalTemplate;
use crate::error::{GpuagenError, Result};

/// How a mapping's left-hand side is compared with a logical name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The left-hand side contains the logical name.
    #[default]
    Contains,
    /// The left-hand side equals the logical name.
    Exact,
}

/// One `original=replacement` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMapping {
    pub original: String,
    pub replacement: PathBuf,
}

/// Ordered override list. The first matching entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMappings {
    entries: Vec<SourceMapping>,
    mode: MatchMode,
}

impl SourceMappings {
    /// Parse a comma-separated list of `original=replacement` pairs.
    ///
    /// Empty entries are skipped; an entry without `=` is rejected.
    pub fn parse(spec: &str, mode: MatchMode) -> Result<Self> {
        let mut entries = Vec::new();
        for entry in spec.split(',').filter(|e| !e.is_empty()) {
            let (original, replacement) =
                entry
                    .split_once('=')
                    .ok_or_else(|| GpuagenError::InvalidSourceMapping {
                        entry: entry.to_string(),
                    })?;
            if original.is_empty() || replacement.is_empty() {
                return Err(GpuagenError::InvalidSourceMapping {
                    entry: entry.to_string(),
                });
            }
            entries.push(SourceMapping {
                original: original.to_string(),
                replacement: PathBuf::from(replacement),
            });
        }
        Ok(Self { entries, mode })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SourceMapping] {
        &self.entries
    }

    /// Replacement path for `logical`, if any entry matches.
    pub fn resolve(&self, logical: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|m| match self.mode {
                MatchMode::Contains => m.original.contains(logical),
                MatchMode::Exact => m.original == logical,
            })
            .map(|m| m.replacement.as_path())
    }
}

/// Where a template's text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Bundled,
    File(PathBuf),
}

/// Load the text of `template`, honouring any override in `mappings`.
pub fn load_template(
    template: LogicalTemplate,
    mappings: &SourceMappings,
) -> Result<(TemplateSource, String)> {
    match mappings.resolve(template.name()) {
        Some(path) => {
            info!("Regenerating {} from {}", template, path.display());
            let text = fs::read_to_string(path).map_err(|e| GpuagenError::TemplateReadError {
                name: template.name().to_string(),
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok((TemplateSource::File(path.to_path_buf()), text))
        }
        None => {
            debug!("Using bundled {}", template);
            Ok((TemplateSource::Bundled, template.bundled_text().to_string()))
        }
    }
}
