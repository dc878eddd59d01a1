//! Platform Orchestrator
//!
//! Decides which templates to generate and runs each one through
//! load, rewrite and emit, strictly in sequence.

use std::fmt;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::config::{Config, Location};
use crate::error::Result;
use crate::template::{
    emit, load_template, EmittedFile, LogicalTemplate, SourceMappings, Template, TemplateSource,
};

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "/tmp/gpuaudiogen";

/// A supported GPU backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Cuda,
    Metal,
}

impl Platform {
    /// Processing order.
    pub const ALL: [Platform; 2] = [Platform::Cuda, Platform::Metal];

    /// Name accepted by `--platforms` (case-sensitive).
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Cuda => "CUDA",
            Platform::Metal => "Metal",
        }
    }

    /// Header first, then implementation.
    pub fn templates(&self) -> [LogicalTemplate; 2] {
        match self {
            Platform::Cuda => [LogicalTemplate::CudaHeader, LogicalTemplate::CudaSource],
            Platform::Metal => [LogicalTemplate::MetalHeader, LogicalTemplate::MetalSource],
        }
    }

    /// Parse a comma-separated platform list. Empty means every platform.
    ///
    /// Unknown names are logged and ignored. The result is in processing
    /// order without duplicates.
    pub fn parse_list(list: &str) -> Vec<Platform> {
        if list.is_empty() {
            return Platform::ALL.to_vec();
        }

        let requested: Vec<&str> = list.split(',').collect();
        for name in &requested {
            if !Platform::ALL.iter().any(|p| p.label() == *name) {
                warn!("Ignoring unknown platform '{}'", name);
            }
        }

        Platform::ALL
            .into_iter()
            .filter(|p| requested.contains(&p.label()))
            .collect()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Run settings, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    pub platforms: Vec<Platform>,
    pub source_mappings: SourceMappings,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            platforms: Platform::ALL.to_vec(),
            source_mappings: SourceMappings::default(),
        }
    }
}

/// Warnings about buffers whose generated code needs attention.
pub fn buffer_warnings(config: &Config) -> Vec<String> {
    config
        .buffers
        .iter()
        .filter_map(|buffer| match &buffer.location {
            Location::Hybrid => Some(format!(
                "Hybrid buffer '{}' not yet checked for correctness",
                buffer.name
            )),
            Location::Unrecognized(tag) => Some(format!(
                "Buffer '{}' has unrecognized location '{}'; no code is generated for it",
                buffer.name, tag
            )),
            Location::Device | Location::Shared | Location::Host => None,
        })
        .collect()
}

/// Generate every template of every requested platform.
///
/// Stops at the first error; files written before it are left in place.
pub fn generate(config: &Config, options: &GenerateOptions) -> Result<Vec<EmittedFile>> {
    for warning in buffer_warnings(config) {
        warn!("{}", warning);
    }
    if !options.source_mappings.is_empty() {
        for mapping in options.source_mappings.entries() {
            debug!(
                "Source mapping {} -> {}",
                mapping.original,
                mapping.replacement.display()
            );
        }
    }

    let mut emitted = Vec::new();
    for platform in Platform::ALL {
        if !options.platforms.contains(&platform) {
            debug!("Skipping {}", platform);
            continue;
        }
        for template in platform.templates() {
            emitted.push(process_one(config, options, template)?);
        }
    }
    Ok(emitted)
}

fn process_one(
    config: &Config,
    options: &GenerateOptions,
    template: LogicalTemplate,
) -> Result<EmittedFile> {
    let (source, text) = load_template(template, &options.source_mappings)?;
    match &source {
        TemplateSource::Bundled => info!("Processing {} (bundled)", template),
        TemplateSource::File(path) => info!("Processing {} from {}", template, path.display()),
    }

    let parsed = Template::parse(&text);
    debug!("{} slots: {:?}", template, parsed.slots());
    let contents = parsed.render(config);
    emit(&options.output_dir, template, config.classname(), &contents)
}
