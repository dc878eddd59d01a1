//! CLI Module
//!
//! Command-line interface for gpuaudiogen.

pub mod commands;

use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::platform::{GenerateOptions, Platform, DEFAULT_OUTPUT_DIR};
use crate::template::{MatchMode, SourceMappings};

/// gpuaudiogen - CUDA and Metal buffer code generator
#[derive(Parser, Debug)]
#[command(name = "gpuaudiogen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input config file (defaults to the bundled sample config)
    #[arg(long = "input-config")]
    pub input_config: Option<PathBuf>,

    /// Output directory for source files
    #[arg(long = "output-directory", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_directory: PathBuf,

    /// Comma-separated list of platforms: {CUDA, Metal}. Default or empty is all.
    #[arg(long)]
    pub platforms: Option<String>,

    /// Regenerate files, original=current mappings, comma-separated, no spaces.
    #[arg(long = "regenerate-source-mappings")]
    pub regenerate_source_mappings: Option<String>,

    /// Match mapping originals against template names exactly instead of by substring
    #[arg(long = "exact-source-mappings")]
    pub exact_source_mappings: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the immutable run settings.
    pub fn generate_options(&self) -> Result<GenerateOptions> {
        let mode = if self.exact_source_mappings {
            MatchMode::Exact
        } else {
            MatchMode::Contains
        };

        Ok(GenerateOptions {
            output_dir: self.output_directory.clone(),
            platforms: Platform::parse_list(self.platforms.as_deref().unwrap_or("")),
            source_mappings: SourceMappings::parse(
                self.regenerate_source_mappings.as_deref().unwrap_or(""),
                mode,
            )?,
        })
    }
}
