//! Templates
//!
//! Loading, rewriting and writing out the four generated files. Each file is
//! identified by a [`LogicalTemplate`], independent of where its text comes
//! from (bundled asset or an on-disk override).

pub mod embedded;
mod emitter;
mod loader;
mod rewriter;

pub use emitter::{emit, EmittedFile};
pub use loader::{load_template, MatchMode, SourceMapping, SourceMappings, TemplateSource};
pub use rewriter::{Slot, Template};

use std::fmt;

/// The fixed set of templates the generator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalTemplate {
    CudaHeader,
    CudaSource,
    MetalHeader,
    MetalSource,
}

impl LogicalTemplate {
    pub const ALL: [LogicalTemplate; 4] = [
        LogicalTemplate::CudaHeader,
        LogicalTemplate::CudaSource,
        LogicalTemplate::MetalHeader,
        LogicalTemplate::MetalSource,
    ];

    /// Lookup key, also the name override mappings are matched against.
    pub fn name(&self) -> &'static str {
        match self {
            LogicalTemplate::CudaHeader => "cuda_gpuclass.h",
            LogicalTemplate::CudaSource => "cuda_gpuclass.cppoverride",
            LogicalTemplate::MetalHeader => "metal_gpuclass.h",
            LogicalTemplate::MetalSource => "metal_gpuclass.moverride",
        }
    }

    pub fn bundled_text(&self) -> &'static str {
        match self {
            LogicalTemplate::CudaHeader => embedded::CUDA_HEADER,
            LogicalTemplate::CudaSource => embedded::CUDA_SOURCE,
            LogicalTemplate::MetalHeader => embedded::METAL_HEADER,
            LogicalTemplate::MetalSource => embedded::METAL_SOURCE,
        }
    }

    /// Name of the generated file for a given class name.
    pub fn output_file_name(&self, classname: &str) -> String {
        match self {
            LogicalTemplate::CudaHeader => format!("{}.h", classname),
            LogicalTemplate::CudaSource => format!("{}.cpp", classname),
            LogicalTemplate::MetalHeader => format!("{}_metal.h", classname),
            LogicalTemplate::MetalSource => format!("{}.m", classname),
        }
    }
}

impl fmt::Display for LogicalTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
