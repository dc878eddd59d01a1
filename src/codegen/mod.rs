//! Snippet Builders
//!
//! Pure functions turning a [`Config`] into the buffer declaration and
//! allocation blocks of each backend. Every block is wrapped in the begin/end
//! markers of its [`Region`] so a generated file can be fed back in and
//! regenerated.

mod cuda;
mod metal;

pub use cuda::{cuda_buffer_declarations, cuda_buffer_init};
pub use metal::{metal_buffer_declarations, metal_buffer_init};

use crate::config::{Buffer, Config};

/// Size in bytes of one buffer element (`float`).
pub const SIZE_BYTES: usize = 4;

// ============================================================================
// Regions
// ============================================================================

/// A marker-delimited block of generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    CudaBufferHeader,
    CudaBufferInit,
    MetalBufferHeader,
    MetalBufferInit,
    /// Wraps the class name where a template wants it regenerable.
    Name,
}

impl Region {
    /// All region kinds, in collapse order.
    pub const ALL: [Region; 5] = [
        Region::CudaBufferHeader,
        Region::CudaBufferInit,
        Region::Name,
        Region::MetalBufferHeader,
        Region::MetalBufferInit,
    ];

    pub fn begin_marker(&self) -> &'static str {
        match self {
            Region::CudaBufferHeader => "//<GPUAGEN_CUDA_BUFFER_HEADER>",
            Region::CudaBufferInit => "//<GPUAGEN_CUDA_BUFFER_INIT>",
            Region::MetalBufferHeader => "//<GPUAGEN_METAL_BUFFER_HEADER>",
            Region::MetalBufferInit => "//<GPUAGEN_METAL_BUFFER_INIT>",
            Region::Name => "//<GPUAGEN_CUDA_NAME>",
        }
    }

    pub fn end_marker(&self) -> &'static str {
        match self {
            Region::CudaBufferHeader => "//<END_GPUAGEN_CUDA_BUFFER_HEADER>",
            Region::CudaBufferInit => "//<END_GPUAGEN_CUDA_BUFFER_INIT>",
            Region::MetalBufferHeader => "//<END_GPUAGEN_METAL_BUFFER_HEADER>",
            Region::MetalBufferInit => "//<END_GPUAGEN_METAL_BUFFER_INIT>",
            Region::Name => "//<END_GPUAGEN_CUDA_NAME>",
        }
    }
}

/// Writes `region`'s begin marker, one snippet per buffer, then the end marker.
///
/// The block always ends with a newline after the end marker; region
/// collapse relies on that to round-trip without accumulating blank lines.
fn emit_region<F>(region: Region, config: &Config, mut per_buffer: F) -> String
where
    F: FnMut(&Buffer, &mut String),
{
    let mut out = String::new();
    out.push_str(region.begin_marker());
    out.push('\n');
    for buffer in &config.buffers {
        per_buffer(buffer, &mut out);
    }
    out.push_str(region.end_marker());
    out.push('\n');
    out
}
