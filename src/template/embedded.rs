//! Assets bundled into the binary at compile time.
//!
//! Paths are relative to this file; keep them in sync with `templates/`.

pub const CUDA_HEADER: &str = include_str!("../../templates/cuda_gpuclass.h");
pub const CUDA_SOURCE: &str = include_str!("../../templates/cuda_gpuclass.cppoverride");
pub const METAL_HEADER: &str = include_str!("../../templates/metal_gpuclass.h");
pub const METAL_SOURCE: &str = include_str!("../../templates/metal_gpuclass.moverride");

/// Config used when no `--input-config` is given.
pub const SAMPLE_CONFIG: &str = include_str!("../../templates/ext_sample_config.yaml");
