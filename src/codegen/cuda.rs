//! CUDA buffer declarations and allocations.

use std::fmt::Write;

use super::{emit_region, Region, SIZE_BYTES};
use crate::config::{Config, Location};

/// One `float *` field per buffer, whatever its location.
pub fn cuda_buffer_declarations(config: &Config) -> String {
    emit_region(Region::CudaBufferHeader, config, |buffer, out| {
        match buffer.location {
            Location::Device | Location::Shared | Location::Hybrid | Location::Host => {
                let _ = writeln!(out, "float *{};", buffer.name);
            }
            // No snippet for tags we don't know how to place.
            Location::Unrecognized(_) => {}
        }
    })
}

/// Allocation statements for the constructor body.
///
/// Managed allocations are followed by an abort-on-failure check. Pinned
/// host allocations are not checked, matching previously generated sources.
pub fn cuda_buffer_init(config: &Config) -> String {
    emit_region(Region::CudaBufferInit, config, |buffer, out| {
        let name = &buffer.name;
        let size = &buffer.size;
        match buffer.location {
            Location::Device | Location::Shared => {
                managed_allocation(out, name, size);
            }
            Location::Hybrid => {
                let _ = writeln!(
                    out,
                    "// WARNING: hybrid buffer {} not yet checked for correctness.",
                    name
                );
                managed_allocation(out, name, size);
            }
            Location::Host => {
                let _ = writeln!(
                    out,
                    "err = cudaMallocHost((void**)&{}, {}*{});\n",
                    name, size, SIZE_BYTES
                );
            }
            Location::Unrecognized(_) => {}
        }
    })
}

fn managed_allocation(out: &mut String, name: &str, size: &str) {
    let _ = writeln!(
        out,
        "err = cudaMallocManaged(&{}, {}*{});",
        name, size, SIZE_BYTES
    );
    let _ = writeln!(
        out,
        "if(err != cudaSuccess) {{ printf(\"Error allocating {} ({}*{} bytes): %s\\n\", cudaGetErrorString(err)); exit(EXIT_FAILURE); }}\n",
        name, size, SIZE_BYTES
    );
}
