//! Metal buffer declarations and allocations.
//!
//! GPU-visible buffers default to the shared storage mode (unified memory on
//! Apple silicon); host buffers are plain heap memory.

use std::fmt::Write;

use super::{emit_region, Region, SIZE_BYTES};
use crate::config::{Config, Location};

pub fn metal_buffer_declarations(config: &Config) -> String {
    emit_region(Region::MetalBufferHeader, config, |buffer, out| {
        match buffer.location {
            Location::Device | Location::Shared | Location::Hybrid => {
                let _ = writeln!(out, "id<MTLBuffer> {};", buffer.name);
            }
            Location::Host => {
                let _ = writeln!(out, "float* {};", buffer.name);
            }
            Location::Unrecognized(_) => {}
        }
    })
}

pub fn metal_buffer_init(config: &Config) -> String {
    emit_region(Region::MetalBufferInit, config, |buffer, out| {
        match buffer.location {
            Location::Device | Location::Shared | Location::Hybrid => {
                let _ = writeln!(
                    out,
                    "{} = [device newBufferWithLength:{}*{} options:MTLResourceStorageModeShared];",
                    buffer.name, buffer.size, SIZE_BYTES
                );
            }
            Location::Host => {
                let _ = writeln!(out, "{} = malloc({}*{});", buffer.name, buffer.size, SIZE_BYTES);
            }
            Location::Unrecognized(_) => {}
        }
    })
}
