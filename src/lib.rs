//! gpuaudiogen - GPU audio buffer code generator
//!
//! Reads a declarative buffer layout and writes CUDA and Metal sources by
//! splicing generated snippets into template files.
//!
//! # Pipeline
//!
//! - [`config`]: the parsed buffer layout
//! - [`codegen`]: per-backend declaration and allocation snippets
//! - [`template`]: loading, token rewriting and writing of template files
//! - [`platform`]: which templates run for the requested backends

pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod platform;
pub mod template;

pub use config::{Buffer, Config, Location};
pub use error::{GpuagenError, Result};
pub use platform::{generate, GenerateOptions, Platform};
