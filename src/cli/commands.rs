//! CLI Command Implementations
//!
//! Loads the config and drives generation for the parsed command line.

use log::{debug, info};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{GpuagenError, Result};
use crate::platform::generate;
use crate::template::EmittedFile;

/// Load the config named on the command line, or the bundled sample.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.input_config {
        Some(path) => {
            info!("Loading config: {}", path.display());
            Config::load(path)?
        }
        None => {
            info!("Using bundled sample config");
            Config::bundled_sample()?
        }
    };
    debug!("Parsed config: {:?}", config);
    Ok(config)
}

/// Generate every requested file and print a summary line per file.
pub fn run(cli: &Cli) -> Result<Vec<EmittedFile>> {
    // Options first: a bad mapping must fail before anything is written.
    let options = cli.generate_options()?;
    let config = load_config(cli)?;

    let emitted = generate(&config, &options)?;

    for file in &emitted {
        println!(
            "{} -> {} ({} bytes, sha256 {})",
            file.template,
            file.path.display(),
            file.bytes,
            &file.sha256[..12]
        );
    }

    Ok(emitted)
}

/// Diagnostic lines for a failed run: code and hint, then whether any
/// output may already be on disk.
pub fn failure_report(err: &GpuagenError) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(hint) = err.recovery_suggestion() {
        lines.push(format!("[{}] {}", err.error_code(), hint));
    }
    if err.is_pre_output() {
        lines.push("No output files were written.".to_string());
    } else {
        lines.push("Files generated before this failure were left in place.".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_with_bundled_config() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().to_str().unwrap();
        let cli = Cli::parse_from(["gpuaudiogen", "--output-directory", out]);

        let emitted = run(&cli).unwrap();

        assert_eq!(emitted.len(), 4);
        assert!(temp_dir.path().join("GpuAudioProcessor.h").exists());
        assert!(temp_dir.path().join("GpuAudioProcessor.m").exists());
    }

    #[test]
    fn test_bad_config_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("bad.yaml");
        fs::write(&config, "buffers: [unclosed").unwrap();
        let out = temp_dir.path().join("out");

        let cli = Cli::parse_from([
            "gpuaudiogen",
            "--input-config",
            config.to_str().unwrap(),
            "--output-directory",
            out.to_str().unwrap(),
        ]);

        let err = run(&cli).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_PARSE");
        assert!(!out.exists());
        assert_eq!(
            failure_report(&err).last().map(String::as_str),
            Some("No output files were written.")
        );
    }

    #[test]
    fn test_template_failure_reports_partial_output() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "gpuaudiogen",
            "--output-directory",
            out,
            "--regenerate-source-mappings",
            "metal_gpuclass.moverride=/nonexistent/Foo.m",
        ]);

        let err = run(&cli).unwrap_err();
        let report = failure_report(&err);

        assert!(report[0].starts_with("[TEMPLATE_READ]"));
        assert_eq!(
            report[1],
            "Files generated before this failure were left in place."
        );
        assert!(temp_dir.path().join("GpuAudioProcessor_metal.h").exists());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::parse_from(["gpuaudiogen", "--input-config", "/nonexistent/layout.yaml"]);
        let err = load_config(&cli).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_READ");
    }
}
