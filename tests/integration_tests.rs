//! Integration Tests
//!
//! End-to-end runs of the generator against temporary output directories.

use std::fs;
use std::path::Path;

use gpuaudiogen::template::{MatchMode, SourceMappings};
use gpuaudiogen::{generate, Config, GenerateOptions, Platform};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const FOO_CONFIG: &str = r#"
parameters:
  classname: "Foo"
  samplerate: 48000
buffers:
  - name: "buf1"
    size: "1024"
    location: "host"
"#;

const MIXED_CONFIG: &str = r#"
parameters:
  classname: "Mixer"
  samplerate: 44100
buffers:
  - name: "input"
    size: 1024
    location: "host"
  - name: "delayLine"
    size: 2*FS
    location: "device"
  - name: "output"
    size: 512
    location: "shared"
  - name: "scratch"
    size: 4096
    location: "hybrid"
  - name: "texture"
    size: 16
    location: "texture"
"#;

fn options(output_dir: &Path, platforms: &str, mappings: &str) -> GenerateOptions {
    GenerateOptions {
        output_dir: output_dir.to_path_buf(),
        platforms: Platform::parse_list(platforms),
        source_mappings: SourceMappings::parse(mappings, MatchMode::Contains).unwrap(),
    }
}

fn region<'a>(text: &'a str, begin: &str, end: &str) -> &'a str {
    let start = text.find(begin).expect("begin marker") + begin.len();
    let stop = start + text[start..].find(end).expect("end marker");
    &text[start..stop]
}

// === End-to-end ===

#[test]
fn test_cuda_only_host_buffer() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::from_yaml(FOO_CONFIG).unwrap();

    let emitted = generate(&config, &options(temp_dir.path(), "CUDA", "")).unwrap();
    assert_eq!(emitted.len(), 2);

    let header = fs::read_to_string(temp_dir.path().join("Foo.h")).unwrap();
    let decls = region(
        &header,
        "//<GPUAGEN_CUDA_BUFFER_HEADER>",
        "//<END_GPUAGEN_CUDA_BUFFER_HEADER>",
    );
    assert_eq!(decls, "\nfloat *buf1;\n");
    assert!(header.contains("\nFoo\n"));
    assert!(header.contains("#define GPUAGEN_SAMPLERATE 48000"));

    let source = fs::read_to_string(temp_dir.path().join("Foo.cpp")).unwrap();
    assert!(source.contains("err = cudaMallocHost((void**)&buf1, 1024*4);"));
    assert!(!source.contains("cudaSuccess"));
    assert!(source.contains("Foo::Foo()"));

    assert!(!temp_dir.path().join("Foo_metal.h").exists());
    assert!(!temp_dir.path().join("Foo.m").exists());
}

#[test]
fn test_metal_only() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::from_yaml(MIXED_CONFIG).unwrap();

    let emitted = generate(&config, &options(temp_dir.path(), "Metal", "")).unwrap();
    let names: Vec<String> = emitted
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["Mixer_metal.h", "Mixer.m"]);

    let source = fs::read_to_string(temp_dir.path().join("Mixer.m")).unwrap();
    let decls = region(
        &source,
        "//<GPUAGEN_METAL_BUFFER_HEADER>",
        "//<END_GPUAGEN_METAL_BUFFER_HEADER>",
    );
    assert_eq!(
        decls,
        "\nfloat* input;\nid<MTLBuffer> delayLine;\nid<MTLBuffer> output;\nid<MTLBuffer> scratch;\n"
    );
    assert!(source.contains(
        "delayLine = [device newBufferWithLength:2*FS*4 options:MTLResourceStorageModeShared];"
    ));
    assert!(source.contains("input = malloc(1024*4);"));
    assert!(source.contains("static const int kSampleRate = 44100;"));

    let header = fs::read_to_string(temp_dir.path().join("Mixer_metal.h")).unwrap();
    assert!(header.starts_with("#ifndef Mixer_h\n#define Mixer_h\n"));
}

#[test]
fn test_all_platforms_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::from_yaml(MIXED_CONFIG).unwrap();

    let emitted = generate(&config, &options(temp_dir.path(), "", "")).unwrap();
    let paths: Vec<_> = emitted.iter().map(|f| f.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            temp_dir.path().join("Mixer.h"),
            temp_dir.path().join("Mixer.cpp"),
            temp_dir.path().join("Mixer_metal.h"),
            temp_dir.path().join("Mixer.m"),
        ]
    );
}

#[test]
fn test_cuda_init_checks_managed_allocations() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::from_yaml(MIXED_CONFIG).unwrap();
    generate(&config, &options(temp_dir.path(), "CUDA", "")).unwrap();

    let source = fs::read_to_string(temp_dir.path().join("Mixer.cpp")).unwrap();
    assert_eq!(source.matches("cudaMallocManaged").count(), 3);
    assert_eq!(source.matches("if(err != cudaSuccess)").count(), 3);
    assert_eq!(source.matches("cudaMallocHost").count(), 1);
    assert!(!source.contains("texture"));
}

// === Regeneration ===

#[test]
fn test_regenerate_from_generated_files_is_identical() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    let config = Config::from_yaml(MIXED_CONFIG).unwrap();

    let first = generate(&config, &options(first_dir.path(), "", "")).unwrap();

    let mappings = format!(
        "cuda_gpuclass.h={},cuda_gpuclass.cppoverride={},metal_gpuclass.h={},metal_gpuclass.moverride={}",
        first_dir.path().join("Mixer.h").display(),
        first_dir.path().join("Mixer.cpp").display(),
        first_dir.path().join("Mixer_metal.h").display(),
        first_dir.path().join("Mixer.m").display(),
    );
    let second = generate(&config, &options(second_dir.path(), "", &mappings)).unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.sha256, b.sha256, "{} changed on regeneration", a.template);
        assert_eq!(
            fs::read_to_string(&a.path).unwrap(),
            fs::read_to_string(&b.path).unwrap()
        );
    }
}

#[test]
fn test_override_replaces_bundled_header() {
    let temp_dir = TempDir::new().unwrap();
    let alt = temp_dir.path().join("alt.h");
    fs::write(&alt, "// custom __gpuagen.tok.NAME\n__gpuagen.tok.BUFFER_HEADER").unwrap();
    let out = temp_dir.path().join("out");

    let config = Config::from_yaml(FOO_CONFIG).unwrap();
    let mappings = format!("cuda_gpuclass.h={}", alt.display());
    generate(&config, &options(&out, "CUDA", &mappings)).unwrap();

    let header = fs::read_to_string(out.join("Foo.h")).unwrap();
    assert_eq!(
        header,
        "// custom Foo\n//<GPUAGEN_CUDA_BUFFER_HEADER>\nfloat *buf1;\n//<END_GPUAGEN_CUDA_BUFFER_HEADER>\n"
    );

    // The implementation file still comes from the bundled template.
    let source = fs::read_to_string(out.join("Foo.cpp")).unwrap();
    assert!(source.contains("Foo::~Foo()"));
}

// === Failures ===

#[test]
fn test_missing_override_stops_after_earlier_files() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::from_yaml(FOO_CONFIG).unwrap();

    let err = generate(
        &config,
        &options(
            temp_dir.path(),
            "",
            "metal_gpuclass.h=/nonexistent/Foo_metal.h",
        ),
    )
    .unwrap_err();

    assert_eq!(err.error_code(), "TEMPLATE_READ");
    assert!(temp_dir.path().join("Foo.h").exists());
    assert!(temp_dir.path().join("Foo.cpp").exists());
    assert!(!temp_dir.path().join("Foo_metal.h").exists());
    assert!(!temp_dir.path().join("Foo.m").exists());
}

#[test]
fn test_numeric_sizes_reach_output_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::from_yaml(
        "parameters: {classname: Hex}\nbuffers:\n  - {name: b, size: 0x400, location: device}\n  - {name: f, size: 1e3, location: host}\n",
    )
    .unwrap();
    generate(&config, &options(temp_dir.path(), "", "")).unwrap();

    let cuda = fs::read_to_string(temp_dir.path().join("Hex.cpp")).unwrap();
    assert!(cuda.contains("cudaMallocManaged(&b, 0x400*4);"));
    assert!(cuda.contains("cudaMallocHost((void**)&f, 1e3*4);"));

    let metal = fs::read_to_string(temp_dir.path().join("Hex.m")).unwrap();
    assert!(metal.contains("f = malloc(1e3*4);"));
}
