use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use pollflow_cli::{Args, Format, run};

/// Demos are at workspace root, relative to workspace not the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .md files from a directory
fn collect_md_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("md")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: &Path, format: Option<Format>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        format,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_md_files(demos_dir());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&args(demo_path, &output_path, None)) {
            failed_demos.push((demo_path.clone(), e));
            continue;
        }

        let svg = fs::read_to_string(&output_path).expect("output written");
        assert!(svg.starts_with("<svg"), "{} is not SVG", output_path.display());
        assert!(svg.contains("图例"), "{} has no legend", output_path.display());
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_md_files(demos_dir().join("errors"));
    assert!(!error_demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args(demo_path, &output_path, None)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_png_output_is_inferred_from_extension() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("cutting.png");

    run(&args(&demos_dir().join("cutting.md"), &output_path, None)).expect("PNG export");

    let png = fs::read(&output_path).expect("output written");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn e2e_explicit_format_overrides_extension() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("cutting.png");

    run(&args(
        &demos_dir().join("cutting.md"),
        &output_path,
        Some(Format::Svg),
    ))
    .expect("SVG export");

    let svg = fs::read_to_string(&output_path).expect("output written");
    assert!(svg.starts_with("<svg"));
}

#[test]
fn e2e_failed_render_keeps_existing_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("cutting.svg");
    let previous = "<svg>previous diagram</svg>";
    fs::write(&output_path, previous).expect("seed output");

    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nprocess_fill = \"not-a-color\"\n").expect("write config");

    let mut run_args = args(&demos_dir().join("cutting.md"), &output_path, None);
    run_args.config = Some(config_path.to_string_lossy().to_string());

    let err = run(&run_args).expect_err("invalid process fill should fail the render");
    assert!(err.to_string().contains("process_fill"), "{err}");

    let kept = fs::read_to_string(&output_path).expect("output still readable");
    assert_eq!(kept, previous);
}
