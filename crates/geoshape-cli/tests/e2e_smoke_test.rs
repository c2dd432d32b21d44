use std::{fs, path::PathBuf};

use tempfile::tempdir;

use geoshape::{GeoshapeError, shape::ShapeType};
use geoshape_cli::{Args, run};

/// Demo documents live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &PathBuf, config: Option<String>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        config,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let valid_demos = collect_toml_files(demos_path());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        match run(&args_for(demo_path, None)) {
            Ok(summary) => assert!(summary.total() > 0, "{} is empty", demo_path.display()),
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_invalid_demos() {
    let invalid_demos = collect_toml_files(demos_path().join("invalid"));

    assert!(
        !invalid_demos.is_empty(),
        "No invalid demos found in demos/invalid/"
    );

    for demo_path in &invalid_demos {
        assert!(
            run(&args_for(demo_path, None)).is_err(),
            "{} should have been rejected",
            demo_path.display()
        );
    }
}

#[test]
fn e2e_summary_counts() {
    let summary = run(&args_for(&demos_path().join("flight_route.toml"), None))
        .expect("flight_route.toml is valid");

    assert_eq!(summary.count(ShapeType::GeoPolyline), 1);
    assert_eq!(summary.count(ShapeType::GeoRelativePolyline), 2);
    assert_eq!(summary.relative(), 2);
    assert_eq!(summary.total(), 5);
}

#[test]
fn e2e_config_supplies_missing_paint() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\ndefault_fill = \"orange\"\n").unwrap();

    let document = demos_path().join("invalid").join("missing_paint.toml");

    let err = run(&args_for(&document, None)).unwrap_err();
    assert!(matches!(err, GeoshapeError::MissingPaint { index: 0, .. }));

    let summary = run(&args_for(
        &document,
        Some(config_path.to_string_lossy().to_string()),
    ))
    .expect("default fill should satisfy the entry");
    assert_eq!(summary.count(ShapeType::GeoCircle), 1);
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("nope.toml");

    let err = run(&args_for(&missing, None)).unwrap_err();
    assert!(matches!(err, GeoshapeError::Io(_)));
}
