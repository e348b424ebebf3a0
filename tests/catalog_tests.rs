// Integration tests for loading step catalogs from disk

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use walkthrough::catalog::{self, CatalogError, Step};
use walkthrough::viewer::StepViewer;

fn write_catalog(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write catalog");
    file
}

#[test]
fn test_load_multi_step_catalog() {
    let file = write_catalog(
        r#"
[[steps]]
title = "Install"
description = "Run the `installer`."
code_title = "terminal"
code = """
# Install
$ curl -sSf https://example.com/install.sh | sh
  ✓ installed"""

[[steps]]
title = "Configure"
description = "Point it at a bucket."
code_title = "app.toml"
code = """
[storage]
bucket = "demo\""""
"#,
    );

    let steps = catalog::load(file.path()).unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].title, "Install");
    assert_eq!(
        steps[0].code,
        "# Install\n$ curl -sSf https://example.com/install.sh | sh\n  ✓ installed"
    );
    assert_eq!(steps[1].code, "[storage]\nbucket = \"demo\"");

    let mut viewer = StepViewer::new(steps).unwrap();
    viewer.select(1).unwrap();
    assert_eq!(viewer.render().lines.len(), 2);
}

#[test]
fn test_missing_file() {
    let err = catalog::load(Path::new("/no/such/catalog.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("/no/such/catalog.toml"));
}

#[test]
fn test_invalid_toml() {
    let file = write_catalog("[[steps]\ntitle = ");
    assert!(matches!(
        catalog::load(file.path()),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn test_dumped_catalog_loads_back() {
    let steps = vec![
        Step::new("A", "first `a`", "terminal", "$ a\n\n{\"ok\": true}"),
        Step::new("B", "second", "b.yml", "key: value\r\nother: 1"),
    ];
    let file = write_catalog(&catalog::to_toml(&steps).unwrap());
    assert_eq!(catalog::load(file.path()).unwrap(), steps);
}
