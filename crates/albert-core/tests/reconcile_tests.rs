// Rust guideline compliant 2026-10-17

//! Reconciliation tests against in-memory catalogs.

use albert_core::{
    CatalogMatch, CollectionCatalog, CollectionId, CollectionPage, Error, ErrorKind, Reconciler,
    Result,
};
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalog answering from a fixed listing page, counting requests.
struct PageCatalog {
    page: CollectionPage,
    requests: RefCell<Vec<Vec<String>>>,
}

impl PageCatalog {
    fn new(listing: Value) -> Self {
        Self {
            page: serde_json::from_value(listing).expect("valid listing"),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl CollectionCatalog for PageCatalog {
    fn resolve(&self, names: &[&str]) -> Result<Vec<CatalogMatch>> {
        self.requests
            .borrow_mut()
            .push(names.iter().map(|n| n.to_string()).collect());
        Ok(self.page.match_names(names))
    }
}

/// Catalog that succeeds a fixed number of times, then fails like an HTTP 500.
struct FlakyCatalog {
    successes_left: Cell<usize>,
}

impl CollectionCatalog for FlakyCatalog {
    fn resolve(&self, names: &[&str]) -> Result<Vec<CatalogMatch>> {
        let left = self.successes_left.get();
        if left == 0 {
            return Err(Error::HttpStatus {
                status: 500,
                url: "http://catalog.test/collections".to_string(),
            });
        }
        self.successes_left.set(left - 1);
        Ok(names
            .iter()
            .map(|name| CatalogMatch {
                name: name.to_string(),
                id: Some(CollectionId::new(format!("id-{}", name))),
            })
            .collect())
    }
}

fn write_config(dir: &Path, value: &Value) -> PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, serde_json::to_string(value).expect("serialize config"))
        .expect("write config");
    path
}

fn read_output(path: &Path) -> Value {
    let content = fs::read_to_string(path).expect("read output");
    serde_json::from_str(&content).expect("output is valid JSON")
}

#[test]
fn test_found_and_missing_collections() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = write_config(
        temp_dir.path(),
        &json!({"A": {"description": "first"}, "C": {"description": "third"}}),
    );
    let output_path = temp_dir.path().join("data/out.json");
    let catalog = PageCatalog::new(json!({
        "data": [{"name": "A", "id": "1"}, {"name": "B", "id": "2"}]
    }));

    let report = Reconciler::new(&catalog, &output_path)
        .reconcile(&config_path)
        .expect("reconcile succeeds");

    assert_eq!(report.found, vec!["A".to_string()]);
    assert_eq!(report.missing, vec!["C".to_string()]);
    assert_eq!(report.total(), 2);
    assert_eq!(report.output_path, output_path);

    let output = read_output(&output_path);
    assert_eq!(output["A"], json!({"description": "first", "id": "1"}));
    assert_eq!(output["C"], json!({"description": "third", "id": null}));
}

#[test]
fn test_listed_without_id_gets_null_id() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = write_config(temp_dir.path(), &json!({"A": {}, "B": {}}));
    let output_path = temp_dir.path().join("out.json");
    let catalog = PageCatalog::new(json!({
        "data": [
            {"name": "A"},
            {"name": "A", "id": "3"},
            {"name": "B", "id": false},
            {"name": "B", "id": "4"}
        ]
    }));

    let report = Reconciler::new(&catalog, &output_path)
        .reconcile(&config_path)
        .expect("reconcile succeeds");

    assert!(report.found.is_empty());
    assert_eq!(report.missing, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(
        read_output(&output_path),
        json!({"A": {"id": null}, "B": {"id": null}})
    );
}

#[test]
fn test_one_request_per_collection() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = write_config(temp_dir.path(), &json!({"x": {}, "y": {}, "z": {}}));
    let catalog = PageCatalog::new(json!({"data": []}));

    Reconciler::new(&catalog, temp_dir.path().join("out.json"))
        .reconcile(&config_path)
        .expect("reconcile succeeds");

    let requests = catalog.requests.borrow();
    assert_eq!(
        *requests,
        vec![
            vec!["x".to_string()],
            vec!["y".to_string()],
            vec!["z".to_string()],
        ]
    );
}

#[test]
fn test_transport_failure_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = write_config(temp_dir.path(), &json!({"first": {}, "second": {}}));
    let output_path = temp_dir.path().join("out.json");
    let catalog = FlakyCatalog {
        successes_left: Cell::new(1),
    };

    let err = Reconciler::new(&catalog, &output_path)
        .reconcile(&config_path)
        .expect_err("second lookup fails");

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(!output_path.exists(), "no artifact after a failed run");
}

#[test]
fn test_failed_run_keeps_previous_artifact() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = write_config(temp_dir.path(), &json!({"first": {}, "second": {}}));
    let output_path = temp_dir.path().join("out.json");
    fs::write(&output_path, "{\"previous\": {\"id\": \"7\"}}").expect("seed artifact");
    let catalog = FlakyCatalog {
        successes_left: Cell::new(1),
    };

    assert!(Reconciler::new(&catalog, &output_path)
        .reconcile(&config_path)
        .is_err());

    let content = fs::read_to_string(&output_path).expect("read artifact");
    assert_eq!(content, "{\"previous\": {\"id\": \"7\"}}");
}

#[test]
fn test_successful_run_overwrites_previous_artifact() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = write_config(temp_dir.path(), &json!({"only": {}}));
    let output_path = temp_dir.path().join("out.json");
    fs::write(&output_path, "{\"previous\": {\"id\": \"7\"}}").expect("seed artifact");
    let catalog = FlakyCatalog {
        successes_left: Cell::new(1),
    };

    Reconciler::new(&catalog, &output_path)
        .reconcile(&config_path)
        .expect("reconcile succeeds");

    assert_eq!(read_output(&output_path), json!({"only": {"id": "id-only"}}));
}

#[test]
fn test_malformed_config_fails_before_any_request() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, "{\"A\": {").expect("write broken config");
    let output_path = temp_dir.path().join("out.json");
    let catalog = PageCatalog::new(json!({"data": []}));

    let err = Reconciler::new(&catalog, &output_path)
        .reconcile(&config_path)
        .expect_err("malformed config fails");

    assert_eq!(err.kind(), ErrorKind::ConfigLoad);
    assert!(catalog.requests.borrow().is_empty());
    assert!(!output_path.exists());
}

#[test]
fn test_missing_config_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let catalog = PageCatalog::new(json!({"data": []}));

    let err = Reconciler::new(&catalog, temp_dir.path().join("out.json"))
        .reconcile(&temp_dir.path().join("nope.json"))
        .expect_err("missing config fails");

    assert!(matches!(err, Error::ConfigRead { .. }));
}

#[test]
fn test_non_ascii_written_verbatim_in_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{"Santé publique": {"label": "Données de santé"}, "Éducation": {"label": "École"}}"#,
    )
    .expect("write config");
    let output_path = temp_dir.path().join("out.json");
    let catalog = PageCatalog::new(json!({"data": [{"name": "Éducation", "id": 12}]}));

    Reconciler::new(&catalog, &output_path)
        .reconcile(&config_path)
        .expect("reconcile succeeds");

    let content = fs::read_to_string(&output_path).expect("read output");
    assert!(content.contains("Données de santé"));
    assert!(content.contains("\"École\""));
    assert!(!content.contains("\\u00"));
    assert!(content.find("Santé publique") < content.find("Éducation"));

    let output = read_output(&output_path);
    assert_eq!(output["Éducation"]["id"], json!("12"));
    assert_eq!(output["Santé publique"]["id"], Value::Null);
}
