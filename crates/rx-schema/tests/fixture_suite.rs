//! Integration test: run every YAML fixture under `tests/fixtures/`.
//!
//! Each fixture file may carry a `config` block (a [`RegistryConfig`]), a
//! `cases` map of schemas with values that must pass and values that must
//! fail at a given path, and an `invalid` map of schemas that must be
//! rejected at compile time.
//!
//! Failures are collected across all files and reported together rather
//! than stopping at the first one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rx_schema::{Registry, RegistryConfig, Value};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Fixture {
    #[serde(default)]
    config: RegistryConfig,
    #[serde(default)]
    cases: BTreeMap<String, Case>,
    #[serde(default)]
    invalid: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Case {
    schema: Value,
    #[serde(default)]
    pass: Vec<Value>,
    #[serde(default)]
    fail: Vec<Failure>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Failure {
    value: Value,
    path: String,
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// All `*.yaml` files under a directory, sorted.
fn find_fixture_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(find_fixture_files(&path));
            } else if path.extension().is_some_and(|e| e == "yaml") {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

fn load_fixture(path: &Path) -> Fixture {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_yaml::from_str(&text).unwrap_or_else(|e| panic!("cannot parse {}: {e}", path.display()))
}

/// Run one fixture, returning a description of every mismatch.
fn run_fixture(name: &str, fixture: &Fixture) -> Vec<String> {
    let mut problems = Vec::new();

    let registry = match Registry::from_config(&fixture.config) {
        Ok(registry) => registry,
        Err(e) => return vec![format!("{name}: config rejected: {e}")],
    };

    for (case_name, case) in &fixture.cases {
        let validator = match registry.make_schema(&case.schema) {
            Ok(v) => v,
            Err(e) => {
                problems.push(format!("{name}/{case_name}: schema rejected: {e}"));
                continue;
            }
        };

        for value in &case.pass {
            if let Err(e) = validator.validate(value) {
                problems.push(format!("{name}/{case_name}: {value} should pass but {e}"));
            }
        }

        for failure in &case.fail {
            match validator.validate(&failure.value) {
                Ok(()) => problems.push(format!(
                    "{name}/{case_name}: {} should fail at {}",
                    failure.value, failure.path
                )),
                Err(e) if e.path() != failure.path => problems.push(format!(
                    "{name}/{case_name}: {} failed at {} instead of {}",
                    failure.value,
                    e.path(),
                    failure.path
                )),
                Err(_) => {}
            }
        }
    }

    for (case_name, schema) in &fixture.invalid {
        if registry.make_schema(schema).is_ok() {
            problems.push(format!("{name}/{case_name}: {schema} should be rejected"));
        }
    }

    problems
}

#[test]
fn test_discover_fixture_files() {
    let files = find_fixture_files(&fixtures_dir());
    assert!(
        files.len() >= 4,
        "Expected >= 4 fixture files, found {} in {}",
        files.len(),
        fixtures_dir().display()
    );
}

#[test]
fn test_run_all_fixtures() {
    let mut problems = Vec::new();
    let mut cases = 0usize;

    for path in find_fixture_files(&fixtures_dir()) {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let fixture = load_fixture(&path);
        cases += fixture.cases.len() + fixture.invalid.len();
        problems.extend(run_fixture(&name, &fixture));
    }

    assert!(cases > 0, "no fixture cases found");
    assert!(
        problems.is_empty(),
        "{} fixture mismatch(es):\n  {}",
        problems.len(),
        problems.join("\n  ")
    );
}

#[test]
fn test_every_core_kind_has_a_fixture() {
    let mut mentioned = String::new();
    for path in find_fixture_files(&fixtures_dir()) {
        mentioned.push_str(&std::fs::read_to_string(&path).unwrap());
    }
    let missing: Vec<_> = rx_schema::core_types()
        .iter()
        .filter(|kind| !matches!(kind.subname(), "date" | "time"))
        .filter(|kind| !mentioned.contains(&format!("//{}", kind.subname())))
        .map(|kind| kind.subname())
        .collect();
    assert!(missing.is_empty(), "no fixture mentions: {missing:?}");
}
