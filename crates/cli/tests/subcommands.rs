use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn showcase() -> Command {
    let mut cmd = Command::cargo_bin("showcase").expect("binary");
    cmd.env_remove("SHOWCASE_CATALOG");
    cmd
}

fn write_catalog(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("catalog.toml");
    fs::write(
        &path,
        r#"
schema_version = 1

[[items]]
id = "ml-1"
title = "Churn model"
category = "ml"
technologies = ["XGBoost"]

[[items]]
id = "cv-1"
title = "Segmenter"
category = "cv"

[[items]]
id = "ml-2"
title = "Ranker"
category = "ml"
"#,
    )
    .unwrap();
    path
}

#[test]
fn list_marks_highlighted_cards() {
    let temp = tempdir().unwrap();
    let catalog = write_catalog(temp.path());
    showcase()
        .arg("--catalog")
        .arg(&catalog)
        .args(["list", "--highlight", "cv-1,ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* [cv-1] Segmenter (cv)"))
        .stdout(predicate::str::contains("  [ml-1] Churn model (ml)"));
}

#[test]
fn show_missing_exits_with_not_found_code() {
    let temp = tempdir().unwrap();
    let catalog = write_catalog(temp.path());
    showcase()
        .arg("--catalog")
        .arg(&catalog)
        .args(["show", "zz"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Project 'zz' not found"));
}

#[test]
fn related_lists_same_category_only() {
    let temp = tempdir().unwrap();
    let catalog = write_catalog(temp.path());
    showcase()
        .arg("--catalog")
        .arg(&catalog)
        .args(["related", "ml-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ml-2] Ranker (ml)"))
        .stdout(predicate::str::contains("cv-1").not());
}

#[test]
fn catalog_from_env_is_used() {
    let temp = tempdir().unwrap();
    let catalog = write_catalog(temp.path());
    showcase()
        .env("SHOWCASE_CATALOG", &catalog)
        .args(["list", "--search", "xgboost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ml-1]"))
        .stdout(predicate::str::contains("[ml-2]").not());
}

#[test]
fn invalid_catalog_fails_to_load() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("bad.json");
    fs::write(&path, r#"{"items":[{"id":"a","title":"A","category":""}]}"#).unwrap();
    showcase()
        .arg("--catalog")
        .arg(&path)
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty category"));
}

#[test]
fn catalog_using_all_as_a_category_fails_to_load() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("reserved.json");
    fs::write(
        &path,
        r#"{"items":[{"id":"a-1","title":"A","category":"all"},{"id":"ml-1","title":"M","category":"ml"}]}"#,
    )
    .unwrap();
    showcase()
        .arg("--catalog")
        .arg(&path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved category 'all'"));
}
