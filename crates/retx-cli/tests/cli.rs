use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIRMATION: &str = "Order ID: ABC123
Order date: 12/29/2025

ID\tSKU\tProduct
1\t1017-002042-0008-579\tLinen shirt
--\tM\t2
";

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("order.txt"), CONFIRMATION).unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{ "processing": { "domain": "shop.example.com", "notification": { "enabled": false } } }"#,
    )
    .unwrap();
    dir
}

fn retx(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("retx").unwrap();
    cmd.current_dir(dir).arg("--config").arg(dir.join("config.json"));
    cmd
}

#[test]
fn generate_prints_csv() {
    let dir = workspace();

    retx(dir.path())
        .args(["generate", "order.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "order_id,order_date,product_sku,size_ordered,return_reason\n\
             ABC123,29/12/2025,1017-002042-0008-579,M,UNKNOWN",
        ));
}

#[test]
fn generate_reads_stdin_and_honours_field() {
    let dir = workspace();

    retx(dir.path())
        .args(["generate", "-", "--field", "product_id"])
        .write_stdin("see 9999-123456-7890-001")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("order_id,order_date,product_id,"))
        .stdout(predicate::str::contains("UNKNOWN,,9999-123456-7890-001,One Size,UNKNOWN"));
}

#[test]
fn generate_writes_into_output_dir() {
    let dir = workspace();
    let out = dir.path().join("out");

    retx(dir.path())
        .args(["generate", "order.txt", "--output-dir"])
        .arg(&out)
        .assert()
        .success();

    let files: Vec<_> = fs::read_dir(&out).unwrap().map(|e| e.unwrap().path()).collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("returns-") && name.ends_with(".csv"));
    assert_eq!(fs::read_to_string(&files[0]).unwrap().lines().count(), 2);
}

#[test]
fn generate_without_products_fails() {
    let dir = workspace();
    fs::write(dir.path().join("empty.txt"), "nothing useful here").unwrap();

    retx(dir.path())
        .args(["generate", "empty.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not extract any products"));
}

#[test]
fn parse_outputs_json() {
    let dir = workspace();

    retx(dir.path())
        .args(["parse", "order.txt", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"productIdentifier\": \"1017-002042-0008-579\""))
        .stdout(predicate::str::contains("\"quantity\": \"2\""));
}

#[test]
fn parse_missing_file_fails() {
    let dir = workspace();

    retx(dir.path())
        .args(["parse", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_writes_one_csv_per_input() {
    let dir = workspace();
    fs::write(dir.path().join("second.txt"), "9999-123456-7890-001").unwrap();
    let out = dir.path().join("batch-out");

    retx(dir.path())
        .args(["batch", "*.txt", "--output-dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 succeeded, 0 failed"));

    let mut names: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names.len(), 2);
    assert!(names[0].starts_with("order-returns-"));
    assert!(names[1].starts_with("second-returns-"));
}

#[test]
fn request_builds_payload_from_config() {
    let dir = workspace();

    retx(dir.path())
        .args(["request", "--file-key", "returns-1.csv", "--process-type", "PRODUCT_SKU"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"returnsFileKey\": \"returns-1.csv\""))
        .stdout(predicate::str::contains("\"domain\": \"shop.example.com\""))
        .stdout(predicate::str::contains("\"processType\": \"PRODUCT_SKU\""))
        .stdout(predicate::str::contains("notification").not());
}

#[test]
fn request_requires_recipient_when_notifying() {
    let dir = workspace();
    fs::write(
        dir.path().join("config.json"),
        r#"{ "processing": { "domain": "shop.example.com" } }"#,
    )
    .unwrap();

    retx(dir.path())
        .args(["request", "--file-key", "returns-1.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("recipientEmail"));
}
