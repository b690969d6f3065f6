use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("restcountries-etl").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("restcountries-etl"));
}

#[test]
fn run_help_lists_options() {
    let mut cmd = Command::cargo_bin("restcountries-etl").unwrap();
    cmd.args(["run", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--out-dir"))
        .stdout(predicate::str::contains("--filename"))
        .stdout(predicate::str::contains("https://restcountries.com/v3.1/all"));
}

#[tokio::test]
async fn server_error_prints_status_and_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("data");

    let uri = server.uri();

    let mut cmd = Command::cargo_bin("restcountries-etl").unwrap();
    cmd.args(["run", "--url", uri.as_str(), "--out-dir"]).arg(&out_dir);
    let assert = tokio::task::spawn_blocking(move || cmd.assert()).await.unwrap();
    assert
        .success()
        .stdout(predicate::str::contains("Extracting data..."))
        .stdout(predicate::str::contains("Error fetching data: 500"))
        .stdout(predicate::str::contains("No data to process."))
        .stdout(predicate::str::contains("Transforming data...").not());
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn server_error_keeps_previous_csv() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("data");
    std::fs::create_dir_all(&out_dir).unwrap();
    let csv_path = out_dir.join("countries.csv");
    std::fs::write(&csv_path, "Country,Region\nOldland,Nowhere\n").unwrap();
    let before = std::fs::read(&csv_path).unwrap();

    let uri = server.uri();

    let mut cmd = Command::cargo_bin("restcountries-etl").unwrap();
    cmd.args(["run", "--url", uri.as_str(), "--out-dir"]).arg(&out_dir);
    let assert = tokio::task::spawn_blocking(move || cmd.assert()).await.unwrap();
    assert
        .success()
        .stdout(predicate::str::contains("No data to process."));
    assert_eq!(std::fs::read(&csv_path).unwrap(), before);
}

#[tokio::test]
async fn run_writes_csv_into_out_dir() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{}])))
        .mount(&server)
        .await;
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("data");

    let uri = server.uri();

    let mut cmd = Command::cargo_bin("restcountries-etl").unwrap();
    cmd.args(["run", "--url", uri.as_str(), "--out-dir"]).arg(&out_dir);
    let assert = tokio::task::spawn_blocking(move || cmd.assert()).await.unwrap();
    assert
        .success()
        .stdout(predicate::str::contains("Data saved to"))
        .stdout(predicate::str::contains("ETL process completed successfully!"));

    let txt = std::fs::read_to_string(out_dir.join("countries.csv")).unwrap();
    assert_eq!(txt.lines().nth(1), Some("Unknown,Unknown,Unknown,Unknown,Unknown,0,Unknown,Unknown,0,Unknown,No flag available"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn run_online_writes_countries() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("restcountries-etl").unwrap();
    cmd.args(["run", "--out-dir"]).arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Extracting data..."));
}
