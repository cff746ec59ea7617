use clap::Parser;
use mockito::Matcher;
use reporter::{run, Cli, ReporterError, RunOutcome, Settings};
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;

const ENV_VARS: [&str; 4] = [
    "QASE_TESTOPS_PROJECT",
    "QASE_TESTOPS_API_TOKEN",
    "QASE_TESTOPS_RUN_TITLE",
    "QASE_TESTOPS_BASE_URL",
];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../report/tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("robot-qase-reporter").chain(args.iter().copied()))
        .unwrap()
}

fn temp_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_environment_fallback() {
    clear_env();
    std::env::set_var("QASE_TESTOPS_PROJECT", "ENVPROJ");
    std::env::set_var("QASE_TESTOPS_API_TOKEN", "env-token");
    std::env::set_var("QASE_TESTOPS_RUN_TITLE", "From env");

    let settings = Settings::resolve(cli(&["out.xml", "-r", "From flag"])).unwrap();
    clear_env();

    assert_eq!(settings.qase.project, "ENVPROJ");
    assert_eq!(settings.qase.api_token, "env-token");
    assert_eq!(settings.run_title, "From flag");
    assert_eq!(settings.qase.base_url, qase::DEFAULT_BASE_URL);
}

#[test]
#[serial]
fn test_config_file_layer() {
    clear_env();
    let file = temp_file(
        r#"
project = "FILEPROJ"
api_token = "file-token"
run_title = "From file"
base_url = "http://qase.internal/v1"
timeout_secs = 5
"#,
    );
    let path = file.path().to_string_lossy().into_owned();

    let settings = Settings::resolve(cli(&["out.xml", "-c", path.as_str(), "-p", "FLAGPROJ"])).unwrap();
    assert_eq!(settings.qase.project, "FLAGPROJ");
    assert_eq!(settings.qase.api_token, "file-token");
    assert_eq!(settings.run_title, "From file");
    assert_eq!(settings.qase.base_url, "http://qase.internal/v1");
    assert_eq!(settings.qase.timeout, std::time::Duration::from_secs(5));
}

#[test]
#[serial]
fn test_config_file_errors() {
    clear_env();
    let file = temp_file("unknown_key = 1\n");
    let path = file.path().to_string_lossy().into_owned();
    let err = Settings::resolve(cli(&["out.xml", "--config", path.as_str()])).unwrap_err();
    assert!(matches!(err, ReporterError::ConfigParse { .. }));

    let err = Settings::resolve(cli(&["out.xml", "--config", "/no/such/reporter.toml"]))
        .unwrap_err();
    assert!(matches!(err, ReporterError::ConfigRead { .. }));
}

#[test]
#[serial]
fn test_missing_credentials() {
    clear_env();
    let err = Settings::resolve(cli(&["out.xml", "-r", "Nightly"])).unwrap_err();
    assert!(matches!(err, ReporterError::InvalidConfig { .. }));

    let settings = Settings::resolve(cli(&["out.xml", "--dry-run"])).unwrap();
    assert!(settings.dry_run);
}

#[tokio::test]
#[serial]
async fn test_reports_fixture_to_qase() {
    clear_env();
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/v1/run/DEMO")
        .match_header("Token", "secret")
        .match_body(Matcher::Json(serde_json::json!({
            "title": "Nightly",
            "cases": [101, 103, 104]
        })))
        .with_status(200)
        .with_body(r#"{"status": true, "result": {"id": 55}}"#)
        .create_async()
        .await;
    let bulk = server
        .mock("POST", "/v1/result/DEMO/55/bulk")
        .match_body(Matcher::Json(serde_json::json!({
            "results": [
                {"case_id": 101, "status": "passed", "time_ms": 1234, "comment": "Package: Shop.Checkout"},
                {"case_id": 103, "status": "failed", "time_ms": 0, "comment": "Package: Shop.Checkout"},
                {"case_id": 104, "status": "failed", "time_ms": 2000, "comment": "Package: Shop"}
            ]
        })))
        .with_status(200)
        .with_body(r#"{"status": true}"#)
        .create_async()
        .await;
    let complete = server
        .mock("POST", "/v1/run/DEMO/55/complete")
        .with_status(200)
        .with_body(r#"{"status": true}"#)
        .create_async()
        .await;

    let base_url = format!("{}/v1", server.url());
    let filename = fixture("output_rf7.xml");
    let settings = Settings::resolve(cli(&[
        filename.as_str(),
        "-p",
        "DEMO",
        "-t",
        "secret",
        "-r",
        "Nightly",
        "--base-url",
        base_url.as_str(),
    ]))
    .unwrap();

    let outcome = run(&settings).await.unwrap();
    match outcome {
        RunOutcome::Submitted(summary) => {
            assert_eq!(summary.run_id, 55);
            assert_eq!(summary.cases, 3);
            assert_eq!(summary.results, 3);
        }
        other => panic!("expected submission, got {:?}", other),
    }

    create.assert_async().await;
    bulk.assert_async().await;
    complete.assert_async().await;
}

#[tokio::test]
#[serial]
async fn test_wrong_document_is_fatal() {
    clear_env();
    let file = temp_file("<testsuites><testcase name=\"x\"/></testsuites>");
    let path = file.path().to_string_lossy().into_owned();
    let settings = Settings::resolve(cli(&[path.as_str(), "--dry-run"])).unwrap();

    let err = run(&settings).await.unwrap_err();
    assert!(matches!(err, ReporterError::Report(_)));
}

#[tokio::test]
#[serial]
async fn test_dry_run_sends_nothing() {
    clear_env();
    let filename = fixture("output_rf6.xml");
    let settings = Settings::resolve(cli(&[filename.as_str(), "--dry-run"])).unwrap();

    let outcome = run(&settings).await.unwrap();
    assert_eq!(outcome, RunOutcome::DryRun { results: 2 });
}
