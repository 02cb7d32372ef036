//! CLI integration tests against the built binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use carmine::testkit::domain::LIVE_OPTIONS_FELTS;
use mockito::Server;
use predicates::prelude::*;
use serde_json::json;

fn carmine() -> Command {
    let mut cmd = cargo_bin_cmd!("carmine");
    cmd.env_remove("CARMINE_RPC_URL")
        .env_remove("CARMINE_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    carmine()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pools"))
        .stdout(predicate::str::contains("live-options"))
        .stdout(predicate::str::contains("quote"));
}

#[test]
fn version() {
    carmine()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("carmine"));
}

#[test]
fn pools_as_json() {
    let output = carmine()
        .args(["--json", "pools"])
        .output()
        .expect("run carmine");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("single JSON document");
    assert_eq!(value["command"], "pools");
    assert_eq!(value["pools"].as_array().map(Vec::len), Some(10));
    assert_eq!(value["pools"][0]["id"], "eth-usdc-call");
}

#[test]
fn tokens_table() {
    carmine()
        .args(["--color", "never", "tokens"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USDC"))
        .stdout(predicate::str::contains("wBTC").or(predicate::str::contains("WBTC")));
}

#[test]
fn unknown_pool_is_rejected() {
    carmine()
        .args(["status", "doge-usdc-call"])
        .assert()
        .failure();
}

#[test]
fn bad_config_file_exits_nonzero() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    std::fs::write(file.path(), "[api]\nversion = 0\n").expect("write config");

    carmine()
        .arg("--config")
        .arg(file.path())
        .arg("pools")
        .assert()
        .failure()
        .stderr(predicate::str::contains("version"));
}

#[test]
fn prices_from_backend() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/live-prices")
        .with_status(200)
        .with_body(r#"{"starknet":"0.42","ethereum":"2512.34"}"#)
        .create();

    let output = carmine()
        .args(["--json", "--api-url", &server.url(), "prices"])
        .output()
        .expect("run carmine");

    mock.assert();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(value["prices"]["ethereum"], "2512.34");
    assert_eq!(value["prices"]["starknet"], "0.42");
}

#[test]
fn live_options_from_backend() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/mainnet/live-options")
        .with_status(200)
        .with_body(json!({ "status": "success", "data": LIVE_OPTIONS_FELTS }).to_string())
        .create();

    let output = carmine()
        .args(["--json", "--api-url", &server.url(), "live-options"])
        .output()
        .expect("run carmine");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    let options = value["options"].as_array().expect("options array");
    assert_eq!(options.len(), 3);
    assert_eq!(options[0]["pool"], "eth-usdc-call");
    assert_eq!(options[1]["side"], "short");
    assert_eq!(options[2]["strike"], 3000.0);
}

#[test]
fn open_prints_approve_and_trade_calls() {
    let mut server = Server::new();
    let premia = [
        "0x6666666666666666",
        "0x0",
        "0x7000000000000000",
        "0x0",
    ];
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(json!({ "jsonrpc": "2.0", "id": 1, "result": premia }).to_string())
        .create();

    let output = carmine()
        .args([
            "--json",
            "--rpc-url",
            &server.url(),
            "open",
            "eth-usdc-call",
            "--side",
            "long",
            "--maturity",
            "1760054399",
            "--strike",
            "2500",
            "--size",
            "1",
        ])
        .output()
        .expect("run carmine");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("approve"));
    assert!(stdout.contains("trade_open"));
}
