#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn orderdesk(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("orderdesk").unwrap();
    cmd.current_dir(dir.path())
        .env("ORDERDESK_ROOT", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn read_json(dir: &TempDir, name: &str) -> serde_json::Value {
    let text = std::fs::read_to_string(dir.path().join(name)).unwrap();
    serde_json::from_str(&text).unwrap()
}

const ADD_TEA: &str = "1\nA1\nTom\nTea\n50\n2\n\n";

// ---------------------------------------------------------------------------
// interactive session
// ---------------------------------------------------------------------------

#[test]
fn exit_immediately_writes_nothing() {
    let dir = TempDir::new().unwrap();
    orderdesk(&dir)
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Add order"));

    assert!(!dir.path().join("orders.json").exists());
    assert!(!dir.path().join("output_orders.json").exists());
}

#[test]
fn add_order_persists_pending_store() {
    let dir = TempDir::new().unwrap();
    orderdesk(&dir)
        .write_stdin(format!("{ADD_TEA}4\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("=> Order A1 added!"));

    let pending = read_json(&dir, "orders.json");
    assert_eq!(
        pending,
        serde_json::json!([{
            "order_id": "A1",
            "customer": "Tom",
            "items": [{ "name": "Tea", "price": 50, "quantity": 2 }]
        }])
    );

    let raw = std::fs::read_to_string(dir.path().join("orders.json")).unwrap();
    assert!(raw.contains("\n    {\n        \"order_id\""));
}

#[test]
fn duplicate_id_is_reported() {
    let dir = TempDir::new().unwrap();
    orderdesk(&dir)
        .write_stdin(format!("{ADD_TEA}1\n a1\n4\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=> Error: order id A1 already exists!",
        ));

    assert_eq!(read_json(&dir, "orders.json").as_array().unwrap().len(), 1);
}

#[test]
fn fulfill_moves_order_to_completed_store() {
    let dir = TempDir::new().unwrap();
    orderdesk(&dir)
        .write_stdin(format!("{ADD_TEA}3\n1\n4\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("=> Order A1 fulfilled"))
        .stdout(predicate::str::contains("Total: 100"));

    assert_eq!(read_json(&dir, "orders.json"), serde_json::json!([]));
    let completed = read_json(&dir, "output_orders.json");
    assert_eq!(completed.as_array().unwrap().len(), 1);
    assert_eq!(completed[0]["order_id"], "A1");
}

#[test]
fn fulfill_appends_across_runs() {
    let dir = TempDir::new().unwrap();
    orderdesk(&dir)
        .write_stdin(format!("{ADD_TEA}1\nB2\nAnn\nBun\n5\n3\n\n3\n1\n\n"))
        .assert()
        .success();
    orderdesk(&dir)
        .write_stdin("3\n1\n\n")
        .assert()
        .success();

    assert_eq!(read_json(&dir, "orders.json"), serde_json::json!([]));
    let completed = read_json(&dir, "output_orders.json");
    let ids: Vec<_> = completed
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["order_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["A1", "B2"]);
}

#[test]
fn invalid_menu_choice_redisplays_menu() {
    let dir = TempDir::new().unwrap();
    orderdesk(&dir)
        .write_stdin("7\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=> Please enter a valid option (1-4)"));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    orderdesk(&dir).write_stdin("1\nA1\n").assert().success();
    assert!(!dir.path().join("orders.json").exists());
}

#[test]
fn json_without_subcommand_is_rejected() {
    let dir = TempDir::new().unwrap();
    orderdesk(&dir)
        .arg("--json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--json only applies to `list` and `report`"));

    assert!(!dir.path().join("orders.json").exists());
}

#[test]
fn corrupt_store_fails_with_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("orders.json"), "not json").unwrap();
    orderdesk(&dir)
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn config_renames_store_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("orderdesk.yaml"),
        "pending_file: open.json\ncompleted_file: done.json\n",
    )
    .unwrap();
    orderdesk(&dir)
        .write_stdin(format!("{ADD_TEA}3\n1\n4\n"))
        .assert()
        .success();

    assert!(dir.path().join("open.json").exists());
    assert_eq!(read_json(&dir, "done.json")[0]["order_id"], "A1");
    assert!(!dir.path().join("orders.json").exists());
}

// ---------------------------------------------------------------------------
// list / report
// ---------------------------------------------------------------------------

#[test]
fn list_and_report_pending() {
    let dir = TempDir::new().unwrap();
    orderdesk(&dir)
        .write_stdin(format!("{ADD_TEA}\n"))
        .assert()
        .success();

    orderdesk(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ORDER ID"))
        .stdout(predicate::str::contains("A1"))
        .stdout(predicate::str::contains("100"));

    orderdesk(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Order Report"))
        .stdout(predicate::str::contains("Customer: Tom"));
}

#[test]
fn list_completed_when_empty() {
    let dir = TempDir::new().unwrap();
    orderdesk(&dir)
        .args(["list", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No orders."));

    orderdesk(&dir)
        .args(["report", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=> No orders"));
}

#[test]
fn list_json_outputs_store() {
    let dir = TempDir::new().unwrap();
    orderdesk(&dir)
        .write_stdin(format!("{ADD_TEA}\n"))
        .assert()
        .success();

    let output = orderdesk(&dir)
        .args(["--json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["items"][0]["name"], "Tea");
}
