//! Integration tests for servgen-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn servgen() -> Command {
    let mut cmd = Command::cargo_bin("servgen").unwrap();
    // Keep output deterministic regardless of the invoking terminal.
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_describes_both_positionals() {
    servgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SERVICES_DIR"))
        .stdout(predicate::str::contains("SERVICE_NAME"))
        .stdout(predicate::str::contains("../src/services"));
}

#[test]
fn version_flag_prints_crate_version() {
    servgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn order_book_end_to_end() {
    let temp = TempDir::new().unwrap();
    let services_dir = temp.path().join("tmp/services");

    servgen()
        .arg(&services_dir)
        .arg("OrderBook")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "service.ts successfully generated.",
        ))
        .stdout(predicate::str::contains("utils.ts successfully generated."));

    let target = services_dir.join("order-book");
    assert!(target.is_dir());

    let service_ts = std::fs::read_to_string(target.join("service.ts")).unwrap();
    assert!(service_ts.contains("https://restcountries.com/v3.1/name/${country}"));

    let utils_ts = std::fs::read_to_string(target.join("utils.ts")).unwrap();
    assert!(utils_ts.contains("export const isSuccessful"));
    assert!(utils_ts.contains("export const responseIsExpected"));
}

#[test]
fn omitted_arguments_use_the_documented_defaults() {
    let temp = TempDir::new().unwrap();
    let workdir = temp.path().join("workdir");
    std::fs::create_dir(&workdir).unwrap();

    // Default services dir is ../src/services relative to the CWD,
    // default service name is Demo.
    servgen().current_dir(&workdir).assert().success();

    let target = temp.path().join("src/services/demo");
    assert!(target.join("service.ts").is_file());
    assert!(target.join("utils.ts").is_file());
}

#[test]
fn running_twice_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let services_dir = temp.path().join("services");

    for _ in 0..2 {
        servgen()
            .arg(&services_dir)
            .arg("OrderBook")
            .assert()
            .success();
    }

    let entries: Vec<_> = std::fs::read_dir(&services_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, ["order-book"]);

    let service_ts =
        std::fs::read_to_string(services_dir.join("order-book/service.ts")).unwrap();
    assert!(service_ts.contains("axios.get(baseUrl)"));
}

#[test]
fn blocked_target_reports_failures_but_still_exits_zero() {
    let temp = TempDir::new().unwrap();

    // A plain file where a directory component should be: every filesystem
    // step fails, none of them fatally.
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    servgen()
        .arg(blocker.join("services"))
        .arg("Demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be created."))
        .stdout(predicate::str::contains("service.ts could not be generated."))
        .stdout(predicate::str::contains("utils.ts could not be generated."));
}

#[test]
fn quiet_suppresses_success_lines() {
    let temp = TempDir::new().unwrap();
    let services_dir = temp.path().join("services");

    servgen()
        .arg("--quiet")
        .arg(&services_dir)
        .arg("Demo")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    // The writes still happened.
    assert!(services_dir.join("demo/service.ts").is_file());
}

#[test]
fn quiet_never_hides_failures() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    servgen()
        .arg("--quiet")
        .arg(blocker.join("services"))
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be generated."));
}

#[test]
fn explicit_missing_config_file_exits_with_config_code() {
    servgen()
        .arg("--config")
        .arg("/definitely/not/here/servgen.toml")
        .assert()
        .code(4);
}

#[test]
fn config_file_supplies_positional_defaults() {
    let temp = TempDir::new().unwrap();
    let services_dir = temp.path().join("from-config");
    let config = temp.path().join("servgen.toml");
    std::fs::write(
        &config,
        format!(
            "[defaults]\nservices_dir = \"{}\"\nservice_name = \"OrderBook\"\n",
            services_dir.display()
        ),
    )
    .unwrap();

    servgen().arg("--config").arg(&config).assert().success();

    assert!(services_dir.join("order-book/service.ts").is_file());
}
