use assert_cmd::Command;

fn run_help(args: &[&str]) {
    let mut cmd = Command::cargo_bin("swapscan").expect("binary builds");
    cmd.args(args).arg("--help").assert().success();
}

#[test]
fn every_cli_command_has_help_path() {
    // top-level
    run_help(&[]);

    run_help(&["scan"]);
    run_help(&["check"]);
    run_help(&["events"]);
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("swapscan")
        .expect("binary builds")
        .arg("--version")
        .assert()
        .success();
}
