use std::fs;
use std::path::Path;
use std::process::Command;

fn tfgrade_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tfgrade"));
    // keep assertions on plain text regardless of the build environment
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Lays down a submission that passes every static check.
fn complete_submission(root: &Path) {
    write(
        &root.join("scenario-1-local-to-remote/backend.tf"),
        concat!(
            "terraform {\n",
            "  backend \"s3\" {\n",
            "    bucket = \"terraform-state-migration-demo\"\n",
            "    key    = \"scenario-1/terraform.tfstate\"\n",
            "    region = \"us-east-1\"\n",
            "  }\n",
            "}\n",
        ),
    );
    write(
        &root.join("scenario-1-local-to-remote/create-bucket.sh"),
        "#!/bin/sh\naws s3 mb s3://terraform-state-migration-demo\n",
    );
    write(
        &root.join("scenario-2-import/main.tf"),
        "resource \"aws_instance\" \"imported\" {\n  ami = \"ami-123456\"\n}\n",
    );
    write(&root.join("scenario-2-import/setup.sh"), "#!/bin/sh\n");
    write(
        &root.join("scenario-3-move/old-project/main.tf"),
        "resource \"aws_instance\" \"web\" {}\n",
    );
    write(
        &root.join("scenario-3-move/new-project/main.tf"),
        "resource \"aws_instance\" \"web\" {}\n",
    );
    write(
        &root.join("scenario-3-move/move-resources.sh"),
        "#!/bin/sh\nterraform state mv aws_instance.web aws_instance.web\n",
    );
}

#[test]
fn complete_static_submission_gets_full_marks() {
    let dir = tempfile::tempdir().unwrap();
    complete_submission(dir.path());

    let output = tfgrade_bin()
        .args(["--dir", dir.path().to_str().unwrap()])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "expected exit 0, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        stdout.contains("TERRAFORM STATE MIGRATION - GRADING SCRIPT"),
        "got: {stdout}"
    );
    assert!(stdout.contains("Checks Passed: 14 / 14"), "got: {stdout}");
    assert!(stdout.contains("100.0%"), "got: {stdout}");
    assert!(stdout.contains("A - Excellent!"), "got: {stdout}");
}

/// Installs stub CLI tools that always exit 1, so the environment probes
/// fail deterministically regardless of what is installed on the host.
fn stub_tools(dir: &Path) {
    use std::os::unix::fs::PermissionsExt;
    for tool in ["aws", "terraform", "docker"] {
        let path = dir.join(tool);
        fs::write(&path, "#!/bin/sh\nexit 1\n").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
    }
}

#[test]
fn aws_mode_without_credentials_skips_live_verification() {
    let dir = tempfile::tempdir().unwrap();
    complete_submission(dir.path());
    let stubs = tempfile::tempdir().unwrap();
    stub_tools(stubs.path());
    let path_env = format!(
        "{}:{}",
        stubs.path().display(),
        std::env::var("PATH").unwrap()
    );

    let output = tfgrade_bin()
        .args(["--dir", dir.path().to_str().unwrap(), "--verify", "--mode", "aws"])
        .env("PATH", path_env)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        stdout.contains("AWS not configured. Run: aws configure"),
        "got: {stdout}"
    );
    // the live group added zero checks and no live step was attempted
    assert!(stdout.contains("Checks Passed: 14 / 14"), "got: {stdout}");
    assert!(
        !stdout.contains("Running terraform init"),
        "live steps must not run: {stdout}"
    );
}

#[test]
fn localstack_mode_without_container_skips_live_verification() {
    let dir = tempfile::tempdir().unwrap();
    complete_submission(dir.path());
    let stubs = tempfile::tempdir().unwrap();
    stub_tools(stubs.path());
    let path_env = format!(
        "{}:{}",
        stubs.path().display(),
        std::env::var("PATH").unwrap()
    );

    let output = tfgrade_bin()
        .args(["--dir", dir.path().to_str().unwrap(), "--verify"])
        .env("PATH", path_env)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains("LocalStack not running. Start with: docker-compose up -d"),
        "got: {stdout}"
    );
    assert!(stdout.contains("Checks Passed: 14 / 14"), "got: {stdout}");
    assert!(
        !stdout.contains("Running terraform init"),
        "live steps must not run: {stdout}"
    );
}

#[test]
fn empty_submission_fails_with_grade_c() {
    let dir = tempfile::tempdir().unwrap();

    let output = tfgrade_bin()
        .args(["--dir", dir.path().to_str().unwrap()])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    // one short-circuited failure per scenario 1 and 2, four for scenario 3
    assert!(stdout.contains("Checks Passed: 0 / 6"), "got: {stdout}");
    assert!(stdout.contains("C - Keep Working"), "got: {stdout}");
}

#[test]
fn empty_backend_runs_all_scenario_1_checks() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("scenario-1-local-to-remote/backend.tf"), "");

    let output = tfgrade_bin()
        .args(["--dir", dir.path().to_str().unwrap()])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    // 6 scenario-1 checks (1 pass) + 1 short-circuited scenario-2 failure
    // + 4 scenario-3 failures
    assert!(stdout.contains("Checks Passed: 1 / 11"), "got: {stdout}");
}

#[test]
fn missing_evidence_dir_adds_no_checks() {
    let dir = tempfile::tempdir().unwrap();
    complete_submission(dir.path());

    let output = tfgrade_bin()
        .args(["--dir", dir.path().to_str().unwrap(), "--evidence"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("No evidence/ directory found"), "got: {stdout}");
    // the score is unchanged: the absent directory contributed nothing
    assert!(stdout.contains("Checks Passed: 14 / 14"), "got: {stdout}");
}

#[test]
fn evidence_files_are_scored() {
    let dir = tempfile::tempdir().unwrap();
    complete_submission(dir.path());
    let evidence = dir.path().join("evidence");
    fs::create_dir(&evidence).unwrap();
    for name in [
        "scenario1-plan.txt",
        "scenario1-state.txt",
        "s3-state-proof.txt",
        "aws-identity.txt",
    ] {
        fs::write(evidence.join(name), "proof").unwrap();
    }

    let output = tfgrade_bin()
        .args(["--dir", dir.path().to_str().unwrap(), "--evidence"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Plan output found: scenario1-plan.txt"), "got: {stdout}");
    assert!(stdout.contains("Checks Passed: 18 / 18"), "got: {stdout}");
    assert!(
        stdout.contains("No screenshots found (optional but recommended)"),
        "got: {stdout}"
    );
}

#[test]
fn nonexistent_grading_dir_is_a_usage_error() {
    let output = tfgrade_bin()
        .args(["--dir", "/definitely/not/a/real/path"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "got: {stderr}");
}

#[test]
fn help_lists_all_flags() {
    let output = tfgrade_bin().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    for flag in ["--verify", "--evidence", "--mode", "--all", "--dir"] {
        assert!(stdout.contains(flag), "help should mention {flag}: {stdout}");
    }
}
