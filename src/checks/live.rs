//! Live verification: drives the Terraform CLI against a scenario directory
//! and grades the observable outcome. Every step is one command invocation
//! collapsed to a single check result; only a failed `init` (and, for
//! scenario 2, a missing import) aborts the rest of the scenario.

use crate::command;
use crate::config::Mode;
use crate::report::{self, Reporter};
use std::path::Path;
use std::time::Duration;

const INIT_TIMEOUT: Duration = Duration::from_secs(120);
const PLAN_TIMEOUT: Duration = Duration::from_secs(120);
const STATE_TIMEOUT: Duration = Duration::from_secs(30);

/// True when the plan output signals a clean state. Terraform versions
/// differ on whether "no changes" shows up in the exit code or only in the
/// text, so either signal counts.
fn plan_clean(ok: bool, output: &str) -> bool {
    ok || output.contains("No changes")
}

/// Scenario 1: verifies the state actually migrated to the remote backend.
pub async fn scenario_1(root: &Path, mode: Mode, rep: &mut Reporter) {
    report::section(&format!(
        "Scenario 1: Live Verification ({})",
        mode.label().to_uppercase()
    ));
    let base = root.join("scenario-1-local-to-remote");

    report::info("Running terraform init...");
    let (ok, _) = command::run("terraform init -input=false", Some(&base), INIT_TIMEOUT).await;
    if ok {
        rep.pass("terraform init succeeded");
    } else {
        rep.fail(
            "terraform init succeeded",
            Some("Check your backend configuration"),
        );
        return;
    }

    report::info("Running terraform plan...");
    let (ok, output) =
        command::run("terraform plan -detailed-exitcode", Some(&base), PLAN_TIMEOUT).await;
    if plan_clean(ok, &output) {
        rep.pass("terraform plan shows no changes (state migrated!)");
    } else {
        rep.fail(
            "terraform plan shows no changes",
            Some("State might not be migrated correctly"),
        );
    }

    report::info("Checking state list...");
    let (ok, output) = command::run("terraform state list", Some(&base), STATE_TIMEOUT).await;
    if ok && output.contains("aws_") {
        rep.pass("State contains resources");
        for line in output.lines().map(str::trim).filter(|l| !l.is_empty()) {
            report::info(&format!("  Found: {line}"));
        }
    } else {
        rep.fail("State contains resources", None);
    }

    if mode == Mode::Localstack {
        report::info("Checking S3 bucket for state file...");
        let (ok, output) = command::run(
            "aws s3 ls s3://terraform-state-migration-demo/ \
             --endpoint-url http://localhost:4566 --recursive",
            Some(root),
            STATE_TIMEOUT,
        )
        .await;
        if ok && output.contains("terraform.tfstate") {
            rep.pass("State file exists in S3 bucket");
        } else {
            rep.fail(
                "State file exists in S3 bucket",
                Some("Run: terraform init -migrate-state"),
            );
        }
    }
}

/// Scenario 2: verifies the import landed in state and the config matches.
pub async fn scenario_2(root: &Path, mode: Mode, rep: &mut Reporter) {
    report::section(&format!(
        "Scenario 2: Live Verification ({})",
        mode.label().to_uppercase()
    ));
    let base = root.join("scenario-2-import");

    report::info("Running terraform init...");
    let (ok, _) = command::run("terraform init -input=false", Some(&base), INIT_TIMEOUT).await;
    if ok {
        rep.pass("terraform init succeeded");
    } else {
        rep.fail("terraform init succeeded", None);
        return;
    }

    report::info("Checking for imported resource...");
    let (ok, output) = command::run("terraform state list", Some(&base), STATE_TIMEOUT).await;
    if ok && output.contains("imported") {
        rep.pass("Imported resource exists in state");
    } else {
        rep.fail(
            "Imported resource exists in state",
            Some("Run: terraform import aws_instance.imported <instance-id>"),
        );
        // a clean plan is meaningless until the import exists
        return;
    }

    report::info("Running terraform plan...");
    let (ok, output) =
        command::run("terraform plan -detailed-exitcode", Some(&base), PLAN_TIMEOUT).await;
    if plan_clean(ok, &output) {
        rep.pass("terraform plan shows no changes (import complete!)");
    } else {
        rep.fail(
            "terraform plan shows no changes",
            Some("Update main.tf to match the imported resource attributes"),
        );
    }
}
