//! Environment readiness probes. Each one is a single command invocation
//! collapsed to a bool; none of them counts toward the score.

use crate::command;
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(60);

pub async fn terraform_installed() -> bool {
    command::run("terraform version", None, PROBE_TIMEOUT).await.0
}

pub async fn docker_running() -> bool {
    command::run("docker ps", None, PROBE_TIMEOUT).await.0
}

pub async fn localstack_running() -> bool {
    let (ok, output) = command::run(
        "docker ps --filter name=localstack --format '{{.Names}}'",
        None,
        PROBE_TIMEOUT,
    )
    .await;
    ok && output.to_lowercase().contains("localstack")
}

pub async fn aws_configured() -> bool {
    command::run("aws sts get-caller-identity", None, PROBE_TIMEOUT)
        .await
        .0
}
