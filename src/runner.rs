//! Drives a full grading run: environment probes, static checks, optional
//! live verification and evidence checks, then the final score.

use crate::checks::{evidence, files, live};
use crate::config::{Mode, RunConfig};
use crate::env;
use crate::report::{self, Reporter};
use crate::score::Score;
use std::process::ExitCode;
use tracing::debug;

pub async fn run(config: &RunConfig) -> ExitCode {
    debug!(
        root = %config.root.display(),
        verify = config.verify,
        evidence = config.evidence,
        mode = config.mode.label(),
        "starting grading run"
    );

    report::header("TERRAFORM STATE MIGRATION - GRADING SCRIPT");

    environment_check(config).await;

    let mut rep = Reporter::new();

    report::header("FILE-BASED CHECKS");
    files::scenario_1(&config.root, &mut rep);
    files::scenario_2(&config.root, &mut rep);
    files::scenario_3(&config.root, &mut rep);

    if config.verify {
        report::header(&format!(
            "LIVE VERIFICATION ({})",
            config.mode.label().to_uppercase()
        ));
        // An unreachable prerequisite service skips the whole group with a
        // warning instead of turning every step into a failure.
        let ready = match config.mode {
            Mode::Localstack => env::localstack_running().await,
            Mode::Aws => env::aws_configured().await,
        };
        if ready {
            live::scenario_1(&config.root, config.mode, &mut rep).await;
            live::scenario_2(&config.root, config.mode, &mut rep).await;
        } else {
            match config.mode {
                Mode::Localstack => {
                    report::warn("LocalStack not running. Start with: docker-compose up -d");
                }
                Mode::Aws => report::warn("AWS not configured. Run: aws configure"),
            }
        }
    }

    if config.evidence {
        report::header("EVIDENCE FILE CHECKS");
        evidence::scan(&config.root, &mut rep);
    }

    let score = Score::from_results(rep.results());
    report::print_summary(&score);
    suggestions(config);

    if score.passing() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Readiness probes for the tools live verification depends on. Printed for
/// the learner's benefit but never recorded: a broken workstation should not
/// drag down the grade for the submitted files.
async fn environment_check(config: &RunConfig) {
    report::section("Environment Check");

    report::status_line(
        env::terraform_installed().await,
        "Terraform CLI installed",
        Some("Install from: https://terraform.io/downloads"),
    );

    match config.mode {
        Mode::Localstack => {
            if env::docker_running().await {
                report::status_line(true, "Docker is running", None);
                report::status_line(
                    env::localstack_running().await,
                    "LocalStack container is running",
                    Some("Run: docker-compose up -d"),
                );
            } else {
                report::status_line(false, "Docker is running", Some("Start Docker Desktop"));
            }
        }
        Mode::Aws => {
            report::status_line(
                env::aws_configured().await,
                "AWS CLI configured",
                Some("Run: aws configure"),
            );
        }
    }
}

fn suggestions(config: &RunConfig) {
    println!();
    if !config.verify {
        report::info("Run with --verify for live Terraform checks");
    }
    if !config.evidence {
        report::info("Run with --evidence to check proof files");
    }
    if config.mode == Mode::Localstack {
        report::info("Using Real AWS? Run with --mode aws");
    }
}
