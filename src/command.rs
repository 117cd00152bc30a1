use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Runs `command` through `sh -c`, blocking until it finishes or the timeout
/// elapses. Stdout and stderr come back merged into one text.
///
/// Total over its inputs: a non-zero exit, a timeout, or a failure to launch
/// all come back as `(false, diagnostic text)` rather than an error. A
/// non-zero exit is a normal outcome here (e.g. a plan that found changes),
/// not a fault.
pub async fn run(command: &str, cwd: Option<&Path>, timeout: Duration) -> (bool, String) {
    debug!(command, timeout_secs = timeout.as_secs(), "running command");

    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            (output.status.success(), text)
        }
        Ok(Err(e)) => (false, format!("failed to launch command: {e}")),
        Err(_) => (false, format!("command timed out after {}s", timeout.as_secs())),
    }
}
