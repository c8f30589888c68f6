use std::process::Command;

use anyhow::{Context, Result};

use super::types::{ContainerCommand, ContainerResult};

/// Run the container in the foreground and wait for it to exit.
///
/// Stdio is inherited so the container's output goes straight to the
/// terminal. There is no retry and no timeout.
pub fn run(cmd: &ContainerCommand) -> Result<ContainerResult> {
    tracing::info!(program = %cmd.program, "spawning container runtime");

    let status = Command::new(&cmd.program)
        .args(&cmd.args)
        .status()
        .with_context(|| {
            format!(
                "failed to invoke `{}` (is it installed and on PATH?)",
                cmd.program
            )
        })?;

    let result = ContainerResult::from(status);
    if result.success {
        tracing::info!("container exited successfully");
    } else {
        tracing::warn!(exit_code = ?result.exit_code, "container exited with failure");
    }
    Ok(result)
}
