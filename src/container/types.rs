use std::process::ExitStatus;

/// Describes a runtime invocation: `program` followed by `args`, exactly as
/// they will be passed to the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ContainerCommand {
    /// Shell-quoted rendering, suitable for copy-pasting into a terminal.
    pub fn display(&self) -> String {
        shell_words::join(std::iter::once(&self.program).chain(&self.args))
    }
}

/// Outcome of a container run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerResult {
    pub success: bool,
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl From<ExitStatus> for ContainerResult {
    fn from(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code(),
        }
    }
}

impl ContainerResult {
    /// Exit code to hand back to our own caller.
    pub fn process_exit_code(&self) -> u8 {
        match self.exit_code {
            Some(code) => u8::try_from(code).unwrap_or(1),
            None => 1,
        }
    }
}
