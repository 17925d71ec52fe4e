pub mod process;

use std::fmt;

use crate::model::command::LaunchCommand;

/// How the launched child finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Exited(i32),
    Signaled(String),
    NotStarted(String),
}

impl LaunchOutcome {
    pub fn success(&self) -> bool {
        matches!(self, LaunchOutcome::Exited(0))
    }

    /// Exit code the launcher reports when mirroring the child.
    pub fn exit_code(&self) -> u8 {
        match self {
            LaunchOutcome::Exited(code) => u8::try_from(*code).unwrap_or(1),
            LaunchOutcome::Signaled(_) | LaunchOutcome::NotStarted(_) => 1,
        }
    }
}

impl fmt::Display for LaunchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchOutcome::Exited(code) => write!(f, "exited with code {code}"),
            LaunchOutcome::Signaled(signal) => write!(f, "killed by {signal}"),
            LaunchOutcome::NotStarted(reason) => write!(f, "not started: {reason}"),
        }
    }
}

pub trait Launcher {
    /// Runs `cmd` to completion. Child failures are outcomes, not errors.
    fn launch(&mut self, cmd: &LaunchCommand) -> LaunchOutcome;
}

pub fn build_launcher() -> Box<dyn Launcher> {
    Box::new(process::ProcessLauncher::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_zero_exit_is_success() {
        assert!(LaunchOutcome::Exited(0).success());
        assert!(!LaunchOutcome::Exited(3).success());
        assert!(!LaunchOutcome::Signaled("SIGKILL".into()).success());
        assert!(!LaunchOutcome::NotStarted("missing".into()).success());
    }

    #[test]
    fn exit_codes_outside_u8_collapse_to_one() {
        assert_eq!(LaunchOutcome::Exited(0).exit_code(), 0);
        assert_eq!(LaunchOutcome::Exited(42).exit_code(), 42);
        assert_eq!(LaunchOutcome::Exited(-1).exit_code(), 1);
        assert_eq!(LaunchOutcome::Exited(-1073741515).exit_code(), 1);
        assert_eq!(LaunchOutcome::Signaled("SIGSEGV".into()).exit_code(), 1);
    }
}
