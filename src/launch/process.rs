use std::process::{Command, ExitStatus, Stdio};

use time::OffsetDateTime;

use crate::{
    launch::{LaunchOutcome, Launcher},
    model::command::LaunchCommand,
};

/// Spawns the command directly (no shell) with inherited stdio.
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&mut self, cmd: &LaunchCommand) -> LaunchOutcome {
        let start = OffsetDateTime::now_utc();

        let status = Command::new(cmd.program())
            .args(cmd.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        let outcome = match status {
            Ok(status) => outcome_from_status(status),
            Err(e) => {
                eprintln!("failed to launch {}: {e}", cmd.program().to_string_lossy());
                LaunchOutcome::NotStarted(e.to_string())
            }
        };

        let elapsed = OffsetDateTime::now_utc() - start;
        if outcome.success() {
            log::info!("child {outcome} after {:.3}s", elapsed.as_seconds_f64());
        } else {
            log::warn!("child {outcome} after {:.3}s", elapsed.as_seconds_f64());
        }

        outcome
    }
}

fn outcome_from_status(status: ExitStatus) -> LaunchOutcome {
    if let Some(code) = status.code() {
        return LaunchOutcome::Exited(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(raw) = status.signal() {
            let name = nix::sys::signal::Signal::try_from(raw)
                .map(|sig| sig.as_str().to_string())
                .unwrap_or_else(|_| format!("signal {raw}"));
            return LaunchOutcome::Signaled(name);
        }
    }

    LaunchOutcome::Signaled(status.to_string())
}

#[cfg(all(test, unix))]
mod tests {
    use std::ffi::OsStr;

    use super::*;
    use crate::model::flags::FlagSet;

    fn command(program: &str, args: &str) -> LaunchCommand {
        LaunchCommand::build(OsStr::new(program), None, Some(&FlagSet::parse(args)))
    }

    #[test]
    fn successful_child_exits_zero() {
        let outcome = ProcessLauncher::new().launch(&command("true", ""));
        assert_eq!(outcome, LaunchOutcome::Exited(0));
    }

    #[test]
    fn failing_child_is_an_outcome() {
        let outcome = ProcessLauncher::new().launch(&command("false", ""));
        assert_eq!(outcome, LaunchOutcome::Exited(1));
    }

    #[test]
    fn missing_executable_is_not_started() {
        let outcome = ProcessLauncher::new().launch(&command("./no-such-pathtracer", ""));
        assert!(matches!(outcome, LaunchOutcome::NotStarted(_)));
    }

    #[test]
    fn signal_death_is_named() {
        use std::os::unix::process::ExitStatusExt;

        assert_eq!(
            outcome_from_status(ExitStatus::from_raw(9)),
            LaunchOutcome::Signaled("SIGKILL".into())
        );
        assert_eq!(
            outcome_from_status(ExitStatus::from_raw(256)),
            LaunchOutcome::Exited(1)
        );
    }
}
