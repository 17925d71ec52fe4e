use std::ffi::{OsStr, OsString};

use anyhow::Result;

use crate::model::{
    cli::{PROFILER_PREFIX, RunConfig},
    flags::FlagSet,
};

/// Argument vector for one launch. `argv[0]` is the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    argv: Vec<OsString>,
}

impl LaunchCommand {
    /// Reads whichever flag files the toggles enable and builds the command.
    pub fn assemble(cfg: &RunConfig) -> Result<Self> {
        let profiler = if cfg.toggles.profiler {
            Some(FlagSet::read(&cfg.profiler_flags)?)
        } else {
            None
        };
        let trace = if cfg.toggles.trace {
            Some(FlagSet::read(&cfg.trace_flags)?)
        } else {
            None
        };

        let cmd = Self::build(cfg.exe.as_os_str(), profiler.as_ref(), trace.as_ref());
        log::debug!("assembled argv: {:?}", cmd.argv);
        Ok(cmd)
    }

    /// `profiler` wraps the executable in nvprof; `trace` supplies its switches.
    pub fn build(exe: &OsStr, profiler: Option<&FlagSet>, trace: Option<&FlagSet>) -> Self {
        let mut argv: Vec<OsString> = Vec::new();

        if let Some(metrics) = profiler {
            argv.extend(PROFILER_PREFIX.iter().map(OsString::from));
            argv.extend(metrics.switches().iter().map(OsString::from));
        }

        argv.push(exe.to_os_string());

        if let Some(settings) = trace {
            argv.extend(settings.switches().iter().map(OsString::from));
        }

        Self { argv }
    }

    pub fn program(&self) -> &OsStr {
        &self.argv[0]
    }

    pub fn args(&self) -> &[OsString] {
        &self.argv[1..]
    }

    /// Shell-style command line: every token followed by a single space.
    pub fn cmdline(&self) -> String {
        self.argv
            .iter()
            .map(|arg| format!("{} ", arg.to_string_lossy()))
            .collect()
    }
}
