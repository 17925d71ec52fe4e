mod cli;
mod launch;
mod model;
#[cfg(test)]
mod scratch;
mod ui;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::{
    launch::{Launcher, build_launcher},
    model::{
        cli::{ExitPolicy, RunConfig, RunMode, Toggles},
        command::LaunchCommand,
    },
    ui::report,
};

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = RunConfig {
        toggles: Toggles {
            profiler: cli.nvprof,
            trace: !cli.no_trace,
        },
        exe: cli.exe,
        profiler_flags: cli.nvprof_file,
        trace_flags: cli.pathtracer_file,
        mode: if cli.dry_run {
            RunMode::DryRun
        } else {
            RunMode::Launch
        },
        exit_policy: if cli.propagate_exit {
            ExitPolicy::Propagate
        } else {
            ExitPolicy::Ignore
        },
    };

    let mut launcher = build_launcher();
    let code = run(&config, launcher.as_mut(), &mut io::stdout().lock())?;
    Ok(ExitCode::from(code))
}

/// Assembles, prints and launches the command; returns the launcher's exit code.
fn run<W: Write>(config: &RunConfig, launcher: &mut dyn Launcher, out: &mut W) -> Result<u8> {
    let cmd = LaunchCommand::assemble(config)?;
    report::write_command(out, &cmd)?;

    if config.mode == RunMode::DryRun {
        return Ok(0);
    }

    let outcome = launcher.launch(&cmd);
    report::write_done(out)?;

    Ok(match config.exit_policy {
        ExitPolicy::Ignore => 0,
        ExitPolicy::Propagate => outcome.exit_code(),
    })
}
