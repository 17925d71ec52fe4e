use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pt-launch",
    about = "Launch the path tracer, optionally under nvprof",
    long_about = None
)]
pub struct Cli {
    /// Wrap the path tracer in `nvprof --unified-memory-profiling off`
    #[arg(long)]
    pub nvprof: bool,

    /// Do not pass the switches from the path tracer flag file
    #[arg(long)]
    pub no_trace: bool,

    /// Path tracer executable.
    #[arg(long, env = "PT_LAUNCH_EXE", default_value = crate::model::cli::DEFAULT_EXE)]
    pub exe: PathBuf,

    /// Profiler metrics, one per line. Only read with --nvprof.
    #[arg(long, default_value = "nvprof.in")]
    pub nvprof_file: PathBuf,

    /// Path tracer flags, one per line.
    #[arg(long, default_value = "pathtracer.in")]
    pub pathtracer_file: PathBuf,

    /// Print the command line without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with the child's exit code instead of always succeeding
    #[arg(long)]
    pub propagate_exit: bool,
}
