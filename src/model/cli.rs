use std::path::PathBuf;

/// Executable launched when `--exe` is not given.
pub const DEFAULT_EXE: &str = ".\\Pathtracer.exe";

/// Profiler program and the options it always receives.
pub const PROFILER_PREFIX: [&str; 3] = ["nvprof", "--unified-memory-profiling", "off"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    pub profiler: bool,
    pub trace: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            profiler: false,
            trace: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Launch,
    DryRun,
}

/// What the launcher's own exit status reports about the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Always exit 0 once the child has been waited on.
    Ignore,
    /// Mirror the child's exit code.
    Propagate,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub toggles: Toggles,
    pub exe: PathBuf,
    pub profiler_flags: PathBuf,
    pub trace_flags: PathBuf,
    pub mode: RunMode,
    pub exit_policy: ExitPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            toggles: Toggles::default(),
            exe: PathBuf::from(DEFAULT_EXE),
            profiler_flags: PathBuf::from("nvprof.in"),
            trace_flags: PathBuf::from("pathtracer.in"),
            mode: RunMode::Launch,
            exit_policy: ExitPolicy::Ignore,
        }
    }
}
