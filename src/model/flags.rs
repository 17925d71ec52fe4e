use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Switches contributed by one flag file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagSet {
    /// The file's first line is empty.
    None,
    /// `--<line>` for every non-empty line, in file order.
    Switches(Vec<String>),
}

impl FlagSet {
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read flag file {}", path.display()))?;
        let flags = Self::parse(&content);
        log::debug!("{}: {} switch(es)", path.display(), flags.switches().len());
        Ok(flags)
    }

    pub fn parse(content: &str) -> Self {
        let mut lines = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line));

        // An empty first line disables the whole file, whatever follows it.
        match lines.next() {
            None | Some("") => FlagSet::None,
            Some(first) => {
                let switches = std::iter::once(first)
                    .chain(lines.filter(|line| !line.is_empty()))
                    .map(|line| format!("--{line}"))
                    .collect();
                FlagSet::Switches(switches)
            }
        }
    }

    pub fn switches(&self) -> &[String] {
        match self {
            FlagSet::None => &[],
            FlagSet::Switches(switches) => switches,
        }
    }
}
