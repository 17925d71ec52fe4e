use std::io::{self, Write};

use crate::model::command::LaunchCommand;

pub const DONE_MESSAGE: &str = "Test done";

pub fn write_command<W: Write>(out: &mut W, cmd: &LaunchCommand) -> io::Result<()> {
    writeln!(out, "{}", cmd.cmdline())?;
    out.flush()
}

pub fn write_done<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{DONE_MESSAGE}")?;
    out.flush()
}
