//! Jsh builtins
//!
//! This module includes the commands the interpreter handles itself instead
//! of launching a child process. Each builtin is a transition on the Shell's
//! state; `jobs` additionally reads the job table.

use self::prelude::*;

use self::dirs::Cd;
use self::exit::Exit;
use self::jobs::Jobs;

pub mod prelude {
    pub use std::io::Write;

    pub use failure::ResultExt;

    pub use errors::{Error, ErrorKind, Result};
    pub use shell::shell::Shell;
}

mod dirs;
mod exit;
mod jobs;

const CD_NAME: &str = "cd";
const EXIT_NAME: &str = "exit";
const JOBS_NAME: &str = "jobs";

/// Represents a Jsh builtin command such as cd or jobs.
pub trait BuiltinCommand {
    /// The NAME of the command.
    const NAME: &'static str;
    /// The help string to display to the user.
    const HELP: &'static str;
    /// Runs the command with the given arguments in the `shell` environment.
    fn run<T: AsRef<str>>(shell: &mut Shell, args: &[T], stdout: &mut Write) -> Result<()>;
}

pub fn is_builtin<T: AsRef<str>>(program: T) -> bool {
    [CD_NAME, EXIT_NAME, JOBS_NAME].contains(&program.as_ref())
}

/// precondition: command is a builtin.
pub fn run<S1, S2>(shell: &mut Shell, program: S1, args: &[S2], stdout: &mut Write) -> Result<()>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    debug_assert!(is_builtin(&program));

    match program.as_ref() {
        CD_NAME => Cd::run(shell, args, stdout),
        EXIT_NAME => Exit::run(shell, args, stdout),
        JOBS_NAME => Jobs::run(shell, args, stdout),
        _ => unreachable!(),
    }
}
