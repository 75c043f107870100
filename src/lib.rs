//! Jsh - a line-oriented command interpreter.
//!
//! Jsh reads one command line at a time, recognizes the `cd`, `exit` and
//! `jobs` builtins, and launches anything else as an external program,
//! either waiting for it (foreground) or tracking it in a job table
//! (background, trailing `&`).

extern crate dirs;
extern crate failure;
#[macro_use]
extern crate log;
extern crate nix;
#[cfg(test)]
extern crate tempdir;

macro_rules! log_if_err {
    ($result:expr, $($arg:tt)*) => {
        if let Err(ref err) = $result {
            error!("{}: {}", format!($($arg)*), err);
        }
    };
}

pub use core::parser::Command;
pub use shell::{Shell, ShellConfig};

pub mod core;
pub mod errors;
pub mod shell;
pub mod util;
