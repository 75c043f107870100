//! Error module. See the [failure](https://crates.io/crates/failure) crate for details.
//!
//! Every error in this enum is handled where it is detected: the caller logs
//! the typed value and shows the user a single undifferentiated message
//! (`Shell::report_error`). None of them terminate the interpreter.

use std::fmt;
use std::result;

use failure::{Backtrace, Context, Fail};

/// The single user-facing error line. The interpreter deliberately does not
/// differentiate error causes on stderr; the typed `ErrorKind` goes to the
/// log instead.
pub const GENERIC_ERROR_MESSAGE: &str = "Error in system call";

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    ctx: Context<ErrorKind>,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.ctx.get_context()
    }

    pub(crate) fn syntax<T: AsRef<str>>(line: T) -> Error {
        Error::from(ErrorKind::Syntax(line.as_ref().to_string()))
    }

    pub(crate) fn oversized_input(length: usize, limit: usize) -> Error {
        Error::from(ErrorKind::OversizedInput { length, limit })
    }

    pub(crate) fn builtin_command<T: AsRef<str>>(message: T, code: i32) -> Error {
        Error::from(ErrorKind::BuiltinCommand {
            message: message.as_ref().to_string(),
            code,
        })
    }

    pub(crate) fn directory_change<T: AsRef<str>>(target: T) -> Error {
        Error::from(ErrorKind::DirectoryChange(target.as_ref().to_string()))
    }

    pub(crate) fn no_prior_directory() -> Error {
        Error::from(ErrorKind::NoPriorDirectory)
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&Fail> {
        self.ctx.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.ctx.backtrace()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.ctx.fmt(f)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Syntax(String),
    OversizedInput { length: usize, limit: usize },
    BuiltinCommand { message: String, code: i32 },
    DirectoryChange(String),
    NoPriorDirectory,
    Io,
    Nix,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorKind::Syntax(ref line) => write!(f, "syntax error: '{}'", line),
            ErrorKind::OversizedInput { length, limit } => {
                write!(f, "input line is {} bytes, limit is {}", length, limit)
            }
            ErrorKind::BuiltinCommand { ref message, .. } => write!(f, "{}", message),
            ErrorKind::DirectoryChange(ref target) => {
                write!(f, "cannot change directory to '{}'", target)
            }
            ErrorKind::NoPriorDirectory => write!(f, "no previous working directory"),
            ErrorKind::Io => write!(f, "I/O error occurred"),
            ErrorKind::Nix => write!(f, "Nix error occurred"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::from(Context::new(kind))
    }
}

impl From<Context<ErrorKind>> for Error {
    fn from(ctx: Context<ErrorKind>) -> Error {
        Error { ctx }
    }
}
