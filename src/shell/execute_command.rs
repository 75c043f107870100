use std::ffi::CString;
use std::process;

use failure::ResultExt;
use nix::sys::wait::{self, WaitPidFlag};
use nix::unistd::{self, ForkResult};

use core::parser::Command;
use errors::{Error, ErrorKind, Result, GENERIC_ERROR_MESSAGE};
use shell::shell::Shell;

/// Forks and execs `command.argv` as an external program, resolved through
/// the platform's executable search path.
///
/// The parent prints the child's pid immediately in both modes. A foreground
/// command is then waited on until it exits or stops; a background command is
/// registered in the shell's job table instead and control returns at once.
pub fn launch(shell: &mut Shell, command: &Command) -> Result<()> {
    let argv = to_argv(command)?;

    match unistd::fork().context(ErrorKind::Nix)? {
        ForkResult::Child => {
            // Only reachable when the exec itself fails, e.g. no such
            // program. The child reports the failure and exits with status
            // 0, so the parent observes an ordinary exit.
            let temp_result = unistd::execvp(&argv[0], &argv);
            log_if_err!(temp_result, "execvp {:?}", argv[0]);
            eprintln!("{}", GENERIC_ERROR_MESSAGE);
            process::exit(0);
        }
        ForkResult::Parent { child } => {
            println!("{}", child);
            if command.background {
                shell.add_job(child, &command.flattened());
            } else {
                let wait_status =
                    wait::waitpid(child, Some(WaitPidFlag::WUNTRACED)).context(ErrorKind::Nix)?;
                debug!("foreground process {} changed state: {:?}", child, wait_status);
            }
            Ok(())
        }
    }
}

/// A NUL byte cannot cross the exec argument convention; reject the line.
fn to_argv(command: &Command) -> Result<Vec<CString>> {
    command
        .argv
        .iter()
        .map(|arg| CString::new(arg.as_str()).map_err(|_| Error::syntax(&command.input)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argv_with_nul_byte_is_rejected() {
        let command = Command {
            input: "echo x".to_string(),
            argv: vec!["echo".to_string(), "x\0y".to_string()],
            background: false,
        };
        assert!(to_argv(&command).is_err());
    }

    #[test]
    fn test_argv_conversion_preserves_order() {
        let command = Command {
            input: "ls -l file".to_string(),
            argv: vec!["ls".to_string(), "-l".to_string(), "file".to_string()],
            background: false,
        };
        let argv = to_argv(&command).unwrap();
        let argv: Vec<&str> = argv.iter().map(|arg| arg.to_str().unwrap()).collect();
        assert_eq!(argv, vec!["ls", "-l", "file"]);
    }
}
