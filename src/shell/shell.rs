//! Jsh - Shell Module
//!
//! The Shell owns the interpreter-wide state for one run: the background job
//! table, the directory history used by `cd -`, and the exit request made by
//! the exit builtin. It also routes each parsed command to a builtin or to
//! the external-program launcher.

use std::fs::File;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use failure::ResultExt;
use nix::unistd::Pid;

use core::job::Job;
use core::parser::Command;
use errors::{Error, ErrorKind, Result, GENERIC_ERROR_MESSAGE};
use shell::{builtins, execute_command, job_control::JobManager};
use util;

const DEFAULT_MAX_INPUT_BYTES: usize = 512;

/// Jsh Shell
#[derive(Debug)]
pub struct Shell {
    job_manager: JobManager,
    /// Working directory in effect before the most recent successful `cd`;
    /// `None` until the first one.
    last_directory: Option<PathBuf>,
    /// Exit status of the interpreter, set only by the exit builtin.
    exit_status: i32,
    terminate_requested: bool,
    /// Is `false` when stdin is not a terminal, e.g. a piped command stream.
    is_interactive: bool,
    config: ShellConfig,
}

impl Shell {
    /// Constructs a new Shell to route commands and track background jobs.
    pub fn new(config: ShellConfig) -> Shell {
        let shell = Shell {
            job_manager: Default::default(),
            last_directory: None,
            exit_status: 0,
            terminate_requested: false,
            is_interactive: util::isatty(),
            config,
        };

        info!("jsh started up");
        shell
    }

    /// Parses and runs one command line.
    pub fn execute_command_string(&mut self, input: &str) -> Result<()> {
        if input.len() > self.config.max_input_bytes {
            return Err(Error::oversized_input(
                input.len(),
                self.config.max_input_bytes,
            ));
        }

        match Command::parse(input)? {
            Some(command) => self.dispatch(&command),
            None => Ok(()),
        }
    }

    /// Runs command lines from a file, in order, stopping early once the
    /// exit builtin has run. Per-line failures are reported and the next
    /// line is executed.
    pub fn execute_commands_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let mut f = File::open(path.as_ref()).context(ErrorKind::Io)?;
        let mut buffer = String::new();
        f.read_to_string(&mut buffer).context(ErrorKind::Io)?;

        for line in buffer.split('\n') {
            if self.terminate_requested {
                break;
            }
            let temp_result = self.execute_command_string(line);
            if let Err(e) = temp_result {
                self.report_error(&e);
            }
        }

        Ok(())
    }

    /// Runs command lines from stdin until EOF or an exit request. The `> `
    /// prompt appears only when stdin is a terminal.
    pub fn execute_from_stdin(&mut self) {
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut input = String::new();

        while !self.terminate_requested {
            if self.is_interactive {
                print!("> ");
                let temp_result = io::stdout().flush();
                log_if_err!(temp_result, "failed to flush prompt");
            }

            input.clear();
            match handle.read_line(&mut input) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    error!("failed to read input line: {}", e);
                    break;
                }
            }

            let temp_result = self.execute_command_string(&input);
            if let Err(e) = temp_result {
                self.report_error(&e);
            }
        }
    }

    /// Logs the typed error and shows the user the single generic message.
    pub fn report_error(&self, error: &Error) {
        debug!("command failed: {}", error);
        eprintln!("{}", GENERIC_ERROR_MESSAGE);
    }

    /// Exit status of the interpreter; the value last set via `exit <n>`.
    pub fn exit_status(&self) -> i32 {
        self.exit_status
    }

    /// `true` once the exit builtin has run; the driver loop observes this
    /// and stops.
    pub fn terminate_requested(&self) -> bool {
        self.terminate_requested
    }

    /// Routes a parsed command to a builtin or to the external launcher.
    fn dispatch(&mut self, command: &Command) -> Result<()> {
        debug!("dispatching {:?}", command);
        if builtins::is_builtin(&command.argv[0]) {
            builtins::run(
                self,
                &command.argv[0],
                &command.argv[1..],
                &mut io::stdout(),
            )
        } else {
            execute_command::launch(self, command)
        }
    }

    pub(crate) fn request_exit(&mut self, status_code: i32) {
        info!("exit requested with status {}", status_code);
        self.exit_status = status_code;
        self.terminate_requested = true;
    }

    pub(crate) fn add_job(&mut self, pid: Pid, input: &str) {
        self.job_manager.add_job(pid, input);
    }

    pub(crate) fn reap_jobs(&mut self) {
        self.job_manager.reap_dead();
    }

    pub(crate) fn jobs(&self) -> &[Job] {
        self.job_manager.jobs()
    }

    pub(crate) fn shutdown_jobs(&mut self) {
        self.job_manager.shutdown();
    }

    pub(crate) fn last_directory(&self) -> Option<PathBuf> {
        self.last_directory.clone()
    }

    pub(crate) fn set_last_directory(&mut self, dir: PathBuf) {
        self.last_directory = Some(dir);
    }
}

/// Policy object to control a Shell's behavior
#[derive(Debug, Copy, Clone)]
pub struct ShellConfig {
    /// Hard cap on the byte length of one input line. Longer lines are
    /// rejected before parsing rather than truncated.
    pub max_input_bytes: usize,
}

impl Default for ShellConfig {
    fn default() -> ShellConfig {
        ShellConfig {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}
