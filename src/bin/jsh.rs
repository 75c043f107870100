extern crate dirs;
extern crate docopt;
extern crate fern;
extern crate jsh_rs;
#[macro_use]
extern crate log;
extern crate nix;
#[macro_use]
extern crate serde_derive;

use std::path::{Path, PathBuf};
use std::process;

use docopt::Docopt;
use nix::unistd::Pid;

use jsh_rs::{Shell, ShellConfig};

const LOG_FILE_NAME: &str = ".jsh_log";

const USAGE: &str = "
jsh.

Usage:
    jsh [options]
    jsh [options] -c <command>
    jsh [options] <file>
    jsh (-h | --help)
    jsh --version

Options:
    -h --help       Show this screen.
    --version       Show version.
    -c              If the -c option is present, then commands are read from the first non-option
                        argument command_string.
    --log=<path>    File to write log to, defaults to ~/.jsh_log
";

/// Docopts input arguments.
#[derive(Debug, Deserialize)]
struct Args {
    arg_command: Option<String>,
    arg_file: Option<String>,
    flag_version: bool,
    flag_c: bool,
    flag_log: Option<String>,
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    if let Err(e) = init_logger(&args.flag_log) {
        eprintln!("jsh: failed to initialize logging: {:?}", e);
    }
    debug!("{:?}", args);

    if args.flag_version {
        println!("jsh version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let code = if args.flag_c || args.arg_file.is_some() {
        execute_from_command_string_or_file(&args)
    } else {
        execute_from_stdin()
    };
    process::exit(code);
}

fn init_logger(path: &Option<String>) -> Result<(), fern::InitError> {
    let log_path = match path.clone().map(PathBuf::from).or_else(default_log_path) {
        Some(log_path) => log_path,
        // No explicit path and no home directory; logging stays off.
        None => return Ok(()),
    };

    let pid = Pid::this();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                pid,
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(log_path)?)
        .apply()?;
    Ok(())
}

fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(LOG_FILE_NAME))
}

fn execute_from_command_string_or_file(args: &Args) -> i32 {
    let mut shell = Shell::new(ShellConfig::default());

    let result = if let Some(ref command) = args.arg_command {
        shell.execute_command_string(command)
    } else if let Some(ref file_path) = args.arg_file {
        shell.execute_commands_from_file(Path::new(file_path))
    } else {
        unreachable!();
    };

    if let Err(e) = result {
        shell.report_error(&e);
    }
    shell.exit_status()
}

fn execute_from_stdin() -> i32 {
    let mut shell = Shell::new(ShellConfig::default());
    shell.execute_from_stdin();
    shell.exit_status()
}
