use nix::unistd;

use shell::builtins::{self, prelude::*};

pub struct Exit;

impl builtins::BuiltinCommand for Exit {
    const NAME: &'static str = builtins::EXIT_NAME;

    const HELP: &'static str = "\
exit: exit [n]
    Exit the shell with a status of N. If N is omitted, the exit status
    is 0.";

    fn run<T: AsRef<str>>(shell: &mut Shell, args: &[T], stdout: &mut Write) -> Result<()> {
        writeln!(stdout, "{}", unistd::getpid()).context(ErrorKind::Io)?;

        if args.len() > 1 {
            return Err(Error::builtin_command("exit: too many arguments", 1));
        }

        let status_code = match args.first() {
            Some(arg) => parse_status_code(arg.as_ref())?,
            None => 0,
        };

        shell.shutdown_jobs();
        shell.request_exit(status_code);
        Ok(())
    }
}

/// Exit statuses are unsigned decimal digit strings; anything else is an
/// argument error and leaves the shell state untouched.
fn parse_status_code(arg: &str) -> Result<i32> {
    if !arg.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::builtin_command(
            format!("exit: {}: numeric argument required", arg),
            2,
        ));
    }

    Ok(arg.parse().unwrap_or(0))
}
