use std::env;
use std::path::PathBuf;

use dirs;
use nix::unistd;

use shell::builtins::{self, prelude::*};

pub struct Cd;

impl builtins::BuiltinCommand for Cd {
    const NAME: &'static str = builtins::CD_NAME;

    const HELP: &'static str = "\
cd: cd [dir]
    Change the current directory to DIR. With no DIR, or with '~', change to
    the home directory. With '-', change to the previous working directory.";

    fn run<T: AsRef<str>>(shell: &mut Shell, args: &[T], stdout: &mut Write) -> Result<()> {
        writeln!(stdout, "{}", unistd::getpid()).context(ErrorKind::Io)?;

        if args.len() > 1 {
            return Err(Error::builtin_command("cd: too many arguments", 1));
        }

        let current = env::current_dir().context(ErrorKind::Io)?;
        let target = match args.first().map(AsRef::as_ref) {
            None | Some("~") => home_directory()?,
            Some("-") => match shell.last_directory() {
                Some(previous) => previous,
                None => return Err(Error::no_prior_directory()),
            },
            Some(path) => PathBuf::from(path),
        };

        env::set_current_dir(&target)
            .map_err(|_| Error::directory_change(target.to_string_lossy()))?;
        shell.set_last_directory(current);
        Ok(())
    }
}

fn home_directory() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| Error::builtin_command("cd: home directory not set", 1))
}
