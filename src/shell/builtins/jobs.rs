use shell::builtins::{self, prelude::*};

pub struct Jobs;

impl builtins::BuiltinCommand for Jobs {
    const NAME: &'static str = builtins::JOBS_NAME;

    const HELP: &'static str = "\
jobs: jobs
    Display status of jobs. Lists the still-running background processes,
    one per line, as '<pid> <command>' in launch order.";

    fn run<T: AsRef<str>>(shell: &mut Shell, _args: &[T], stdout: &mut Write) -> Result<()> {
        shell.reap_jobs();
        for job in shell.jobs() {
            writeln!(stdout, "{}", job).context(ErrorKind::Io)?;
        }

        Ok(())
    }
}
