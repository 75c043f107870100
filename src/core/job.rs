use std::fmt;

use nix::unistd::Pid;

/// Bookkeeping record for one background process.
///
/// A `Job` exists from the moment the process is launched until a
/// non-blocking status check confirms the process is gone.
#[derive(Clone, Debug, PartialEq)]
pub struct Job {
    pid: Pid,
    input: String,
}

impl Job {
    /// `input` is the flattened command text the process was launched with.
    pub fn new(pid: Pid, input: &str) -> Job {
        Job {
            pid,
            input: input.to_string(),
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.pid, self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_pid_then_command_text() {
        let job = Job::new(Pid::from_raw(1234), "echo hi");
        assert_eq!(format!("{}", job), "1234 echo hi");
    }
}
