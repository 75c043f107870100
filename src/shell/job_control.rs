use nix::sys::signal::{self, Signal};
use nix::sys::wait::{self, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;

use core::job::Job;

/// Table of background jobs, in launch order.
///
/// The table owns every `Job` record. A pid appears at most once, and only
/// while the last non-blocking status check reported the process still
/// running; once a check says otherwise the record is removed and the pid is
/// never queried again.
#[derive(Debug, Default)]
pub struct JobManager {
    jobs: Vec<Job>,
}

impl JobManager {
    /// Appends a job for a process that was just launched.
    pub fn add_job(&mut self, pid: Pid, input: &str) {
        debug_assert!(self.jobs.iter().all(|job| job.pid() != pid));
        debug!("tracking background job {} ({})", pid, input);
        self.jobs.push(Job::new(pid, input));
    }

    pub fn has_jobs(&self) -> bool {
        !self.jobs.is_empty()
    }

    /// Tracked jobs in launch order. Callers that want only live jobs must
    /// call `reap_dead` first.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Polls every tracked process without blocking, in table order, and
    /// drops the ones that are gone. Each pid is checked exactly once per
    /// pass.
    pub fn reap_dead(&mut self) {
        self.jobs.retain(|job| {
            let running = process_is_running(job.pid());
            if !running {
                debug!("reaped background job {}", job);
            }
            running
        });
    }

    /// Force-terminates every job that is still running and empties the
    /// table. Called once, when the exit builtin runs.
    pub fn shutdown(&mut self) {
        for job in self.jobs.drain(..) {
            if process_is_running(job.pid()) {
                let temp_result = signal::kill(job.pid(), Signal::SIGKILL);
                log_if_err!(temp_result, "failed to kill background job {}", job);
            }
        }
    }
}

/// Non-blocking status check. An error (no such process, or its status was
/// already collected) is indistinguishable from an exit for our purposes and
/// is treated the same way.
fn process_is_running(pid: Pid) -> bool {
    match wait::waitpid(pid, Some(WaitPidFlag::WNOHANG)) {
        Ok(WaitStatus::StillAlive) => true,
        Ok(status) => {
            debug!("process {} is gone: {:?}", pid, status);
            false
        }
        Err(err) => {
            debug!("waitpid({}) failed, treating as exited: {}", pid, err);
            false
        }
    }
}
