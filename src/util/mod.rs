use std::io;
use std::os::unix::prelude::*;

use nix::unistd;

pub fn get_terminal() -> RawFd {
    io::stdin().as_raw_fd()
}

/// `true` when standard input is connected to a terminal.
pub fn isatty() -> bool {
    let temp_result = unistd::isatty(get_terminal());
    log_if_err!(temp_result, "unistd::isatty");
    temp_result.unwrap_or(false)
}
