//! The violation handler: the only place in the subsystem with side
//! effects on the process beyond returning an error.

use pledgeos_abi::Errno;
use pledgeos_abi::pledge::Promises;
use pledgeos_abi::signal::SIGABRT;
use pledgeos_lib::{bytes_as_str, klog_error};

use crate::process::Process;
use crate::promise::PLEDGE_NAMES;

/// Report a sandbox violation and terminate the offender.
///
/// Logs one line naming the first promise whose bits intersect the
/// missing set, posts an uncatchable SIGABRT with the default action
/// forced (so the process cores), and clears every promise so teardown
/// syscalls cannot re-trigger. Returns `error` for the caller to
/// surface.
pub fn pledge_fail(p: &Process, error: Errno, code: Promises) -> Errno {
    let mut codes = "";
    if code != 0 {
        for &(name, bits) in PLEDGE_NAMES.iter() {
            if bits & code != 0 {
                codes = name;
                break;
            }
        }
    }
    klog_error!(
        "{}({}): syscall {} \"{}\"",
        bytes_as_str(&p.comm),
        p.pid,
        p.current_syscall(),
        codes
    );

    // Uncatchable SIGABRT for coredump
    p.force_signal(SIGABRT);

    p.store_promises(0);
    error
}
