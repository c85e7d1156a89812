//! The small specialized gates: fd passing, ownership changes, clock
//! adjustment, addressed sends, fcntl, kill, executable mappings,
//! socket domains, flock and swapctl.

use pledgeos_abi::Errno;
use pledgeos_abi::fs::F_SETOWN;
use pledgeos_abi::mman::{PROT_EXEC, SWAP_NSWAP, SWAP_STATS};
use pledgeos_abi::net::{AF_INET, AF_INET6, AF_UNIX};
use pledgeos_abi::pledge::*;

use crate::file::{FdKind, File, VType};
use crate::process::Process;
use crate::violation::pledge_fail;

/// Only allow reception of safe file descriptors.
///
/// Sockets and pipes pass freely; vnodes pass unless they are
/// directories, which would make handy rogue openat roots.
pub fn pledge_recvfd(p: &Process, fp: &File) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }
    if !p.has_promise(PLEDGE_RECVFD) {
        return Err(pledge_fail(p, Errno::Perm, PLEDGE_RECVFD));
    }

    match &fp.kind {
        FdKind::Socket | FdKind::Pipe => return Ok(()),
        FdKind::Vnode(v) => {
            if v.vtype != VType::Dir {
                return Ok(());
            }
        }
    }
    Err(pledge_fail(p, Errno::Inval, PLEDGE_RECVFD))
}

/// Only allow sending of safe file descriptors.
pub fn pledge_sendfd(p: &Process, fp: &File) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }
    if !p.has_promise(PLEDGE_SENDFD) {
        return Err(pledge_fail(p, Errno::Perm, PLEDGE_SENDFD));
    }

    match &fp.kind {
        FdKind::Socket | FdKind::Pipe => return Ok(()),
        FdKind::Vnode(v) => {
            if v.vtype != VType::Dir {
                return Ok(());
            }
        }
    }
    Err(pledge_fail(p, Errno::Inval, PLEDGE_SENDFD))
}

/// Without chown-uid, ownership may only be "changed" to what the
/// caller already is: its own uid, and a gid it belongs to. Never
/// fatal, since userland chown wrappers probe.
pub fn pledge_chown(p: &Process, uid: Option<u32>, gid: Option<u32>) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }

    if p.has_promise(PLEDGE_CHOWNUID) {
        return Ok(());
    }

    if let Some(uid) = uid {
        if uid != p.cred.uid {
            return Err(Errno::Perm);
        }
    }
    if let Some(gid) = gid {
        if !p.cred.groupmember(gid) {
            return Err(Errno::Perm);
        }
    }
    Ok(())
}

/// The read-only form of adjtime (null delta) is always admitted;
/// actually slewing the clock requires "settime".
pub fn pledge_adjtime(p: &Process, delta_present: bool) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }

    if p.has_promise(PLEDGE_SETTIME) {
        return Ok(());
    }
    if delta_present {
        return Err(Errno::Perm);
    }
    Ok(())
}

/// sendto/sendmsg with a destination address requires a networking
/// promise; without an address they behave just like write.
pub fn pledge_sendit(p: &Process, addressed: bool) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }

    if p.has_promise(PLEDGE_INET | PLEDGE_UNIX | PLEDGE_DNS | PLEDGE_YPACTIVE) {
        return Ok(()); // may use address
    }
    if !addressed {
        return Ok(()); // behaves just like write
    }
    Err(pledge_fail(p, Errno::Perm, PLEDGE_INET))
}

/// F_SETOWN redirects SIGIO, which is a process-control operation.
pub fn pledge_fcntl(p: &Process, cmd: u32) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }
    if !p.has_promise(PLEDGE_PROC) && cmd == F_SETOWN {
        return Err(pledge_fail(p, Errno::Perm, PLEDGE_PROC));
    }
    Ok(())
}

/// Can kill self (and the "signal own process group" form) with stdio;
/// any other target requires "proc".
pub fn pledge_kill(p: &Process, pid: u32) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }
    if p.has_promise(PLEDGE_PROC) {
        return Ok(());
    }
    if pid == 0 || pid == p.pid {
        return Ok(());
    }
    Err(pledge_fail(p, Errno::Perm, PLEDGE_PROC))
}

/// Mapping memory executable requires "prot_exec".
pub fn pledge_protexec(p: &Process, prot: u32) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }
    if !p.has_promise(PLEDGE_PROTEXEC) && prot & PROT_EXEC != 0 {
        return Err(pledge_fail(p, Errno::Perm, PLEDGE_PROTEXEC));
    }
    Ok(())
}

/// Domain check at socket creation and accept.
///
/// A socket flagged for resolver use bypasses the domain check but
/// requires "dns". Domain -1 is the accept path (any domain).
pub fn pledge_socket(p: &Process, domain: i32, dns_socket: bool) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }

    if dns_socket {
        if p.has_promise(PLEDGE_DNS) {
            return Ok(());
        }
        return Err(pledge_fail(p, Errno::Perm, PLEDGE_DNS));
    }

    match domain {
        -1 => Ok(()), // accept on any domain
        d if d == AF_INET || d == AF_INET6 => {
            if p.has_promise(PLEDGE_INET) || p.has_promise(PLEDGE_YPACTIVE) {
                return Ok(());
            }
            Err(pledge_fail(p, Errno::Perm, PLEDGE_INET))
        }
        d if d == AF_UNIX => {
            if p.has_promise(PLEDGE_UNIX) {
                return Ok(());
            }
            Err(pledge_fail(p, Errno::Perm, PLEDGE_UNIX))
        }
        _ => Err(pledge_fail(p, Errno::Inval, PLEDGE_INET)),
    }
}

pub fn pledge_flock(p: &Process) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }
    if p.has_promise(PLEDGE_FLOCK) {
        return Ok(());
    }
    Err(pledge_fail(p, Errno::Perm, PLEDGE_FLOCK))
}

/// Swap inspection is covered by "vminfo"; reconfiguring swap never is.
pub fn pledge_swapctl(p: &Process, cmd: u32) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }
    if p.has_promise(PLEDGE_VMINFO) && (cmd == SWAP_NSWAP || cmd == SWAP_STATS) {
        return Ok(());
    }
    Err(Errno::Perm)
}
