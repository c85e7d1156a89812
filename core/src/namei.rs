//! The path gate, invoked during name lookup.
//!
//! Runs after the path string has been pulled into the kernel and
//! before the filesystem operation proceeds. The exception table below
//! is a closed list; resist the urge to generalize it, because userland
//! depends on exactly these escape hatches and nothing more.

use pledgeos_abi::Errno;
use pledgeos_abi::fs::PATH_MAX;
use pledgeos_abi::pledge::*;
use pledgeos_abi::syscall::*;

use crate::path::{ResolveCache, canonpath, resolvpath};
use crate::process::Process;
use crate::violation::pledge_fail;
use crate::whitepaths::WlMatch;

/// The lookup descriptor handed in by name resolution. Carries the
/// promise bits this specific call site requires (an openat for write
/// carries wpath, a stat carries rpath, ...).
pub struct NameiRequest<'a> {
    pledge: Promises,
    path: &'a [u8],
}

impl<'a> NameiRequest<'a> {
    pub fn new(required: Promises, path: &'a [u8]) -> Self {
        Self {
            pledge: required,
            path,
        }
    }

    /// Did the whitelist check tag this lookup as an ancestor-only
    /// stat? The caller must fabricate a bare directory stat instead of
    /// consulting the filesystem.
    #[inline]
    pub fn statlie(&self) -> bool {
        self.pledge & PLEDGE_STATLIE != 0
    }
}

/// Gate a name lookup against the promise set and the exception table.
///
/// One cannot get through here without the right bits set: every path
/// not covered by an exception must be fully covered by the held
/// promises, and a miss is fatal.
pub fn pledge_namei(p: &Process, ni: &mut NameiRequest<'_>) -> Result<(), Errno> {
    if !p.is_pledged() || p.in_coredump() {
        return Ok(());
    }

    if ni.pledge == 0 {
        panic!("pledge_namei: lookup carries no required bits");
    }

    // Doing a permitted execve()
    if ni.pledge & PLEDGE_EXEC != 0 && p.has_promise(PLEDGE_EXEC) {
        return Ok(());
    }

    let mut buf = [0u8; PATH_MAX];
    let len = canonpath(ni.path, &mut buf)?;
    let path = &buf[..len];

    let pledge = p.promises();

    // Detect what looks like a mkstemp(3) family operation
    if pledge & PLEDGE_TMPPATH != 0
        && p.current_syscall() == SYSCALL_OPEN
        && ni.pledge & PLEDGE_CPATH != 0
        && path.starts_with(b"/tmp/")
    {
        return Ok(());
    }

    // Allow unlinking of a mkstemp(3) file
    if pledge & PLEDGE_TMPPATH != 0
        && p.current_syscall() == SYSCALL_UNLINK
        && path.starts_with(b"/tmp/")
    {
        return Ok(());
    }

    // Whitelisted paths
    match p.current_syscall() {
        SYSCALL_ACCESS => {
            // tzset() needs this.
            if ni.pledge == PLEDGE_RPATH && path == b"/etc/localtime" {
                return Ok(());
            }

            // when avoiding YP mode, getpw* functions touch this
            if ni.pledge == PLEDGE_RPATH && path == b"/var/run/ypbind.lock" {
                if pledge & PLEDGE_GETPW != 0 {
                    return Ok(());
                }
                return Err(pledge_fail(p, Errno::Perm, PLEDGE_GETPW));
            }
        }
        SYSCALL_OPEN => {
            // daemon(3) or other such functions
            if ni.pledge & !(PLEDGE_RPATH | PLEDGE_WPATH) == 0 && path == b"/dev/null" {
                return Ok(());
            }

            // readpassphrase(3), getpass(3)
            if pledge & PLEDGE_TTY != 0
                && ni.pledge & !(PLEDGE_RPATH | PLEDGE_WPATH) == 0
                && path == b"/dev/tty"
            {
                return Ok(());
            }

            // getpw* and friends need a few files
            if ni.pledge == PLEDGE_RPATH && pledge & PLEDGE_GETPW != 0 {
                if path == b"/etc/spwd.db" {
                    // don't kill the process over the shadow database;
                    // userland probes it and falls back
                    return Err(Errno::Perm);
                }
                if path == b"/etc/pwd.db" || path == b"/etc/group" || path == b"/etc/netid" {
                    return Ok(());
                }
            }

            // DNS needs /etc/{resolv.conf,hosts,services}.
            if ni.pledge == PLEDGE_RPATH
                && pledge & PLEDGE_DNS != 0
                && (path == b"/etc/resolv.conf"
                    || path == b"/etc/hosts"
                    || path == b"/etc/services")
            {
                return Ok(());
            }

            if ni.pledge == PLEDGE_RPATH && pledge & PLEDGE_GETPW != 0 {
                if path == b"/var/run/ypbind.lock" {
                    // Touching the YP binder's lock file is the signal
                    // that this getpw process runs in YP mode: grant it
                    // enough networking to consult the binder until the
                    // next pledge call.
                    p.grant_promise(PLEDGE_YPACTIVE);
                    return Ok(());
                }
                if path.starts_with(b"/var/yp/binding/") {
                    return Ok(());
                }
            }

            // tzset() needs these.
            if ni.pledge == PLEDGE_RPATH
                && (path.starts_with(b"/usr/share/zoneinfo/") || path == b"/etc/localtime")
            {
                return Ok(());
            }
        }
        SYSCALL_READLINK => {
            // Allow /etc/malloc.conf for malloc(3).
            if ni.pledge == PLEDGE_RPATH && path == b"/etc/malloc.conf" {
                return Ok(());
            }
        }
        SYSCALL_STAT => {
            // DNS needs /etc/resolv.conf.
            if ni.pledge == PLEDGE_RPATH
                && pledge & PLEDGE_DNS != 0
                && path == b"/etc/resolv.conf"
            {
                return Ok(());
            }
        }
        _ => {}
    }

    // Ensure each required bit has a counterpart in the held promises
    let missing = ni.pledge & !p.promises();
    if missing != 0 {
        return Err(pledge_fail(p, Errno::Perm, missing));
    }

    Ok(())
}

/// Whitelist lookup, done only after name resolution has succeeded on
/// the last component.
///
/// Compares the resolved (chroot-aware) path against the whitelist.
/// Anything not on the whitelist gets ENOENT, with no hint why; a
/// proper ancestor of a whitelisted leaf is admitted for the stat
/// family only, tagged so the caller fabricates a directory stat
/// without leaking siblings.
pub fn pledge_namei_wlpath(p: &Process, ni: &mut NameiRequest<'_>) -> Result<(), Errno> {
    let Some(wl) = p.whitepaths() else {
        return Ok(());
    };

    let mut cache = ResolveCache::new();
    let resolved = resolvpath(p, &mut cache, ni.path)?;

    match wl.check(&resolved) {
        WlMatch::Admit => Ok(()),
        WlMatch::Ancestor => match p.current_syscall() {
            SYSCALL_STAT | SYSCALL_LSTAT | SYSCALL_FSTATAT | SYSCALL_FSTAT => {
                ni.pledge |= PLEDGE_STATLIE;
                Ok(())
            }
            _ => Err(Errno::NoEnt),
        },
        WlMatch::Miss => Err(Errno::NoEnt),
    }
}
