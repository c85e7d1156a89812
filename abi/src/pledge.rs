//! Promise bits for the pledge sandbox.
//!
//! This module is the single source of truth for the promise bit
//! assignments. The user-visible *names* (and which bits each name
//! grants) live in the kernel's vocabulary table; userland only ever
//! sees the names, so bit values may be reshuffled without an ABI
//! break, but names are forever.

/// A set of promises, one bit per capability class.
pub type Promises = u64;

// =============================================================================
// User-settable promises
// =============================================================================

pub const PLEDGE_RPATH: Promises = 1 << 0;
pub const PLEDGE_WPATH: Promises = 1 << 1;
pub const PLEDGE_CPATH: Promises = 1 << 2;
pub const PLEDGE_STDIO: Promises = 1 << 3;
pub const PLEDGE_TMPPATH: Promises = 1 << 4;
pub const PLEDGE_DNS: Promises = 1 << 5;
pub const PLEDGE_INET: Promises = 1 << 6;
pub const PLEDGE_FLOCK: Promises = 1 << 7;
pub const PLEDGE_UNIX: Promises = 1 << 8;
pub const PLEDGE_ID: Promises = 1 << 9;
pub const PLEDGE_TAPE: Promises = 1 << 10;
pub const PLEDGE_GETPW: Promises = 1 << 11;
pub const PLEDGE_PROC: Promises = 1 << 12;
pub const PLEDGE_SETTIME: Promises = 1 << 13;
pub const PLEDGE_FATTR: Promises = 1 << 14;
pub const PLEDGE_PROTEXEC: Promises = 1 << 15;
pub const PLEDGE_TTY: Promises = 1 << 16;
pub const PLEDGE_SENDFD: Promises = 1 << 17;
pub const PLEDGE_RECVFD: Promises = 1 << 18;
pub const PLEDGE_EXEC: Promises = 1 << 19;
pub const PLEDGE_ROUTE: Promises = 1 << 20;
pub const PLEDGE_MCAST: Promises = 1 << 21;
pub const PLEDGE_VMINFO: Promises = 1 << 22;
pub const PLEDGE_PS: Promises = 1 << 23;
pub const PLEDGE_DISKLABEL: Promises = 1 << 24;
pub const PLEDGE_PF: Promises = 1 << 25;
pub const PLEDGE_AUDIO: Promises = 1 << 26;
pub const PLEDGE_DPATH: Promises = 1 << 27;
pub const PLEDGE_DRM: Promises = 1 << 28;
pub const PLEDGE_VMM: Promises = 1 << 29;
pub const PLEDGE_CHOWN: Promises = 1 << 30;
pub const PLEDGE_CHOWNUID: Promises = 1 << 31;
pub const PLEDGE_BPF: Promises = 1 << 32;

// =============================================================================
// Internal promises, never settable from a request string
// =============================================================================

/// Per-lookup hint: admit the stat but fabricate a bare directory.
pub const PLEDGE_STATLIE: Promises = 1 << 61;

/// Transient network capability granted to "getpw" processes that touch
/// the YP binding machinery. Cleared by the next pledge call.
pub const PLEDGE_YPACTIVE: Promises = 1 << 62;

/// Table marker: this syscall is admitted for every pledged process.
pub const PLEDGE_ALWAYS: Promises = 1 << 63;

/// Every bit a request string may grant.
pub const PLEDGE_USERSET: Promises = PLEDGE_RPATH
    | PLEDGE_WPATH
    | PLEDGE_CPATH
    | PLEDGE_STDIO
    | PLEDGE_TMPPATH
    | PLEDGE_DNS
    | PLEDGE_INET
    | PLEDGE_FLOCK
    | PLEDGE_UNIX
    | PLEDGE_ID
    | PLEDGE_TAPE
    | PLEDGE_GETPW
    | PLEDGE_PROC
    | PLEDGE_SETTIME
    | PLEDGE_FATTR
    | PLEDGE_PROTEXEC
    | PLEDGE_TTY
    | PLEDGE_SENDFD
    | PLEDGE_RECVFD
    | PLEDGE_EXEC
    | PLEDGE_ROUTE
    | PLEDGE_MCAST
    | PLEDGE_VMINFO
    | PLEDGE_PS
    | PLEDGE_DISKLABEL
    | PLEDGE_PF
    | PLEDGE_AUDIO
    | PLEDGE_DPATH
    | PLEDGE_DRM
    | PLEDGE_VMM
    | PLEDGE_CHOWN
    | PLEDGE_CHOWNUID
    | PLEDGE_BPF;

/// Maximum number of entries in the paths argument of pledge(2).
pub const PLEDGE_MAXPATHS: usize = 8192;
