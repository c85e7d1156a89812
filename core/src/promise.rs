//! The promise vocabulary and the request-string parser.
//!
//! The table is the stable user-visible interface: names may be added,
//! never renamed. Several names deliberately grant more than one bit
//! ("chown" also grants chown-uid, "fattr" pulls in plain chown so
//! utimes/chmod callers can also reset ownership to themselves), and
//! "video" is an alias for the display promise.

use pledgeos_abi::Errno;
use pledgeos_abi::pledge::*;

/// Name → bits, sorted by name for binary search.
pub static PLEDGE_NAMES: [(&str, Promises); 33] = [
    ("audio", PLEDGE_AUDIO),
    ("bpf", PLEDGE_BPF),
    ("chown", PLEDGE_CHOWN | PLEDGE_CHOWNUID),
    ("cpath", PLEDGE_CPATH),
    ("disklabel", PLEDGE_DISKLABEL),
    ("dns", PLEDGE_DNS),
    ("dpath", PLEDGE_DPATH),
    ("drm", PLEDGE_DRM),
    ("exec", PLEDGE_EXEC),
    ("fattr", PLEDGE_FATTR | PLEDGE_CHOWN),
    ("flock", PLEDGE_FLOCK),
    ("getpw", PLEDGE_GETPW),
    ("id", PLEDGE_ID),
    ("inet", PLEDGE_INET),
    ("mcast", PLEDGE_MCAST),
    ("pf", PLEDGE_PF),
    ("proc", PLEDGE_PROC),
    ("prot_exec", PLEDGE_PROTEXEC),
    ("ps", PLEDGE_PS),
    ("recvfd", PLEDGE_RECVFD),
    ("route", PLEDGE_ROUTE),
    ("rpath", PLEDGE_RPATH),
    ("sendfd", PLEDGE_SENDFD),
    ("settime", PLEDGE_SETTIME),
    ("stdio", PLEDGE_STDIO),
    ("tape", PLEDGE_TAPE),
    ("tmppath", PLEDGE_TMPPATH),
    ("tty", PLEDGE_TTY),
    ("unix", PLEDGE_UNIX),
    ("video", PLEDGE_DRM),
    ("vminfo", PLEDGE_VMINFO),
    ("vmm", PLEDGE_VMM),
    ("wpath", PLEDGE_WPATH),
];

/// Binary search over the vocabulary. Returns the granted bits, or 0
/// for an unknown name; the callers treat 0 as the error signal.
pub fn pledgereq_flags(req_name: &str) -> Promises {
    let mut base = 0usize;
    let mut lim = PLEDGE_NAMES.len();
    while lim != 0 {
        let i = base + (lim >> 1);
        let (name, flags) = PLEDGE_NAMES[i];
        match req_name.cmp(name) {
            core::cmp::Ordering::Equal => return flags,
            core::cmp::Ordering::Greater => {
                // not found before i, move right
                base = i + 1;
                lim -= 1;
            }
            core::cmp::Ordering::Less => {}
        }
        lim >>= 1;
    }
    0
}

/// Parse a request string into a promise set.
///
/// Tokens are separated by runs of ASCII spaces; leading, trailing and
/// duplicate separators are tolerated, as is the empty string (which
/// grants nothing). Any unknown token fails the whole request.
pub fn parse_promises(request: &[u8]) -> Result<Promises, Errno> {
    let mut flags: Promises = 0;
    for token in request.split(|&b| b == b' ') {
        if token.is_empty() {
            continue;
        }
        let name = core::str::from_utf8(token).map_err(|_| Errno::Inval)?;
        let f = pledgereq_flags(name);
        if f == 0 {
            return Err(Errno::Inval);
        }
        flags |= f;
    }
    Ok(flags)
}
