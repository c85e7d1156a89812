//! Lexical canonicalization and chroot-aware path resolution.

use alloc::vec::Vec;

use pledgeos_abi::Errno;
use pledgeos_abi::fs::PATH_MAX;

use crate::process::Process;
use crate::vfs;

/// Lexically canonicalize `input` into `buf`, returning the output
/// length (a NUL is placed after it).
///
/// Every `//` collapses, `/./` disappears, and `/x/..` is removed by
/// scanning back to the previous `/`. Relative paths cannot be
/// canonicalized and are copied unchanged; the caller is responsible
/// for prepending the working directory first.
pub fn canonpath(input: &[u8], buf: &mut [u8]) -> Result<usize, Errno> {
    if input.first() != Some(&b'/') {
        if input.len() >= buf.len() {
            return Err(Errno::NameTooLong);
        }
        buf[..input.len()].copy_from_slice(input);
        buf[input.len()] = 0;
        return Ok(input.len());
    }

    let len = input.len();
    let mut p = 0;
    let mut q = 0;
    while p < len && q < buf.len() {
        if input[p] == b'/' && (p + 1 == len || input[p + 1] == b'/') {
            p += 1;
        } else if input[p] == b'/'
            && input[p + 1] == b'.'
            && (p + 2 == len || input[p + 2] == b'/')
        {
            p += 2;
        } else if input[p] == b'/'
            && input[p + 1] == b'.'
            && input[p + 2] == b'.'
            && (p + 3 == len || input[p + 3] == b'/')
        {
            p += 3;
            // "/../" at the start of the buffer has no component to eat
            while q > 0 {
                q -= 1;
                if buf[q] == b'/' {
                    break;
                }
            }
        } else {
            buf[q] = input[p];
            q += 1;
            p += 1;
        }
    }

    if p < len {
        return Err(Errno::NameTooLong);
    }
    if q == 0 {
        // Everything cancelled: the canonical form of "/", "/.", "/.."
        // and friends is the root itself.
        if buf.is_empty() {
            return Err(Errno::NameTooLong);
        }
        buf[0] = b'/';
        q = 1;
    }
    if q >= buf.len() {
        return Err(Errno::NameTooLong);
    }
    buf[q] = 0;
    Ok(q)
}

/// Three-way substring relation between two canonical paths.
///
/// Returns 1 when `p1` is a prefix of (or equal to) `p2`, 2 when `p2`
/// is a proper prefix of `p1`, and 0 otherwise. Prefix here is plain
/// byte prefix; the callers apply the component-boundary checks.
pub fn substrcmp(p1: &[u8], p2: &[u8]) -> u32 {
    let mut i = 0;
    while i < p1.len() && i < p2.len() {
        if p1[i] != p2[i] {
            return 0;
        }
        i += 1;
    }
    if i == p1.len() {
        1
    } else if i == p2.len() {
        2
    } else {
        0
    }
}

/// Per-call cache for `resolvpath`: the working directory and chroot
/// root may both be expensive to materialize, and one pledge(2) call
/// resolves up to thousands of paths against the same pair.
pub struct ResolveCache {
    cwd: Option<Vec<u8>>,
    rdir: Option<Option<Vec<u8>>>,
}

impl ResolveCache {
    pub const fn new() -> Self {
        Self {
            cwd: None,
            rdir: None,
        }
    }

    fn cwd(&mut self, p: &Process) -> Result<&[u8], Errno> {
        if self.cwd.is_none() {
            let mut buf = [0u8; PATH_MAX];
            let len = vfs::getcwd(p, &mut buf)?;
            self.cwd = Some(Vec::from(&buf[..len]));
        }
        Ok(self.cwd.as_deref().unwrap_or(b"/"))
    }

    fn rdir(&mut self, p: &Process) -> Result<Option<&[u8]>, Errno> {
        if self.rdir.is_none() {
            let mut buf = [0u8; PATH_MAX];
            self.rdir = Some(match vfs::getroot(p, &mut buf)? {
                Some(len) => Some(Vec::from(&buf[..len])),
                None => None,
            });
        }
        Ok(self.rdir.as_ref().and_then(|r| r.as_deref()))
    }
}

impl Default for ResolveCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a user-supplied path to the canonical absolute path the
/// kernel sees from outside any chroot.
///
/// 1. Relative paths are prefixed with the working directory.
/// 2. The result is lexically canonicalized and reduced to exact length.
/// 3. If the process is chrooted, the root's externally-visible path is
///    prepended (no separator; the canonical path is already absolute).
pub fn resolvpath(
    p: &Process,
    cache: &mut ResolveCache,
    path: &[u8],
) -> Result<Vec<u8>, Errno> {
    let mut abspath: Vec<u8>;
    if path.first() != Some(&b'/') {
        let cwd = cache.cwd(p)?;
        abspath = Vec::with_capacity(cwd.len() + 1 + path.len());
        abspath.extend_from_slice(cwd);
        abspath.push(b'/');
        abspath.extend_from_slice(path);
    } else {
        abspath = Vec::from(path);
    }

    let mut canobuf = [0u8; PATH_MAX];
    let canolen = canonpath(&abspath, &mut canobuf)?;
    if canolen + 1 > PATH_MAX {
        return Err(Errno::NameTooLong);
    }

    let mut fullpath: Vec<u8>;
    match cache.rdir(p)? {
        Some(rdir) => {
            fullpath = Vec::with_capacity(rdir.len() + canolen);
            fullpath.extend_from_slice(rdir);
            fullpath.extend_from_slice(&canobuf[..canolen]);
        }
        None => {
            fullpath = Vec::from(&canobuf[..canolen]);
        }
    }
    Ok(fullpath)
}
