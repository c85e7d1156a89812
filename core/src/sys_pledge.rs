//! The pledge(2) syscall.

use alloc::sync::Arc;
use alloc::vec::Vec;

use pledgeos_abi::Errno;
use pledgeos_abi::fs::PATH_MAX;
use pledgeos_abi::pledge::PLEDGE_MAXPATHS;
use pledgeos_abi::syscall::ARG_MAX;
use pledgeos_lib::{bytes_as_str, klog_debug};

use crate::path::{ResolveCache, resolvpath};
use crate::process::{Process, ProcessFlags};
use crate::promise::parse_promises;
use crate::whitepaths::Whitepaths;

/// Declare the process's reduced capability set.
///
/// `request` is the space-separated promise string, `paths` the
/// NUL-free whitelist entries; at least one must be present. The
/// arguments are consumed atomically: nothing about the process changes
/// unless every check passes.
pub fn sys_pledge(
    p: &Process,
    request: Option<&[u8]>,
    paths: Option<&[&[u8]]>,
) -> Result<(), Errno> {
    if request.is_none() && paths.is_none() {
        return Err(Errno::Inval);
    }

    let mut flags = 0;
    if let Some(req) = request {
        if req.len() >= PATH_MAX {
            return Err(Errno::NameTooLong);
        }
        flags = parse_promises(req)?;

        // If we are already pledged, allow only promise reductions.
        // flags contains no bits outside the user-set vocabulary; the
        // internal bits are relearned.
        if p.is_pledged() && (flags | p.promises()) != p.promises() {
            return Err(Errno::Perm);
        }
    }

    if let Some(list) = paths {
        if p.has_whitepaths() {
            return Err(Errno::Perm);
        }
        if list.len() > PLEDGE_MAXPATHS {
            return Err(Errno::TooBig);
        }

        let mut cache = ResolveCache::new();
        let mut resolved_list: Vec<Vec<u8>> = Vec::with_capacity(list.len());
        let mut maxargs = 0usize;
        for path in list {
            if path.len() >= PATH_MAX {
                return Err(Errno::NameTooLong);
            }
            let resolved = resolvpath(p, &mut cache, path)?;
            maxargs += resolved.len() + 1;
            if maxargs > ARG_MAX {
                return Err(Errno::TooBig);
            }
            resolved_list.push(resolved);
        }

        let wl = Arc::new(Whitepaths::new(resolved_list));
        klog_debug!(
            "pledge: {}({}): {} paths loaded",
            bytes_as_str(&p.comm),
            p.pid,
            wl.count()
        );
        if !p.install_whitepaths(wl) {
            return Err(Errno::Perm);
        }
    }

    if request.is_some() {
        p.store_promises(flags);
        p.set_flags(ProcessFlags::PLEDGED);
    }

    Ok(())
}

/// Process-exit hook: release this process's whitepath reference. The
/// list storage goes away with the last holder.
pub fn pledge_exit(p: &Process) {
    p.drop_whitepaths();
}
