//! VFS services the sandbox consumes.
//!
//! Materializing the working directory or the chroot root as a path is
//! the name-cache's business, and it can be expensive; the sandbox only
//! declares the shape of the operation here and the VFS registers the
//! real implementation at boot. The default view reads the path forms
//! cached on the process record, which is also what the test suites
//! drive.

use spin::Once;

use pledgeos_abi::Errno;
use pledgeos_abi::fs::PATH_MAX;

use crate::process::Process;

/// Resolution services registered by the VFS.
pub struct FsView {
    /// Write the process's working directory into `buf`, returning the
    /// length. The result is an absolute path inside any chroot.
    pub getcwd: fn(&Process, &mut [u8]) -> Result<usize, Errno>,
    /// Write the chroot root's externally-visible path into `buf`.
    /// Returns `Ok(None)` when the process is not chrooted.
    pub getroot: fn(&Process, &mut [u8]) -> Result<Option<usize>, Errno>,
}

static FS_VIEW: Once<FsView> = Once::new();

/// Register the VFS resolution services. First registration wins.
pub fn register_fs_view(view: FsView) {
    FS_VIEW.call_once(|| view);
}

fn default_getcwd(p: &Process, buf: &mut [u8]) -> Result<usize, Errno> {
    let cwd = p.cwd.lock();
    if cwd.len() > buf.len() || cwd.len() >= PATH_MAX {
        return Err(Errno::NameTooLong);
    }
    buf[..cwd.len()].copy_from_slice(&cwd);
    Ok(cwd.len())
}

fn default_getroot(p: &Process, buf: &mut [u8]) -> Result<Option<usize>, Errno> {
    let rdir = p.rdir.lock();
    let Some(root) = rdir.as_ref() else {
        return Ok(None);
    };
    if root.len() > buf.len() || root.len() >= PATH_MAX {
        return Err(Errno::NameTooLong);
    }
    buf[..root.len()].copy_from_slice(root);
    Ok(Some(root.len()))
}

pub(crate) fn getcwd(p: &Process, buf: &mut [u8]) -> Result<usize, Errno> {
    match FS_VIEW.get() {
        Some(view) => (view.getcwd)(p, buf),
        None => default_getcwd(p, buf),
    }
}

pub(crate) fn getroot(p: &Process, buf: &mut [u8]) -> Result<Option<usize>, Errno> {
    match FS_VIEW.get() {
        Some(view) => (view.getroot)(p, buf),
        None => default_getroot(p, buf),
    }
}
