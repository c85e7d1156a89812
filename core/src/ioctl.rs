//! The ioctl filter.
//!
//! Three-level decision: held promises, then the shape of the file
//! descriptor, then the identity of the device behind it. Device
//! identity comes from the `DeviceClass` tag stamped at open time, so
//! a promise never admits a command on a look-alike major number.

use pledgeos_abi::Errno;
use pledgeos_abi::ioctl::*;
use pledgeos_abi::pledge::*;

use crate::file::{DeviceClass, File, VType};
use crate::process::Process;
use crate::violation::pledge_fail;

/// Display-device commands admitted under "drm"/"video".
fn pledge_ioctl_drm(com: u64) -> Result<(), Errno> {
    match com {
        DRM_IOCTL_VERSION | DRM_IOCTL_GET_UNIQUE | DRM_IOCTL_GET_MAGIC | DRM_IOCTL_GET_CAP
        | DRM_IOCTL_WAIT_VBLANK => Ok(()),
        _ => Err(Errno::Perm),
    }
}

/// Hypervisor commands admitted under "vmm".
fn pledge_ioctl_vmm(com: u64) -> Result<(), Errno> {
    match com {
        VMM_IOC_RUN | VMM_IOC_INTR | VMM_IOC_READREGS | VMM_IOC_WRITEREGS | VMM_IOC_RESETCPU => {
            Ok(())
        }
        _ => Err(Errno::Perm),
    }
}

pub fn pledge_ioctl(p: &Process, com: u64, fp: &File) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }

    // The ioctl's which are always allowed.
    match com {
        FIONREAD | FIONBIO | FIOCLEX | FIONCLEX => return Ok(()),
        _ => {}
    }

    let vp = fp.vnode_ref();
    if let Some(v) = vp {
        if v.vtype == VType::Bad {
            return Err(Errno::NoTty);
        }
    }

    let pledge = p.promises();
    let mut error = Errno::Perm;

    if pledge & PLEDGE_INET != 0 {
        match com {
            SIOCATMARK | SIOCGIFGROUP if fp.is_socket() => return Ok(()),
            _ => {}
        }
    }

    if pledge & PLEDGE_BPF != 0 {
        // bpf: tcpdump privsep on ^C
        if com == BIOCGSTATS {
            if let Some(v) = vp {
                if v.vtype == VType::Chr && v.dev == Some(DeviceClass::Bpf) {
                    return Ok(());
                }
            }
        }
    }

    if pledge & PLEDGE_TAPE != 0 {
        match com {
            // for pax(1) and such, checking tapes...
            MTIOCGET | MTIOCTOP => {
                if let Some(v) = vp {
                    if v.vtype == VType::Chr {
                        if v.is_tty {
                            return Err(Errno::NoTty);
                        }
                        return Ok(());
                    }
                }
            }
            _ => {}
        }
    }

    if pledge & PLEDGE_DRM != 0 {
        if let Some(v) = vp {
            if v.vtype == VType::Chr && v.dev == Some(DeviceClass::Drm) {
                match pledge_ioctl_drm(com) {
                    Ok(()) => return Ok(()),
                    Err(e) => error = e,
                }
            }
        }
    }

    if pledge & PLEDGE_AUDIO != 0 {
        match com {
            AUDIO_GETPOS | AUDIO_GETPAR | AUDIO_SETPAR | AUDIO_START | AUDIO_STOP => {
                if let Some(v) = vp {
                    if v.vtype == VType::Chr && v.dev == Some(DeviceClass::Audio) {
                        return Ok(());
                    }
                }
            }
            _ => {}
        }
    }

    if pledge & PLEDGE_DISKLABEL != 0 {
        match com {
            DIOCGDINFO | DIOCGPDINFO | DIOCRLDINFO | DIOCWDINFO | BIOCDISK | BIOCINQ
            | BIOCINSTALLBOOT | BIOCVOL => {
                if let Some(v) = vp {
                    if (v.vtype == VType::Chr || v.vtype == VType::Blk)
                        && v.dev == Some(DeviceClass::Disk)
                    {
                        return Ok(());
                    }
                }
            }
            DIOCMAP => {
                if let Some(v) = vp {
                    if v.vtype == VType::Chr && v.dev == Some(DeviceClass::DiskMap) {
                        return Ok(());
                    }
                }
            }
            _ => {}
        }
    }

    if pledge & PLEDGE_PF != 0 {
        match com {
            DIOCADDRULE | DIOCGETSTATUS | DIOCNATLOOK | DIOCRADDTABLES | DIOCRCLRADDRS
            | DIOCRCLRTABLES | DIOCRCLRTSTATS | DIOCRGETTSTATS | DIOCRSETADDRS | DIOCXBEGIN
            | DIOCXCOMMIT | DIOCKILLSRCNODES => {
                if let Some(v) = vp {
                    if v.vtype == VType::Chr && v.dev == Some(DeviceClass::Pf) {
                        return Ok(());
                    }
                }
            }
            _ => {}
        }
    }

    if pledge & PLEDGE_TTY != 0 {
        match com {
            PTMGET => {
                // Allocating a pty implies opening both ends by path.
                if pledge & PLEDGE_RPATH != 0 && pledge & PLEDGE_WPATH != 0 {
                    if let Some(v) = vp {
                        if v.vtype == VType::Chr && v.dev == Some(DeviceClass::Ptm) {
                            return Ok(());
                        }
                    }
                }
            }
            // ksh? csh?
            TIOCSTI => {
                if pledge & PLEDGE_PROC != 0 {
                    if let Some(v) = vp {
                        if v.is_tty {
                            return Ok(());
                        }
                    }
                }
            }
            // Group inspection is free on a tty; setting the group
            // additionally requires "proc".
            TIOCSPGRP | TIOCFLUSH | TIOCGPGRP | TIOCGETA | TIOCGWINSZ => {
                if com == TIOCSPGRP && pledge & PLEDGE_PROC == 0 {
                    // fall through to the final denial
                } else {
                    if let Some(v) = vp {
                        if v.is_tty {
                            return Ok(());
                        }
                    }
                    // ENOTTY return for non-tty
                    return Err(Errno::NoTty);
                }
            }
            TIOCSWINSZ | TIOCEXT | TIOCCBRK | TIOCSBRK | TIOCCDTR | TIOCSDTR | TIOCEXCL
            | TIOCSETA | TIOCSETAW | TIOCSETAF | TIOCSCTTY => {
                if let Some(v) = vp {
                    if v.is_tty {
                        return Ok(());
                    }
                }
            }
            _ => {}
        }
    }

    if pledge & PLEDGE_ROUTE != 0 {
        match com {
            SIOCGIFADDR | SIOCGIFFLAGS | SIOCGIFMETRIC | SIOCGIFGMEMB | SIOCGIFRDOMAIN
            | SIOCGIFDSTADDR_IN6 | SIOCGIFNETMASK_IN6 | SIOCGIFXFLAGS | SIOCGNBRINFO_IN6
            | SIOCGIFINFO_IN6 | SIOCGIFMEDIA => {
                if fp.is_socket() {
                    return Ok(());
                }
            }
            _ => {}
        }
    }

    if pledge & PLEDGE_VMM != 0 {
        if let Some(v) = vp {
            if v.vtype == VType::Chr && v.dev == Some(DeviceClass::Vmm) {
                match pledge_ioctl_vmm(com) {
                    Ok(()) => return Ok(()),
                    Err(e) => error = e,
                }
            }
        }
    }

    Err(pledge_fail(p, error, PLEDGE_TTY))
}
