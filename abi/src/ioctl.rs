//! Ioctl command vocabulary.
//!
//! Commands are packed as `(group << 8) | number`, where the group byte
//! names the owning subsystem. Only the commands the sandbox filter
//! rules on are defined here; drivers define the rest locally with the
//! same encoding.

/// Pack an ioctl command from its group letter and command number.
pub const fn ioc(group: u8, num: u8) -> u64 {
    ((group as u64) << 8) | num as u64
}

// =============================================================================
// Generic file ioctls, always admitted under pledge
// =============================================================================

pub const FIOCLEX: u64 = ioc(b'f', 1);
pub const FIONCLEX: u64 = ioc(b'f', 2);
pub const FIONBIO: u64 = ioc(b'f', 126);
pub const FIONREAD: u64 = ioc(b'f', 127);

// =============================================================================
// Socket ioctls
// =============================================================================

pub const SIOCATMARK: u64 = ioc(b's', 7);
pub const SIOCGIFGROUP: u64 = ioc(b'i', 136);

// Interface inspection ("route" promise)
pub const SIOCGIFADDR: u64 = ioc(b'i', 33);
pub const SIOCGIFDSTADDR_IN6: u64 = ioc(b'i', 34);
pub const SIOCGIFFLAGS: u64 = ioc(b'i', 17);
pub const SIOCGIFGMEMB: u64 = ioc(b'i', 138);
pub const SIOCGIFINFO_IN6: u64 = ioc(b'i', 76);
pub const SIOCGIFMEDIA: u64 = ioc(b'i', 56);
pub const SIOCGIFMETRIC: u64 = ioc(b'i', 23);
pub const SIOCGIFNETMASK_IN6: u64 = ioc(b'i', 37);
pub const SIOCGIFRDOMAIN: u64 = ioc(b'i', 160);
pub const SIOCGIFXFLAGS: u64 = ioc(b'i', 158);
pub const SIOCGNBRINFO_IN6: u64 = ioc(b'i', 78);

// =============================================================================
// Packet filter device ("pf" promise)
// =============================================================================

pub const DIOCADDRULE: u64 = ioc(b'D', 4);
pub const DIOCGETSTATUS: u64 = ioc(b'D', 21);
pub const DIOCNATLOOK: u64 = ioc(b'D', 23);
pub const DIOCRADDTABLES: u64 = ioc(b'D', 61);
pub const DIOCRCLRADDRS: u64 = ioc(b'D', 66);
pub const DIOCRCLRTABLES: u64 = ioc(b'D', 60);
pub const DIOCRCLRTSTATS: u64 = ioc(b'D', 65);
pub const DIOCRGETTSTATS: u64 = ioc(b'D', 64);
pub const DIOCRSETADDRS: u64 = ioc(b'D', 69);
pub const DIOCXBEGIN: u64 = ioc(b'D', 81);
pub const DIOCXCOMMIT: u64 = ioc(b'D', 82);
pub const DIOCKILLSRCNODES: u64 = ioc(b'D', 91);

// =============================================================================
// Capture device ("bpf" promise)
// =============================================================================

pub const BIOCGSTATS: u64 = ioc(b'B', 111);

// =============================================================================
// Tape drives ("tape" promise)
// =============================================================================

pub const MTIOCGET: u64 = ioc(b'm', 2);
pub const MTIOCTOP: u64 = ioc(b'm', 1);

// =============================================================================
// Audio device ("audio" promise)
// =============================================================================

pub const AUDIO_GETPOS: u64 = ioc(b'A', 35);
pub const AUDIO_GETPAR: u64 = ioc(b'A', 36);
pub const AUDIO_SETPAR: u64 = ioc(b'A', 37);
pub const AUDIO_START: u64 = ioc(b'A', 38);
pub const AUDIO_STOP: u64 = ioc(b'A', 39);

// =============================================================================
// Disks ("disklabel" promise)
// =============================================================================

pub const DIOCGDINFO: u64 = ioc(b'd', 101);
pub const DIOCGPDINFO: u64 = ioc(b'd', 114);
pub const DIOCRLDINFO: u64 = ioc(b'd', 113);
pub const DIOCWDINFO: u64 = ioc(b'd', 103);
pub const DIOCMAP: u64 = ioc(b'd', 117);

// Bio (RAID management) commands routed through disk devices
pub const BIOCDISK: u64 = ioc(b'b', 2);
pub const BIOCINQ: u64 = ioc(b'b', 1);
pub const BIOCINSTALLBOOT: u64 = ioc(b'b', 9);
pub const BIOCVOL: u64 = ioc(b'b', 3);

// =============================================================================
// Terminals ("tty" promise)
// =============================================================================

pub const TIOCEXCL: u64 = ioc(b't', 13);
pub const TIOCFLUSH: u64 = ioc(b't', 16);
pub const TIOCGETA: u64 = ioc(b't', 19);
pub const TIOCSETA: u64 = ioc(b't', 20);
pub const TIOCSETAW: u64 = ioc(b't', 21);
pub const TIOCSETAF: u64 = ioc(b't', 22);
pub const TIOCSBRK: u64 = ioc(b't', 123);
pub const TIOCCBRK: u64 = ioc(b't', 122);
pub const TIOCSDTR: u64 = ioc(b't', 121);
pub const TIOCCDTR: u64 = ioc(b't', 120);
pub const TIOCGPGRP: u64 = ioc(b't', 119);
pub const TIOCSPGRP: u64 = ioc(b't', 118);
pub const TIOCSTI: u64 = ioc(b't', 114);
pub const TIOCGWINSZ: u64 = ioc(b't', 104);
pub const TIOCSWINSZ: u64 = ioc(b't', 103);
pub const TIOCEXT: u64 = ioc(b't', 96);
pub const TIOCSCTTY: u64 = ioc(b't', 97);
/// Allocate a pseudo terminal pair from the ptm multiplexer.
pub const PTMGET: u64 = ioc(b't', 40);

// =============================================================================
// Display device ("drm" / "video" promise)
// =============================================================================

pub const DRM_IOCTL_VERSION: u64 = ioc(b'D', 0x00);
pub const DRM_IOCTL_GET_UNIQUE: u64 = ioc(b'D', 0x01);
pub const DRM_IOCTL_GET_MAGIC: u64 = ioc(b'D', 0x02);
pub const DRM_IOCTL_GET_CAP: u64 = ioc(b'D', 0x0c);
pub const DRM_IOCTL_WAIT_VBLANK: u64 = ioc(b'D', 0x3a);

// =============================================================================
// Hypervisor device ("vmm" promise)
// =============================================================================

pub const VMM_IOC_RUN: u64 = ioc(b'V', 1);
pub const VMM_IOC_INTR: u64 = ioc(b'V', 6);
pub const VMM_IOC_READREGS: u64 = ioc(b'V', 7);
pub const VMM_IOC_WRITEREGS: u64 = ioc(b'V', 8);
pub const VMM_IOC_RESETCPU: u64 = ioc(b'V', 5);
