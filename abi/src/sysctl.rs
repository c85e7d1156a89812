//! Sysctl MIB identifiers.
//!
//! A sysctl name is a vector of integers walked top-down; the top level
//! selects the subsystem, the rest are interpreted by it. Only the
//! identifiers the sandbox filter rules on are defined here.

// =============================================================================
// Top level
// =============================================================================

pub const CTL_KERN: i32 = 1;
pub const CTL_VM: i32 = 2;
pub const CTL_FS: i32 = 3;
pub const CTL_NET: i32 = 4;
pub const CTL_HW: i32 = 6;
pub const CTL_MACHDEP: i32 = 7;
pub const CTL_VFS: i32 = 10;

// =============================================================================
// CTL_KERN
// =============================================================================

pub const KERN_OSTYPE: i32 = 1;
pub const KERN_OSRELEASE: i32 = 2;
pub const KERN_OSVERSION: i32 = 3;
pub const KERN_VERSION: i32 = 4;
pub const KERN_ARGMAX: i32 = 8;
pub const KERN_HOSTNAME: i32 = 10;
pub const KERN_CLOCKRATE: i32 = 12;
pub const KERN_NGROUPS: i32 = 18;
pub const KERN_POSIX1: i32 = 19;
pub const KERN_BOOTTIME: i32 = 21;
pub const KERN_DOMAINNAME: i32 = 22;
pub const KERN_RAWPARTITION: i32 = 24;
pub const KERN_MAXPARTITIONS: i32 = 23;
pub const KERN_SYSVSHM: i32 = 31;
pub const KERN_FSCALE: i32 = 46;
pub const KERN_CCPU: i32 = 45;
pub const KERN_CPTIME: i32 = 40;
pub const KERN_CONSDEV: i32 = 47;
pub const KERN_PROC: i32 = 66;
pub const KERN_CPTIME2: i32 = 71;
pub const KERN_PROC_ARGS: i32 = 55;
pub const KERN_PROC_CWD: i32 = 78;

// KERN_PROC_ARGS selectors
pub const KERN_PROC_ARGV: i32 = 1;
pub const KERN_PROC_ENV: i32 = 3;

// =============================================================================
// CTL_VM
// =============================================================================

pub const VM_LOADAVG: i32 = 2;
pub const VM_PSSTRINGS: i32 = 3;
pub const VM_UVMEXP: i32 = 4;
pub const VM_MAXSLP: i32 = 10;

// =============================================================================
// CTL_HW
// =============================================================================

pub const HW_MACHINE: i32 = 1;
pub const HW_NCPU: i32 = 3;
pub const HW_PAGESIZE: i32 = 7;
pub const HW_SENSORS: i32 = 11;
pub const HW_PHYSMEM64: i32 = 19;

// =============================================================================
// CTL_VFS
// =============================================================================

pub const VFS_GENERIC: i32 = 0;
pub const VFS_BCACHESTAT: i32 = 3;

// =============================================================================
// CTL_NET routing sub-MIBs (mib[1] == PF_ROUTE)
// =============================================================================

pub const NET_RT_DUMP: i32 = 1;
pub const NET_RT_FLAGS: i32 = 2;
pub const NET_RT_IFLIST: i32 = 3;
pub const NET_RT_TABLE: i32 = 5;
pub const NET_RT_IFNAMES: i32 = 6;

/// Route entry flag: link-layer neighbour info (exposes MACs).
pub const RTF_LLINFO: i32 = 0x400;
