//! Filesystem ABI constants shared between kernel and userland.

/// Maximum length of any path handed to the kernel, NUL included.
pub const PATH_MAX: usize = 1024;

/// Maximum length of a process name recorded for diagnostics.
pub const COMM_MAX_LEN: usize = 24;

// =============================================================================
// fcntl commands
// =============================================================================

pub const F_DUPFD: u32 = 0;
pub const F_GETFD: u32 = 1;
pub const F_SETFD: u32 = 2;
pub const F_GETFL: u32 = 3;
pub const F_SETFL: u32 = 4;
pub const F_GETOWN: u32 = 5;
pub const F_SETOWN: u32 = 6;
pub const F_GETLK: u32 = 7;
pub const F_SETLK: u32 = 8;
pub const F_SETLKW: u32 = 9;
pub const F_DUPFD_CLOEXEC: u32 = 10;
