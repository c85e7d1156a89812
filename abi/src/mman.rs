//! Memory protection and swap control ABI constants.

// =============================================================================
// mmap / mprotect protection bits
// =============================================================================

pub const PROT_NONE: u32 = 0x00;
pub const PROT_READ: u32 = 0x01;
pub const PROT_WRITE: u32 = 0x02;
pub const PROT_EXEC: u32 = 0x04;

// =============================================================================
// swapctl commands
// =============================================================================

pub const SWAP_ON: u32 = 1;
pub const SWAP_OFF: u32 = 2;
/// Read the number of configured swap devices.
pub const SWAP_NSWAP: u32 = 3;
/// Read per-device swap statistics.
pub const SWAP_STATS: u32 = 4;
pub const SWAP_DUMPDEV: u32 = 5;
pub const SWAP_CTL: u32 = 6;
