//! Errno values surfaced by the sandbox subsystem.
//!
//! The numeric values follow the traditional BSD assignments so that
//! userland errno tables and strerror() keep working unchanged.

/// Error numbers returned by sandbox gates and the pledge syscall.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Errno {
    /// Operation not permitted.
    Perm = 1,
    /// No such file or directory.
    NoEnt = 2,
    /// No such process.
    Srch = 3,
    /// Argument list too long.
    TooBig = 7,
    /// Bad address.
    Fault = 14,
    /// Permission denied.
    Access = 13,
    /// Inappropriate ioctl for device.
    NoTty = 25,
    /// Invalid argument.
    Inval = 22,
    /// File name too long.
    NameTooLong = 63,
    /// Function not implemented.
    NoSys = 78,
}

impl Errno {
    /// The raw errno value.
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Negated-errno encoding used in syscall return registers.
    #[inline]
    pub const fn as_neg_u64(self) -> u64 {
        (-(self as i64)) as u64
    }
}
