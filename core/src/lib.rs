#![no_std]

extern crate alloc;

pub mod file;
pub mod gates;
pub mod ioctl;
pub mod namei;
pub mod path;
pub mod process;
pub mod promise;
pub mod sockopt;
pub mod sys_pledge;
pub mod syscall_gate;
pub mod sysctl;
pub mod vfs;
pub mod violation;
pub mod whitepaths;

#[cfg(feature = "itests")]
pub mod filter_tests;
#[cfg(feature = "itests")]
pub mod path_tests;

pub use file::{DeviceClass, FdKind, File, VType, Vnode};
pub use namei::{NameiRequest, pledge_namei, pledge_namei_wlpath};
pub use process::{Process, ProcessFlags, Ucred};
pub use sys_pledge::{pledge_exit, sys_pledge};
pub use syscall_gate::{GateDenied, pledge_syscall, pledge_syscall_check};
pub use violation::pledge_fail;
pub use whitepaths::Whitepaths;
