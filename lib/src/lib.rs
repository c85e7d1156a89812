#![no_std]

pub mod clock;
pub mod klog;
pub mod ring_buffer;
pub mod string;
pub mod testing;

#[cfg(feature = "itests")]
pub mod tests;

#[doc(hidden)]
pub use paste;

pub use klog::{
    KlogLevel, klog_capture_take, klog_get_level, klog_init, klog_is_enabled,
    klog_register_backend, klog_set_level,
};
pub use ring_buffer::RingBuffer;
pub use string::{bytes_as_str, str_into_fixed};
