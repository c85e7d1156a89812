//! Kernel logging subsystem.
//!
//! All kernel log output funnels through a single **backend** function
//! pointer. Before a console driver registers itself, lines are captured
//! into a static ring buffer; the sandbox test suites drain that buffer
//! to assert on violation reports, and early-boot diagnostics survive
//! until the console comes up and replays them.
//!
//! # Backend contract
//!
//! The backend receives the pre-formatted arguments for a **single log
//! line** and is responsible for:
//!
//! 1. Writing the formatted text **atomically** (no interleaving from
//!    other CPUs).
//! 2. Appending a trailing newline after the text.
//!
//! The capture fallback satisfies (1) by holding the buffer lock for the
//! whole line and handles (2) by pushing a `\n` after the text.

use core::fmt;
use core::sync::atomic::{AtomicPtr, AtomicU8, Ordering};

use spin::Mutex;

use crate::ring_buffer::RingBuffer;

// ---------------------------------------------------------------------------
// Log levels
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KlogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl KlogLevel {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => KlogLevel::Error,
            1 => KlogLevel::Warn,
            2 => KlogLevel::Info,
            3 => KlogLevel::Debug,
            _ => KlogLevel::Trace,
        }
    }
}

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(KlogLevel::Info as u8);

#[inline(always)]
fn is_enabled(level: KlogLevel) -> bool {
    level as u8 <= CURRENT_LEVEL.load(Ordering::Relaxed)
}

// ---------------------------------------------------------------------------
// Backend dispatch
// ---------------------------------------------------------------------------

/// Signature of a klog backend.
///
/// The backend must write the formatted text **and** a trailing newline,
/// all under a single lock acquisition (if applicable) so that log lines
/// from different CPUs do not interleave.
pub type KlogBackend = fn(fmt::Arguments<'_>);

/// Stored as a raw pointer; `null` means "use the capture fallback".
static BACKEND: AtomicPtr<()> = AtomicPtr::new(core::ptr::null_mut());

/// Bytes of log text retained before a backend registers.
const CAPTURE_CAPACITY: usize = 4096;

static CAPTURE: Mutex<RingBuffer<u8, CAPTURE_CAPACITY>> =
    Mutex::new(RingBuffer::new_with(0));

fn capture_backend(args: fmt::Arguments<'_>) {
    struct CaptureWriter<'a> {
        buf: &'a mut RingBuffer<u8, CAPTURE_CAPACITY>,
    }

    impl fmt::Write for CaptureWriter<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            for &b in s.as_bytes() {
                self.buf.push_overwrite(b);
            }
            Ok(())
        }
    }

    let mut buf = CAPTURE.lock();
    let _ = fmt::write(&mut CaptureWriter { buf: &mut buf }, args);
    buf.push_overwrite(b'\n');
}

/// Dispatch a log line through the active backend.
///
/// If no backend has been registered yet the line goes to the capture
/// buffer.
#[inline]
fn dispatch(args: fmt::Arguments<'_>) {
    let ptr = BACKEND.load(Ordering::Acquire);
    if ptr.is_null() {
        capture_backend(args);
    } else {
        // SAFETY: `klog_register_backend` only stores valid `KlogBackend`
        // fn pointers, which are the same size as `*mut ()` on all
        // supported targets.
        let backend: KlogBackend = unsafe { core::mem::transmute(ptr) };
        backend(args);
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Register a backend that replaces the capture fallback.
///
/// Typically called once by the console driver during its initialisation.
pub fn klog_register_backend(backend: KlogBackend) {
    BACKEND.store(backend as *mut (), Ordering::Release);
}

/// Initialise klog (sets default level). Called very early in boot.
pub fn klog_init() {
    CURRENT_LEVEL.store(KlogLevel::Info as u8, Ordering::Relaxed);
}

pub fn klog_set_level(level: KlogLevel) {
    CURRENT_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn klog_get_level() -> KlogLevel {
    KlogLevel::from_raw(CURRENT_LEVEL.load(Ordering::Relaxed))
}

pub fn klog_is_enabled(level: KlogLevel) -> bool {
    is_enabled(level)
}

/// Drain captured log bytes into `dst`, oldest first.
///
/// Returns the number of bytes written. Intended for the console driver's
/// replay at registration time and for test suites asserting on log
/// output.
pub fn klog_capture_take(dst: &mut [u8]) -> usize {
    let mut buf = CAPTURE.lock();
    let mut n = 0;
    while n < dst.len() {
        match buf.try_pop() {
            Some(b) => {
                dst[n] = b;
                n += 1;
            }
            None => break,
        }
    }
    n
}

/// Emit a formatted log line at the given level.
///
/// The backend appends a trailing newline — callers should **not** include
/// one in their format string.
pub fn log_args(level: KlogLevel, args: fmt::Arguments<'_>) {
    if !is_enabled(level) {
        return;
    }
    dispatch(args);
}

// ---------------------------------------------------------------------------
// Macros
// ---------------------------------------------------------------------------

#[macro_export]
macro_rules! klog {
    ($level:expr, $($arg:tt)*) => {{
        $crate::klog::log_args($level, ::core::format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! klog_error {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Error, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_warn {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Warn, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_info {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Info, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_debug {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Debug, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_trace {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Trace, ::core::format_args!($($arg)*))
    };
}
