//! The slice of the process record the sandbox reads and writes.
//!
//! A real process carries far more than this; everything here is the
//! cross-section the pledge subsystem touches: the promise word, the
//! pledged/coredump flags, the syscall number being dispatched, the
//! whitepath list, credentials for the chown gate, and just enough
//! signal state for the violation handler to deliver an uncatchable
//! SIGABRT. Fields the sandbox never reads (address space, fd table,
//! scheduler linkage) are owned by their own subsystems.

use core::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use alloc::sync::Arc;
use alloc::vec::Vec;
use bitflags::bitflags;
use spin::Mutex;

use pledgeos_abi::fs::COMM_MAX_LEN;
use pledgeos_abi::pledge::Promises;
use pledgeos_abi::signal::{NSIG, SIG_DFL, SIG_EMPTY, SigSet, sig_bit};
use pledgeos_lib::str_into_fixed;

use crate::whitepaths::Whitepaths;

/// Maximum number of supplementary groups in a credential.
pub const NGROUPS_MAX: usize = 16;

bitflags! {
    /// Process-wide state bits consulted by every gate.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct ProcessFlags: u32 {
        /// pledge(2) has been called successfully at least once.
        const PLEDGED = 1 << 0;
        /// The process is writing a core file; gates stand down.
        const COREDUMP = 1 << 1;
    }
}

/// Process credential cross-section: effective uid/gid plus the
/// supplementary group vector, as consulted by the chown gate.
#[derive(Clone, Copy)]
pub struct Ucred {
    pub uid: u32,
    pub gid: u32,
    groups: [u32; NGROUPS_MAX],
    ngroups: usize,
}

impl Ucred {
    pub const fn new(uid: u32, gid: u32) -> Self {
        Self {
            uid,
            gid,
            groups: [0; NGROUPS_MAX],
            ngroups: 0,
        }
    }

    pub fn with_groups(uid: u32, gid: u32, groups: &[u32]) -> Self {
        let mut cred = Self::new(uid, gid);
        let n = groups.len().min(NGROUPS_MAX);
        cred.groups[..n].copy_from_slice(&groups[..n]);
        cred.ngroups = n;
        cred
    }

    /// Is `gid` the credential's gid or among its supplementary groups?
    pub fn groupmember(&self, gid: u32) -> bool {
        if gid == self.gid {
            return true;
        }
        self.groups[..self.ngroups].contains(&gid)
    }
}

/// Per-signal disposition, reduced to what the violation handler needs
/// to force a default action.
#[derive(Copy, Clone)]
pub struct SignalAction {
    /// Handler address: SIG_DFL (0), SIG_IGN (1), or a user function pointer.
    pub handler: u64,
    /// Signal mask to OR into the blocked set while the handler runs.
    pub mask: SigSet,
    /// SA_* flags.
    pub flags: u64,
}

impl SignalAction {
    pub const fn default() -> Self {
        Self {
            handler: SIG_DFL,
            mask: SIG_EMPTY,
            flags: 0,
        }
    }
}

/// The process record cross-section.
pub struct Process {
    pub pid: u32,
    pub comm: [u8; COMM_MAX_LEN],
    pub cred: Ucred,
    /// Current working directory, reduced to its path form. A real VFS
    /// hands the sandbox a directory handle; the registered fs-view hook
    /// materializes the path from here.
    pub cwd: Mutex<Vec<u8>>,
    /// Chroot root as seen from outside the chroot, or None when the
    /// process is not chrooted.
    pub rdir: Mutex<Option<Vec<u8>>>,
    flags: AtomicU32,
    pledge: AtomicU64,
    pledge_syscall: AtomicU64,
    pledgepaths: Mutex<Option<Arc<Whitepaths>>>,
    signal_pending: AtomicU64,
    signal_actions: Mutex<[SignalAction; NSIG]>,
}

impl Process {
    pub fn new(pid: u32, comm: &str, cred: Ucred) -> Self {
        Self {
            pid,
            comm: str_into_fixed(comm),
            cred,
            cwd: Mutex::new(Vec::from(&b"/"[..])),
            rdir: Mutex::new(None),
            flags: AtomicU32::new(0),
            pledge: AtomicU64::new(0),
            pledge_syscall: AtomicU64::new(0),
            pledgepaths: Mutex::new(None),
            signal_pending: AtomicU64::new(0),
            signal_actions: Mutex::new([SignalAction::default(); NSIG]),
        }
    }

    // =========================================================================
    // Flags
    // =========================================================================

    #[inline]
    pub fn flags(&self) -> ProcessFlags {
        ProcessFlags::from_bits_truncate(self.flags.load(Ordering::Acquire))
    }

    #[inline]
    pub(crate) fn set_flags(&self, set: ProcessFlags) {
        self.flags.fetch_or(set.bits(), Ordering::AcqRel);
    }

    #[inline]
    pub fn is_pledged(&self) -> bool {
        self.flags().contains(ProcessFlags::PLEDGED)
    }

    #[inline]
    pub fn in_coredump(&self) -> bool {
        self.flags().contains(ProcessFlags::COREDUMP)
    }

    /// Mark the process as dumping core; the path gate stands down for
    /// the duration.
    pub fn enter_coredump(&self) {
        self.set_flags(ProcessFlags::COREDUMP);
    }

    // =========================================================================
    // Promises
    // =========================================================================

    /// The current promise bits. Meaningful only when `is_pledged()`.
    #[inline]
    pub fn promises(&self) -> Promises {
        self.pledge.load(Ordering::Acquire)
    }

    /// Does the process hold any of `bits`?
    #[inline]
    pub fn has_promise(&self, bits: Promises) -> bool {
        self.promises() & bits != 0
    }

    /// Replace the promise word. All stores are monotone shrinks or the
    /// violation handler's terminal clear, so concurrent readers never
    /// observe spuriously added bits.
    #[inline]
    pub(crate) fn store_promises(&self, bits: Promises) {
        self.pledge.store(bits, Ordering::Release);
    }

    /// Internally grant bits outside the user-set vocabulary (YPACTIVE).
    #[inline]
    pub(crate) fn grant_promise(&self, bits: Promises) {
        self.pledge.fetch_or(bits, Ordering::AcqRel);
    }

    // =========================================================================
    // Syscall bookkeeping
    // =========================================================================

    /// Record the syscall number being dispatched; read back by the
    /// violation reporter and the path-gate exception table.
    #[inline]
    pub fn note_syscall(&self, code: u64) {
        self.pledge_syscall.store(code, Ordering::Release);
    }

    #[inline]
    pub fn current_syscall(&self) -> u64 {
        self.pledge_syscall.load(Ordering::Acquire)
    }

    // =========================================================================
    // Whitepaths
    // =========================================================================

    #[inline]
    pub fn whitepaths(&self) -> Option<Arc<Whitepaths>> {
        self.pledgepaths.lock().clone()
    }

    #[inline]
    pub fn has_whitepaths(&self) -> bool {
        self.pledgepaths.lock().is_some()
    }

    /// Install the whitepath list. The slot is write-once; a second
    /// installation attempt is refused and the caller surfaces EPERM.
    pub(crate) fn install_whitepaths(&self, wl: Arc<Whitepaths>) -> bool {
        let mut slot = self.pledgepaths.lock();
        if slot.is_some() {
            return false;
        }
        *slot = Some(wl);
        true
    }

    /// Drop this process's whitepath reference; the list itself is freed
    /// when the last referencing process exits.
    pub(crate) fn drop_whitepaths(&self) {
        *self.pledgepaths.lock() = None;
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Post `signum` with its action forced back to the default
    /// disposition and its mask cleared, so the delivery cannot be
    /// caught, ignored, or blocked.
    pub(crate) fn force_signal(&self, signum: u8) {
        {
            let mut actions = self.signal_actions.lock();
            if let Some(action) = actions.get_mut(signum as usize - 1) {
                *action = SignalAction::default();
            }
        }
        self.signal_pending.fetch_or(sig_bit(signum), Ordering::AcqRel);
    }

    #[inline]
    pub fn signal_pending(&self) -> SigSet {
        self.signal_pending.load(Ordering::Acquire)
    }

    #[inline]
    pub fn signal_action(&self, signum: u8) -> SignalAction {
        let actions = self.signal_actions.lock();
        actions[signum as usize - 1]
    }

    pub fn set_signal_action(&self, signum: u8, action: SignalAction) {
        let mut actions = self.signal_actions.lock();
        if let Some(slot) = actions.get_mut(signum as usize - 1) {
            *slot = action;
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Build the child's record at fork: the sandbox state is inherited
    /// wholesale: flags and promises by value, the whitepath list by
    /// reference bump. (Exec changes nothing; inheriting the sandbox
    /// across exec is the whole point.)
    pub fn fork_from(&self, child_pid: u32) -> Self {
        let mut child = Self::new(child_pid, "", self.cred);
        child.comm = self.comm;
        *child.cwd.lock() = self.cwd.lock().clone();
        *child.rdir.lock() = self.rdir.lock().clone();
        child
            .flags
            .store(self.flags.load(Ordering::Acquire), Ordering::Release);
        child
            .pledge
            .store(self.pledge.load(Ordering::Acquire), Ordering::Release);
        *child.pledgepaths.lock() = self.pledgepaths.lock().clone();
        child
    }
}
