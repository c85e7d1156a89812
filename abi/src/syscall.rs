//! Syscall number definitions (kernel-userland ABI).
//!
//! This module is the **single source of truth** for all syscall numbers.
//! Both kernel and userland import from here to ensure ABI consistency.
//!
//! # Adding New Syscalls
//!
//! 1. Add the constant here with the next available number
//! 2. Use the `SYSCALL_` prefix for consistency
//! 3. Group with related syscalls under the appropriate section
//! 4. Add a row to the minimum-promise table in `pledgeos-core`
//!
//! # Number Allocation
//!
//! Numbers are not required to be contiguous. Gaps exist between the
//! sections so related syscalls can be added without renumbering. New
//! syscalls must use fresh numbers to avoid ABI breakage with existing
//! userland binaries.

// =============================================================================
// Minimum required: admitted for every pledged process
// =============================================================================

pub const SYSCALL_EXIT: u64 = 1;
pub const SYSCALL_KBIND: u64 = 2;
pub const SYSCALL_GET_TCB: u64 = 3;
pub const SYSCALL_PLEDGE: u64 = 4;
pub const SYSCALL_SENDSYSLOG: u64 = 5;
pub const SYSCALL_THRKILL: u64 = 6;
pub const SYSCALL_UTRACE: u64 = 7;
pub const SYSCALL_FUTEX: u64 = 8;

// =============================================================================
// Self inspection
// =============================================================================

pub const SYSCALL_GETUID: u64 = 10;
pub const SYSCALL_GETEUID: u64 = 11;
pub const SYSCALL_GETRESUID: u64 = 12;
pub const SYSCALL_GETGID: u64 = 13;
pub const SYSCALL_GETEGID: u64 = 14;
pub const SYSCALL_GETRESGID: u64 = 15;
pub const SYSCALL_GETGROUPS: u64 = 16;
pub const SYSCALL_GETLOGIN_R: u64 = 17;
pub const SYSCALL_GETPGRP: u64 = 18;
pub const SYSCALL_GETPGID: u64 = 19;
pub const SYSCALL_GETPPID: u64 = 20;
pub const SYSCALL_GETSID: u64 = 21;
pub const SYSCALL_GETTHRID: u64 = 22;
pub const SYSCALL_GETRLIMIT: u64 = 23;
pub const SYSCALL_GETTIMEOFDAY: u64 = 24;
pub const SYSCALL_GETDTABLECOUNT: u64 = 25;
pub const SYSCALL_GETRUSAGE: u64 = 26;
pub const SYSCALL_ISSETUGID: u64 = 27;
pub const SYSCALL_CLOCK_GETRES: u64 = 28;
pub const SYSCALL_CLOCK_GETTIME: u64 = 29;
pub const SYSCALL_GETPID: u64 = 30;
pub const SYSCALL_GETENTROPY: u64 = 31;
pub const SYSCALL_SYSCTL: u64 = 32;
pub const SYSCALL_UMASK: u64 = 33;

// =============================================================================
// Memory management (malloc(3) support)
// =============================================================================

pub const SYSCALL_MADVISE: u64 = 35;
pub const SYSCALL_MINHERIT: u64 = 36;
pub const SYSCALL_MMAP: u64 = 37;
pub const SYSCALL_MPROTECT: u64 = 38;
pub const SYSCALL_MQUERY: u64 = 39;
pub const SYSCALL_MUNMAP: u64 = 40;
pub const SYSCALL_MSYNC: u64 = 41;
pub const SYSCALL_BREAK: u64 = 42;

// =============================================================================
// Read / write
// =============================================================================

pub const SYSCALL_READ: u64 = 45;
pub const SYSCALL_READV: u64 = 46;
pub const SYSCALL_PREAD: u64 = 47;
pub const SYSCALL_PREADV: u64 = 48;
pub const SYSCALL_WRITE: u64 = 49;
pub const SYSCALL_WRITEV: u64 = 50;
pub const SYSCALL_PWRITE: u64 = 51;
pub const SYSCALL_PWRITEV: u64 = 52;
pub const SYSCALL_FTRUNCATE: u64 = 53;
pub const SYSCALL_LSEEK: u64 = 54;
pub const SYSCALL_FPATHCONF: u64 = 55;
pub const SYSCALL_FSTAT: u64 = 56;
pub const SYSCALL_FSYNC: u64 = 57;
pub const SYSCALL_RECVMSG: u64 = 58;
pub const SYSCALL_RECVFROM: u64 = 59;
pub const SYSCALL_SENDTO: u64 = 60;
pub const SYSCALL_SENDMSG: u64 = 61;

// =============================================================================
// Signals and timers
// =============================================================================

pub const SYSCALL_NANOSLEEP: u64 = 64;
pub const SYSCALL_SIGALTSTACK: u64 = 65;
pub const SYSCALL_SIGPROCMASK: u64 = 66;
pub const SYSCALL_SIGSUSPEND: u64 = 67;
pub const SYSCALL_SIGACTION: u64 = 68;
pub const SYSCALL_SIGRETURN: u64 = 69;
pub const SYSCALL_SIGPENDING: u64 = 70;
pub const SYSCALL_GETITIMER: u64 = 71;
pub const SYSCALL_SETITIMER: u64 = 72;

// =============================================================================
// Event driven programming
// =============================================================================

pub const SYSCALL_POLL: u64 = 74;
pub const SYSCALL_PPOLL: u64 = 75;
pub const SYSCALL_KEVENT: u64 = 76;
pub const SYSCALL_KQUEUE: u64 = 77;
pub const SYSCALL_SELECT: u64 = 78;
pub const SYSCALL_PSELECT: u64 = 79;

// =============================================================================
// File descriptors
// =============================================================================

pub const SYSCALL_FCNTL: u64 = 81;
pub const SYSCALL_CLOSE: u64 = 82;
pub const SYSCALL_DUP: u64 = 83;
pub const SYSCALL_DUP2: u64 = 84;
pub const SYSCALL_DUP3: u64 = 85;
pub const SYSCALL_CLOSEFROM: u64 = 86;
pub const SYSCALL_SHUTDOWN: u64 = 87;
pub const SYSCALL_FCHDIR: u64 = 88;
pub const SYSCALL_PIPE: u64 = 89;
pub const SYSCALL_PIPE2: u64 = 90;
pub const SYSCALL_SOCKETPAIR: u64 = 91;
pub const SYSCALL_WAIT4: u64 = 92;
pub const SYSCALL_KILL: u64 = 93;
pub const SYSCALL_IOCTL: u64 = 94;

// =============================================================================
// Path access (further refined during name lookup)
// =============================================================================

pub const SYSCALL_OPEN: u64 = 96;
pub const SYSCALL_STAT: u64 = 97;
pub const SYSCALL_ACCESS: u64 = 98;
pub const SYSCALL_READLINK: u64 = 99;

// =============================================================================
// Clock adjustment
// =============================================================================

pub const SYSCALL_ADJTIME: u64 = 101;
pub const SYSCALL_ADJFREQ: u64 = 102;
pub const SYSCALL_SETTIMEOFDAY: u64 = 103;

// =============================================================================
// Threads
// =============================================================================

pub const SYSCALL_TFORK: u64 = 105;
pub const SYSCALL_SCHED_YIELD: u64 = 106;
pub const SYSCALL_THRSLEEP: u64 = 107;
pub const SYSCALL_THRWAKEUP: u64 = 108;
pub const SYSCALL_THREXIT: u64 = 109;
pub const SYSCALL_THRSIGDIVERT: u64 = 110;

// =============================================================================
// Process management
// =============================================================================

pub const SYSCALL_FORK: u64 = 112;
pub const SYSCALL_VFORK: u64 = 113;
pub const SYSCALL_SETPGID: u64 = 114;
pub const SYSCALL_SETSID: u64 = 115;
pub const SYSCALL_SETRLIMIT: u64 = 116;
pub const SYSCALL_GETPRIORITY: u64 = 117;
pub const SYSCALL_SETPRIORITY: u64 = 118;

// =============================================================================
// Identity
// =============================================================================

pub const SYSCALL_SETUID: u64 = 120;
pub const SYSCALL_SETEUID: u64 = 121;
pub const SYSCALL_SETREUID: u64 = 122;
pub const SYSCALL_SETRESUID: u64 = 123;
pub const SYSCALL_SETGID: u64 = 124;
pub const SYSCALL_SETEGID: u64 = 125;
pub const SYSCALL_SETREGID: u64 = 126;
pub const SYSCALL_SETRESGID: u64 = 127;
pub const SYSCALL_SETGROUPS: u64 = 128;
pub const SYSCALL_SETLOGIN: u64 = 129;

pub const SYSCALL_EXECVE: u64 = 131;

// =============================================================================
// Filesystem, read-only
// =============================================================================

pub const SYSCALL_CHDIR: u64 = 133;
pub const SYSCALL_GETDENTS: u64 = 134;
pub const SYSCALL_GETFSSTAT: u64 = 135;
pub const SYSCALL_STATFS: u64 = 136;
pub const SYSCALL_FSTATFS: u64 = 137;
pub const SYSCALL_PATHCONF: u64 = 138;
pub const SYSCALL_GETCWD: u64 = 139;

// =============================================================================
// Filesystem, at-variants and write
// =============================================================================

pub const SYSCALL_OPENAT: u64 = 141;
pub const SYSCALL_FSTATAT: u64 = 142;
pub const SYSCALL_FACCESSAT: u64 = 143;
pub const SYSCALL_READLINKAT: u64 = 144;
pub const SYSCALL_LSTAT: u64 = 145;
pub const SYSCALL_TRUNCATE: u64 = 146;

// =============================================================================
// Filesystem, create / remove
// =============================================================================

pub const SYSCALL_RENAME: u64 = 148;
pub const SYSCALL_RMDIR: u64 = 149;
pub const SYSCALL_RENAMEAT: u64 = 150;
pub const SYSCALL_LINK: u64 = 151;
pub const SYSCALL_LINKAT: u64 = 152;
pub const SYSCALL_SYMLINK: u64 = 153;
pub const SYSCALL_SYMLINKAT: u64 = 154;
pub const SYSCALL_UNLINK: u64 = 155;
pub const SYSCALL_UNLINKAT: u64 = 156;
pub const SYSCALL_MKDIR: u64 = 157;
pub const SYSCALL_MKDIRAT: u64 = 158;

// Special nodes
pub const SYSCALL_MKFIFO: u64 = 160;
pub const SYSCALL_MKNOD: u64 = 161;

pub const SYSCALL_REVOKE: u64 = 163;

// =============================================================================
// File attributes
// =============================================================================

pub const SYSCALL_UTIMES: u64 = 165;
pub const SYSCALL_FUTIMES: u64 = 166;
pub const SYSCALL_UTIMENSAT: u64 = 167;
pub const SYSCALL_FUTIMENS: u64 = 168;
pub const SYSCALL_CHMOD: u64 = 169;
pub const SYSCALL_FCHMOD: u64 = 170;
pub const SYSCALL_FCHMODAT: u64 = 171;
pub const SYSCALL_CHFLAGS: u64 = 172;
pub const SYSCALL_CHFLAGSAT: u64 = 173;
pub const SYSCALL_FCHFLAGS: u64 = 174;

pub const SYSCALL_CHOWN: u64 = 176;
pub const SYSCALL_FCHOWNAT: u64 = 177;
pub const SYSCALL_LCHOWN: u64 = 178;
pub const SYSCALL_FCHOWN: u64 = 179;

// =============================================================================
// Networking
// =============================================================================

pub const SYSCALL_SOCKET: u64 = 181;
pub const SYSCALL_CONNECT: u64 = 182;
pub const SYSCALL_BIND: u64 = 183;
pub const SYSCALL_GETSOCKNAME: u64 = 184;
pub const SYSCALL_LISTEN: u64 = 185;
pub const SYSCALL_ACCEPT4: u64 = 186;
pub const SYSCALL_ACCEPT: u64 = 187;
pub const SYSCALL_GETPEERNAME: u64 = 188;
pub const SYSCALL_SETSOCKOPT: u64 = 189;
pub const SYSCALL_GETSOCKOPT: u64 = 190;

// =============================================================================
// Miscellaneous
// =============================================================================

pub const SYSCALL_FLOCK: u64 = 192;
pub const SYSCALL_SWAPCTL: u64 = 193;

/// One past the highest allocated syscall number.
pub const MAXSYSCALL: usize = 200;

/// Standard return value for unimplemented syscalls: -ENOSYS.
pub const ENOSYS_RETURN: u64 = (-78i64) as u64;

/// Upper bound on the cumulative byte size of exec/pledge argument
/// envelopes (the resolved whitepath strings count against this).
pub const ARG_MAX: usize = 256 * 1024;
