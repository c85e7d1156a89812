//! The per-syscall minimum-promise table and the dispatch-entry gate.

use pledgeos_abi::Errno;
use pledgeos_abi::pledge::*;
use pledgeos_abi::syscall::*;

use crate::process::Process;
use crate::violation::pledge_fail;

/// Build the dense promise table from a compact registration list.
/// Unregistered slots stay zero, which the gate treats as "no promise
/// admits this syscall".
macro_rules! pledge_table {
    (size: $size:expr; $( [$num:expr] => $bits:expr; )*) => {{
        let mut table: [Promises; $size] = [0; $size];
        $(
            table[$num as usize] = $bits;
        )*
        table
    }};
}

/// Ordered in blocks starting with least risky and most required.
static PLEDGE_SYSCALLS: [Promises; MAXSYSCALL] = pledge_table! {
    size: MAXSYSCALL;

    // Minimum required
    [SYSCALL_EXIT]       => PLEDGE_ALWAYS;
    [SYSCALL_KBIND]      => PLEDGE_ALWAYS;
    [SYSCALL_GET_TCB]    => PLEDGE_ALWAYS;
    [SYSCALL_PLEDGE]     => PLEDGE_ALWAYS;
    [SYSCALL_SENDSYSLOG] => PLEDGE_ALWAYS;  // stack protector reporting
    [SYSCALL_THRKILL]    => PLEDGE_ALWAYS;  // raise, abort, stack pro
    [SYSCALL_UTRACE]     => PLEDGE_ALWAYS;  // ltrace(1) from ld.so
    [SYSCALL_FUTEX]      => PLEDGE_ALWAYS;

    // "getting" information about self is considered safe
    [SYSCALL_GETUID]         => PLEDGE_STDIO;
    [SYSCALL_GETEUID]        => PLEDGE_STDIO;
    [SYSCALL_GETRESUID]      => PLEDGE_STDIO;
    [SYSCALL_GETGID]         => PLEDGE_STDIO;
    [SYSCALL_GETEGID]        => PLEDGE_STDIO;
    [SYSCALL_GETRESGID]      => PLEDGE_STDIO;
    [SYSCALL_GETGROUPS]      => PLEDGE_STDIO;
    [SYSCALL_GETLOGIN_R]     => PLEDGE_STDIO;
    [SYSCALL_GETPGRP]        => PLEDGE_STDIO;
    [SYSCALL_GETPGID]        => PLEDGE_STDIO;
    [SYSCALL_GETPPID]        => PLEDGE_STDIO;
    [SYSCALL_GETSID]         => PLEDGE_STDIO;
    [SYSCALL_GETTHRID]       => PLEDGE_STDIO;
    [SYSCALL_GETRLIMIT]      => PLEDGE_STDIO;
    [SYSCALL_GETTIMEOFDAY]   => PLEDGE_STDIO;
    [SYSCALL_GETDTABLECOUNT] => PLEDGE_STDIO;
    [SYSCALL_GETRUSAGE]      => PLEDGE_STDIO;
    [SYSCALL_ISSETUGID]      => PLEDGE_STDIO;
    [SYSCALL_CLOCK_GETRES]   => PLEDGE_STDIO;
    [SYSCALL_CLOCK_GETTIME]  => PLEDGE_STDIO;
    [SYSCALL_GETPID]         => PLEDGE_STDIO;

    // Almost exclusively read-only; the sysctl filter narrows further,
    // and "route", "inet", "dns", "ps" or "vminfo" expand access.
    [SYSCALL_SYSCTL] => PLEDGE_STDIO;

    // Support for the malloc(3) family of operations
    [SYSCALL_GETENTROPY] => PLEDGE_STDIO;
    [SYSCALL_MADVISE]    => PLEDGE_STDIO;
    [SYSCALL_MINHERIT]   => PLEDGE_STDIO;
    [SYSCALL_MMAP]       => PLEDGE_STDIO;
    [SYSCALL_MPROTECT]   => PLEDGE_STDIO;
    [SYSCALL_MQUERY]     => PLEDGE_STDIO;
    [SYSCALL_MUNMAP]     => PLEDGE_STDIO;
    [SYSCALL_MSYNC]      => PLEDGE_STDIO;
    [SYSCALL_BREAK]      => PLEDGE_STDIO;

    [SYSCALL_UMASK] => PLEDGE_STDIO;

    // Read/write operations
    [SYSCALL_READ]      => PLEDGE_STDIO;
    [SYSCALL_READV]     => PLEDGE_STDIO;
    [SYSCALL_PREAD]     => PLEDGE_STDIO;
    [SYSCALL_PREADV]    => PLEDGE_STDIO;
    [SYSCALL_WRITE]     => PLEDGE_STDIO;
    [SYSCALL_WRITEV]    => PLEDGE_STDIO;
    [SYSCALL_PWRITE]    => PLEDGE_STDIO;
    [SYSCALL_PWRITEV]   => PLEDGE_STDIO;
    [SYSCALL_RECVMSG]   => PLEDGE_STDIO;
    [SYSCALL_RECVFROM]  => PLEDGE_STDIO | PLEDGE_YPACTIVE;
    [SYSCALL_FTRUNCATE] => PLEDGE_STDIO;
    [SYSCALL_LSEEK]     => PLEDGE_STDIO;
    [SYSCALL_FPATHCONF] => PLEDGE_STDIO;

    // Address selection requires a network pledge; the sendit hook
    // checks for an address argument.
    [SYSCALL_SENDTO]  => PLEDGE_STDIO | PLEDGE_YPACTIVE;
    // SCM_RIGHTS transfer additionally hits the sendfd/recvfd gates.
    [SYSCALL_SENDMSG] => PLEDGE_STDIO;

    // Common signal operations
    [SYSCALL_NANOSLEEP]   => PLEDGE_STDIO;
    [SYSCALL_SIGALTSTACK] => PLEDGE_STDIO;
    [SYSCALL_SIGPROCMASK] => PLEDGE_STDIO;
    [SYSCALL_SIGSUSPEND]  => PLEDGE_STDIO;
    [SYSCALL_SIGACTION]   => PLEDGE_STDIO;
    [SYSCALL_SIGRETURN]   => PLEDGE_STDIO;
    [SYSCALL_SIGPENDING]  => PLEDGE_STDIO;
    [SYSCALL_GETITIMER]   => PLEDGE_STDIO;
    [SYSCALL_SETITIMER]   => PLEDGE_STDIO;

    // To support event driven programming
    [SYSCALL_POLL]    => PLEDGE_STDIO;
    [SYSCALL_PPOLL]   => PLEDGE_STDIO;
    [SYSCALL_KEVENT]  => PLEDGE_STDIO;
    [SYSCALL_KQUEUE]  => PLEDGE_STDIO;
    [SYSCALL_SELECT]  => PLEDGE_STDIO;
    [SYSCALL_PSELECT] => PLEDGE_STDIO;

    [SYSCALL_FSTAT] => PLEDGE_STDIO;
    [SYSCALL_FSYNC] => PLEDGE_STDIO;

    [SYSCALL_SETSOCKOPT] => PLEDGE_STDIO;  // narrow whitelist
    [SYSCALL_GETSOCKOPT] => PLEDGE_STDIO;  // narrow whitelist

    // F_SETOWN requires PLEDGE_PROC
    [SYSCALL_FCNTL] => PLEDGE_STDIO;

    [SYSCALL_CLOSE]     => PLEDGE_STDIO;
    [SYSCALL_DUP]       => PLEDGE_STDIO;
    [SYSCALL_DUP2]      => PLEDGE_STDIO;
    [SYSCALL_DUP3]      => PLEDGE_STDIO;
    [SYSCALL_CLOSEFROM] => PLEDGE_STDIO;
    [SYSCALL_SHUTDOWN]  => PLEDGE_STDIO;
    [SYSCALL_FCHDIR]    => PLEDGE_STDIO;

    [SYSCALL_PIPE]       => PLEDGE_STDIO;
    [SYSCALL_PIPE2]      => PLEDGE_STDIO;
    [SYSCALL_SOCKETPAIR] => PLEDGE_STDIO;

    [SYSCALL_WAIT4] => PLEDGE_STDIO;

    // Can kill self with "stdio"; killing another pid requires "proc"
    [SYSCALL_KILL] => PLEDGE_STDIO;

    // FIONREAD/FIONBIO for "stdio"; other ioctl are selectively allowed
    // based upon other pledges.
    [SYSCALL_IOCTL] => PLEDGE_STDIO;

    // Path access/creation calls are checked further during name lookup
    [SYSCALL_OPEN]     => PLEDGE_STDIO;
    [SYSCALL_STAT]     => PLEDGE_STDIO;
    [SYSCALL_ACCESS]   => PLEDGE_STDIO;
    [SYSCALL_READLINK] => PLEDGE_STDIO;

    [SYSCALL_ADJTIME]      => PLEDGE_STDIO;  // setting requires "settime"
    [SYSCALL_ADJFREQ]      => PLEDGE_SETTIME;
    [SYSCALL_SETTIMEOFDAY] => PLEDGE_SETTIME;

    // Needed by threaded programs
    [SYSCALL_TFORK]        => PLEDGE_STDIO;
    [SYSCALL_SCHED_YIELD]  => PLEDGE_STDIO;
    [SYSCALL_THRSLEEP]     => PLEDGE_STDIO;
    [SYSCALL_THRWAKEUP]    => PLEDGE_STDIO;
    [SYSCALL_THREXIT]      => PLEDGE_STDIO;
    [SYSCALL_THRSIGDIVERT] => PLEDGE_STDIO;

    [SYSCALL_FORK]    => PLEDGE_PROC;
    [SYSCALL_VFORK]   => PLEDGE_PROC;
    [SYSCALL_SETPGID] => PLEDGE_PROC;
    [SYSCALL_SETSID]  => PLEDGE_PROC;

    [SYSCALL_SETRLIMIT]   => PLEDGE_PROC | PLEDGE_ID;
    [SYSCALL_GETPRIORITY] => PLEDGE_PROC | PLEDGE_ID;
    [SYSCALL_SETPRIORITY] => PLEDGE_PROC | PLEDGE_ID;

    [SYSCALL_SETUID]    => PLEDGE_ID;
    [SYSCALL_SETEUID]   => PLEDGE_ID;
    [SYSCALL_SETREUID]  => PLEDGE_ID;
    [SYSCALL_SETRESUID] => PLEDGE_ID;
    [SYSCALL_SETGID]    => PLEDGE_ID;
    [SYSCALL_SETEGID]   => PLEDGE_ID;
    [SYSCALL_SETREGID]  => PLEDGE_ID;
    [SYSCALL_SETRESGID] => PLEDGE_ID;
    [SYSCALL_SETGROUPS] => PLEDGE_ID;
    [SYSCALL_SETLOGIN]  => PLEDGE_ID;

    [SYSCALL_EXECVE] => PLEDGE_EXEC;

    [SYSCALL_CHDIR]      => PLEDGE_RPATH;
    [SYSCALL_OPENAT]     => PLEDGE_RPATH | PLEDGE_WPATH;
    [SYSCALL_FSTATAT]    => PLEDGE_RPATH | PLEDGE_WPATH;
    [SYSCALL_FACCESSAT]  => PLEDGE_RPATH | PLEDGE_WPATH;
    [SYSCALL_READLINKAT] => PLEDGE_RPATH | PLEDGE_WPATH;
    [SYSCALL_LSTAT]      => PLEDGE_RPATH | PLEDGE_WPATH | PLEDGE_TMPPATH;
    [SYSCALL_TRUNCATE]   => PLEDGE_WPATH;
    [SYSCALL_RENAME]     => PLEDGE_RPATH | PLEDGE_CPATH;
    [SYSCALL_RMDIR]      => PLEDGE_CPATH;
    [SYSCALL_RENAMEAT]   => PLEDGE_CPATH;
    [SYSCALL_LINK]       => PLEDGE_CPATH;
    [SYSCALL_LINKAT]     => PLEDGE_CPATH;
    [SYSCALL_SYMLINK]    => PLEDGE_CPATH;
    [SYSCALL_SYMLINKAT]  => PLEDGE_CPATH;
    [SYSCALL_UNLINK]     => PLEDGE_CPATH | PLEDGE_TMPPATH;
    [SYSCALL_UNLINKAT]   => PLEDGE_CPATH;
    [SYSCALL_MKDIR]      => PLEDGE_CPATH;
    [SYSCALL_MKDIRAT]    => PLEDGE_CPATH;

    [SYSCALL_MKFIFO] => PLEDGE_DPATH;
    [SYSCALL_MKNOD]  => PLEDGE_DPATH;

    [SYSCALL_REVOKE] => PLEDGE_TTY;  // also requires PLEDGE_RPATH

    // Classified as RPATH|WPATH because of path information leakage,
    // WPATH due to unknown use of mk*temp(3) on non-/tmp paths.
    [SYSCALL_GETCWD] => PLEDGE_RPATH | PLEDGE_WPATH;

    // Classified as RPATH because these leak path information
    [SYSCALL_GETDENTS]  => PLEDGE_RPATH;
    [SYSCALL_GETFSSTAT] => PLEDGE_RPATH;
    [SYSCALL_STATFS]    => PLEDGE_RPATH;
    [SYSCALL_FSTATFS]   => PLEDGE_RPATH;
    [SYSCALL_PATHCONF]  => PLEDGE_RPATH;

    [SYSCALL_UTIMES]    => PLEDGE_FATTR;
    [SYSCALL_FUTIMES]   => PLEDGE_FATTR;
    [SYSCALL_UTIMENSAT] => PLEDGE_FATTR;
    [SYSCALL_FUTIMENS]  => PLEDGE_FATTR;
    [SYSCALL_CHMOD]     => PLEDGE_FATTR;
    [SYSCALL_FCHMOD]    => PLEDGE_FATTR;
    [SYSCALL_FCHMODAT]  => PLEDGE_FATTR;
    [SYSCALL_CHFLAGS]   => PLEDGE_FATTR;
    [SYSCALL_CHFLAGSAT] => PLEDGE_FATTR;
    [SYSCALL_FCHFLAGS]  => PLEDGE_FATTR;

    [SYSCALL_CHOWN]    => PLEDGE_CHOWN;
    [SYSCALL_FCHOWNAT] => PLEDGE_CHOWN;
    [SYSCALL_LCHOWN]   => PLEDGE_CHOWN;
    [SYSCALL_FCHOWN]   => PLEDGE_CHOWN;

    [SYSCALL_SOCKET]      => PLEDGE_INET | PLEDGE_UNIX | PLEDGE_DNS | PLEDGE_YPACTIVE;
    [SYSCALL_CONNECT]     => PLEDGE_INET | PLEDGE_UNIX | PLEDGE_DNS | PLEDGE_YPACTIVE;
    [SYSCALL_BIND]        => PLEDGE_INET | PLEDGE_UNIX | PLEDGE_DNS | PLEDGE_YPACTIVE;
    [SYSCALL_GETSOCKNAME] => PLEDGE_INET | PLEDGE_UNIX | PLEDGE_DNS | PLEDGE_YPACTIVE;

    [SYSCALL_LISTEN]      => PLEDGE_INET | PLEDGE_UNIX;
    [SYSCALL_ACCEPT4]     => PLEDGE_INET | PLEDGE_UNIX;
    [SYSCALL_ACCEPT]      => PLEDGE_INET | PLEDGE_UNIX;
    [SYSCALL_GETPEERNAME] => PLEDGE_INET | PLEDGE_UNIX;

    [SYSCALL_FLOCK]   => PLEDGE_FLOCK | PLEDGE_YPACTIVE;
    [SYSCALL_SWAPCTL] => PLEDGE_VMINFO;  // the hook limits to "get" operations
};

/// Why the gate refused a syscall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDenied {
    /// The number names no syscall at all.
    Unknown,
    /// Admission needed one of these bits; the dispatcher hands the set
    /// to a specialized gate, or failing that to the violation handler.
    Missing(Promises),
}

/// The dispatch-entry gate.
///
/// Records the syscall number on the process (the violation reporter
/// and the path-gate exception table key on it), then answers whether
/// the current promises admit the call. Denial does not kill; the
/// caller decides whether a specialized gate gets a say first.
pub fn pledge_syscall(p: &Process, code: u64) -> Result<(), GateDenied> {
    p.note_syscall(code);

    if !p.is_pledged() {
        return Ok(());
    }

    if code as usize >= MAXSYSCALL {
        return Err(GateDenied::Unknown);
    }

    let required = PLEDGE_SYSCALLS[code as usize];
    if required == PLEDGE_ALWAYS {
        return Ok(());
    }

    if p.promises() & required != 0 {
        return Ok(());
    }

    Err(GateDenied::Missing(required))
}

/// Gate composition for dispatchers with no specialized gate to consult:
/// a denial goes straight to the violation handler.
pub fn pledge_syscall_check(p: &Process, code: u64) -> Result<(), Errno> {
    match pledge_syscall(p, code) {
        Ok(()) => Ok(()),
        Err(GateDenied::Unknown) => Err(Errno::Inval),
        Err(GateDenied::Missing(required)) => Err(pledge_fail(p, Errno::Perm, required)),
    }
}
