//! Ioctl, sockopt and sysctl filter behavior, plus the small auxiliary
//! gates. Each check exercises both an admit and a deny direction, and
//! distinguishes silent errors from fatal ones.

use pledgeos_abi::Errno;
use pledgeos_abi::fs::{F_GETFL, F_SETOWN};
use pledgeos_abi::ioctl::*;
use pledgeos_abi::mman::{PROT_EXEC, PROT_READ, SWAP_ON, SWAP_STATS};
use pledgeos_abi::net::*;
use pledgeos_abi::signal::{SIGABRT, sig_bit};
use pledgeos_abi::sysctl::*;
use pledgeos_lib::testing::TestResult;
use pledgeos_lib::{
    assert_errno, assert_ok, assert_test, define_test_suite, klog_capture_take, pass,
};

use crate::file::{DeviceClass, File, VType, Vnode};
use crate::gates::{
    pledge_adjtime, pledge_chown, pledge_fcntl, pledge_flock, pledge_kill, pledge_protexec,
    pledge_recvfd, pledge_sendfd, pledge_sendit, pledge_socket, pledge_swapctl,
};
use crate::ioctl::pledge_ioctl;
use crate::process::{Process, Ucred};
use crate::sockopt::pledge_sockopt;
use crate::sys_pledge::sys_pledge;
use crate::sysctl::pledge_sysctl;

fn pledged(request: &[u8]) -> Process {
    let p = Process::new(7, "filter_test", Ucred::with_groups(1000, 10, &[10, 20]));
    // a bad request string leaves the process unpledged; the caller's
    // first assertion flags it
    let _ = sys_pledge(&p, Some(request), None);
    p
}

fn was_killed(p: &Process) -> bool {
    p.signal_pending() & sig_bit(SIGABRT) != 0 && p.promises() == 0
}

fn tty_file() -> File {
    File::vnode(Vnode::tty())
}

fn chr_file(dev: DeviceClass) -> File {
    File::vnode(Vnode::device(VType::Chr, dev))
}

// =============================================================================
// Ioctl
// =============================================================================

pub fn test_ioctl_universal_commands() -> TestResult {
    let p = pledged(b"stdio");
    for com in [FIONREAD, FIONBIO, FIOCLEX, FIONCLEX] {
        assert_ok!(pledge_ioctl(&p, com, &File::pipe()));
        assert_ok!(pledge_ioctl(&p, com, &File::socket()));
    }
    pass!()
}

pub fn test_ioctl_unpledged_noop() -> TestResult {
    let p = Process::new(7, "filter_test", Ucred::new(0, 0));
    assert_ok!(pledge_ioctl(&p, TIOCSETA, &File::pipe()));
    pass!()
}

pub fn test_ioctl_dead_vnode() -> TestResult {
    let p = pledged(b"stdio tty");
    let dead = File::vnode(Vnode::regular(VType::Bad));
    assert_errno!(pledge_ioctl(&p, TIOCGETA, &dead), Errno::NoTty);
    assert_test!(!was_killed(&p));
    pass!()
}

pub fn test_ioctl_tty_inspect() -> TestResult {
    let p = pledged(b"stdio tty");
    assert_ok!(pledge_ioctl(&p, TIOCGETA, &tty_file()));
    assert_ok!(pledge_ioctl(&p, TIOCGWINSZ, &tty_file()));
    // the inspect group reports ENOTTY on non-ttys without killing
    let plain = File::vnode(Vnode::regular(VType::Reg));
    assert_errno!(pledge_ioctl(&p, TIOCGWINSZ, &plain), Errno::NoTty);
    assert_test!(!was_killed(&p));
    pass!()
}

pub fn test_ioctl_tty_modify_set() -> TestResult {
    let p = pledged(b"stdio tty");
    assert_ok!(pledge_ioctl(&p, TIOCSETA, &tty_file()));
    assert_ok!(pledge_ioctl(&p, TIOCSWINSZ, &tty_file()));
    assert_ok!(pledge_ioctl(&p, TIOCSCTTY, &tty_file()));
    pass!()
}

pub fn test_ioctl_tty_group_setter_needs_proc() -> TestResult {
    let p = pledged(b"stdio tty");
    assert_errno!(pledge_ioctl(&p, TIOCSPGRP, &tty_file()), Errno::Perm);
    assert_test!(was_killed(&p));

    let p = pledged(b"stdio tty proc");
    assert_ok!(pledge_ioctl(&p, TIOCSPGRP, &tty_file()));
    assert_ok!(pledge_ioctl(&p, TIOCSTI, &tty_file()));
    pass!()
}

pub fn test_ioctl_ptm_needs_both_paths() -> TestResult {
    let p = pledged(b"stdio tty");
    assert_errno!(
        pledge_ioctl(&p, PTMGET, &chr_file(DeviceClass::Ptm)),
        Errno::Perm
    );

    let p = pledged(b"stdio rpath wpath tty");
    assert_ok!(pledge_ioctl(&p, PTMGET, &chr_file(DeviceClass::Ptm)));
    pass!()
}

pub fn test_ioctl_bpf_device_identity() -> TestResult {
    let p = pledged(b"stdio bpf");
    assert_ok!(pledge_ioctl(&p, BIOCGSTATS, &chr_file(DeviceClass::Bpf)));

    // same command on a non-bpf character device is fatal
    let p = pledged(b"stdio bpf");
    assert_errno!(
        pledge_ioctl(&p, BIOCGSTATS, &chr_file(DeviceClass::Audio)),
        Errno::Perm
    );
    assert_test!(was_killed(&p));
    pass!()
}

pub fn test_ioctl_disklabel() -> TestResult {
    let p = pledged(b"stdio disklabel");
    let blk_disk = File::vnode(Vnode::device(VType::Blk, DeviceClass::Disk));
    assert_ok!(pledge_ioctl(&p, DIOCGDINFO, &blk_disk));
    assert_ok!(pledge_ioctl(&p, DIOCGPDINFO, &chr_file(DeviceClass::Disk)));
    assert_ok!(pledge_ioctl(&p, DIOCMAP, &chr_file(DeviceClass::DiskMap)));

    // DIOCMAP only on the mapping device
    let p = pledged(b"stdio disklabel");
    assert_errno!(
        pledge_ioctl(&p, DIOCMAP, &chr_file(DeviceClass::Disk)),
        Errno::Perm
    );
    assert_test!(was_killed(&p));
    pass!()
}

pub fn test_ioctl_route_inspectors() -> TestResult {
    let p = pledged(b"stdio route");
    assert_ok!(pledge_ioctl(&p, SIOCGIFFLAGS, &File::socket()));
    assert_ok!(pledge_ioctl(&p, SIOCGIFMEDIA, &File::socket()));

    let p = pledged(b"stdio route");
    assert_errno!(
        pledge_ioctl(&p, SIOCGIFFLAGS, &File::pipe()),
        Errno::Perm
    );
    assert_test!(was_killed(&p));
    pass!()
}

pub fn test_ioctl_tape_is_not_a_tty() -> TestResult {
    let p = pledged(b"stdio tape");
    let tape = File::vnode(Vnode::regular(VType::Chr));
    assert_ok!(pledge_ioctl(&p, MTIOCGET, &tape));
    assert_errno!(pledge_ioctl(&p, MTIOCGET, &tty_file()), Errno::NoTty);
    assert_test!(!was_killed(&p));
    pass!()
}

pub fn test_ioctl_unmatched_kills() -> TestResult {
    let p = pledged(b"stdio");
    assert_errno!(pledge_ioctl(&p, TIOCSETA, &tty_file()), Errno::Perm);
    assert_test!(was_killed(&p));
    pass!()
}

// =============================================================================
// Sockopt
// =============================================================================

pub fn test_sockopt_universal() -> TestResult {
    // no networking promise at all, yet these remain usable
    let p = pledged(b"stdio");
    assert_ok!(pledge_sockopt(&p, false, SOL_SOCKET, SO_ERROR));
    assert_ok!(pledge_sockopt(&p, true, SOL_SOCKET, SO_RCVBUF));
    pass!()
}

pub fn test_sockopt_requires_network_promise() -> TestResult {
    let p = pledged(b"stdio");
    assert_errno!(pledge_sockopt(&p, true, SOL_SOCKET, SO_TIMESTAMP), Errno::Perm);
    assert_test!(was_killed(&p));
    pass!()
}

pub fn test_sockopt_dns_options() -> TestResult {
    let p = pledged(b"stdio dns");
    assert_ok!(pledge_sockopt(&p, true, IPPROTO_IPV6, IPV6_USE_MIN_MTU));
    assert_ok!(pledge_sockopt(&p, true, IPPROTO_IPV6, IPV6_RECVPKTINFO));
    // but dns alone does not unlock the generic socket layer
    let p = pledged(b"stdio dns");
    assert_errno!(
        pledge_sockopt(&p, true, IPPROTO_TCP, TCP_NODELAY),
        Errno::Perm
    );
    assert_test!(was_killed(&p));
    pass!()
}

pub fn test_sockopt_ip_options_direction() -> TestResult {
    let p = pledged(b"stdio inet");
    assert_ok!(pledge_sockopt(&p, false, IPPROTO_IP, IP_OPTIONS));
    let p = pledged(b"stdio inet");
    assert_errno!(pledge_sockopt(&p, true, IPPROTO_IP, IP_OPTIONS), Errno::Perm);
    assert_test!(was_killed(&p));
    pass!()
}

pub fn test_sockopt_mcast_membership() -> TestResult {
    let p = pledged(b"stdio inet");
    assert_errno!(
        pledge_sockopt(&p, true, IPPROTO_IP, IP_ADD_MEMBERSHIP),
        Errno::Perm
    );

    let p = pledged(b"stdio inet mcast");
    assert_ok!(pledge_sockopt(&p, true, IPPROTO_IP, IP_ADD_MEMBERSHIP));
    assert_ok!(pledge_sockopt(&p, true, IPPROTO_IPV6, IPV6_JOIN_GROUP));
    pass!()
}

pub fn test_sockopt_tcp_allow_list() -> TestResult {
    let p = pledged(b"stdio inet");
    assert_ok!(pledge_sockopt(&p, true, IPPROTO_TCP, TCP_NODELAY));
    assert_ok!(pledge_sockopt(&p, true, IPPROTO_TCP, TCP_MAXSEG));
    assert_ok!(pledge_sockopt(&p, false, IPPROTO_IP, IP_TOS));
    pass!()
}

// =============================================================================
// Sysctl
// =============================================================================

pub fn test_sysctl_setter_faults() -> TestResult {
    let p = pledged(b"stdio");
    assert_errno!(
        pledge_sysctl(&p, &[CTL_KERN, KERN_HOSTNAME], true),
        Errno::Fault
    );
    assert_test!(was_killed(&p));
    pass!()
}

pub fn test_sysctl_baseline_reads() -> TestResult {
    let p = pledged(b"stdio");
    assert_ok!(pledge_sysctl(&p, &[CTL_KERN, KERN_OSTYPE], false));
    assert_ok!(pledge_sysctl(&p, &[CTL_KERN, KERN_HOSTNAME], false));
    assert_ok!(pledge_sysctl(&p, &[CTL_HW, HW_PAGESIZE], false));
    assert_ok!(pledge_sysctl(&p, &[CTL_HW, HW_NCPU], false));
    assert_ok!(pledge_sysctl(&p, &[CTL_VM, VM_LOADAVG], false));
    assert_ok!(pledge_sysctl(&p, &[CTL_HW, HW_SENSORS, 3, 1], false));
    pass!()
}

pub fn test_sysctl_ps_tables() -> TestResult {
    let p = pledged(b"stdio ps");
    assert_ok!(pledge_sysctl(&p, &[CTL_KERN, KERN_PROC, 1, 0, 8, 1], false));
    assert_ok!(pledge_sysctl(&p, &[CTL_HW, HW_PHYSMEM64], false));
    assert_ok!(pledge_sysctl(&p, &[CTL_KERN, KERN_CCPU], false));
    assert_ok!(pledge_sysctl(
        &p,
        &[CTL_KERN, KERN_PROC_ARGS, 7, KERN_PROC_ARGV],
        false
    ));

    // without "ps" the same read is fatal
    let p = pledged(b"stdio");
    assert_errno!(
        pledge_sysctl(&p, &[CTL_KERN, KERN_PROC, 1, 0, 8, 1], false),
        Errno::Inval
    );
    assert_test!(was_killed(&p));
    pass!()
}

pub fn test_sysctl_route_dumps() -> TestResult {
    let p = pledged(b"stdio route");
    assert_ok!(pledge_sysctl(
        &p,
        &[CTL_NET, PF_ROUTE, 0, 0, NET_RT_DUMP, 0],
        false
    ));
    assert_ok!(pledge_sysctl(
        &p,
        &[CTL_NET, PF_ROUTE, 0, AF_INET, NET_RT_FLAGS, RTF_LLINFO, 0],
        false
    ));
    pass!()
}

pub fn test_sysctl_ifaddrs_under_dns() -> TestResult {
    let p = pledged(b"stdio dns");
    assert_ok!(pledge_sysctl(
        &p,
        &[CTL_NET, PF_ROUTE, 0, 0, NET_RT_IFLIST, 0],
        false
    ));
    pass!()
}

pub fn test_sysctl_vminfo() -> TestResult {
    let p = pledged(b"stdio vminfo");
    assert_ok!(pledge_sysctl(&p, &[CTL_VM, VM_UVMEXP], false));
    assert_ok!(pledge_sysctl(
        &p,
        &[CTL_VFS, VFS_GENERIC, VFS_BCACHESTAT],
        false
    ));
    assert_ok!(pledge_sysctl(&p, &[CTL_KERN, KERN_BOOTTIME], false));
    pass!()
}

pub fn test_sysctl_unmatched_logs_mib() -> TestResult {
    // drain stale log lines first
    let mut scratch = [0u8; 256];
    while klog_capture_take(&mut scratch) == scratch.len() {}
    let _ = klog_capture_take(&mut scratch);

    let p = pledged(b"stdio");
    assert_errno!(pledge_sysctl(&p, &[CTL_KERN, 9999], false), Errno::Inval);
    assert_test!(was_killed(&p));

    let mut captured = [0u8; 512];
    let n = klog_capture_take(&mut captured);
    let line = &captured[..n];
    assert_test!(
        line.windows(6).any(|w| w == b"sysctl"),
        "denial must log the mib"
    );
    pass!()
}

// =============================================================================
// Auxiliary gates
// =============================================================================

pub fn test_fd_transfer() -> TestResult {
    let p = pledged(b"stdio sendfd recvfd");
    assert_ok!(pledge_sendfd(&p, &File::socket()));
    assert_ok!(pledge_recvfd(&p, &File::pipe()));
    let file = File::vnode(Vnode::regular(VType::Reg));
    assert_ok!(pledge_recvfd(&p, &file));

    // directories cannot travel: they would become rogue openat roots
    let dir = File::vnode(Vnode::regular(VType::Dir));
    assert_errno!(pledge_recvfd(&p, &dir), Errno::Inval);
    assert_test!(was_killed(&p));

    let p = pledged(b"stdio sendfd");
    let dir = File::vnode(Vnode::regular(VType::Dir));
    assert_errno!(pledge_sendfd(&p, &dir), Errno::Inval);

    // and the promise itself is required
    let p = pledged(b"stdio");
    assert_errno!(pledge_sendfd(&p, &File::socket()), Errno::Perm);
    assert_test!(was_killed(&p));
    pass!()
}

pub fn test_chown_group_membership() -> TestResult {
    let p = pledged(b"stdio fattr");
    assert_ok!(pledge_chown(&p, None, Some(10)));
    assert_ok!(pledge_chown(&p, None, Some(20)));
    assert_errno!(pledge_chown(&p, None, Some(30)), Errno::Perm);
    assert_test!(!was_killed(&p));

    // full "chown" carries chown-uid and removes the restriction
    let p = pledged(b"stdio chown");
    assert_ok!(pledge_chown(&p, Some(0), Some(0)));
    pass!()
}

pub fn test_adjtime_read_vs_set() -> TestResult {
    let p = pledged(b"stdio");
    assert_ok!(pledge_adjtime(&p, false));
    assert_errno!(pledge_adjtime(&p, true), Errno::Perm);
    assert_test!(!was_killed(&p));

    let p = pledged(b"stdio settime");
    assert_ok!(pledge_adjtime(&p, true));
    pass!()
}

pub fn test_sendit_addressing() -> TestResult {
    let p = pledged(b"stdio");
    assert_ok!(pledge_sendit(&p, false));
    assert_errno!(pledge_sendit(&p, true), Errno::Perm);
    assert_test!(was_killed(&p));

    let p = pledged(b"stdio unix");
    assert_ok!(pledge_sendit(&p, true));
    pass!()
}

pub fn test_fcntl_setown() -> TestResult {
    let p = pledged(b"stdio");
    assert_ok!(pledge_fcntl(&p, F_GETFL));
    assert_errno!(pledge_fcntl(&p, F_SETOWN), Errno::Perm);
    assert_test!(was_killed(&p));

    let p = pledged(b"stdio proc");
    assert_ok!(pledge_fcntl(&p, F_SETOWN));
    pass!()
}

pub fn test_kill_targets() -> TestResult {
    let p = pledged(b"stdio");
    assert_ok!(pledge_kill(&p, p.pid));
    assert_ok!(pledge_kill(&p, 0));
    assert_errno!(pledge_kill(&p, 1), Errno::Perm);
    assert_test!(was_killed(&p));

    let p = pledged(b"stdio proc");
    assert_ok!(pledge_kill(&p, 1));
    pass!()
}

pub fn test_protexec() -> TestResult {
    let p = pledged(b"stdio");
    assert_ok!(pledge_protexec(&p, PROT_READ));
    assert_errno!(pledge_protexec(&p, PROT_READ | PROT_EXEC), Errno::Perm);
    assert_test!(was_killed(&p));

    let p = pledged(b"stdio prot_exec");
    assert_ok!(pledge_protexec(&p, PROT_READ | PROT_EXEC));
    pass!()
}

pub fn test_socket_domains() -> TestResult {
    let p = pledged(b"stdio inet");
    assert_ok!(pledge_socket(&p, AF_INET, false));
    assert_ok!(pledge_socket(&p, AF_INET6, false));
    assert_ok!(pledge_socket(&p, -1, false));
    assert_errno!(pledge_socket(&p, AF_UNIX, false), Errno::Perm);

    let p = pledged(b"stdio unix");
    assert_ok!(pledge_socket(&p, AF_UNIX, false));

    // resolver sockets ride on "dns" regardless of domain
    let p = pledged(b"stdio dns");
    assert_ok!(pledge_socket(&p, AF_INET, true));
    assert_errno!(pledge_socket(&p, AF_INET, false), Errno::Perm);

    // unknown domains are an argument error
    let p = pledged(b"stdio inet");
    assert_errno!(pledge_socket(&p, 99, false), Errno::Inval);
    assert_test!(was_killed(&p));
    pass!()
}

pub fn test_flock_and_swapctl() -> TestResult {
    let p = pledged(b"stdio flock");
    assert_ok!(pledge_flock(&p));
    let p = pledged(b"stdio");
    assert_errno!(pledge_flock(&p), Errno::Perm);
    assert_test!(was_killed(&p));

    let p = pledged(b"stdio vminfo");
    assert_ok!(pledge_swapctl(&p, SWAP_STATS));
    assert_errno!(pledge_swapctl(&p, SWAP_ON), Errno::Perm);
    assert_test!(!was_killed(&p), "swap reconfiguration is a plain error");
    pass!()
}

define_test_suite!(
    ioctl_filter,
    [
        test_ioctl_universal_commands,
        test_ioctl_unpledged_noop,
        test_ioctl_dead_vnode,
        test_ioctl_tty_inspect,
        test_ioctl_tty_modify_set,
        test_ioctl_tty_group_setter_needs_proc,
        test_ioctl_ptm_needs_both_paths,
        test_ioctl_bpf_device_identity,
        test_ioctl_disklabel,
        test_ioctl_route_inspectors,
        test_ioctl_tape_is_not_a_tty,
        test_ioctl_unmatched_kills,
    ]
);

define_test_suite!(
    sockopt_filter,
    [
        test_sockopt_universal,
        test_sockopt_requires_network_promise,
        test_sockopt_dns_options,
        test_sockopt_ip_options_direction,
        test_sockopt_mcast_membership,
        test_sockopt_tcp_allow_list,
    ]
);

define_test_suite!(
    sysctl_filter,
    [
        test_sysctl_setter_faults,
        test_sysctl_baseline_reads,
        test_sysctl_ps_tables,
        test_sysctl_route_dumps,
        test_sysctl_ifaddrs_under_dns,
        test_sysctl_vminfo,
        test_sysctl_unmatched_logs_mib,
    ]
);

define_test_suite!(
    aux_gates,
    [
        test_fd_transfer,
        test_chown_group_membership,
        test_adjtime_read_vs_set,
        test_sendit_addressing,
        test_fcntl_setown,
        test_kill_targets,
        test_protexec,
        test_socket_domains,
        test_flock_and_swapctl,
    ]
);
