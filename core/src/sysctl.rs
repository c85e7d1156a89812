//! The sysctl filter.
//!
//! Setters are refused outright; readers are matched against a closed
//! list of (length, prefix) patterns grouped by promise, with a baseline
//! set every pledged process may read.

use pledgeos_abi::Errno;
use pledgeos_abi::net::{AF_INET, AF_INET6, PF_ROUTE};
use pledgeos_abi::pledge::*;
use pledgeos_abi::sysctl::*;

use crate::process::Process;
use crate::violation::pledge_fail;

use pledgeos_lib::{bytes_as_str, klog_error};

pub fn pledge_sysctl(p: &Process, mib: &[i32], new: bool) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }

    if new {
        return Err(pledge_fail(p, Errno::Fault, 0));
    }

    let miblen = mib.len();
    let pledge = p.promises();

    // routing table observation
    if pledge & PLEDGE_ROUTE != 0 {
        if (miblen == 6 || miblen == 7)
            && mib[0] == CTL_NET
            && mib[1] == PF_ROUTE
            && mib[2] == 0
            && mib[4] == NET_RT_DUMP
        {
            return Ok(());
        }

        if miblen == 6
            && mib[0] == CTL_NET
            && mib[1] == PF_ROUTE
            && mib[2] == 0
            && (mib[3] == 0 || mib[3] == AF_INET6 || mib[3] == AF_INET)
            && mib[4] == NET_RT_TABLE
        {
            return Ok(());
        }

        // exposes MACs
        if miblen == 7
            && mib[0] == CTL_NET
            && mib[1] == PF_ROUTE
            && mib[2] == 0
            && (mib[3] == 0 || mib[3] == AF_INET6 || mib[3] == AF_INET)
            && mib[4] == NET_RT_FLAGS
            && mib[5] == RTF_LLINFO
        {
            return Ok(());
        }
    }

    if pledge & (PLEDGE_PS | PLEDGE_VMINFO) != 0 {
        if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_FSCALE {
            return Ok(());
        }
        if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_BOOTTIME {
            return Ok(());
        }
        if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_CONSDEV {
            return Ok(());
        }
        if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_CPTIME {
            return Ok(());
        }
        if miblen == 3 && mib[0] == CTL_KERN && mib[1] == KERN_CPTIME2 {
            return Ok(());
        }
    }

    if pledge & PLEDGE_PS != 0 {
        // kern.procargs.*
        if miblen == 4
            && mib[0] == CTL_KERN
            && mib[1] == KERN_PROC_ARGS
            && (mib[3] == KERN_PROC_ARGV || mib[3] == KERN_PROC_ENV)
        {
            return Ok(());
        }
        if miblen == 6 && mib[0] == CTL_KERN && mib[1] == KERN_PROC {
            return Ok(());
        }
        if miblen == 3 && mib[0] == CTL_KERN && mib[1] == KERN_PROC_CWD {
            return Ok(());
        }
        if miblen == 2 && mib[0] == CTL_HW && mib[1] == HW_PHYSMEM64 {
            return Ok(());
        }
        if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_CCPU {
            return Ok(());
        }
        if miblen == 2 && mib[0] == CTL_VM && mib[1] == VM_MAXSLP {
            return Ok(());
        }
    }

    if pledge & PLEDGE_VMINFO != 0 {
        if miblen == 2 && mib[0] == CTL_VM && mib[1] == VM_UVMEXP {
            return Ok(());
        }
        if miblen == 3 && mib[0] == CTL_VFS && mib[1] == VFS_GENERIC && mib[2] == VFS_BCACHESTAT
        {
            return Ok(());
        }
    }

    if pledge & (PLEDGE_ROUTE | PLEDGE_INET | PLEDGE_DNS) != 0 {
        // getifaddrs()
        if miblen == 6
            && mib[0] == CTL_NET
            && mib[1] == PF_ROUTE
            && mib[2] == 0
            && (mib[3] == 0 || mib[3] == AF_INET6 || mib[3] == AF_INET)
            && mib[4] == NET_RT_IFLIST
        {
            return Ok(());
        }
    }

    if pledge & PLEDGE_DISKLABEL != 0 {
        if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_RAWPARTITION {
            return Ok(());
        }
        if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_MAXPARTITIONS {
            return Ok(());
        }
    }

    // ntpd(8) reads sensors
    if miblen >= 3 && mib[0] == CTL_HW && mib[1] == HW_SENSORS {
        return Ok(());
    }

    // getdomainname(), gethostname()
    if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_DOMAINNAME {
        return Ok(());
    }
    if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_HOSTNAME {
        return Ok(());
    }
    // if_nameindex()
    if miblen == 6
        && mib[0] == CTL_NET
        && mib[1] == PF_ROUTE
        && mib[2] == 0
        && mib[3] == 0
        && mib[4] == NET_RT_IFNAMES
    {
        return Ok(());
    }
    // uname()
    if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_OSTYPE {
        return Ok(());
    }
    if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_OSRELEASE {
        return Ok(());
    }
    if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_OSVERSION {
        return Ok(());
    }
    if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_VERSION {
        return Ok(());
    }
    if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_CLOCKRATE {
        return Ok(());
    }
    if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_ARGMAX {
        return Ok(());
    }
    if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_NGROUPS {
        return Ok(());
    }
    if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_SYSVSHM {
        return Ok(());
    }
    if miblen == 2 && mib[0] == CTL_KERN && mib[1] == KERN_POSIX1 {
        return Ok(());
    }
    if miblen == 2 && mib[0] == CTL_HW && mib[1] == HW_MACHINE {
        return Ok(());
    }
    // getpagesize()
    if miblen == 2 && mib[0] == CTL_HW && mib[1] == HW_PAGESIZE {
        return Ok(());
    }
    // setproctitle()
    if miblen == 2 && mib[0] == CTL_VM && mib[1] == VM_PSSTRINGS {
        return Ok(());
    }
    if miblen == 2 && mib[0] == CTL_HW && mib[1] == HW_NCPU {
        return Ok(());
    }
    // getloadavg(3)
    if miblen == 2 && mib[0] == CTL_VM && mib[1] == VM_LOADAVG {
        return Ok(());
    }

    klog_error!(
        "{}({}): sysctl {}: {:?}",
        bytes_as_str(&p.comm),
        p.pid,
        miblen,
        mib
    );
    Err(pledge_fail(p, Errno::Inval, 0))
}
