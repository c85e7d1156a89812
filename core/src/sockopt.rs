//! The socket-option filter, shared by getsockopt and setsockopt.

use pledgeos_abi::Errno;
use pledgeos_abi::net::*;
use pledgeos_abi::pledge::*;

use crate::process::Process;
use crate::violation::pledge_fail;

pub fn pledge_sockopt(p: &Process, set: bool, level: i32, optname: i32) -> Result<(), Errno> {
    if !p.is_pledged() {
        return Ok(());
    }

    // Always allow these, which are too common to reject
    if level == SOL_SOCKET {
        match optname {
            SO_RCVBUF | SO_ERROR => return Ok(()),
            _ => {}
        }
    }

    let pledge = p.promises();

    if pledge & (PLEDGE_INET | PLEDGE_UNIX | PLEDGE_DNS | PLEDGE_YPACTIVE) == 0 {
        return Err(pledge_fail(p, Errno::Perm, PLEDGE_INET));
    }

    // In use by some service libraries
    if level == SOL_SOCKET && optname == SO_TIMESTAMP {
        return Ok(());
    }

    // DNS resolver may do these requests
    if pledge & PLEDGE_DNS != 0 && level == IPPROTO_IPV6 {
        match optname {
            IPV6_RECVPKTINFO | IPV6_USE_MIN_MTU => return Ok(()),
            _ => {}
        }
    }

    // YP may do these requests
    if pledge & PLEDGE_YPACTIVE != 0 {
        match level {
            IPPROTO_IP if optname == IP_PORTRANGE => return Ok(()),
            IPPROTO_IPV6 if optname == IPV6_PORTRANGE => return Ok(()),
            _ => {}
        }
    }

    if pledge & (PLEDGE_INET | PLEDGE_UNIX) == 0 {
        return Err(pledge_fail(p, Errno::Perm, PLEDGE_INET));
    }
    if level == SOL_SOCKET {
        // Hopping routing tables would sidestep the network promises.
        if optname == SO_RTABLE {
            return Err(pledge_fail(p, Errno::Inval, PLEDGE_INET));
        }
        return Ok(());
    }

    if pledge & PLEDGE_INET == 0 {
        return Err(pledge_fail(p, Errno::Perm, PLEDGE_INET));
    }
    match level {
        IPPROTO_TCP => match optname {
            TCP_NODELAY | TCP_MD5SIG | TCP_SACK_ENABLE | TCP_MAXSEG | TCP_NOPUSH => {
                return Ok(());
            }
            _ => {}
        },
        IPPROTO_IP => match optname {
            IP_OPTIONS if !set => return Ok(()),
            IP_TOS | IP_TTL | IP_MINTTL | IP_IPDEFTTL | IP_PORTRANGE | IP_RECVDSTADDR
            | IP_RECVDSTPORT => return Ok(()),
            IP_MULTICAST_IF | IP_MULTICAST_TTL | IP_MULTICAST_LOOP | IP_ADD_MEMBERSHIP
            | IP_DROP_MEMBERSHIP => {
                if pledge & PLEDGE_MCAST != 0 {
                    return Ok(());
                }
            }
            _ => {}
        },
        IPPROTO_ICMP => {}
        IPPROTO_IPV6 => match optname {
            IPV6_TCLASS | IPV6_UNICAST_HOPS | IPV6_MINHOPCOUNT | IPV6_RECVHOPLIMIT
            | IPV6_PORTRANGE | IPV6_RECVPKTINFO | IPV6_RECVDSTPORT => return Ok(()),
            IPV6_MULTICAST_IF | IPV6_MULTICAST_HOPS | IPV6_MULTICAST_LOOP | IPV6_JOIN_GROUP
            | IPV6_LEAVE_GROUP => {
                if pledge & PLEDGE_MCAST != 0 {
                    return Ok(());
                }
            }
            _ => {}
        },
        IPPROTO_ICMPV6 => {}
        _ => {}
    }

    Err(pledge_fail(p, Errno::Perm, PLEDGE_INET))
}
