//! Socket ABI constants: address families, option levels, and the
//! option names the sockopt filter is keyed on.

// =============================================================================
// Address / protocol families
// =============================================================================

pub const AF_UNSPEC: i32 = 0;
pub const AF_UNIX: i32 = 1;
pub const AF_INET: i32 = 2;
pub const AF_ROUTE: i32 = 17;
pub const AF_INET6: i32 = 24;

pub const PF_ROUTE: i32 = AF_ROUTE;

// =============================================================================
// Socket option levels
// =============================================================================

pub const SOL_SOCKET: i32 = 0xffff;
pub const IPPROTO_IP: i32 = 0;
pub const IPPROTO_ICMP: i32 = 1;
pub const IPPROTO_TCP: i32 = 6;
pub const IPPROTO_IPV6: i32 = 41;
pub const IPPROTO_ICMPV6: i32 = 58;

// =============================================================================
// SOL_SOCKET options
// =============================================================================

pub const SO_TIMESTAMP: i32 = 0x0800;
pub const SO_RCVBUF: i32 = 0x1002;
pub const SO_ERROR: i32 = 0x1007;
/// Routing-table selector. Never allowed under pledge; switching tables
/// would sidestep the network promises entirely.
pub const SO_RTABLE: i32 = 0x1021;

// =============================================================================
// IPPROTO_TCP options
// =============================================================================

pub const TCP_NODELAY: i32 = 0x01;
pub const TCP_MAXSEG: i32 = 0x02;
pub const TCP_MD5SIG: i32 = 0x04;
pub const TCP_SACK_ENABLE: i32 = 0x08;
pub const TCP_NOPUSH: i32 = 0x10;

// =============================================================================
// IPPROTO_IP options
// =============================================================================

pub const IP_OPTIONS: i32 = 1;
pub const IP_TOS: i32 = 3;
pub const IP_TTL: i32 = 4;
pub const IP_RECVDSTADDR: i32 = 7;
pub const IP_MULTICAST_IF: i32 = 9;
pub const IP_MULTICAST_TTL: i32 = 10;
pub const IP_MULTICAST_LOOP: i32 = 11;
pub const IP_ADD_MEMBERSHIP: i32 = 12;
pub const IP_DROP_MEMBERSHIP: i32 = 13;
pub const IP_PORTRANGE: i32 = 19;
pub const IP_MINTTL: i32 = 32;
pub const IP_RECVDSTPORT: i32 = 33;
pub const IP_IPDEFTTL: i32 = 37;

// =============================================================================
// IPPROTO_IPV6 options
// =============================================================================

pub const IPV6_UNICAST_HOPS: i32 = 4;
pub const IPV6_MULTICAST_IF: i32 = 9;
pub const IPV6_MULTICAST_HOPS: i32 = 10;
pub const IPV6_MULTICAST_LOOP: i32 = 11;
pub const IPV6_JOIN_GROUP: i32 = 12;
pub const IPV6_LEAVE_GROUP: i32 = 13;
pub const IPV6_PORTRANGE: i32 = 14;
pub const IPV6_RECVPKTINFO: i32 = 36;
pub const IPV6_RECVHOPLIMIT: i32 = 37;
pub const IPV6_USE_MIN_MTU: i32 = 42;
pub const IPV6_TCLASS: i32 = 61;
pub const IPV6_RECVDSTPORT: i32 = 64;
pub const IPV6_MINHOPCOUNT: i32 = 65;
