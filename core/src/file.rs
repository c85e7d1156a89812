//! Typed file-descriptor identity for the gates.
//!
//! The ioctl filter needs to know not just that an fd is a character
//! device but *which* driver sits behind it. Rather than comparing the
//! device switch's open entry point against known drivers, the open path
//! stamps a `DeviceClass` on the vnode; the filters then match on plain
//! tags.

/// Vnode type, mirroring the VFS's classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VType {
    Reg,
    Dir,
    Chr,
    Blk,
    /// A dead vnode (revoked device). Ioctl on these is refused outright.
    Bad,
}

/// Which driver a device vnode belongs to. Stamped at open time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Audio,
    Bpf,
    /// A disk, block or character flavor.
    Disk,
    /// The disk mapping control device.
    DiskMap,
    Drm,
    Pf,
    /// The pseudo-terminal multiplexer.
    Ptm,
    Tape,
    Vmm,
}

/// The vnode cross-section the gates inspect.
#[derive(Clone, Copy, Debug)]
pub struct Vnode {
    pub vtype: VType,
    /// Set for terminal devices, including ptys.
    pub is_tty: bool,
    pub dev: Option<DeviceClass>,
}

impl Vnode {
    pub const fn regular(vtype: VType) -> Self {
        Self {
            vtype,
            is_tty: false,
            dev: None,
        }
    }

    pub const fn device(vtype: VType, dev: DeviceClass) -> Self {
        Self {
            vtype,
            is_tty: false,
            dev: Some(dev),
        }
    }

    pub const fn tty() -> Self {
        Self {
            vtype: VType::Chr,
            is_tty: true,
            dev: None,
        }
    }
}

/// What kind of object an open file describes. The resolver's DNS
/// socket state travels with the socket layer, not here; the socket
/// gate receives it directly.
#[derive(Clone, Copy, Debug)]
pub enum FdKind {
    Socket,
    Pipe,
    Vnode(Vnode),
}

/// An open file table entry, reduced to what the gates consume.
#[derive(Clone, Copy, Debug)]
pub struct File {
    pub kind: FdKind,
}

impl File {
    pub const fn socket() -> Self {
        Self {
            kind: FdKind::Socket,
        }
    }

    pub const fn pipe() -> Self {
        Self { kind: FdKind::Pipe }
    }

    pub const fn vnode(vnode: Vnode) -> Self {
        Self {
            kind: FdKind::Vnode(vnode),
        }
    }

    #[inline]
    pub fn is_socket(&self) -> bool {
        matches!(self.kind, FdKind::Socket)
    }

    #[inline]
    pub fn vnode_ref(&self) -> Option<&Vnode> {
        match &self.kind {
            FdKind::Vnode(v) => Some(v),
            _ => None,
        }
    }
}
