//! The per-process whitelisted-paths list.
//!
//! Built once by pledge(2) from resolved canonical paths, then immutable
//! for the rest of the process tree's life. Fork shares the list by
//! reference; the last process to release it frees the storage.

use alloc::vec::Vec;

use crate::path::substrcmp;

/// Outcome of checking a resolved lookup path against the whitelist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WlMatch {
    /// Exact entry or a descendant of one: the lookup proceeds.
    Admit,
    /// A proper ancestor of some entry: only stat-family lookups may
    /// proceed, and they must lie about the directory's contents.
    Ancestor,
    /// Not related to any entry.
    Miss,
}

struct Whitepath {
    name: Vec<u8>,
}

/// The immutable whitelist. Shared between processes via `Arc`.
pub struct Whitepaths {
    paths: Vec<Whitepath>,
}

impl Whitepaths {
    /// Wrap resolved canonical paths. The caller has already resolved
    /// and length-checked every entry.
    pub fn new(resolved: Vec<Vec<u8>>) -> Self {
        Self {
            paths: resolved.into_iter().map(|name| Whitepath { name }).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.paths.len()
    }

    /// Compare a resolved lookup path against every entry.
    ///
    /// A byte-prefix relation is only meaningful on a component
    /// boundary: "/usr/sh" must not admit "/usr/share" lookups, so the
    /// byte after the shared prefix has to be a separator (or the
    /// shorter path has to be the root).
    pub fn check(&self, resolved: &[u8]) -> WlMatch {
        let mut pardir_found = false;
        for wp in &self.paths {
            match substrcmp(&wp.name, resolved) {
                1 => {
                    // whitelist entry is a prefix of the resolved path
                    let term = resolved.get(wp.name.len());
                    if term.is_none() || term == Some(&b'/') || wp.name == b"/" {
                        return WlMatch::Admit;
                    }
                }
                2 => {
                    // resolved path is a proper prefix of the entry
                    let term = wp.name.get(resolved.len());
                    if resolved == b"/" || term == Some(&b'/') {
                        pardir_found = true;
                    }
                }
                _ => {}
            }
        }
        if pardir_found {
            WlMatch::Ancestor
        } else {
            WlMatch::Miss
        }
    }
}
