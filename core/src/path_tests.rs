//! Canonicalizer and whitelist property tests.
//!
//! The randomized cases use a seeded LCG so failures reproduce.

use alloc::vec::Vec;

use pledgeos_abi::Errno;
use pledgeos_abi::fs::PATH_MAX;
use pledgeos_abi::syscall::{SYSCALL_OPEN, SYSCALL_STAT};
use pledgeos_lib::testing::TestResult;
use pledgeos_lib::{assert_eq_test, assert_errno, assert_ok, assert_test, define_test_suite, pass};

use crate::namei::{NameiRequest, pledge_namei_wlpath};
use crate::path::{ResolveCache, canonpath, resolvpath, substrcmp};
use crate::process::{Process, Ucred};
use crate::sys_pledge::sys_pledge;
use crate::whitepaths::{Whitepaths, WlMatch};

use pledgeos_abi::pledge::PLEDGE_RPATH;

fn test_process() -> Process {
    Process::new(77, "path_test", Ucred::new(1000, 1000))
}

fn canon(input: &[u8]) -> Result<Vec<u8>, Errno> {
    let mut buf = [0u8; PATH_MAX];
    let len = canonpath(input, &mut buf)?;
    Ok(Vec::from(&buf[..len]))
}

// =============================================================================
// Lexical canonicalization
// =============================================================================

pub fn test_canon_fixed_cases() -> TestResult {
    let cases: &[(&[u8], &[u8])] = &[
        (b"/", b"/"),
        (b"//", b"/"),
        (b"/.", b"/"),
        (b"/..", b"/"),
        (b"/../..", b"/"),
        (b"/usr", b"/usr"),
        (b"/usr/", b"/usr"),
        (b"/usr//share", b"/usr/share"),
        (b"/usr/./share", b"/usr/share"),
        (b"/usr/share/../local", b"/usr/local"),
        (b"/usr/share/zoneinfo/../../bin", b"/usr/bin"),
        (b"/tmp/../../../etc", b"/etc"),
        (b"/a/b/c/./../d", b"/a/b/d"),
        (b"/etc/localtime.", b"/etc/localtime."),
        (b"/..a", b"/..a"),
        (b"/a..", b"/a.."),
        (b"/.hidden", b"/.hidden"),
    ];
    for (input, want) in cases {
        let got = assert_ok!(canon(input));
        assert_eq_test!(&got[..], &want[..], "canonpath case");
    }
    pass!()
}

pub fn test_canon_relative_copied() -> TestResult {
    let got = assert_ok!(canon(b"etc/../passwd"));
    assert_eq_test!(&got[..], &b"etc/../passwd"[..]);
    pass!()
}

pub fn test_canon_too_long() -> TestResult {
    let mut long = Vec::from(&b"/"[..]);
    long.resize(PATH_MAX + 8, b'a');
    let mut buf = [0u8; PATH_MAX];
    assert_errno!(canonpath(&long, &mut buf), Errno::NameTooLong);
    pass!()
}

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }
}

fn random_path(rng: &mut Lcg) -> Vec<u8> {
    const SEGMENTS: &[&[u8]] = &[b"", b".", b"..", b"a", b"bin", b"share", b"x9"];
    let mut path = Vec::from(&b"/"[..]);
    let nseg = (rng.next() % 8) as usize;
    for i in 0..nseg {
        if i > 0 || !path.ends_with(b"/") {
            path.push(b'/');
        }
        path.extend_from_slice(SEGMENTS[(rng.next() % SEGMENTS.len() as u64) as usize]);
    }
    path
}

fn contains(hay: &[u8], needle: &[u8]) -> bool {
    hay.windows(needle.len()).any(|w| w == needle)
}

pub fn test_canon_idempotent_randomized() -> TestResult {
    let mut rng = Lcg(0x5105_90f5);
    for _ in 0..512 {
        let input = random_path(&mut rng);
        let once = assert_ok!(canon(&input), "first canon");
        let twice = assert_ok!(canon(&once), "second canon");
        assert_test!(once == twice, "canon not idempotent");
        assert_test!(!contains(&once, b"//"), "output keeps //");
        assert_test!(!contains(&once, b"/./"), "output keeps /./");
        assert_test!(!contains(&once, b"/../"), "output keeps /../");
        assert_test!(
            once == b"/" || !once.ends_with(b"/"),
            "trailing slash survived"
        );
        assert_eq_test!(once[0], b'/', "output not absolute");
    }
    pass!()
}

pub fn test_canon_dot_insertion_invariant() -> TestResult {
    let mut rng = Lcg(0xdead_bee5);
    for _ in 0..256 {
        let input = random_path(&mut rng);
        let base = assert_ok!(canon(&input));

        // "/." spliced in front changes nothing
        let mut prefixed = Vec::from(&b"/."[..]);
        prefixed.extend_from_slice(&base);
        let got = assert_ok!(canon(&prefixed));
        assert_test!(got == base, "prefix /. changed result");

        // and neither does a trailing "/."
        let mut suffixed = base.clone();
        suffixed.extend_from_slice(b"/.");
        let got = assert_ok!(canon(&suffixed));
        assert_test!(got == base, "suffix /. changed result");
    }
    pass!()
}

// =============================================================================
// substrcmp
// =============================================================================

pub fn test_substrcmp_relations() -> TestResult {
    assert_eq_test!(substrcmp(b"/tmp", b"/tmp/file"), 1);
    assert_eq_test!(substrcmp(b"/tmp", b"/tmp"), 1);
    assert_eq_test!(substrcmp(b"/tmp/file", b"/tmp"), 2);
    assert_eq_test!(substrcmp(b"/tmp", b"/usr"), 0);
    assert_eq_test!(substrcmp(b"/tmpX", b"/tmp/f"), 0);
    pass!()
}

// =============================================================================
// Chroot-aware resolution
// =============================================================================

pub fn test_resolv_relative_uses_cwd() -> TestResult {
    let p = test_process();
    *p.cwd.lock() = Vec::from(&b"/usr/src"[..]);
    let mut cache = ResolveCache::new();
    let got = assert_ok!(resolvpath(&p, &mut cache, b"sys/kern"));
    assert_eq_test!(&got[..], &b"/usr/src/sys/kern"[..]);
    // parent traversal out of the cwd
    let got = assert_ok!(resolvpath(&p, &mut cache, b"../obj"));
    assert_eq_test!(&got[..], &b"/usr/obj"[..]);
    pass!()
}

pub fn test_resolv_chroot_prefix() -> TestResult {
    let p = test_process();
    *p.rdir.lock() = Some(Vec::from(&b"/jail/www"[..]));
    let mut cache = ResolveCache::new();
    let got = assert_ok!(resolvpath(&p, &mut cache, b"/etc/./passwd"));
    assert_eq_test!(&got[..], &b"/jail/www/etc/passwd"[..]);
    pass!()
}

pub fn test_resolv_chroot_and_cwd() -> TestResult {
    let p = test_process();
    *p.cwd.lock() = Vec::from(&b"/var/db"[..]);
    *p.rdir.lock() = Some(Vec::from(&b"/jail"[..]));
    let mut cache = ResolveCache::new();
    let got = assert_ok!(resolvpath(&p, &mut cache, b"ports//INDEX"));
    assert_eq_test!(&got[..], &b"/jail/var/db/ports/INDEX"[..]);
    pass!()
}

// =============================================================================
// Whitelist matching
// =============================================================================

fn sample_whitelist() -> Whitepaths {
    let mut paths = Vec::new();
    paths.push(Vec::from(&b"/var/db/ports"[..]));
    paths.push(Vec::from(&b"/tmp/work"[..]));
    Whitepaths::new(paths)
}

pub fn test_whitelist_descendants_admit() -> TestResult {
    let wl = sample_whitelist();
    assert_eq_test!(wl.check(b"/var/db/ports"), WlMatch::Admit);
    assert_eq_test!(wl.check(b"/var/db/ports/INDEX"), WlMatch::Admit);
    assert_eq_test!(wl.check(b"/tmp/work/a/b/c"), WlMatch::Admit);
    pass!()
}

pub fn test_whitelist_component_boundary() -> TestResult {
    let wl = sample_whitelist();
    // byte prefix but not a path prefix
    assert_eq_test!(wl.check(b"/var/db/portsnap"), WlMatch::Miss);
    assert_eq_test!(wl.check(b"/tmp/workshop"), WlMatch::Miss);
    pass!()
}

pub fn test_whitelist_ancestors() -> TestResult {
    let wl = sample_whitelist();
    assert_eq_test!(wl.check(b"/var/db"), WlMatch::Ancestor);
    assert_eq_test!(wl.check(b"/var"), WlMatch::Ancestor);
    assert_eq_test!(wl.check(b"/"), WlMatch::Ancestor);
    assert_eq_test!(wl.check(b"/var/run"), WlMatch::Miss);
    pass!()
}

pub fn test_whitelist_root_entry_admits_all() -> TestResult {
    let mut paths = Vec::new();
    paths.push(Vec::from(&b"/"[..]));
    let wl = Whitepaths::new(paths);
    assert_eq_test!(wl.check(b"/etc/passwd"), WlMatch::Admit);
    assert_eq_test!(wl.check(b"/"), WlMatch::Admit);
    pass!()
}

pub fn test_wlpath_statlie_tagging() -> TestResult {
    let p = test_process();
    let wl_paths: &[&[u8]] = &[b"/var/db/ports/INDEX"];
    assert_ok!(sys_pledge(&p, Some(b"stdio rpath"), Some(wl_paths)));

    // stat on an intermediate directory succeeds but is tagged
    p.note_syscall(SYSCALL_STAT);
    let mut ni = NameiRequest::new(PLEDGE_RPATH, b"/var/db");
    assert_ok!(pledge_namei_wlpath(&p, &mut ni));
    assert_test!(ni.statlie(), "ancestor stat not tagged");

    // a non-stat lookup on the same directory is refused, hint-free
    p.note_syscall(SYSCALL_OPEN);
    let mut ni = NameiRequest::new(PLEDGE_RPATH, b"/var/db");
    assert_errno!(pledge_namei_wlpath(&p, &mut ni), Errno::NoEnt);

    // the declared leaf itself is fine either way
    let mut ni = NameiRequest::new(PLEDGE_RPATH, b"/var/db/ports/INDEX");
    assert_ok!(pledge_namei_wlpath(&p, &mut ni));
    assert_test!(!ni.statlie());

    // an unrelated path misses
    let mut ni = NameiRequest::new(PLEDGE_RPATH, b"/etc/passwd");
    assert_errno!(pledge_namei_wlpath(&p, &mut ni), Errno::NoEnt);
    pass!()
}

pub fn test_wlpath_resolves_before_matching() -> TestResult {
    let p = test_process();
    *p.cwd.lock() = Vec::from(&b"/var/db"[..]);
    let wl_paths: &[&[u8]] = &[b"/var/db/ports"];
    assert_ok!(sys_pledge(&p, Some(b"stdio rpath"), Some(wl_paths)));

    p.note_syscall(SYSCALL_OPEN);
    let mut ni = NameiRequest::new(PLEDGE_RPATH, b"ports/./INDEX");
    assert_ok!(pledge_namei_wlpath(&p, &mut ni));
    pass!()
}

define_test_suite!(
    canonpath,
    [
        test_canon_fixed_cases,
        test_canon_relative_copied,
        test_canon_too_long,
        test_canon_idempotent_randomized,
        test_canon_dot_insertion_invariant,
        test_substrcmp_relations,
    ]
);

define_test_suite!(
    resolvpath,
    [
        test_resolv_relative_uses_cwd,
        test_resolv_chroot_prefix,
        test_resolv_chroot_and_cwd,
    ]
);

define_test_suite!(
    whitepaths,
    [
        test_whitelist_descendants_admit,
        test_whitelist_component_boundary,
        test_whitelist_ancestors,
        test_whitelist_root_entry_admits_all,
        test_wlpath_statlie_tagging,
        test_wlpath_resolves_before_matching,
    ]
);
