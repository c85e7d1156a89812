// Test harness types: TestSuiteResult, TestSuiteDesc, TestRunSummary.
// Suites are auto-registered via #[link_section = ".test_registry"] in
// define_test_suite!; the embedding kernel hands the collected
// descriptors to run_suites().

use core::ffi::{c_char, c_int};
use core::ptr;

/// Maximum number of test suites that can be registered.
pub const HARNESS_MAX_SUITES: usize = 40;

/// Ticks per millisecond assumed when no calibrated source exists.
const DEFAULT_TICKS_PER_MS: u64 = 1_000;

/// Result of executing a single test suite.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct TestSuiteResult {
    pub name: *const c_char,
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub elapsed_ms: u32,
}

impl Default for TestSuiteResult {
    fn default() -> Self {
        Self {
            name: ptr::null(),
            total: 0,
            passed: 0,
            failed: 0,
            elapsed_ms: 0,
        }
    }
}

impl TestSuiteResult {
    /// Check if all tests in this suite passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

pub type SuiteRunnerFn = fn(*const (), *mut TestSuiteResult) -> i32;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct TestSuiteDesc {
    pub name: *const c_char,
    pub run: Option<SuiteRunnerFn>,
}

// SAFETY: TestSuiteDesc contains only raw pointers to static data and
// function pointers. These are inherently thread-safe for read-only access.
unsafe impl Sync for TestSuiteDesc {}

/// Aggregated results from running a set of test suites.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct TestRunSummary {
    pub suite_count: usize,
    pub total_tests: u32,
    pub passed: u32,
    pub failed: u32,
    pub elapsed_ms: u32,
    pub rc: c_int,
}

impl Default for TestRunSummary {
    fn default() -> Self {
        Self {
            suite_count: 0,
            total_tests: 0,
            passed: 0,
            failed: 0,
            elapsed_ms: 0,
            rc: 0,
        }
    }
}

impl TestRunSummary {
    /// Add results from a single suite to the summary.
    pub fn add_suite_result(&mut self, result: &TestSuiteResult) {
        self.suite_count += 1;
        self.total_tests = self.total_tests.saturating_add(result.total);
        self.passed = self.passed.saturating_add(result.passed);
        self.failed = self.failed.saturating_add(result.failed);
        self.elapsed_ms = self.elapsed_ms.saturating_add(result.elapsed_ms);
    }

    /// Check if all tests across all suites passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.rc == 0
    }
}

/// Run every suite in `descs` and aggregate the results.
pub fn run_suites(descs: &[TestSuiteDesc]) -> TestRunSummary {
    let mut summary = TestRunSummary::default();
    for desc in descs {
        let Some(run) = desc.run else { continue };
        let mut result = TestSuiteResult::default();
        if run(ptr::null(), &mut result) != 0 {
            summary.rc = -1;
        }
        summary.add_suite_result(&result);
    }
    summary
}

// =============================================================================
// Time measurement utilities
// =============================================================================

/// Convert tick deltas to milliseconds.
pub fn ticks_to_ms(ticks: u64) -> u32 {
    let ms = ticks / DEFAULT_TICKS_PER_MS;
    if ms > u32::MAX as u64 {
        return u32::MAX;
    }
    ms as u32
}

/// Measure elapsed time in milliseconds between two tick readings.
#[inline]
pub fn measure_elapsed_ms(start: u64, end: u64) -> u32 {
    ticks_to_ms(end.wrapping_sub(start))
}
