use crate::klog_info;
use crate::testing::TestResult;

/// Execute one test function, logging its name and outcome.
pub fn run_single_test<F>(name: &str, test: F) -> TestResult
where
    F: FnOnce() -> TestResult,
{
    let result = test();
    match result {
        TestResult::Pass => {}
        TestResult::Fail => klog_info!("TEST: {} FAILED", name),
        TestResult::Skipped => klog_info!("TEST: {} skipped", name),
    }
    result
}
