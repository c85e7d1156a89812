//! Support library validation: ring buffer semantics and klog capture.

use crate::ring_buffer::RingBuffer;
use crate::testing::TestResult;
use crate::{assert_eq_test, assert_test, define_test_suite, klog_capture_take, klog_info, pass};

pub fn test_ring_buffer_fifo() -> TestResult {
    let mut rb: RingBuffer<u32, 4> = RingBuffer::new_with(0);
    assert_test!(rb.is_empty());
    assert_test!(rb.try_push(1));
    assert_test!(rb.try_push(2));
    assert_test!(rb.try_push(3));
    assert_eq_test!(rb.len(), 3);
    assert_eq_test!(rb.try_pop(), Some(1));
    assert_eq_test!(rb.try_pop(), Some(2));
    assert_eq_test!(rb.try_pop(), Some(3));
    assert_eq_test!(rb.try_pop(), None);
    pass!()
}

pub fn test_ring_buffer_full() -> TestResult {
    let mut rb: RingBuffer<u8, 2> = RingBuffer::new_with(0);
    assert_test!(rb.try_push(b'a'));
    assert_test!(rb.try_push(b'b'));
    assert_test!(rb.is_full());
    assert_test!(!rb.try_push(b'c'));
    assert_eq_test!(rb.peek(), Some(&b'a'));
    pass!()
}

pub fn test_ring_buffer_overwrite() -> TestResult {
    let mut rb: RingBuffer<u8, 2> = RingBuffer::new_with(0);
    rb.push_overwrite(b'a');
    rb.push_overwrite(b'b');
    rb.push_overwrite(b'c');
    assert_eq_test!(rb.len(), 2);
    assert_eq_test!(rb.try_pop(), Some(b'b'));
    assert_eq_test!(rb.try_pop(), Some(b'c'));
    pass!()
}

pub fn test_ring_buffer_reset() -> TestResult {
    let mut rb: RingBuffer<u8, 4> = RingBuffer::new_with(0);
    rb.push_overwrite(1);
    rb.push_overwrite(2);
    rb.reset();
    assert_test!(rb.is_empty());
    assert_eq_test!(rb.try_pop(), None);
    pass!()
}

fn capture_contains(needle: &[u8]) -> bool {
    let mut captured = [0u8; 512];
    let mut total = 0;
    loop {
        let n = klog_capture_take(&mut captured[total..]);
        if n == 0 || total + n >= captured.len() {
            total += n;
            break;
        }
        total += n;
    }
    captured[..total]
        .windows(needle.len())
        .any(|w| w == needle)
}

pub fn test_klog_capture_line() -> TestResult {
    // Drain whatever earlier tests left behind first.
    let mut scratch = [0u8; 512];
    while klog_capture_take(&mut scratch) == scratch.len() {}

    klog_info!("klog capture probe {}", 42);
    assert_test!(capture_contains(b"klog capture probe 42\n"));
    pass!()
}

define_test_suite!(
    ring_buf,
    [
        test_ring_buffer_fifo,
        test_ring_buffer_full,
        test_ring_buffer_overwrite,
        test_ring_buffer_reset,
    ]
);

define_test_suite!(klog_capture, [test_klog_capture_line]);
