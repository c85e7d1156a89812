/// Extract a NUL-padded byte array as a `&str`.
///
/// Scans for the first NUL byte (or end of slice) and interprets the
/// prefix as UTF-8. Returns `"<invalid>"` if the bytes are not valid
/// UTF-8, or `""` if the buffer starts with NUL / is empty.
#[inline]
pub fn bytes_as_str(buf: &[u8]) -> &str {
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    core::str::from_utf8(&buf[..len]).unwrap_or("<invalid>")
}

/// Copy `src` into a fixed NUL-padded buffer, truncating if necessary.
/// The final byte is always NUL.
#[inline]
pub fn str_into_fixed<const N: usize>(src: &str) -> [u8; N] {
    let mut out = [0u8; N];
    let len = src.len().min(N - 1);
    out[..len].copy_from_slice(&src.as_bytes()[..len]);
    out
}
