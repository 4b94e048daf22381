//! Top-level domain extraction.

/// Returns the text after the last `.` in `domain`.
///
/// A domain without any dot is returned whole, and a trailing dot yields an
/// empty label. No DNS syntax checks are made.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_tld("example.com"), "com");
/// assert_eq!(extract_tld("localhost"), "localhost");
/// ```
pub fn extract_tld(domain: &str) -> &str {
    match domain.rfind('.') {
        Some(dot) => &domain[dot + 1..],
        None => domain,
    }
}
