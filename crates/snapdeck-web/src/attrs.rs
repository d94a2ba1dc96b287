// Pure parsing helpers for host-page attributes; no web-sys types here so
// they can be exercised on the host.

/// Slide count from a `data-slides` value. Zero and garbage are rejected.
#[inline]
pub fn parse_slide_count(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}

/// Millisecond value from a data attribute; must be finite and non-negative.
#[inline]
pub fn parse_millis(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Elements whose arrow/page keys belong to text editing, not the deck.
#[inline]
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}
