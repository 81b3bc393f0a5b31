/// Format a finite f64 in shortest round-trip form. Parsing the result and
/// formatting it again yields the same text, which keeps re-rendered
/// documents byte-stable.
pub(crate) fn format_finite_f64(value: f64) -> String {
    debug_assert!(value.is_finite(), "format_finite_f64 called with non-finite value");
    let mut buf = ryu::Buffer::new();
    buf.format_finite(value).to_string()
}

/// Token emitted for a non-finite f64 by the permissive encoder.
/// These are not valid JSON; strict mode refuses them instead.
pub(crate) fn nonfinite_token(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}
