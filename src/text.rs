//! String interpolation and padding.

pub fn hello(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Left-pad with spaces to `width`. Strings already at or over the width
/// come back unchanged.
pub fn pad_start(s: &str, width: usize) -> String {
    format!("{s:>width$}")
}

/// Right-pad with spaces to `width`.
pub fn pad_end(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}
