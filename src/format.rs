//! Text rendering for failure functions and match positions.

use crate::error::KmpError;

/// Renders a failure function as `"[0, 1, 2]"`, or `"[]"` when empty.
pub fn format_failure_function(values: &[usize]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Like [`format_failure_function`], but the result never exceeds `max_len` bytes.
///
/// Output is cut at whole elements. An element is written only if the closing
/// bracket still fits after it; the bracket itself is dropped when there is
/// no room left.
///
/// ```
/// use kmp_search::format_failure_function_bounded;
///
/// assert_eq!(format_failure_function_bounded(&[0, 1, 2], 64).unwrap(), "[0, 1, 2]");
/// assert_eq!(format_failure_function_bounded(&[0, 1, 2], 6).unwrap(), "[0, 1]");
/// ```
pub fn format_failure_function_bounded(values: &[usize], max_len: usize) -> Result<String, KmpError> {
    if max_len == 0 {
        return Err(KmpError::BufferTooSmall { max_len });
    }

    let mut out = String::with_capacity(max_len);
    out.push('[');

    for (i, value) in values.iter().enumerate() {
        let number = value.to_string();
        let separator = if i > 0 { ", " } else { "" };
        // reserve one byte for ']'
        if out.len() + separator.len() + number.len() + 1 > max_len {
            break;
        }
        out.push_str(separator);
        out.push_str(&number);
    }

    if out.len() < max_len {
        out.push(']');
    }

    Ok(out)
}

/// Renders match offsets the way the demos print them: `"0, 9, 12"`.
pub fn format_positions(positions: &[usize]) -> String {
    if positions.is_empty() {
        return "none".to_string();
    }
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
