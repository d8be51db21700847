//! Number formatting for rendered pages.
//!
//! Populations are shown French-style: digits grouped by three and separated
//! by a narrow no-break space (U+202F), as in `67 391 582`.

/// Separator placed between digit groups.
pub const GROUP_SEPARATOR: char = '\u{202F}';

/// Format an integer with grouped thousands.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * GROUP_SEPARATOR.len_utf8());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }

    out
}

/// Format an average population: truncated to a whole number, then grouped.
pub fn group_average(avg: f64) -> String {
    if avg.is_finite() && avg >= 0.0 {
        group_digits(avg.trunc() as u64)
    } else {
        "0".to_string()
    }
}
