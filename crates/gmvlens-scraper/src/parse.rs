//! Low-level string parsing for text fields scraped off rendered cards.
//!
//! These functions use manual byte scanning rather than `regex` to stay
//! dependency-light. See [`crate::tiktok`] for how they compose into full
//! card extraction.

/// Parses a rendered price string into rupiah display units.
///
/// Handles the format observed on search cards: an optional `"Rp"` prefix
/// and `.` thousands separators, e.g. `"Rp1.250.000"` → `1_250_000`.
/// A `,` separator is tolerated for the same reason. The scan keeps digits
/// only, so stray whitespace or a trailing label does not break it.
///
/// Returns `None` when the string contains no digits at all.
#[must_use]
pub(crate) fn parse_price_text(text: &str) -> Option<i64> {
    digits_only(text)
}

/// Parses a sold-count string into an estimated units-sold figure.
///
/// The source truncates counts for display (`"1.2RB terjual"`), so the
/// result is explicitly an estimate: every non-digit character is stripped
/// and whatever digits remain are read as one integer. `"1.2RB"` therefore
/// parses as `12` — faithfully mirroring the display string is all this
/// source allows.
///
/// Returns `0` when no digits remain after stripping.
#[must_use]
pub(crate) fn parse_sold_estimate(text: &str) -> i64 {
    digits_only(text).unwrap_or(0)
}

/// Collects every ASCII digit in `s` into a single integer, left to right.
///
/// Returns `None` when `s` has no digits, and saturates instead of
/// overflowing on absurdly long digit runs.
fn digits_only(s: &str) -> Option<i64> {
    let mut value: i64 = 0;
    let mut seen_digit = false;

    for b in s.bytes() {
        if b.is_ascii_digit() {
            seen_digit = true;
            value = value
                .saturating_mul(10)
                .saturating_add(i64::from(b - b'0'));
        }
    }

    seen_digit.then_some(value)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;
