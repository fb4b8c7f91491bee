//! Money helpers
//!
//! All quote amounts are whole US dollars held in `i64`. Fractional-cent
//! precision is never needed, so rounding happens once, at the point a
//! percentage is applied.

/// Apply an integer percentage to a non-negative amount, rounding half up
///
/// Mirrors `round(amount × percent / 100)` for the non-negative inputs the
/// pricing engine produces. Returns `None` on overflow.
///
/// # Example
/// ```
/// use benefits_pricing_core_rs::core::money::percent_of;
///
/// assert_eq!(percent_of(1598, 50), Some(799));
/// assert_eq!(percent_of(1599, 50), Some(800)); // 799.5 rounds up
/// assert_eq!(percent_of(0, 50), Some(0));
/// ```
pub fn percent_of(amount: i64, percent: u32) -> Option<i64> {
    let scaled = amount.checked_mul(i64::from(percent))?;
    Some(scaled.checked_add(50)? / 100)
}

/// Format whole dollars as `$1,234` (no decimals)
///
/// # Example
/// ```
/// use benefits_pricing_core_rs::core::money::format_currency;
///
/// assert_eq!(format_currency(1598), "$1,598");
/// assert_eq!(format_currency(44999), "$44,999");
/// assert_eq!(format_currency(-1000), "-$1,000");
/// ```
pub fn format_currency(amount: i64) -> String {
    if amount < 0 {
        format!("-${}", group_thousands(amount.unsigned_abs()))
    } else {
        format!("${}", group_thousands(amount.unsigned_abs()))
    }
}

/// Format an integer with thousands separators
///
/// # Example
/// ```
/// use benefits_pricing_core_rs::core::money::format_number;
///
/// assert_eq!(format_number(1_000_000), "1,000,000");
/// assert_eq!(format_number(250), "250");
/// ```
pub fn format_number(value: i64) -> String {
    if value < 0 {
        format!("-{}", group_thousands(value.unsigned_abs()))
    } else {
        group_thousands(value.unsigned_abs())
    }
}

/// Format a whole percentage as `40%` or `6,571%`
pub fn format_percent(value: i64) -> String {
    format!("{}%", format_number(value))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
