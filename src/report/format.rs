//! Currency and unit formatting for report and advisory text.

/// Naira sign used as the currency prefix.
pub const CURRENCY_SYMBOL: &str = "\u{20A6}";

const MAX_EXACT_CENTS: f64 = 1.0e18;

/// Formats an amount as naira with thousands separators.
///
/// At most two fraction digits are shown and trailing zeros are dropped.
/// Non-finite amounts render as zero.
///
/// # Examples
///
/// ```
/// use enerlyst::report::format::format_naira;
///
/// assert_eq!(format_naira(16000.0), "₦16,000");
/// assert_eq!(format_naira(1234.5), "₦1,234.5");
/// assert_eq!(format_naira(2_937_283.2), "₦2,937,283.2");
/// ```
pub fn format_naira(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{CURRENCY_SYMBOL}0");
    }
    let scaled = (amount.abs() * 100.0).round();
    // f64 has no cent precision at this size; whole naira come from the float digits.
    let (whole, cents) = if scaled < MAX_EXACT_CENTS {
        let total_cents = scaled as u64;
        (group_thousands(total_cents / 100), total_cents % 100)
    } else {
        (group_digits(&format!("{:.0}", amount.abs())), 0)
    };

    let fraction = match cents {
        0 => String::new(),
        c if c % 10 == 0 => format!(".{}", c / 10),
        c => format!(".{c:02}"),
    };
    let sign = if amount < 0.0 && scaled > 0.0 { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{whole}{fraction}")
}

/// Formats a value with a fixed number of decimals and a unit suffix.
///
/// ```
/// use enerlyst::report::format::format_with_unit;
///
/// assert_eq!(format_with_unit(12.3, 2, "kWh"), "12.30 kWh");
/// ```
pub fn format_with_unit(value: f64, decimals: usize, unit: &str) -> String {
    format!("{value:.decimals$} {unit}")
}

/// Inserts a comma between every group of three digits.
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
