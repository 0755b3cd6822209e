//! Currency and date formatting for display.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a minor-unit amount as a dollar string with thousands
/// separators, e.g. `123456` → `"$1,234.56"`. Zero renders as `"Free"`.
#[must_use]
pub fn format_price_cents(cents: i64) -> String {
    if cents == 0 {
        return "Free".to_owned();
    }
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let whole = abs / 100;
    let fraction = abs % 100;
    format!("{sign}${}.{fraction:02}", group_thousands(whole))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format the date part of an ISO 8601 timestamp as e.g. `"Aug 27, 2026"`.
/// Returns the input unchanged when it doesn't look like a date, so odd
/// backend values degrade to raw display instead of disappearing.
#[must_use]
pub fn format_date(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    let (Ok(month_num), Ok(day_num)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return iso.to_owned();
    };
    if year.len() != 4 || month_num == 0 || month_num > 12 || day_num == 0 || day_num > 31 {
        return iso.to_owned();
    }
    format!("{} {day_num}, {year}", MONTHS[month_num - 1])
}

/// Format a lesson duration in seconds as `"m:ss"` (or `"h:mm:ss"`).
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let rest = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{rest:02}")
    } else {
        format!("{minutes}:{rest:02}")
    }
}

/// Parse a user-entered price like `"12.34"`, `"12"`, or `"$12.34"` into
/// minor units. Returns `None` for anything that isn't a non-negative
/// amount with at most two decimal places.
#[must_use]
pub fn parse_price(input: &str) -> Option<i64> {
    let cleaned = input.trim().trim_start_matches('$').trim();
    if cleaned.is_empty() {
        return None;
    }
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned, ""),
    };
    if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole_value: i64 = whole.parse().ok()?;
    let fraction_value: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    whole_value
        .checked_mul(100)
        .and_then(|v| v.checked_add(fraction_value))
}
