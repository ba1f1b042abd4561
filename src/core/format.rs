//! Text shown inside the tooltip.

/// Formats an hour/minute pair on a 12-hour clock, e.g. `12:05 AM`, `2:30 PM`.
#[must_use]
pub fn format_clock_time(hour: u8, minute: u32) -> String {
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {suffix}")
}

/// Formats a temperature as a truncated integer with a degree sign, e.g. `18°`.
///
/// Truncation is toward zero, so `-0.6` reads `0°`.
#[must_use]
pub fn format_temperature(temperature: f64) -> String {
    let whole = temperature.trunc() as i64;
    format!("{whole}°")
}

/// Converts a dense minute offset into a wall-clock minute.
///
/// At the default resolution of 60 this is the identity; other resolutions are
/// rescaled onto `0..=59`.
#[must_use]
pub fn minute_of_hour(minute_offset: u32, resolution: u32) -> u32 {
    if resolution == 0 || resolution == 60 {
        return minute_offset.min(59);
    }
    (u64::from(minute_offset) * 60 / u64::from(resolution)).min(59) as u32
}
