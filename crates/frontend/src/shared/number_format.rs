//! Number formatting helpers

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable file size with base-1024 units and up to two decimals.
///
/// Trailing zeros are dropped: 1536 -> "1.5 KB", 1048576 -> "1 MB".
/// Anything past gigabytes stays in GB.
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_file_size;
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u64;
    while unit + 1 < SIZE_UNITS.len() && bytes / divisor >= 1024 {
        divisor *= 1024;
        unit += 1;
    }

    // Round half up on the hundredths, like Number.prototype.toFixed(2)
    let cents = (bytes as f64 / divisor as f64 * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let value = if frac == 0 {
        whole.to_string()
    } else if frac % 10 == 0 {
        format!("{}.{}", whole, frac / 10)
    } else {
        format!("{}.{:02}", whole, frac)
    };

    format!("{} {}", value, SIZE_UNITS[unit])
}
