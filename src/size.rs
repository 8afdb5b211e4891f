//! Byte count conversions used for every size field in the report

const UNIT: u64 = 1024;
const BYTES_PER_MB: f64 = (UNIT * UNIT) as f64;

/// Unit letters for successive powers of 1024, starting at KB.
const UNIT_LETTERS: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Convert a byte count to megabytes (1 MB = 1024 * 1024 bytes). No rounding.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Round to two decimal places, half away from zero.
pub fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Megabytes rounded to two decimals, as written to `size` fields.
pub fn mb_rounded(bytes: u64) -> f64 {
    round_two_decimals(bytes_to_mb(bytes))
}

/// Format a size in bytes to human-readable format.
///
/// Below 1024 the raw count is printed (`"512 B"`); otherwise the value is
/// scaled by powers of 1024 and printed with two decimals (`"1.50 KB"`).
pub fn format_size(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.2} {}B", bytes as f64 / div as f64, UNIT_LETTERS[exp])
}
