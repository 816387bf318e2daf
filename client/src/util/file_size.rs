//! Human-readable byte counts for the import preview.

#[cfg(test)]
#[path = "file_size_test.rs"]
mod file_size_test;

const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];
const STEP: u64 = 1024;

/// Format `bytes` with binary units, two decimals for KB and MB.
///
/// Picks the largest unit whose scaled value is at least 1, capped at MB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let mut unit = 0;
    let mut scale = 1_u64;
    while unit + 1 < UNITS.len() && bytes >= scale * STEP {
        scale *= STEP;
        unit += 1;
    }

    if unit == 0 {
        return format!("{bytes} Bytes");
    }

    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64 / scale as f64;
    format!("{value:.2} {}", UNITS[unit])
}
