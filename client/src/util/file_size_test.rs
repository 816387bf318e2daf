use super::*;

#[test]
fn zero_bytes_is_literal() {
    assert_eq!(format_file_size(0), "0 Bytes");
}

#[test]
fn small_counts_stay_in_bytes() {
    assert_eq!(format_file_size(1), "1 Bytes");
    assert_eq!(format_file_size(1023), "1023 Bytes");
}

#[test]
fn kilobyte_boundaries() {
    assert_eq!(format_file_size(1024), "1.00 KB");
    assert_eq!(format_file_size(1536), "1.50 KB");
    assert_eq!(format_file_size(1024 * 1024 - 1), "1024.00 KB");
}

#[test]
fn megabyte_values() {
    assert_eq!(format_file_size(1024 * 1024), "1.00 MB");
    assert_eq!(format_file_size(2 * 1024 * 1024), "2.00 MB");
    assert_eq!(format_file_size(10 * 1024 * 1024), "10.00 MB");
}

#[test]
fn decimal_megabytes_round_to_two_places() {
    assert_eq!(format_file_size(2_000_000), "1.91 MB");
}

#[test]
fn units_cap_at_megabytes() {
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3072.00 MB");
}
