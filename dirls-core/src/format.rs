//! Size and mode columns of the listing.

use crate::entry::{EntryKind, PERMISSION_BITS};

/// Step between size units. Binary, so `1.0kB` is 1024 bytes.
pub const SIZE_MULTIPLIER: u64 = 1024;

const SIZE_PREFIXES: [char; 3] = ['G', 'M', 'k'];

/// Human readable size; directories have no meaningful size and print `-`.
pub fn format_size(kind: EntryKind, bytes: u64) -> String {
    if kind == EntryKind::Directory {
        return "-".to_string();
    }
    for (index, prefix) in SIZE_PREFIXES.iter().enumerate() {
        let exponent = (SIZE_PREFIXES.len() - index) as u32;
        let unit = SIZE_MULTIPLIER.pow(exponent);
        if bytes >= unit {
            return format!("{:.1}{}B", bytes as f64 / unit as f64, prefix);
        }
    }
    format!("{bytes}B")
}

/// Type character followed by `rwx` triplets for owner, group and others.
pub fn format_mode(mode: u32) -> String {
    const FLAGS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];

    let mut formatted = String::with_capacity(10);
    formatted.push(EntryKind::from(mode).symbol());
    for (bit, flag) in FLAGS {
        formatted.push(if mode & bit != 0 { flag } else { '-' });
    }
    formatted
}

pub fn format_permissions_octal(mode: u32) -> String {
    format!("{:o}", mode & PERMISSION_BITS)
}
