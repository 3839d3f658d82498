/// Fixed chart palette, indexed by the UID's character-code sum.
pub const PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD", "#D4A5A5", "#9B59B6", "#3498DB",
    "#E67E22", "#2ECC71",
];

/// Deterministic default color for a UID.
#[must_use]
pub fn color_for_uid(uid: &str) -> &'static str {
    let sum: u64 = uid.chars().map(|c| u64::from(u32::from(c))).sum();
    PALETTE[(sum % PALETTE.len() as u64) as usize]
}

/// Whether `value` is a `#RRGGBB` color.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
