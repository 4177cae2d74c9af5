//! Shared primitive types used across the desk.

/// Store-assigned staff identifier. Always positive once issued.
pub type StaffId = u64;

/// Hour of day, 0..=23.
pub type Hour = u32;
