//! Presence-table uniqueness check over 7-bit ASCII.
//!
//! Inputs are byte sequences whose codes are expected to lie in `0..128`.
//! The table still carries one flag for every `u8` so a stray high byte
//! lands in its own slot instead of aliasing an ASCII code.

use serde::Serialize;

/// Number of symbols in the supported character set.
pub const ASCII_SIZE: usize = 128;

/// Flags needed to give every representable byte its own slot.
const TABLE_SIZE: usize = u8::MAX as usize + 1;

/// Return `true` if no byte occurs more than once in `s`.
///
/// Empty input is unique. Input longer than [`ASCII_SIZE`] is rejected
/// without being scanned since it cannot hold that many distinct codes.
pub fn is_unique(s: &[u8]) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.len() > ASCII_SIZE {
        return false;
    }

    let mut seen = [false; TABLE_SIZE];
    for &code in s {
        let slot = &mut seen[code as usize];
        if *slot {
            return false;
        }
        *slot = true;
    }
    true
}

/// [`is_unique`] over the bytes of a string.
pub fn is_unique_str(s: &str) -> bool {
    is_unique(s.as_bytes())
}

/// First repeated code found by a left-to-right scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    /// The repeated character code.
    pub code: u8,
    /// Position of its first occurrence.
    pub first: usize,
    /// Position where it occurs again.
    pub second: usize,
}

/// Locate the first repeat in `s`, if any.
///
/// Unlike [`is_unique`] this always scans, because a sequence longer than
/// the alphabet still has to be searched to find where it repeats.
pub fn first_duplicate(s: &[u8]) -> Option<Duplicate> {
    let mut first_seen: [Option<usize>; TABLE_SIZE] = [None; TABLE_SIZE];
    for (pos, &code) in s.iter().enumerate() {
        match first_seen[code as usize] {
            Some(first) => {
                return Some(Duplicate {
                    code,
                    first,
                    second: pos,
                })
            }
            None => first_seen[code as usize] = Some(pos),
        }
    }
    None
}
