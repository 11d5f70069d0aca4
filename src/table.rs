//! The Pīnyīn collation table.
//!
//! This module defines:
//! - [`ALPHABET`]: The fixed, ordered character set that the collation is built from.
//! - [`RankMap`]: The read-only `char -> rank` lookup derived from it.
//! - [`rank_map`]: The process-wide table, built lazily on first use.
//!
//! Every character of the alphabet lives at or below `U+01DC` (`ǜ`), so the table is stored
//! as a dense, cache-aligned array indexed by code point instead of a hash map.

use cuneiform::cuneiform;
use std::fmt;
use std::sync::LazyLock;

/// The ordered collation alphabet.
///
/// Digits come first, then each letter of the Latin alphabet. Vowels carry their four tone
/// marks and are grouped as `a ā á ǎ à A Ā Á Ǎ À`, consonants as `b B`. `ü` follows `u`,
/// and the separators apostrophe, hyphen and space close the set.
pub const ALPHABET: &str = concat!(
    "0123456789",
    "aāáǎàAĀÁǍÀbBcCdDeēéěèEĒÉĚÈfFgGhHiīíǐìIĪÍǏÌ",
    "jJkKlLmMnNoōóǒòOŌÓǑÒpPqQrRsStTuūúǔùUŪÚǓÙ",
    "üǖǘǚǜÜǕǗǙǛvVwWxXyYzZ",
    "'- ",
);

/// Number of characters (not bytes) in [`ALPHABET`].
pub const ALPHABET_LEN: u32 = count_chars(ALPHABET);

/// One past the highest code point in [`ALPHABET`].
const DENSE_SLOTS: usize = 0x1DD;

/// Slot marker for code points outside the alphabet.
const NO_RANK: u8 = u8::MAX;

const fn count_chars(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        // Count lead bytes only; continuation bytes are 0b10xx_xxxx.
        if bytes[i] & 0xC0 != 0x80 {
            count += 1;
        }
        i += 1;
    }
    count
}

// Cache-aligned dense slots.
#[cuneiform]
struct DenseRanks {
    data: [u8; DENSE_SLOTS],
}

/// Read-only mapping from each alphabet character to its rank.
///
/// Ranks are the 0-based positions in [`ALPHABET`]. Characters outside the alphabet have no
/// defined rank; [`RankMap::rank`] assigns them `ALPHABET_LEN + code point` so that they sort
/// after every defined character and among themselves by code point.
///
/// # Examples
///
/// ```
/// use pinyinsort::table::{rank_map, ALPHABET_LEN};
///
/// let table = rank_map();
/// assert_eq!(table.get('0'), Some(0));
/// assert!(table.get('a') < table.get('ā'));
/// assert_eq!(table.get('#'), None);
/// assert_eq!(table.rank('#'), ALPHABET_LEN + '#' as u32);
/// ```
pub struct RankMap {
    slots: DenseRanks,
    len: u32,
}

impl RankMap {
    /// Returns the defined rank of `c`, or `None` when `c` is not in the alphabet.
    #[inline(always)]
    pub fn get(&self, c: char) -> Option<u32> {
        let slot = *self.slots.data.get(c as usize)?;
        (slot != NO_RANK).then_some(u32::from(slot))
    }

    /// Returns the effective rank of `c`, falling back to `ALPHABET_LEN + code point`.
    #[inline(always)]
    pub fn rank(&self, c: char) -> u32 {
        self.get(c).unwrap_or(ALPHABET_LEN + c as u32)
    }

    /// Returns `true` if `c` has a defined rank.
    pub fn contains(&self, c: char) -> bool {
        self.get(c).is_some()
    }

    /// Number of defined entries.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; the alphabet is a non-empty constant.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates `(character, rank)` pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        ALPHABET.chars().filter_map(|c| self.get(c).map(|r| (c, r)))
    }
}

impl fmt::Debug for RankMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Builds a fresh [`RankMap`] from [`ALPHABET`].
///
/// Most callers want [`rank_map`], which builds the table once per process.
pub fn build_rank_map() -> RankMap {
    let mut slots = DenseRanks {
        data: [NO_RANK; DENSE_SLOTS],
    };
    let mut len = 0;
    for (rank, c) in ALPHABET.chars().enumerate() {
        // Ranks fit in a byte and every code point fits the dense range.
        slots.data[c as usize] = rank as u8;
        len += 1;
    }
    tracing::debug!(entries = len, "built pinyin rank table");
    RankMap { slots, len }
}

static RANK_MAP: LazyLock<RankMap> = LazyLock::new(build_rank_map);

/// Returns the process-wide rank table.
///
/// The table is built on first access and never written again, so concurrent readers need no
/// synchronization beyond the one-time initialization.
#[inline]
pub fn rank_map() -> &'static RankMap {
    &RANK_MAP
}

/// Effective rank of `c` in the process-wide table.
#[inline]
pub fn rank(c: char) -> u32 {
    RANK_MAP.rank(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_expected_size() {
        assert_eq!(ALPHABET_LEN, 115);
        assert_eq!(ALPHABET.chars().count(), 115);
        assert_eq!(rank_map().len(), 115);
    }

    #[test]
    fn alphabet_fits_dense_slots() {
        assert!(ALPHABET.chars().all(|c| (c as usize) < DENSE_SLOTS));
        assert!((ALPHABET_LEN as usize) < NO_RANK as usize);
        assert_eq!(ALPHABET.chars().map(|c| c as usize).max(), Some(DENSE_SLOTS - 1));
    }

    #[test]
    fn ranks_are_positions() {
        let table = build_rank_map();
        for (position, c) in ALPHABET.chars().enumerate() {
            assert_eq!(table.get(c), Some(position as u32), "rank of {c:?}");
        }
    }

    #[test]
    fn ranks_are_unique() {
        let mut seen = std::collections::HashSet::new();
        assert!(ALPHABET.chars().all(|c| seen.insert(c)));
    }

    #[test]
    fn fallback_ranks_follow_defined_ranks() {
        let table = rank_map();
        let highest_defined = table.iter().map(|(_, r)| r).max().unwrap();
        for c in ['#', '$', '©', 'ß', '中', '\u{0304}', '\u{10FFFF}', '\0'] {
            assert!(!table.contains(c));
            assert!(table.rank(c) > highest_defined, "fallback for {c:?}");
        }
        assert!(table.rank('#') < table.rank('$'));
        assert!(table.rank('$') < table.rank('中'));
    }

    #[test]
    fn iter_is_rank_ordered() {
        let ranks: Vec<u32> = rank_map().iter().map(|(_, r)| r).collect();
        assert_eq!(ranks, (0..ALPHABET_LEN).collect::<Vec<_>>());
        let chars: String = rank_map().iter().map(|(c, _)| c).collect();
        assert_eq!(chars, ALPHABET);
    }

    #[test]
    fn vowel_families_interleave_case() {
        let table = rank_map();
        let lower = ['a', 'ā', 'á', 'ǎ', 'à'].map(|c| table.rank(c));
        let upper = ['A', 'Ā', 'Á', 'Ǎ', 'À'].map(|c| table.rank(c));
        assert!(lower.iter().max() < upper.iter().min());
        assert!(table.rank('À') < table.rank('b'));
        assert!(table.rank('Ù') < table.rank('ü'));
        assert!(table.rank('Ǜ') < table.rank('v'));
    }

    #[test]
    fn separators_close_the_alphabet() {
        let table = rank_map();
        assert!(table.rank('Z') < table.rank('\''));
        assert!(table.rank('\'') < table.rank('-'));
        assert!(table.rank('-') < table.rank(' '));
        assert_eq!(table.rank(' '), ALPHABET_LEN - 1);
    }
}
