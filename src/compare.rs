//! The Pīnyīn comparator.
//!
//! Strings are compared character by character (whole code points, never bytes) using the
//! ranks from [`crate::table`]. The default [`CaseMode::Folded`] comparison runs in two phases:
//!
//! 1. **Folded pass**: both strings are lowercased and their rank sequences compared
//!    lexicographically. Base letters, tones and separators decide the order here.
//! 2. **Exact pass**: only when the folded pass finds the strings equal, the original strings
//!    are compared the same way. Uppercase letters rank above their lowercase forms, so
//!    `bao < Bao < BAO`.
//!
//! The main entry points are [`compare`] and [`rank_difference`].

use crate::table::{RankMap, rank_map};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// How letter case participates in the comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Compare lowercased text first, break ties on the original text.
    #[default]
    Folded,
    /// Compare the original text only. Every capitalized word sorts after all lowercase words
    /// sharing its first letter.
    Exact,
}

/// A configured Pīnyīn comparator.
///
/// # Examples
///
/// ```
/// use pinyinsort::{CaseMode, Collator};
/// use std::cmp::Ordering;
///
/// let folded = Collator::default();
/// assert_eq!(folded.compare("Bǎoyǔ", "bǎoyù"), Ordering::Less);
///
/// let exact = Collator::new(CaseMode::Exact);
/// assert_eq!(exact.compare("Bǎoyǔ", "bǎoyù"), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Collator {
    pub case_mode: CaseMode,
}

impl Collator {
    pub const fn new(case_mode: CaseMode) -> Self {
        Self { case_mode }
    }

    /// Orders `a` relative to `b`.
    #[inline]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.rank_difference(a, b).cmp(&0)
    }

    /// Signed form of [`Collator::compare`].
    ///
    /// Returns the difference between the first pair of ranks that differ, or the difference
    /// in length when one rank sequence is a prefix of the other, or zero when both are equal.
    pub fn rank_difference(&self, a: &str, b: &str) -> i64 {
        let table = rank_map();
        if self.case_mode == CaseMode::Folded {
            let folded = rank_delta(folded_ranks(table, a), folded_ranks(table, b));
            if folded != 0 {
                return folded;
            }
        }
        rank_delta(exact_ranks(table, a), exact_ranks(table, b))
    }
}

#[inline]
fn exact_ranks<'a>(table: &'a RankMap, s: &'a str) -> impl Iterator<Item = u32> + 'a {
    s.chars().map(|c| table.rank(c))
}

#[inline]
fn folded_ranks<'a>(table: &'a RankMap, s: &'a str) -> impl Iterator<Item = u32> + 'a {
    s.chars().flat_map(char::to_lowercase).map(|c| table.rank(c))
}

/// Lexicographic comparison of two rank sequences.
fn rank_delta(mut a: impl Iterator<Item = u32>, mut b: impl Iterator<Item = u32>) -> i64 {
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) if x != y => return i64::from(x) - i64::from(y),
            (Some(_), Some(_)) => {}
            // Shorter sequence first; the signed length difference is the result.
            (Some(_), None) => return 1 + a.count() as i64,
            (None, Some(_)) => return -1 - b.count() as i64,
            (None, None) => return 0,
        }
    }
}

/// Orders two Pīnyīn strings with the default two-phase [`Collator`].
///
/// # Examples
///
/// ```
/// use pinyinsort::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("mā", "má"), Ordering::Less);
/// assert_eq!(compare("bao", "Bao"), Ordering::Less);
/// assert_eq!(compare("bao'an", "bao-an"), Ordering::Less);
/// assert_eq!(compare("lü", "lü"), Ordering::Equal);
/// ```
#[inline]
pub fn compare(a: &str, b: &str) -> Ordering {
    Collator::default().compare(a, b)
}

/// Signed comparison result with the default two-phase [`Collator`].
///
/// Negative when `a` sorts first, positive when `b` does, zero when they are equal.
pub fn rank_difference(a: &str, b: &str) -> i64 {
    Collator::default().rank_difference(a, b)
}

/// A string ordered by Pīnyīn collation.
///
/// `Pinyin` makes the default comparison available wherever [`Ord`] is expected: as a
/// `BTreeMap` key, with `slice::sort`, `Iterator::max` and so on. The collation treats two
/// strings as equal only when they are identical, so `Eq` and `Hash` follow the underlying
/// string.
///
/// ```
/// use pinyinsort::Pinyin;
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<_> = ["zǐ", "Bǎo", "bǎo"].into_iter().map(Pinyin).collect();
/// let ordered: Vec<&str> = set.iter().map(|p| p.as_str()).collect();
/// assert_eq!(ordered, ["bǎo", "Bǎo", "zǐ"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Pinyin<S>(pub S);

impl<S: AsRef<str>> Pinyin<S> {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: AsRef<str>> AsRef<str> for Pinyin<S> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<S: AsRef<str>> From<S> for Pinyin<S> {
    fn from(value: S) -> Self {
        Self(value)
    }
}

impl<S: AsRef<str>> fmt::Display for Pinyin<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<S: AsRef<str>> PartialEq for Pinyin<S> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<S: AsRef<str>> Eq for Pinyin<S> {}

impl<S: AsRef<str>> PartialOrd for Pinyin<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: AsRef<str>> Ord for Pinyin<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.as_str(), other.as_str())
    }
}

impl<S: AsRef<str>> Hash for Pinyin<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}
