//! # pinyinsort
//!
//! `pinyinsort` sorts words written in Hànyǔ Pīnyīn into alphabetical word order, following the
//! rules John DeFrancis set out for the *ABC Chinese-English Dictionary* (Reader's Guide,
//! "Arrangement of Entries").
//!
//! Words are compared **letter by letter, not syllable by syllable**. Pīnyīn is written in the
//! Latin alphabet, and a custom character ranking on top of it is all the collation needs.
//!
//! ## Ordering Rules
//!
//! 1. **Alphabetical order**: base letters `a`–`z`, compared letter by letter.
//! 2. **`u` before `ü`**, and `U` before `Ü`.
//! 3. **Tones**: `0 < 1 < 2 < 3 < 4`, e.g. `ma < mā < má < mǎ < mà`.
//! 4. **Case**: lowercase and mixed-case words come before uppercase ones when they are
//!    otherwise identical (`bao < Bao < BAO`).
//! 5. **Separators**: apostrophe `<` hyphen `<` space.
//!
//! Digits `0`–`9` sort before all letters. Any other character sorts after the Pīnyīn
//! alphabet by its Unicode code point, so every pair of strings has a well-defined order.
//!
//! Input is expected in precomposed (NFC) form: `ǎ` must be the single character `U+01CE`,
//! not `a` followed by a combining caron. Decomposed text falls back to code-point order.
//!
//! ## Usage
//!
//! ### Comparing
//!
//! ```rust
//! use pinyinsort::compare;
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare("bǎoyǔ", "bǎoyù"), Ordering::Less);
//! assert_eq!(compare("lù", "lü"), Ordering::Less);
//! ```
//!
//! ### Sorting strings
//!
//! ```rust
//! use pinyinsort::sort_strings;
//!
//! let words = ["bǎozhàng", "Bǎoyǔ", "bǎoyù"];
//! assert_eq!(sort_strings(&words), ["Bǎoyǔ", "bǎoyù", "bǎozhàng"]);
//! ```
//!
//! ### Sorting records
//!
//! Records are sorted by a named field (any [`SortItem`], such as `serde_json::Value`) or by
//! an extractor closure, which works for any item type. Extra fields travel with their record.
//!
//! ```rust
//! use pinyinsort::{sort_pinyin, KeyAccessor, SortOptions};
//! use serde_json::json;
//!
//! let entries = vec![
//!     json!({ "pinyin": "bǎozhàng", "meaning": "guarantee" }),
//!     json!({ "pinyin": "Bǎoyǔ", "meaning": "Bao Yu (name)" }),
//!     json!({ "pinyin": "bǎoyù", "meaning": "jade" }),
//! ];
//!
//! let sorted = sort_pinyin(&entries, &KeyAccessor::field("pinyin"), SortOptions::default())?;
//! assert_eq!(sorted[1]["meaning"], "jade");
//!
//! let reversed = sort_pinyin(
//!     &entries,
//!     &KeyAccessor::extractor(|e: &serde_json::Value| e["pinyin"].as_str().unwrap_or("")),
//!     SortOptions::new().with_reverse(true),
//! )?;
//! assert_eq!(reversed[0]["meaning"], "guarantee");
//! # Ok::<(), pinyinsort::KeyError>(())
//! ```
//!
//! ### Case modes
//!
//! [`CaseMode::Folded`] (the default) compares lowercased text first and uses case only to
//! break ties. [`CaseMode::Exact`] compares the text as written, so every capitalized word sorts
//! after all lowercase words starting with the same letter.
//!
//! ## Performance Characteristics
//!
//! - **Lookup**: the rank table is a dense, cache-aligned array built once per process.
//! - **Comparison**: O(m) in the length of the two strings, with no allocation.
//! - **Sorting**: O(N log N) comparisons; each key is extracted exactly once per call.

pub mod algo;
pub mod compare;
pub mod core;
pub mod table;

pub use algo::{sort_pinyin, sort_pinyin_by_key, sort_pinyin_indices, sort_pinyin_mut, sort_strings};
pub use compare::{CaseMode, Collator, Pinyin, compare, rank_difference};
pub use crate::core::{KeyAccessor, KeyError, KeyFault, SortItem, SortOptions};
pub use table::{ALPHABET, RankMap, build_rank_map, rank, rank_map};

pub mod prelude {
    pub use crate::algo::{
        sort_pinyin, sort_pinyin_by_key, sort_pinyin_indices, sort_pinyin_mut, sort_strings,
    };
    pub use crate::compare::{CaseMode, Collator, Pinyin, compare};
    pub use crate::core::{KeyAccessor, KeyError, SortItem, SortOptions};
}
