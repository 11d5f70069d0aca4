//! Sorting by Pīnyīn collation.
//!
//! Every entry point follows the same plan:
//! - **Extract**: each item's key is looked up once, through a [`KeyAccessor`] or a closure.
//! - **Order**: the item indices are stable-sorted by comparing their keys with a [`Collator`].
//! - **Reverse**: with [`SortOptions::reverse`], the finished ascending order is reversed end to
//!   end. Equal keys therefore appear in the opposite of their input order.
//!
//! The main entry points are [`sort_pinyin`], [`sort_pinyin_indices`] and [`sort_pinyin_mut`].

use crate::compare::Collator;
use crate::core::{KeyAccessor, KeyError, SortOptions};

/// Returns a sorted copy of `items`.
///
/// The input is left untouched. Fails with the first item whose key is missing or is not a
/// string.
///
/// # Examples
///
/// ```
/// use pinyinsort::{sort_pinyin, CaseMode, KeyAccessor, SortOptions};
///
/// let words = ["bǎozhàng", "Bǎoyǔ", "bǎoyù"];
///
/// let sorted = sort_pinyin(&words, &KeyAccessor::identity(), SortOptions::default()).unwrap();
/// assert_eq!(sorted, ["Bǎoyǔ", "bǎoyù", "bǎozhàng"]);
///
/// let exact = SortOptions::new().with_case_mode(CaseMode::Exact);
/// let sorted = sort_pinyin(&words, &KeyAccessor::identity(), exact).unwrap();
/// assert_eq!(sorted, ["bǎoyù", "bǎozhàng", "Bǎoyǔ"]);
/// ```
pub fn sort_pinyin<T: Clone>(
    items: &[T],
    key: &KeyAccessor<'_, T>,
    options: SortOptions,
) -> Result<Vec<T>, KeyError> {
    let indices = sort_pinyin_indices(items, key, options)?;
    Ok(indices.into_iter().map(|i| items[i].clone()).collect())
}

/// Computes the order of `items` without moving them.
///
/// Returns indices such that `items[indices[0]], items[indices[1]], ...` is the sorted
/// sequence.
///
/// # Examples
///
/// ```
/// use pinyinsort::{sort_pinyin_indices, KeyAccessor, SortOptions};
///
/// let words = vec!["lü", "lù", "Lǚ"];
/// let key = KeyAccessor::identity();
/// let indices = sort_pinyin_indices(&words, &key, SortOptions::default()).unwrap();
///
/// assert_eq!(indices, vec![1, 0, 2]); // lù, lü, Lǚ
/// ```
pub fn sort_pinyin_indices<T>(
    items: &[T],
    key: &KeyAccessor<'_, T>,
    options: SortOptions,
) -> Result<Vec<usize>, KeyError> {
    let keys = extract_keys(items, key)?;
    Ok(ordered_indices(&keys, options))
}

/// Sorts `items` in place.
///
/// All keys are extracted before anything moves, so on error the slice is unchanged.
///
/// # Examples
///
/// ```
/// use pinyinsort::{sort_pinyin_mut, KeyAccessor, SortOptions};
///
/// let mut words = vec!["zǐ".to_string(), "Zǐ".to_string(), "ǎ".to_string()];
/// sort_pinyin_mut(&mut words, &KeyAccessor::identity(), SortOptions::default()).unwrap();
///
/// assert_eq!(words, ["ǎ", "zǐ", "Zǐ"]);
/// ```
pub fn sort_pinyin_mut<T>(
    items: &mut [T],
    key: &KeyAccessor<'_, T>,
    options: SortOptions,
) -> Result<(), KeyError> {
    let indices = sort_pinyin_indices(items, key, options)?;
    apply_permutation(items, indices);
    Ok(())
}

/// Returns a sorted copy of `items`, keyed by a closure.
///
/// A typed closure always yields a string, so unlike [`sort_pinyin`] with
/// [`KeyAccessor::extractor`] this returns the sorted items directly.
///
/// # Examples
///
/// ```
/// use pinyinsort::{sort_pinyin_by_key, SortOptions};
///
/// let entries = [("bǎozhàng", "guarantee"), ("bǎoyù", "jade")];
/// let sorted = sort_pinyin_by_key(&entries, |e| e.0, SortOptions::default());
///
/// assert_eq!(sorted[0].1, "jade");
/// ```
pub fn sort_pinyin_by_key<T, F>(items: &[T], key: F, options: SortOptions) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let keys: Vec<&str> = items.iter().map(key).collect();
    ordered_indices(&keys, options)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

/// Returns `items` sorted ascending with the default options.
///
/// ```
/// use pinyinsort::sort_strings;
///
/// assert_eq!(sort_strings(&["bāo", "bao", "báo"]), ["bao", "bāo", "báo"]);
/// ```
pub fn sort_strings<S: AsRef<str> + Clone>(items: &[S]) -> Vec<S> {
    sort_pinyin_by_key(items, |s| s.as_ref(), SortOptions::default())
}

fn extract_keys<'a, T>(
    items: &'a [T],
    key: &KeyAccessor<'_, T>,
) -> Result<Vec<&'a str>, KeyError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            key.key_of(item)
                .map_err(|fault| fault.at(index, key.field_name()))
        })
        .collect()
}

/// Stable ascending order of `keys`, reversed end to end when requested.
fn ordered_indices(keys: &[&str], options: SortOptions) -> Vec<usize> {
    tracing::trace!(
        items = keys.len(),
        reverse = options.reverse,
        case_mode = ?options.case_mode,
        "sorting pinyin keys"
    );

    let collator = Collator::new(options.case_mode);
    let mut indices: Vec<usize> = (0..keys.len()).collect();
    // `sort_by` is stable: equal keys keep their input order.
    indices.sort_by(|&a, &b| collator.compare(keys[a], keys[b]));

    if options.reverse {
        indices.reverse();
    }
    indices
}

/// Moves `data[indices[i]]` to position `i`, following permutation cycles with swaps.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as placed
            current = next;
        }
        indices[current] = current;
    }
}
