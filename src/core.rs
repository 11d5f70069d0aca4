//! Core traits and types for key extraction.
//!
//! This module defines:
//! - [`KeyAccessor`]: How each item's Pīnyīn key is located (the item itself, a named field,
//!   or an extractor function that works for any item type).
//! - [`SortItem`]: The trait item types implement to expose their identity key and fields.
//! - [`SortOptions`]: Direction and case handling for a sort call.
//! - [`KeyError`]: Why a key could not be extracted.

use crate::compare::CaseMode;
use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use thiserror::Error;

/// Reasons a sort key could not be extracted from an item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("sort key of item {index} is {found}, not a string")]
    TypeMismatch { index: usize, found: &'static str },
    #[error("item {index} has no field `{field}`")]
    MissingField { index: usize, field: String },
}

impl KeyError {
    /// Position of the offending item in the input.
    pub fn index(&self) -> usize {
        match self {
            KeyError::TypeMismatch { index, .. } | KeyError::MissingField { index, .. } => *index,
        }
    }
}

/// Key extraction failure for a single item, before its position is known.
///
/// [`SortItem`] implementations return this; the sort functions attach the item index and
/// field name to produce a [`KeyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFault {
    /// The key exists but is not a string. `found` names what it is instead.
    TypeMismatch { found: &'static str },
    /// The item has no such field.
    MissingField,
}

impl KeyFault {
    pub(crate) fn at(self, index: usize, field: Option<&str>) -> KeyError {
        match self {
            KeyFault::TypeMismatch { found } => KeyError::TypeMismatch { index, found },
            KeyFault::MissingField => KeyError::MissingField {
                index,
                field: field.unwrap_or_default().to_owned(),
            },
        }
    }
}

/// A value that can be sorted by its Pīnyīn key.
///
/// Both methods have defaults that report a fault, so a type only implements what applies to
/// it. Strings provide [`SortItem::identity_key`]; records provide [`SortItem::field_key`].
///
/// # Examples
///
/// ```
/// use pinyinsort::core::{KeyFault, SortItem};
///
/// struct Entry {
///     pinyin: String,
///     meaning: String,
/// }
///
/// impl SortItem for Entry {
///     fn field_key(&self, field: &str) -> Result<&str, KeyFault> {
///         match field {
///             "pinyin" => Ok(self.pinyin.as_str()),
///             "meaning" => Ok(self.meaning.as_str()),
///             _ => Err(KeyFault::MissingField),
///         }
///     }
/// }
/// ```
pub trait SortItem {
    /// The item itself as a key. Only string-like items have one.
    fn identity_key(&self) -> Result<&str, KeyFault> {
        Err(KeyFault::TypeMismatch {
            found: self.kind(),
        })
    }

    /// The string stored under `field`.
    fn field_key(&self, _field: &str) -> Result<&str, KeyFault> {
        Err(KeyFault::MissingField)
    }

    /// Short name of what this item is, used in error messages.
    fn kind(&self) -> &'static str {
        "a record"
    }
}

impl SortItem for str {
    fn identity_key(&self) -> Result<&str, KeyFault> {
        Ok(self)
    }

    fn kind(&self) -> &'static str {
        "a string"
    }
}

impl SortItem for String {
    fn identity_key(&self) -> Result<&str, KeyFault> {
        Ok(self.as_str())
    }

    fn kind(&self) -> &'static str {
        "a string"
    }
}

impl SortItem for Box<str> {
    fn identity_key(&self) -> Result<&str, KeyFault> {
        Ok(&**self)
    }

    fn kind(&self) -> &'static str {
        "a string"
    }
}

impl SortItem for Cow<'_, str> {
    fn identity_key(&self) -> Result<&str, KeyFault> {
        Ok(&**self)
    }

    fn kind(&self) -> &'static str {
        "a string"
    }
}

impl<T: SortItem + ?Sized> SortItem for &T {
    fn identity_key(&self) -> Result<&str, KeyFault> {
        (**self).identity_key()
    }

    fn field_key(&self, field: &str) -> Result<&str, KeyFault> {
        (**self).field_key(field)
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

impl<K, V, S> SortItem for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn field_key(&self, field: &str) -> Result<&str, KeyFault> {
        self.get(field)
            .map(AsRef::as_ref)
            .ok_or(KeyFault::MissingField)
    }

    fn kind(&self) -> &'static str {
        "a map"
    }
}

impl<K, V> SortItem for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn field_key(&self, field: &str) -> Result<&str, KeyFault> {
        self.get(field)
            .map(AsRef::as_ref)
            .ok_or(KeyFault::MissingField)
    }

    fn kind(&self) -> &'static str {
        "a map"
    }
}

// JSON records: strings are their own key, objects expose their string members.
impl SortItem for serde_json::Value {
    fn identity_key(&self) -> Result<&str, KeyFault> {
        match self {
            serde_json::Value::String(s) => Ok(s.as_str()),
            other => Err(KeyFault::TypeMismatch {
                found: other.kind(),
            }),
        }
    }

    fn field_key(&self, field: &str) -> Result<&str, KeyFault> {
        let serde_json::Value::Object(members) = self else {
            return Err(KeyFault::MissingField);
        };
        match members.get(field) {
            Some(serde_json::Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(KeyFault::TypeMismatch {
                found: other.kind(),
            }),
            None => Err(KeyFault::MissingField),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        }
    }
}

/// Locates the Pīnyīn key of each item.
///
/// The accessor is chosen once per sort call. [`KeyAccessor::identity`] and
/// [`KeyAccessor::field`] go through [`SortItem`]; [`KeyAccessor::extractor`] works for any
/// item type, including foreign types that cannot implement the trait.
///
/// ```
/// use pinyinsort::KeyAccessor;
///
/// struct Entry {
///     pinyin: String,
/// }
///
/// let by_value: KeyAccessor<'_, String> = KeyAccessor::identity();
/// let by_field: KeyAccessor<'_, serde_json::Value> = KeyAccessor::field("pinyin");
/// let by_fn = KeyAccessor::extractor(|e: &Entry| e.pinyin.as_str());
/// ```
pub struct KeyAccessor<'f, T> {
    lookup: Lookup<'f, T>,
}

enum Lookup<'f, T> {
    Identity(fn(&T) -> Result<&str, KeyFault>),
    Field(&'f str, for<'a, 'b> fn(&'a T, &'b str) -> Result<&'a str, KeyFault>),
    Extractor(Box<dyn Fn(&T) -> &str + 'f>),
}

impl<'f, T: SortItem> KeyAccessor<'f, T> {
    /// The item is its own key ([`SortItem::identity_key`]).
    pub fn identity() -> Self {
        Self {
            lookup: Lookup::Identity(T::identity_key),
        }
    }

    /// The key is the named field ([`SortItem::field_key`]).
    pub fn field(name: &'f str) -> Self {
        Self {
            lookup: Lookup::Field(name, T::field_key),
        }
    }
}

impl<'f, T> KeyAccessor<'f, T> {
    /// The key is computed by `f`.
    pub fn extractor<F>(f: F) -> Self
    where
        F: Fn(&T) -> &str + 'f,
    {
        Self {
            lookup: Lookup::Extractor(Box::new(f)),
        }
    }

    /// The field name, for [`KeyAccessor::field`].
    pub fn field_name(&self) -> Option<&'f str> {
        match self.lookup {
            Lookup::Field(name, _) => Some(name),
            _ => None,
        }
    }

    /// Extracts the key of a single item.
    #[inline]
    pub fn key_of<'a>(&self, item: &'a T) -> Result<&'a str, KeyFault> {
        match &self.lookup {
            Lookup::Identity(identity_key) => identity_key(item),
            Lookup::Field(name, field_key) => field_key(item, *name),
            Lookup::Extractor(f) => Ok(f(item)),
        }
    }
}

impl<T: SortItem> Default for KeyAccessor<'_, T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> fmt::Debug for KeyAccessor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lookup {
            Lookup::Identity(_) => f.write_str("Identity"),
            Lookup::Field(name, _) => f.debug_tuple("Field").field(name).finish(),
            Lookup::Extractor(_) => f.write_str("Extractor(..)"),
        }
    }
}

/// Options for a sort call.
///
/// `reverse` flips the finished ascending result end to end, so items with equal keys come
/// out in the opposite of their input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    pub reverse: bool,
    pub case_mode: CaseMode,
}

impl SortOptions {
    pub const fn new() -> Self {
        Self {
            reverse: false,
            case_mode: CaseMode::Folded,
        }
    }

    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub const fn with_case_mode(mut self, case_mode: CaseMode) -> Self {
        self.case_mode = case_mode;
        self
    }
}
