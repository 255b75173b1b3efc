//! Subscript representation for einsum specs.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

/// A subscript: the ordered label sequence of a single tensor.
///
/// For example, in `pqrs,rk->qpks` the subscripts are `pqrs`, `rk`, and
/// `qpks`. Each label is one `char` and names one axis; the subscript's
/// length is the rank of the tensor it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscript {
    labels: Vec<char>,
}

impl Subscript {
    /// Creates an empty subscript.
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Creates a subscript from a sequence of labels.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            labels: chars.into_iter().collect(),
        }
    }

    /// Adds a label.
    pub fn push(&mut self, c: char) {
        self.labels.push(c);
    }

    /// Returns the number of labels, i.e. the rank this subscript describes.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if there are no labels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns an iterator over the labels in axis order.
    pub fn labels(&self) -> impl Iterator<Item = char> + '_ {
        self.labels.iter().copied()
    }

    /// Returns the labels as a slice.
    pub fn as_slice(&self) -> &[char] {
        &self.labels
    }

    /// Checks whether this subscript contains a label.
    pub fn contains(&self, c: char) -> bool {
        self.labels.contains(&c)
    }

    /// Returns the axis position of a label (first occurrence).
    pub fn position(&self, c: char) -> Option<usize> {
        self.labels.iter().position(|&x| x == c)
    }

    /// Counts occurrences of a label.
    pub fn count(&self, c: char) -> usize {
        self.labels.iter().filter(|&&x| x == c).count()
    }

    /// Returns the first label that occurs more than once, if any.
    ///
    /// A repeated label within one subscript is invalid everywhere in this
    /// crate: operands would require diagonal extraction, and a repeated
    /// output label would make the permutation ambiguous.
    pub fn repeated_label(&self) -> Option<char> {
        self.labels
            .iter()
            .enumerate()
            .find(|&(i, &c)| self.labels[..i].contains(&c))
            .map(|(_, &c)| c)
    }
}

impl Default for Subscript {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Subscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.labels {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl From<&str> for Subscript {
    fn from(s: &str) -> Self {
        Self::from_chars(s.chars())
    }
}

impl<'a> IntoIterator for &'a Subscript {
    type Item = &'a char;
    type IntoIter = core::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

impl Subscript {
    /// Converts to a plain string of labels.
    pub fn to_label_string(&self) -> String {
        self.labels.iter().collect()
    }
}
