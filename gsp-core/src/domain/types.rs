//! Core value types: items, elements, transactions and candidates

use smallvec::SmallVec;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

/// An atomic, value-comparable item.
///
/// Blanket-implemented for every type with the required bounds, so `String`,
/// `&str`, integers and user-defined label types all work directly. `Ord` keeps
/// item sets and rendered output deterministic.
pub trait Item: Clone + Eq + Hash + Ord + fmt::Debug + Send + Sync {}

impl<T> Item for T where T: Clone + Eq + Hash + Ord + fmt::Debug + Send + Sync {}

/// One position of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged),
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de> + Ord"
    ))
)]
pub enum Element<T> {
    /// A single item
    Item(T),
    /// Items occurring simultaneously at this position
    ItemSet(BTreeSet<T>),
}

impl<T: Item> Element<T> {
    /// Create a single-item element
    pub fn item(item: T) -> Self {
        Element::Item(item)
    }

    /// Create an item-set element
    pub fn set<I: IntoIterator<Item = T>>(items: I) -> Self {
        Element::ItemSet(items.into_iter().collect())
    }

    /// Whether `item` matches this position.
    ///
    /// A single item matches by value equality, an item set matches when
    /// `item` is one of its members.
    pub fn contains(&self, item: &T) -> bool {
        match self {
            Element::Item(own) => own == item,
            Element::ItemSet(set) => set.contains(item),
        }
    }

    /// Iterate over the items at this position
    pub fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            Element::Item(item) => Box::new(std::iter::once(item)),
            Element::ItemSet(set) => Box::new(set.iter()),
        }
    }
}

impl<T: Item> From<T> for Element<T> {
    fn from(item: T) -> Self {
        Element::Item(item)
    }
}

impl<T: fmt::Display> fmt::Display for Element<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Item(item) => write!(f, "{item}"),
            Element::ItemSet(set) => {
                write!(f, "{{")?;
                for (i, item) in set.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// An ordered sequence of elements
pub type Transaction<T> = Vec<Element<T>>;

/// A flat, ordered sequence of items being tested for support
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent),
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>"
    ))
)]
pub struct Candidate<T>(SmallVec<[T; 4]>);

impl<T: Item> Candidate<T> {
    /// Create a candidate from its items
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        Candidate(items.into_iter().collect())
    }

    /// Create a length-1 candidate
    pub fn single(item: T) -> Self {
        let mut items = SmallVec::new();
        items.push(item);
        Candidate(items)
    }

    /// Build `first + middle + last`
    pub fn joined(first: &T, middle: &[T], last: &T) -> Self {
        let mut items = SmallVec::with_capacity(middle.len() + 2);
        items.push(first.clone());
        items.extend(middle.iter().cloned());
        items.push(last.clone());
        Candidate(items)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the candidate has no items
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The items in order
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// All items except the first one
    pub fn suffix(&self) -> &[T] {
        self.0.get(1..).unwrap_or(&[])
    }

    /// All items except the last one
    pub fn prefix(&self) -> &[T] {
        match self.0.len() {
            0 => &[],
            n => &self.0[..n - 1],
        }
    }
}

impl<T: Item> std::ops::Deref for Candidate<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Item> FromIterator<T> for Candidate<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Candidate::new(iter)
    }
}

impl<T: Item> From<Vec<T>> for Candidate<T> {
    fn from(items: Vec<T>) -> Self {
        Candidate(SmallVec::from_vec(items))
    }
}

impl<T: fmt::Display> fmt::Display for Candidate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ")")
    }
}
