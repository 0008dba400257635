//! A dictionary that enables reverse lookup.
//!
//! Both keys and values must be unique and hashable. The reverse mapping is not stored; each call
//! to `inverse()` builds a new, independent `DoubleDict` out of clones.
//!
//! ```
//! # #[macro_use] extern crate starks;
//! # fn main() {
//! let dd = double_dict! { "a" => 1, "b" => 2, "c" => 3 }.unwrap();
//! assert_eq!(dd.inverse()[&2], "b");
//!
//! let bad = double_dict! { "a" => 1, "b" => 2, "c" => 1 };
//! assert_eq!(bad.unwrap_err(), starks::Error::DuplicateValue);
//! # }
//! ```

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;
use std::slice;
use std::vec;

use crate::error::{Error, Result};
use crate::key::Key;

/// Something a `DoubleDict` can be filled from. Calls take at most one of these.
pub enum Source<K, V> {
    Pairs(Vec<(K, V)>),
    Map(HashMap<K, V>),
    Dict(DoubleDict<K, V>),
}
impl<K: Key, V: Key> Source<K, V> {
    fn into_pairs(self) -> Vec<(K, V)> {
        match self {
            Source::Pairs(pairs) => pairs,
            Source::Map(map) => map.into_iter().collect(),
            Source::Dict(dict) => dict.into_iter().collect(),
        }
    }
}
impl<K, V> From<Vec<(K, V)>> for Source<K, V> {
    fn from(pairs: Vec<(K, V)>) -> Self { Source::Pairs(pairs) }
}
impl<K, V> From<HashMap<K, V>> for Source<K, V> {
    fn from(map: HashMap<K, V>) -> Self { Source::Map(map) }
}
impl<K, V> From<DoubleDict<K, V>> for Source<K, V> {
    fn from(dict: DoubleDict<K, V>) -> Self { Source::Dict(dict) }
}

/// Builds a `DoubleDict`, returning `starks::Result<DoubleDict<_, _>>`.
///
/// ```
/// # #[macro_use] extern crate starks;
/// # fn main() {
/// let empty: starks::DoubleDict<&str, i32> = double_dict!().unwrap();
/// let named = double_dict! { "a" => 1, "b" => 2 }.unwrap();
/// let copied = double_dict!(from vec![("a", 1)]; "b" => 2).unwrap();
/// assert!(empty.is_empty());
/// assert_eq!(named, copied);
/// # }
/// ```
#[macro_export]
macro_rules! double_dict {
    () => {
        $crate::DoubleDict::build(::std::vec::Vec::new(), ::std::vec::Vec::new())
    };
    (from $($src:expr),+ $(; $($k:expr => $v:expr),* $(,)*)*) => {
        $crate::DoubleDict::build(
            vec![$($crate::Source::from($src)),+],
            vec![$($(($k, $v)),*)*],
        )
    };
    ($($k:expr => $v:expr),+ $(,)*) => {
        $crate::DoubleDict::build(::std::vec::Vec::new(), vec![$(($k, $v)),+])
    };
}

/// A mapping whose values are as unique as its keys.
///
/// Iteration and `Debug` follow insertion order; equality ignores it.
#[derive(Clone)]
pub struct DoubleDict<K, V> {
    order: Vec<K>,
    forward: HashMap<K, V>,
    /// Every value currently stored; only used to reject duplicates.
    values: HashSet<V>,
}
impl<K: Key, V: Key> DoubleDict<K, V> {
    pub fn new() -> Self {
        DoubleDict {
            order: Vec::new(),
            forward: HashMap::new(),
            values: HashSet::new(),
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        DoubleDict {
            order: Vec::with_capacity(n),
            forward: HashMap::with_capacity(n),
            values: HashSet::with_capacity(n),
        }
    }

    /// Build from at most one positional source plus named pairs; named pairs win on key
    /// collisions. Nothing is created unless the whole lot is valid.
    pub fn build(sources: Vec<Source<K, V>>, named: Vec<(K, V)>) -> Result<Self> {
        check_sources(&sources)?;
        let positional = sources.into_iter().flat_map(Source::into_pairs);
        DoubleDict::try_from_iter(positional.chain(named))
    }

    /// Build from a sequence of pairs. A repeated key keeps its first position and its last value;
    /// only the values that survive have to be unique.
    pub fn try_from_iter<I: IntoIterator<Item=(K, V)>>(pairs: I) -> Result<Self> {
        let mut dd = DoubleDict::new();
        let staged = dd.stage(pairs, Batch::Collapse)?;
        dd.commit(staged);
        Ok(dd)
    }

    pub fn len(&self) -> usize { self.order.len() }
    pub fn is_empty(&self) -> bool { self.order.is_empty() }

    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
        where K: Borrow<Q>, Q: Hash + Eq
    {
        self.forward.get(key)
    }

    /// Finds the key for `val`. A hit is a scan; use `inverse()` for repeated lookups.
    pub fn get_by_value<R: ?Sized>(&self, val: &R) -> Option<&K>
        where V: Borrow<R>, R: Hash + Eq
    {
        if !self.values.contains(val) { return None; }
        self.iter().find(|&(_, v)| Borrow::<R>::borrow(v) == val).map(|(k, _)| k)
    }

    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
        where K: Borrow<Q>, Q: Hash + Eq
    {
        self.forward.contains_key(key)
    }

    pub fn contains_value<R: ?Sized>(&self, val: &R) -> bool
        where V: Borrow<R>, R: Hash + Eq
    {
        self.values.contains(val)
    }

    /// Assign `value` to `key`.
    ///
    /// Fails if `value` is already held by some other key. Reassigning a key to the value it
    /// already has is fine and changes nothing.
    pub fn set(&mut self, key: K, value: V) -> Result<()> {
        self.update(Some((key, value)))
    }

    /// Assign every pair, or none of them.
    ///
    /// Pairs are checked in order: a value already in the map, or given by an earlier pair of the
    /// batch, is refused unless the pair's key currently holds exactly that value. So two keys
    /// can't swap values in one call. A later pair for a key replaces an earlier one.
    pub fn update<I: IntoIterator<Item=(K, V)>>(&mut self, pairs: I) -> Result<()> {
        let staged = self.stage(pairs, Batch::InOrder)?;
        self.commit(staged);
        Ok(())
    }

    /// `update` with the same argument shape as `build`.
    pub fn update_with(&mut self, sources: Vec<Source<K, V>>, named: Vec<(K, V)>) -> Result<()> {
        check_sources(&sources)?;
        let positional = sources.into_iter().flat_map(Source::into_pairs);
        self.update(positional.chain(named))
    }

    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
        where K: Borrow<Q>, Q: Hash + Eq
    {
        let val = self.forward.remove(key)?;
        self.values.remove(&val);
        self.order.retain(|k| Borrow::<Q>::borrow(k) != key);
        trace!("DoubleDict: removed 1 entry, {} left", self.len());
        Some(val)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.forward.clear();
        self.values.clear();
    }

    /// Returns a new `DoubleDict` mapping each value back to its key.
    ///
    /// This is rebuilt every time; it doesn't follow later changes to `self`, and changing it
    /// doesn't affect `self`.
    pub fn inverse(&self) -> DoubleDict<V, K> {
        let mut inv = DoubleDict::with_capacity(self.len());
        for (k, v) in self.iter() {
            // Unique keys become unique values and vice versa; nothing to check.
            inv.push_unchecked(v.clone(), k.clone());
        }
        inv
    }

    /// The inverse is derived, so this always fails with `Error::ImmutableProperty`.
    /// Change the mapping with `set`/`update`, or build a new map from `inverse()`.
    pub fn set_inverse<T>(&mut self, _inverse: T) -> Result<()> {
        Err(Error::ImmutableProperty("inverse"))
    }

    pub fn iter(&self) -> Iter<K, V> {
        Iter {
            order: self.order.iter(),
            forward: &self.forward,
        }
    }

    pub fn keys(&self) -> slice::Iter<K> {
        self.order.iter()
    }

    pub fn values<'a>(&'a self) -> impl Iterator<Item=&'a V> + 'a {
        self.iter().map(|(_, v)| v)
    }

    /// Validates a batch against the current contents, returning it deduplicated by key.
    fn stage<I: IntoIterator<Item=(K, V)>>(&self, pairs: I, batch: Batch) -> Result<Vec<(K, V)>> {
        let mut staged: Vec<(K, V)> = Vec::new();
        let mut slots: HashMap<K, usize> = HashMap::new();
        let mut seen: HashSet<V> = HashSet::new();
        for (k, v) in pairs {
            if !k.is_hashable() { return Err(Error::UnhashableKey); }
            if !v.is_hashable() { return Err(Error::UnhashableValue); }
            if batch == Batch::InOrder {
                let taken = seen.contains(&v) || self.values.contains(&v);
                if taken && self.forward.get(&k) != Some(&v) {
                    return Err(Error::DuplicateValue);
                }
                seen.insert(v.clone());
            }
            match slots.entry(k) {
                Entry::Occupied(e) => staged[*e.get()].1 = v,
                Entry::Vacant(e) => {
                    let k = e.key().clone();
                    e.insert(staged.len());
                    staged.push((k, v));
                },
            }
        }
        if batch == Batch::Collapse {
            let mut incoming: HashSet<&V> = HashSet::with_capacity(staged.len());
            for &(_, ref v) in &staged {
                if !incoming.insert(v) {
                    return Err(Error::DuplicateValue);
                }
            }
            for (k, v) in self.iter() {
                if !slots.contains_key(k) && incoming.contains(v) {
                    return Err(Error::DuplicateValue);
                }
            }
        }
        Ok(staged)
    }

    fn commit(&mut self, staged: Vec<(K, V)>) {
        if staged.is_empty() { return; }
        // Free every overwritten value before inserting the new ones.
        for &(ref k, _) in &staged {
            if let Some(old) = self.forward.get(k) {
                self.values.remove(old);
            }
        }
        let n = staged.len();
        for (k, v) in staged {
            self.values.insert(v.clone());
            match self.forward.entry(k) {
                Entry::Occupied(mut e) => { e.insert(v); },
                Entry::Vacant(e) => {
                    self.order.push(e.key().clone());
                    e.insert(v);
                },
            }
        }
        trace!("DoubleDict: committed {} pairs, {} entries", n, self.len());
    }

    fn push_unchecked(&mut self, key: K, value: V) {
        self.order.push(key.clone());
        self.values.insert(value.clone());
        self.forward.insert(key, value);
    }
}

/// How a batch of pairs is validated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Batch {
    /// Construction: collapse by key, then the surviving values must be unique.
    Collapse,
    /// `set`/`update`: each pair against the map and the pairs before it.
    InOrder,
}

fn check_sources<T>(sources: &[T]) -> Result<()> {
    if sources.len() > 1 {
        return Err(Error::InvalidArgument { expected: 1, got: sources.len() });
    }
    Ok(())
}

impl<K: Key, V: Key> Default for DoubleDict<K, V> {
    fn default() -> Self {
        DoubleDict::new()
    }
}

impl<K: Key, V: Key> PartialEq for DoubleDict<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}
impl<K: Key, V: Key> Eq for DoubleDict<K, V> {}

impl<K: Key, V: Key> PartialEq<HashMap<K, V>> for DoubleDict<K, V> {
    fn eq(&self, other: &HashMap<K, V>) -> bool {
        self.forward == *other
    }
}

impl<K: Key + fmt::Debug, V: Key + fmt::Debug> fmt::Debug for DoubleDict<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DoubleDict(")?;
        f.debug_map().entries(self.iter()).finish()?;
        write!(f, ")")
    }
}

impl<'a, K, V, Q: ?Sized> Index<&'a Q> for DoubleDict<K, V>
where
    K: Key + Borrow<Q>,
    V: Key,
    Q: Hash + Eq,
{
    type Output = V;
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found in DoubleDict")
    }
}

impl<K: Key, V: Key> ::std::convert::TryFrom<Vec<(K, V)>> for DoubleDict<K, V> {
    type Error = Error;
    fn try_from(pairs: Vec<(K, V)>) -> Result<Self> {
        DoubleDict::try_from_iter(pairs)
    }
}

impl<K: Key, V: Key> ::std::convert::TryFrom<HashMap<K, V>> for DoubleDict<K, V> {
    type Error = Error;
    fn try_from(map: HashMap<K, V>) -> Result<Self> {
        DoubleDict::try_from_iter(map)
    }
}

/// Iterates in insertion order.
pub struct Iter<'a, K: 'a, V: 'a> {
    order: slice::Iter<'a, K>,
    forward: &'a HashMap<K, V>,
}
impl<'a, K: Key, V: Key> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        let forward = self.forward;
        self.order.next().and_then(|k| forward.get(k).map(|v| (k, v)))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

pub struct IntoIter<K, V> {
    order: vec::IntoIter<K>,
    forward: HashMap<K, V>,
}
impl<K: Key, V: Key> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.order.next()?;
        let v = self.forward.remove(&k)?;
        Some((k, v))
    }
}

impl<K: Key, V: Key> IntoIterator for DoubleDict<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            order: self.order.into_iter(),
            forward: self.forward,
        }
    }
}

impl<'a, K: Key, V: Key> IntoIterator for &'a DoubleDict<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
