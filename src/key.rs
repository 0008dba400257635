//! What it takes for something to be looked up by.

use std::hash::Hash;

/**
 * Trait that all `DoubleDict` keys and values must implement.
 *
 * `Hash + Eq` is enforced statically. Types that can hold unhashable data at runtime, such as
 * [`Value`], override `is_hashable` so the map can refuse them before anything is stored.
 * */
pub trait Key: Hash + Eq + Clone {
    /// Whether this particular value may be used as a lookup key.
    fn is_hashable(&self) -> bool { true }
}

macro_rules! keys_table {
    ($($T:ty),*,) => {
        $(impl Key for $T {})*
    }
}
keys_table! {
    i8, i16, i32, i64, i128,
    u8, u16, u32, u64, u128,
    isize, usize,
    bool, char,
    (),
    String,
}

impl<'a> Key for &'a str {}

impl<T: Key> Key for Option<T> {
    fn is_hashable(&self) -> bool {
        self.as_ref().map_or(true, Key::is_hashable)
    }
}

impl<T: Key> Key for Box<T> {
    fn is_hashable(&self) -> bool { (**self).is_hashable() }
}

impl<T: Key> Key for Vec<T> {
    fn is_hashable(&self) -> bool { self.iter().all(Key::is_hashable) }
}

macro_rules! tuple_keys {
    ($(($($T:ident),+),)*) => {
        $(
            impl<$($T: Key),+> Key for ($($T,)+) {
                #[allow(non_snake_case)]
                fn is_hashable(&self) -> bool {
                    let ($(ref $T,)+) = *self;
                    true $(&& $T.is_hashable())+
                }
            }
        )*
    }
}
tuple_keys! {
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
}

/// A dynamically typed value.
///
/// `List` and `Map` are mutable containers and so can't serve as keys; a `Tuple` can, as long as
/// everything inside it can.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Str(String),
    Tuple(Vec<Value>),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
}
impl Key for Value {
    fn is_hashable(&self) -> bool {
        match *self {
            Value::List(_) | Value::Map(_) => false,
            Value::Tuple(ref items) => items.iter().all(Key::is_hashable),
            _ => true,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}
impl From<i64> for Value {
    fn from(i: i64) -> Self { Value::Int(i) }
}
impl From<i32> for Value {
    fn from(i: i32) -> Self { Value::Int(i64::from(i)) }
}
impl<'a> From<&'a str> for Value {
    fn from(s: &'a str) -> Self { Value::Str(s.to_string()) }
}
impl From<String> for Value {
    fn from(s: String) -> Self { Value::Str(s) }
}
