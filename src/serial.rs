//! `DoubleDict` is written as a plain map, in insertion order.
//! Reading one back goes through the same validation as `update`, so a document with repeated
//! values is rejected.

use serde::ser::{Serialize, Serializer, SerializeMap};
use serde::de::{self, Deserialize, Deserializer, Visitor, MapAccess};

use std::fmt;
use std::marker::PhantomData;

use crate::double_dict::DoubleDict;
use crate::key::Key;

impl<K, V> Serialize for DoubleDict<K, V>
where
    K: Key + Serialize,
    V: Key + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de, K, V> Deserialize<'de> for DoubleDict<K, V>
where
    K: Key + Deserialize<'de>,
    V: Key + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DoubleDictVisitor(PhantomData))
    }
}

struct DoubleDictVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for DoubleDictVisitor<K, V>
where
    K: Key + Deserialize<'de>,
    V: Key + Deserialize<'de>,
{
    type Value = DoubleDict<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a map with unique values")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(pair) = map.next_entry()? {
            pairs.push(pair);
        }
        DoubleDict::try_from_iter(pairs).map_err(de::Error::custom)
    }
}
