//! Serde integration for TreeMap.
//!
//! A map serializes as a plain key-to-value mapping in key order.
//! Deserialization rebuilds the tree with the key type's natural order,
//! since a comparator cannot travel through a serialized form.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::types::TreeMap;

impl<K, V> Serialize for TreeMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, K, V> Deserialize<'de> for TreeMap<K, V>
where
    K: Deserialize<'de> + Ord + 'static,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TreeMapVisitor {
            phantom: PhantomData,
        })
    }
}

struct TreeMapVisitor<K, V> {
    phantom: PhantomData<(K, V)>,
}

impl<'de, K, V> Visitor<'de> for TreeMapVisitor<K, V>
where
    K: Deserialize<'de> + Ord + 'static,
    V: Deserialize<'de>,
{
    type Value = TreeMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = TreeMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}
