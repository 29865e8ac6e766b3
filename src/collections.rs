//! Records, key mappings, and sets.

use std::collections::{BTreeMap, HashMap, HashSet};

/// A record with two named fields, used for the field-extraction demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
        }
    }
    /// Bind both fields at once, consuming the record.
    pub fn into_names(self) -> (String, String) {
        let Person { first_name, last_name } = self;
        (first_name, last_name)
    }
}

/// The mapping used by the values/entries demo. A BTreeMap keeps the keys
/// in their stated order ("a", "b", "c").
pub fn letter_counts() -> BTreeMap<&'static str, i64> {
    BTreeMap::from([("a", 1), ("b", 2), ("c", 3)])
}

pub fn values_of(map: &BTreeMap<&str, i64>) -> Vec<i64> {
    map.values().copied().collect()
}

pub fn entries_of<'a>(map: &BTreeMap<&'a str, i64>) -> Vec<(&'a str, i64)> {
    map.iter().map(|(k, v)| (*k, *v)).collect()
}

/// Associative store: insert a couple of pairs, look one back up.
pub fn store_and_lookup() -> Option<String> {
    let mut store: HashMap<String, String> = HashMap::new();
    store.insert("key1".into(), "value1".into());
    store.insert("key2".into(), "value2".into());
    store.get("key1").cloned()
}

/// Deduplicated set: seed, add one more, probe membership.
pub fn set_membership(seed: &[i64], extra: i64, probe: i64) -> bool {
    let mut set: HashSet<i64> = seed.iter().copied().collect();
    set.insert(extra);
    set.contains(&probe)
}
