use chrono::{DateTime, Datelike, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single book record.
///
/// Books are immutable once loaded. The `author` and `genres` fields hold
/// registry identifiers, not display names; resolve them through
/// [`Catalog::author_name`](crate::Catalog::author_name) and
/// [`Catalog::genre_name`](crate::Catalog::genre_name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier within the catalog
    pub id: String,
    pub title: String,
    /// Author registry id
    pub author: String,
    /// Cover image URL
    pub image: String,
    pub description: String,
    /// Publication timestamp (RFC 3339)
    pub published: DateTime<Utc>,
    /// Genre registry ids
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Book {
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// An id → label registry that keeps document order.
///
/// Dropdowns list authors and genres in the order the dataset declares them,
/// so a plain `HashMap` is not enough. Lookups are linear scans; registries
/// hold tens of entries. Only books get a hashed index, in [`Catalog`].
///
/// [`Catalog`]: crate::Catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    entries: Vec<(String, String)>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        let id = id.into();
        let label = label.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = label,
            None => self.entries.push((id, label)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, label)| label.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, label)| (id.as_str(), label.as_str()))
    }

    /// Encodes the map as a JSON object, the wire format of dropdown options.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }

    /// Decodes a JSON object of string labels, keeping key order.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl<K, V> FromIterator<(K, V)> for LabelMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = LabelMap::new();
        for (id, label) in iter {
            map.insert(id, label);
        }
        map
    }
}

impl Serialize for LabelMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, label) in &self.entries {
            map.serialize_entry(id, label)?;
        }
        map.end()
    }
}

struct LabelMapVisitor;

impl<'de> Visitor<'de> for LabelMapVisitor {
    type Value = LabelMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of string ids to string labels")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = LabelMap::new();
        while let Some((id, label)) = access.next_entry::<String, String>()? {
            map.insert(id, label);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for LabelMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LabelMapVisitor)
    }
}
