use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single key-value setting from a RuneLite profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

/// One parsed configuration profile.
///
/// Keys are unique; a later insert of an existing key replaces the
/// value in place, so iteration order is the order of first insertion.
/// That order is preserved for serialization but carries no meaning
/// beyond reproducible output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    entries: Vec<Setting>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a setting. Returns true if the key was new.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|s| s.key == key) {
            Some(existing) => {
                existing.value = value;
                false
            }
            None => {
                self.entries.push(Setting { key, value });
                true
            }
        }
    }

    /// Returns the value for the given key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|s| s.key == key)
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.key.as_str())
    }

    /// Iterates over settings in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Setting> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Profile {
    /// Serializes as a JSON object in insertion order.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for setting in &self.entries {
            map.serialize_entry(&setting.key, &setting.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut profile = Profile::new();
        assert!(profile.insert("a.x", "1"));
        assert!(profile.insert("a.y", "2"));

        assert_eq!(profile.get("a.x"), Some("1"));
        assert_eq!(profile.get("a.y"), Some("2"));
        assert_eq!(profile.get("a.z"), None);
        assert_eq!(profile.len(), 2);
    }

    #[test]
    fn insert_existing_key_replaces_in_place() {
        let mut profile = Profile::new();
        profile.insert("a", "1");
        profile.insert("b", "2");
        assert!(!profile.insert("a", "3"));

        assert_eq!(profile.get("a"), Some("3"));
        // Position of "a" is unchanged
        let keys: Vec<&str> = profile.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(profile.len(), 2);
    }

    #[test]
    fn keys_preserve_insertion_order() {
        let mut profile = Profile::new();
        profile.insert("z", "1");
        profile.insert("a", "2");
        profile.insert("m", "3");

        let keys: Vec<&str> = profile.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn empty_profile() {
        let profile = Profile::new();
        assert!(profile.is_empty());
        assert_eq!(profile.len(), 0);
        assert!(!profile.contains_key("anything"));
    }

    #[test]
    fn serializes_as_ordered_json_object() {
        let mut profile = Profile::new();
        profile.insert("b.second", "2");
        profile.insert("a.first", "1");

        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"b.second":"2","a.first":"1"}"#);
    }
}
