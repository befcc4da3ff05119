//! In-memory configuration store with TOML snapshots

use crate::error::{ConfigError, Result};
use crate::store::ConfigStore;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Thread-safe section/key store
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    /// Map of section name to its key/value pairs
    sections: DashMap<String, BTreeMap<String, String>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a TOML document.
    ///
    /// Every top-level table is a section. Scalars are kept in their string
    /// form; arrays, nested tables and top-level keys are rejected.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let document: toml::Table = source.parse()?;
        let store = Self::new();

        for (section, value) in document {
            let table = match value {
                toml::Value::Table(table) => table,
                _ => {
                    return Err(ConfigError::UnsupportedValue {
                        section: String::new(),
                        key: section,
                    })
                }
            };

            let mut entries = BTreeMap::new();
            for (key, value) in table {
                let text = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    toml::Value::Datetime(_) | toml::Value::Array(_) | toml::Value::Table(_) => {
                        return Err(ConfigError::UnsupportedValue { section, key });
                    }
                };
                entries.insert(key, text);
            }

            if !entries.is_empty() {
                store.sections.insert(section, entries);
            }
        }

        Ok(store)
    }

    /// Load a store from a TOML file. A missing file gives an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Configuration file {} does not exist, starting empty", path.display());
            return Ok(Self::new());
        }

        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let store = Self::from_toml_str(&source)?;
        info!(
            "Loaded {} configuration sections from {}",
            store.sections.len(),
            path.display()
        );
        Ok(store)
    }

    /// Render the store as TOML, one table per section, sorted
    pub fn to_toml_string(&self) -> Result<String> {
        let mut document = toml::Table::new();
        for entry in self.sections.iter() {
            let table: toml::Table = entry
                .value()
                .iter()
                .map(|(k, v)| (k.clone(), toml::Value::String(v.clone())))
                .collect();
            document.insert(entry.key().clone(), toml::Value::Table(table));
        }
        Ok(toml::to_string(&document)?)
    }

    /// Write the store to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let rendered = self.to_toml_string()?;
        std::fs::write(path, rendered).map_err(|e| ConfigError::io(path, e))?;
        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Number of sections holding at least one key
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set_string(&self, section: &str, key: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.sections
                    .entry(section.to_string())
                    .or_default()
                    .insert(key.to_string(), value.to_string());
            }
            None => {
                let now_empty = match self.sections.get_mut(section) {
                    Some(mut entries) => {
                        entries.remove(key);
                        entries.is_empty()
                    }
                    None => false,
                };
                if now_empty {
                    self.sections.remove_if(section, |_, entries| entries.is_empty());
                }
            }
        }
    }

    fn sections(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sections.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    fn keys(&self, section: &str) -> Vec<String> {
        self.sections
            .get(section)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_unset() {
        let store = MemoryConfigStore::new();
        assert_eq!(store.get_string("rtp", "symmetric"), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryConfigStore::new();
        store.set_string("rtp", "symmetric", Some("1"));
        assert_eq!(store.get_string("rtp", "symmetric").as_deref(), Some("1"));

        store.set_string("rtp", "symmetric", Some("0"));
        assert_eq!(store.get_string("rtp", "symmetric").as_deref(), Some("0"));
    }

    #[test]
    fn test_clear_removes_empty_section() {
        let store = MemoryConfigStore::new();
        store.set_string("sip", "sip_port", Some("5060"));
        store.set_string("sip", "guess_hostname", Some("1"));

        store.set_string("sip", "sip_port", None);
        assert_eq!(store.get_string("sip", "sip_port"), None);
        assert_eq!(store.sections(), vec!["sip".to_string()]);

        store.set_string("sip", "guess_hostname", None);
        assert!(store.sections().is_empty());
        assert_eq!(store.section_count(), 0);
    }

    #[test]
    fn test_clear_unknown_is_noop() {
        let store = MemoryConfigStore::new();
        store.set_string("video", "enabled", None);
        assert!(store.sections().is_empty());
    }

    #[test]
    fn test_keys_sorted() {
        let store = MemoryConfigStore::new();
        store.set_string("net", "mtu", Some("1300"));
        store.set_string("net", "download_bw", Some("0"));
        assert_eq!(store.keys("net"), vec!["download_bw", "mtu"]);
        assert!(store.keys("missing").is_empty());
    }

    #[test]
    fn test_from_toml_scalars() {
        let store = MemoryConfigStore::from_toml_str(
            r#"
            [rtp]
            audio_rtp_port = 7078
            symmetric = true
            jitter = 0.5

            [sip]
            contact = "sip:alice@example.com"
            "#,
        )
        .unwrap();

        assert_eq!(store.get_string("rtp", "audio_rtp_port").as_deref(), Some("7078"));
        assert_eq!(store.get_string("rtp", "symmetric").as_deref(), Some("true"));
        assert_eq!(store.get_string("rtp", "jitter").as_deref(), Some("0.5"));
        assert_eq!(
            store.get_string("sip", "contact").as_deref(),
            Some("sip:alice@example.com")
        );
    }

    #[test]
    fn test_from_toml_rejects_arrays() {
        let err = MemoryConfigStore::from_toml_str("[codecs]\nlist = [\"pcmu\"]\n").unwrap_err();
        match err {
            ConfigError::UnsupportedValue { section, key } => {
                assert_eq!(section, "codecs");
                assert_eq!(key, "list");
            }
            other => panic!("Expected UnsupportedValue, got {:?}", other),
        }
    }

    #[test]
    fn test_from_toml_rejects_datetimes() {
        let err = MemoryConfigStore::from_toml_str("[sip]\nlast_seen = 1979-05-27T07:32:00Z\n")
            .unwrap_err();
        match err {
            ConfigError::UnsupportedValue { section, key } => {
                assert_eq!(section, "sip");
                assert_eq!(key, "last_seen");
            }
            other => panic!("Expected UnsupportedValue, got {:?}", other),
        }
    }

    #[test]
    fn test_from_toml_rejects_top_level_keys() {
        let err = MemoryConfigStore::from_toml_str("verbose = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedValue { .. }));
    }

    #[test]
    fn test_from_toml_parse_error() {
        let err = MemoryConfigStore::from_toml_str("[rtp\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
