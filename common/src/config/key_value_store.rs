use std::collections::BTreeMap;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
};

/// String-keyed persistent storage, the moral equivalent of a browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Flat YAML map persisted through a content provider. Every `set` rewrites the document.
pub struct YamlKeyValueStore<TProvider: ConfigContentProvider = FileContentConfigProvider> {
    provider: TProvider,
    serializer: YamlConfigSerializer,
    entries: Mutex<BTreeMap<String, String>>,
}

impl<TProvider: ConfigContentProvider> YamlKeyValueStore<TProvider> {
    pub fn open(provider: TProvider) -> Result<Self, String> {
        let serializer = YamlConfigSerializer::new();
        let entries = match provider.get_config_content()? {
            Some(content) if !content.trim().is_empty() => serializer.deserialize(&content)?,
            _ => BTreeMap::new(),
        };

        Ok(Self {
            provider,
            serializer,
            entries: Mutex::new(entries),
        })
    }
}

impl<TProvider: ConfigContentProvider> KeyValueStore for YamlKeyValueStore<TProvider> {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| "Key-value store lock poisoned".to_string())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| "Key-value store lock poisoned".to_string())?;
        entries.insert(key.to_string(), value.to_string());
        let content = self.serializer.serialize(&*entries)?;
        self.provider.set_config_content(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryContentProvider;

    #[test]
    fn test_empty_store_has_no_values() {
        let store = YamlKeyValueStore::open(InMemoryContentProvider::new()).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_set_writes_through_to_provider() {
        let store = YamlKeyValueStore::open(InMemoryContentProvider::new()).unwrap();
        store.set("theme", "light").unwrap();
        store.set("accentColor", "rose").unwrap();

        let content = store.provider.get_config_content().unwrap().unwrap();
        let reopened = YamlKeyValueStore::open(InMemoryContentProvider::with_content(&content))
            .unwrap();
        assert_eq!(reopened.get("theme").unwrap(), Some("light".to_string()));
        assert_eq!(reopened.get("accentColor").unwrap(), Some("rose".to_string()));
    }

    #[test]
    fn test_corrupt_document_is_an_error() {
        let result = YamlKeyValueStore::open(InMemoryContentProvider::with_content("- [unclosed"));
        assert!(result.is_err());
    }
}
