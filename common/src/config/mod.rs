mod config_content_provider;
mod config_manager;
mod config_serializer;
mod key_value_store;
mod validate;

pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, InMemoryContentProvider,
};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use key_value_store::{KeyValueStore, YamlKeyValueStore};
pub use validate::Validate;
