//! Outbound ポート: アプリが外界を使うための trait

pub mod config_loader;
pub mod input_source;
pub mod key_value_store;
pub mod movie_metadata;
pub mod search_view;

pub use config_loader::ConfigLoader;
pub use input_source::InputSource;
pub use key_value_store::KeyValueStore;
pub use movie_metadata::MovieMetadataClient;
pub use search_view::SearchView;
