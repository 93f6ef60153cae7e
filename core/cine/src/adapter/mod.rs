pub(crate) mod config_file;
pub(crate) mod file_key_value_store;
pub(crate) mod memory_key_value_store;
pub(crate) mod omdb_client;
pub(crate) mod recording_view;
pub(crate) mod stdin_input;
pub(crate) mod stub_metadata;
pub(crate) mod terminal_view;

pub(crate) use config_file::FileConfigLoader;
pub(crate) use file_key_value_store::FileKeyValueStore;
pub(crate) use omdb_client::OmdbClient;
pub(crate) use stdin_input::StdinInput;
pub(crate) use terminal_view::TerminalView;

#[cfg(test)]
pub(crate) use memory_key_value_store::MemoryKeyValueStore;
#[cfg(test)]
pub(crate) use recording_view::{RecordingView, ViewCall};
#[cfg(test)]
pub(crate) use stub_metadata::{stub_record, StubMetadataClient};
