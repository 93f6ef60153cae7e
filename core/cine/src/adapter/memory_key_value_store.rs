//! テスト用: メモリ上の KeyValueStore


#[cfg(test)]
pub use memory::MemoryKeyValueStore;
