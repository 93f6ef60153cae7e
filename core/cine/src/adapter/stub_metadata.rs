//! テスト用: タイトルごとに固定の結果を返す MovieMetadataClient


#[cfg(test)]
pub use stub::{record as stub_record, StubMetadataClient};
