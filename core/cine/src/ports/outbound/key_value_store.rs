//! キー・値の永続化 Outbound ポート
//!
//! 実装はファイル（FileKeyValueStore）やテスト用のメモリ実装。読み書きは同期。

use common::error::Error;

pub trait KeyValueStore: Send + Sync {
    /// キーが無ければ Ok(None)
    fn load(&self, key: &str) -> Result<Option<String>, Error>;
    /// 戻る前に書き込みを完了させる
    fn save(&self, key: &str, value: &str) -> Result<(), Error>;
    /// キーが無くても Ok
    fn remove(&self, key: &str) -> Result<(), Error>;
}
