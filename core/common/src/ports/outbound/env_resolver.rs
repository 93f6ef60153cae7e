//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・XDG ディレクトリ・API キー上書きを環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::Dirs;
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// config / data / state ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. CINE_HOME（設定されていれば config / data / state をその直下に置く）
    /// 2. XDG_CONFIG_HOME / XDG_DATA_HOME / XDG_STATE_HOME 配下の cine
    /// 3. $HOME/.config/cine, $HOME/.local/share/cine, $HOME/.local/state/cine
    fn resolve_dirs(&self) -> Result<Dirs, Error>;

    /// OMDB_API_KEY（空文字は未設定扱い）
    fn api_key_from_env(&self) -> Option<String>;
}
