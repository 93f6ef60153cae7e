//! cine 共通ライブラリ
//!
//! エラー型・Outbound ポート（FS / ログ / 環境変数）とその標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（ディレクトリ等）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプタ
pub mod adapter;
