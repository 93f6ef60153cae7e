//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（メタデータ API・永続化・画面・入力・設定）を使うための trait

pub mod inbound;
pub mod outbound;
