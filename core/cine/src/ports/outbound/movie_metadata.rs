//! 映画メタデータ取得 Outbound ポート

use crate::domain::{FetchError, MovieRecord, SearchTerm};

/// タイトル 1 件を外部プロバイダに問い合わせる能力
///
/// 1 回の呼び出しで 1 リクエスト。リトライ・タイムアウト・キャンセルはしない。
pub trait MovieMetadataClient: Send + Sync {
    fn fetch(&self, title: &SearchTerm) -> Result<MovieRecord, FetchError>;
}
