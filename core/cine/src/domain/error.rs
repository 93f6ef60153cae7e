//! 検索 1 回分の失敗を表すドメインエラー
//!
//! どれもその検索だけで完結し、自動リトライはしない。Display がそのまま画面のエラー表示になる。

/// メタデータ取得の失敗
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// 通信失敗・非 2xx・応答が解釈できない。detail はログ専用。
    #[error("Failed to fetch movie data. Please try again.")]
    Network { detail: String },
    /// プロバイダが該当なしと返した
    #[error("{message}")]
    NotFound { message: String },
}

impl FetchError {
    pub const DEFAULT_NOT_FOUND: &'static str = "Movie not found";

    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    /// プロバイダのメッセージがあればそれを、無ければ既定文言を使う
    pub fn not_found(provider_message: Option<String>) -> Self {
        let message = provider_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_NOT_FOUND.to_string());
        Self::NotFound { message }
    }
}

/// 検索トリガー 1 回分の失敗
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// 入力が空（通信は行わない）
    #[error("Please enter a movie title")]
    EmptyQuery,
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_message_hides_detail() {
        let e = FetchError::network("connection refused");
        assert_eq!(e.to_string(), "Failed to fetch movie data. Please try again.");
        assert!(matches!(e, FetchError::Network { ref detail } if detail == "connection refused"));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            FetchError::not_found(Some("Movie not found!".to_string())).to_string(),
            "Movie not found!"
        );
        assert_eq!(FetchError::not_found(None).to_string(), "Movie not found");
        assert_eq!(FetchError::not_found(Some("  ".to_string())).to_string(), "Movie not found");
    }

    #[test]
    fn test_search_error_display() {
        assert_eq!(SearchError::EmptyQuery.to_string(), "Please enter a movie title");
        let e: SearchError = FetchError::not_found(None).into();
        assert_eq!(e.to_string(), "Movie not found");
    }
}
