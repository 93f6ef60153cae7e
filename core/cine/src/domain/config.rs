//! 実行設定（config.json ＋ 環境変数 ＋ CLI 上書き）

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://www.omdbapi.com/";
pub const DEFAULT_API_KEY: &str = "fbe592b8";
pub const DEFAULT_PLACEHOLDER_POSTER: &str =
    "https://via.placeholder.com/300x450/1a1a1a/ffffff?text=No+Poster+Available";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

fn default_placeholder_poster() -> String {
    DEFAULT_PLACEHOLDER_POSTER.to_string()
}

/// config.json のスキーマ。どの項目も省略可能。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CineConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_placeholder_poster")]
    pub placeholder_poster: String,
}

impl Default for CineConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: default_api_key(),
            placeholder_poster: default_placeholder_poster(),
        }
    }
}

impl CineConfig {
    pub fn parse_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Some の項目だけ上書きする（後から適用したものが優先）
    pub fn with_overrides(mut self, api_key: Option<String>, endpoint: Option<String>) -> Self {
        if let Some(key) = api_key {
            self.api_key = key;
        }
        if let Some(url) = endpoint {
            self.endpoint = url;
        }
        self
    }
}
