//! 1 件の映画メタデータ（検索成功時にだけ作られ、次の検索で捨てられる）

/// プロバイダが「値なし」を表す番兵文字列
pub const NOT_AVAILABLE: &str = "N/A";

/// テキスト項目の値。番兵 "N/A" や欠落は Unknown になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    Known(String),
    Unknown,
}

impl Detail {
    pub fn from_provider(raw: Option<String>) -> Self {
        match known_value(raw) {
            Some(v) => Detail::Known(v),
            None => Detail::Unknown,
        }
    }

    pub fn known(&self) -> Option<&str> {
        match self {
            Detail::Known(v) => Some(v),
            Detail::Unknown => None,
        }
    }

    /// Unknown のときは項目ごとの表示文言を返す
    pub fn or_marker<'a>(&'a self, marker: &'a str) -> &'a str {
        self.known().unwrap_or(marker)
    }
}

/// 番兵と欠落を None に畳む（ポスター・評価の "none" 用）
pub fn known_value(raw: Option<String>) -> Option<String> {
    raw.filter(|v| v != NOT_AVAILABLE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub year: Detail,
    pub runtime: Detail,
    pub genre: Detail,
    pub plot: Detail,
    pub director: Detail,
    pub actors: Detail,
    pub poster_url: Option<String>,
    pub rating: Option<String>,
}
