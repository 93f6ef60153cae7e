//! 最近の検索語（新しい順・大文字小文字を無視して重複なし・最大 5 件）

/// 保持する最大件数
pub const HISTORY_LIMIT: usize = 5;

/// 最近の検索語の並び
///
/// 不変条件: 件数は HISTORY_LIMIT 以下、大文字小文字を無視して同じ語は 1 つだけ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
}

fn same_term(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 永続化された並びから作る。先に現れた方を残して不変条件を満たすように詰める。
    pub fn from_entries(entries: impl IntoIterator<Item = String>) -> Self {
        let mut kept: Vec<String> = Vec::with_capacity(HISTORY_LIMIT);
        for entry in entries {
            if kept.len() == HISTORY_LIMIT {
                break;
            }
            if !kept.iter().any(|k| same_term(k, &entry)) {
                kept.push(entry);
            }
        }
        Self { entries: kept }
    }

    /// 同じ語（大文字小文字無視）を取り除いて先頭に追加し、上限で切り詰める
    pub fn record(&mut self, term: &str) {
        self.entries.retain(|e| !same_term(e, term));
        self.entries.insert(0, term.to_string());
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// 0 始まりの位置で取り出す
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
