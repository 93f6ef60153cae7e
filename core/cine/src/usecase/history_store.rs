//! 最近の検索の読み込み・記録（KeyValueStore の 1 キーに JSON 配列で保存）

use crate::domain::SearchHistory;
use crate::ports::outbound::KeyValueStore;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

/// 永続化に使うキー
pub const HISTORY_KEY: &str = "recentSearches";

pub struct HistoryStore {
    kv: Arc<dyn KeyValueStore>,
    log: Arc<dyn Log>,
}

impl HistoryStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, log: Arc<dyn Log>) -> Self {
        Self { kv, log }
    }

    fn warn(&self, message: String) {
        let _ = self.log.log(
            &LogRecord::now(LogLevel::Warn, "usecase", "history", message)
                .with_field("key", serde_json::json!(HISTORY_KEY)),
        );
    }

    /// 保存済みの並びを読む。無い・読めない・壊れている場合は空（エラーにしない）。
    pub fn load(&self) -> SearchHistory {
        let raw = match self.kv.load(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return SearchHistory::new(),
            Err(e) => {
                self.warn(format!("Failed to read search history: {}", e));
                return SearchHistory::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(entries) => SearchHistory::from_entries(entries),
            Err(e) => {
                self.warn(format!("Ignoring unparseable search history: {}", e));
                SearchHistory::new()
            }
        }
    }

    /// term を先頭に記録して保存し、新しい並びを返す
    ///
    /// 保存に失敗しても返す並びは更新後のもの（失敗はログにだけ残す）。
    pub fn record(&self, term: &str) -> SearchHistory {
        let mut history = self.load();
        history.record(term);
        if let Err(e) = self.persist(&history) {
            self.warn(format!("Failed to save search history: {}", e));
        }
        history
    }

    fn persist(&self, history: &SearchHistory) -> Result<(), Error> {
        let json = serde_json::to_string(history.entries()).map_err(|e| Error::json(e.to_string()))?;
        self.kv.save(HISTORY_KEY, &json)
    }

    /// 保存済みの並びを消す（--clear-history）
    pub fn clear(&self) -> Result<(), Error> {
        self.kv.remove(HISTORY_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::MemoryKeyValueStore;
    use crate::domain::HISTORY_LIMIT;
    use common::adapter::NoopLog;

    fn store_with(kv: Arc<MemoryKeyValueStore>) -> HistoryStore {
        HistoryStore::new(kv, Arc::new(NoopLog))
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = store_with(Arc::new(MemoryKeyValueStore::new()));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_unparseable_is_empty() {
        for raw in ["not json", "{\"a\":1}", "[1,2]", ""] {
            let kv = Arc::new(MemoryKeyValueStore::with_value(HISTORY_KEY, raw));
            assert!(store_with(kv).load().is_empty(), "{}", raw);
        }
    }

    #[test]
    fn test_record_persists_json_array() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = store_with(Arc::clone(&kv));
        store.record("Heat");
        let h = store.record("Up");
        assert_eq!(h.entries(), &["Up", "Heat"]);
        assert_eq!(kv.raw(HISTORY_KEY).as_deref(), Some("[\"Up\",\"Heat\"]"));
        assert_eq!(store.load(), h);
    }

    #[test]
    fn test_record_same_title_twice_keeps_one() {
        let store = store_with(Arc::new(MemoryKeyValueStore::new()));
        store.record("Inception");
        let h = store.record("INCEPTION");
        assert_eq!(h.len(), 1);
        assert_eq!(h.entries(), &["INCEPTION"]);
    }

    #[test]
    fn test_record_six_keeps_five_newest() {
        let store = store_with(Arc::new(MemoryKeyValueStore::new()));
        let mut h = SearchHistory::new();
        for t in ["one", "two", "three", "four", "five", "six"] {
            h = store.record(t);
        }
        assert_eq!(h.len(), HISTORY_LIMIT);
        assert_eq!(h.entries(), &["six", "five", "four", "three", "two"]);
        assert_eq!(store.load(), h);
    }

    #[test]
    fn test_record_returns_updated_history_when_save_fails() {
        let store = store_with(Arc::new(MemoryKeyValueStore::failing_saves()));
        let h = store.record("Heat");
        assert_eq!(h.entries(), &["Heat"]);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_clear() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = store_with(Arc::clone(&kv));
        store.record("Heat");
        store.clear().unwrap();
        assert!(store.load().is_empty());
        assert_eq!(kv.raw(HISTORY_KEY), None);
    }
}
