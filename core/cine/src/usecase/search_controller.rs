//! 検索の進行役: 入力検証 → 取得 → 表示・履歴記録
//!
//! 状態は SearchState 1 つだけを持ち、遷移のたびに Screen を導いて SearchView に反映する。
//! 取得は同期呼び出しのため、Loading 中に次の検索トリガーが届くことはないが、
//! 届いた場合は Busy として受け付けない。

use crate::domain::{MovieCard, SearchError, SearchHistory, SearchState, SearchTerm};
use crate::ports::outbound::{MovieMetadataClient, SearchView};
use crate::usecase::history_store::HistoryStore;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct SearchDeps {
    pub client: Arc<dyn MovieMetadataClient>,
    pub history: Arc<HistoryStore>,
    pub log: Arc<dyn Log>,
    pub placeholder_poster: String,
}

/// 検索トリガー 1 回の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Found { title: String },
    Failed(SearchError),
    /// 取得中のため受け付けなかった
    Busy,
}

pub struct SearchController {
    deps: SearchDeps,
    view: Box<dyn SearchView>,
    state: SearchState,
    input: String,
    history: SearchHistory,
}

impl SearchController {
    pub fn new(deps: SearchDeps, view: Box<dyn SearchView>) -> Self {
        Self {
            deps,
            view,
            state: SearchState::Idle,
            input: String::new(),
            history: SearchHistory::new(),
        }
    }

    /// 起動時: 保存済みの履歴を読んで描画する
    pub fn start(&mut self) {
        self.history = self.deps.history.load();
        self.view.render_history(self.history.entries());
        self.apply();
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.view.set_input(&self.input);
    }

    /// クリア操作: 入力を空にしてフォーカスを戻す（検索状態には触れない）
    ///
    /// 入力が空のときは何もしない。
    pub fn clear(&mut self) {
        if self.input.is_empty() {
            return;
        }
        self.set_input("");
        self.view.focus_input();
    }

    /// 最近の検索を描画し直す
    pub fn refresh_history(&mut self) {
        self.view.render_history(self.history.entries());
    }

    pub fn notify(&mut self, text: &str) {
        self.view.show_notice(text);
    }

    /// 履歴の n 番目（1 始まり）を入力欄に入れて検索する。範囲外なら None。
    pub fn select_history(&mut self, position: usize) -> Option<SubmitOutcome> {
        let term = position
            .checked_sub(1)
            .and_then(|i| self.history.get(i))
            .map(str::to_string)?;
        self.set_input(&term);
        Some(self.submit())
    }

    /// 入力欄の内容で検索する
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state.is_loading() {
            return SubmitOutcome::Busy;
        }

        let term = match SearchTerm::parse(&self.input) {
            Ok(term) => term,
            Err(e) => {
                self.transition(SearchState::Failed {
                    message: e.to_string(),
                });
                return SubmitOutcome::Failed(e);
            }
        };

        self.log(
            LogRecord::now(LogLevel::Info, "usecase", "search", "search started")
                .with_field("term", serde_json::json!(term.as_ref())),
        );
        self.transition(SearchState::Loading {
            term: term.to_string(),
        });

        match self.deps.client.fetch(&term) {
            Ok(record) => {
                let card = MovieCard::project(&record, &self.deps.placeholder_poster);
                let title = card.title.clone();
                self.transition(SearchState::Showing(card));
                self.history = self.deps.history.record(&term);
                self.refresh_history();
                SubmitOutcome::Found { title }
            }
            Err(e) => {
                let mut rec = LogRecord::now(LogLevel::Warn, "usecase", "search", "fetch failed")
                    .with_field("term", serde_json::json!(term.as_ref()))
                    .with_field("error", serde_json::json!(e.to_string()));
                if let crate::domain::FetchError::Network { detail } = &e {
                    rec = rec.with_field("detail", serde_json::json!(detail));
                }
                self.log(rec);
                let err = SearchError::from(e);
                self.transition(SearchState::Failed {
                    message: err.to_string(),
                });
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn transition(&mut self, next: SearchState) {
        self.state = next;
        self.apply();
    }

    /// 現在の状態から導いた Screen を画面へ反映する
    fn apply(&mut self) {
        let screen = self.state.screen();
        if let Some(card) = screen.movie {
            self.view.render_movie(card);
        }
        self.view.set_error(screen.error);
        self.view.set_movie_visible(screen.movie.is_some());
        self.view.set_loading(screen.loading);
    }

    fn log(&self, record: LogRecord) {
        let _ = self.deps.log.log(&record);
    }
}
