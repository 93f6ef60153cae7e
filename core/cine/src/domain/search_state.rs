//! 検索画面の状態（Idle → Loading → {Showing, Failed}）と、状態から導く表示内容
//!
//! ローディング表示・エラー表示・映画カード表示を個別のフラグで持たず、
//! 1 つの状態から Screen を導くことで矛盾した組み合わせを作れないようにする。

use super::MovieCard;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// 何も表示していない（起動直後）
    #[default]
    Idle,
    /// 取得中
    Loading { term: String },
    /// 直近の検索が成功し、カードを表示中
    Showing(MovieCard),
    /// 直近の検索が失敗し、エラーを表示中
    Failed { message: String },
}

/// 状態から導いた表示内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub movie: Option<&'a MovieCard>,
}

impl SearchState {
    pub fn screen(&self) -> Screen<'_> {
        match self {
            SearchState::Idle => Screen {
                loading: false,
                error: None,
                movie: None,
            },
            SearchState::Loading { .. } => Screen {
                loading: true,
                error: None,
                movie: None,
            },
            SearchState::Showing(card) => Screen {
                loading: false,
                error: None,
                movie: Some(card),
            },
            SearchState::Failed { message } => Screen {
                loading: false,
                error: Some(message),
                movie: None,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }
}
