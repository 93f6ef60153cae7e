//! cine コマンドの enum（Command Pattern）
//!
//! 対話画面 / 1 回検索 / 履歴操作の分岐を enum で明示する。

#[derive(Debug, Clone, PartialEq)]
pub enum CineCommand {
    /// ヘルプ表示
    Help,
    /// 対話画面（タイトル未指定時）
    Interactive,
    /// 1 回だけ検索して終了
    Search { title: String },
    /// 最近の検索を表示して終了
    ShowHistory,
    /// 最近の検索を消去して終了
    ClearHistory,
}
