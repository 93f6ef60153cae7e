//! 検索画面の描画 Outbound ポート
//!
//! 各操作は互いに独立。どの順で呼ぶかの整合は SearchController が持つ。

use crate::domain::MovieCard;

pub trait SearchView: Send {
    /// カードの各項目を書き込む（表示/非表示は set_movie_visible で切り替える）
    fn render_movie(&mut self, card: &MovieCard);
    /// 最近の検索を作り直す。空なら履歴セクションごと隠す。
    /// 各項目は 1 始まりの番号で選択でき、選択は SearchController::select_history に届く。
    fn render_history(&mut self, entries: &[String]);
    fn set_loading(&mut self, loading: bool);
    fn set_error(&mut self, message: Option<&str>);
    fn set_movie_visible(&mut self, visible: bool);
    /// 入力欄の内容を反映する（クリア操作は入力が空でないときだけ有効）
    fn set_input(&mut self, text: &str);
    fn focus_input(&mut self);
    /// ヘルプ等の補助メッセージ
    fn show_notice(&mut self, text: &str);
}
