//! 対話画面の 1 行入力をユーザー操作に解釈する

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// 入力欄にテキストを入れて検索（空白のみでも検索トリガーとして扱う）
    Search(String),
    /// 入力欄をクリアしてフォーカスを戻す
    Clear,
    /// 最近の検索を再表示
    ShowHistory,
    /// 最近の検索の n 番目（1 始まり）で再検索
    SelectHistory(usize),
    Help,
    Quit,
    /// 解釈できない `:` コマンド
    Unknown(String),
}

impl UiAction {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if let Some(n) = trimmed.strip_prefix('!') {
            if let Ok(n) = n.parse::<usize>() {
                return UiAction::SelectHistory(n);
            }
        }
        let Some(cmd) = trimmed.strip_prefix(':') else {
            return UiAction::Search(line.to_string());
        };
        if let Ok(n) = cmd.parse::<usize>() {
            return UiAction::SelectHistory(n);
        }
        match cmd {
            "q" | "quit" | "exit" => UiAction::Quit,
            "c" | "clear" => UiAction::Clear,
            "h" | "history" => UiAction::ShowHistory,
            "help" | "?" => UiAction::Help,
            _ => UiAction::Unknown(trimmed.to_string()),
        }
    }
}
