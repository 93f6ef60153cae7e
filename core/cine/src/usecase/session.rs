//! 対話画面のループ（1 行読む → UiAction に解釈 → SearchController に渡す）

use crate::domain::UiAction;
use crate::ports::outbound::InputSource;
use crate::usecase::search_controller::SearchController;
use common::error::Error;

pub const PROMPT: &str = "cine> ";

pub const HELP: &str = "\
Type a movie title and press Enter to search.
  :<n> or !<n>   search recent entry n again
  :history       show recent searches
  :clear         clear the input
  :help          show this help
  :quit          exit";

pub struct InteractiveSession {
    controller: SearchController,
    input: Box<dyn InputSource>,
}

impl InteractiveSession {
    pub fn new(controller: SearchController, input: Box<dyn InputSource>) -> Self {
        Self { controller, input }
    }

    /// 入力終端または :quit まで繰り返す。検索の失敗は画面に出すだけで終了コードは 0。
    pub fn run(&mut self) -> Result<i32, Error> {
        self.controller.start();
        loop {
            let Some(line) = self.input.read_line(PROMPT)? else {
                return Ok(0);
            };
            match UiAction::parse(&line) {
                UiAction::Quit => return Ok(0),
                UiAction::Clear => self.controller.clear(),
                UiAction::ShowHistory => {
                    if self.controller.history().is_empty() {
                        self.controller.notify("No recent searches.");
                    } else {
                        self.controller.refresh_history();
                    }
                }
                UiAction::Help => self.controller.notify(HELP),
                UiAction::SelectHistory(n) => {
                    if self.controller.select_history(n).is_none() {
                        self.controller
                            .notify(&format!("No recent search #{}.", n));
                    }
                }
                UiAction::Unknown(cmd) => {
                    self.controller
                        .notify(&format!("Unknown command: {} (type :help)", cmd));
                }
                UiAction::Search(text) => {
                    self.controller.set_input(&text);
                    self.controller.submit();
                }
            }
        }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &SearchController {
        &self.controller
    }
}
