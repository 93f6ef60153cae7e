//! 対話入力 Outbound ポート

use common::error::Error;

pub trait InputSource {
    /// prompt を出して 1 行読む。入力終端なら Ok(None)。
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error>;
}
