//! 標準入力から 1 行ずつ読む InputSource 実装

use crate::ports::outbound::InputSource;
use common::error::Error;
use std::io::{self, BufRead, Write};

pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        print!("{}", prompt);
        io::stdout()
            .flush()
            .map_err(|e| Error::io_msg(format!("Failed to flush stdout: {}", e)))?;
        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read stdin: {}", e)))?;
        if n == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
