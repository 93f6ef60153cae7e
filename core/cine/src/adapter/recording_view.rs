//! テスト用: SearchView への呼び出しを記録する


#[cfg(test)]
pub use recording::{RecordingView, ViewCall};
