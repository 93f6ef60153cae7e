//! 実行時ディレクトリ（XDG / CINE_HOME 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、設定・履歴・ログのパス計算に使う。

use std::path::PathBuf;

use super::HomeDir;

const CONFIG_FILENAME: &str = "config.json";
const LOG_FILENAME: &str = "cine.jsonl";

/// 解決済みの config / data / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// CINE_HOME 配下にすべてを置く構成
    pub fn under_home(home: &HomeDir) -> Self {
        Self {
            config_dir: home.join("config"),
            data_dir: home.join("data"),
            state_dir: home.join("state"),
        }
    }

    /// 設定ファイル（config/config.json）
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILENAME)
    }

    /// ログ格納ディレクトリ（state/logs）
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_home_layout() {
        let dirs = Dirs::under_home(&HomeDir::new("/tmp/cine-home"));
        assert_eq!(dirs.config_file(), PathBuf::from("/tmp/cine-home/config/config.json"));
        assert_eq!(dirs.data_dir, PathBuf::from("/tmp/cine-home/data"));
        assert_eq!(dirs.log_file(), PathBuf::from("/tmp/cine-home/state/logs/cine.jsonl"));
    }
}
