//! 設定読み込み Outbound ポート

use crate::domain::CineConfig;
use common::error::Error;

/// 設定ファイルから CineConfig を得る能力。ファイルが無ければ既定値。
pub trait ConfigLoader: Send + Sync {
    fn load(&self) -> Result<CineConfig, Error>;
}
