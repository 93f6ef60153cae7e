//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "cine";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

/// 環境変数の参照関数から Dirs を解決する（テストでは固定の lookup を渡す）
pub fn resolve_dirs_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Dirs, Error> {
    if let Some(home) = lookup("CINE_HOME") {
        return Ok(Dirs::under_home(&HomeDir::new(PathBuf::from(home))));
    }

    let home = lookup("HOME").map(PathBuf::from);
    let xdg = |var: &str, fallback: &[&str]| -> Result<PathBuf, Error> {
        let base = lookup(var).map(PathBuf::from).or_else(|| {
            home.as_ref().map(|h| {
                let mut p = h.clone();
                for seg in fallback {
                    p.push(seg);
                }
                p
            })
        });
        base.map(|b| b.join(APP_DIR_NAME))
            .ok_or_else(|| Error::env(format!("Neither {} nor HOME is set", var)))
    };

    Ok(Dirs {
        config_dir: xdg("XDG_CONFIG_HOME", &[".config"])?,
        data_dir: xdg("XDG_DATA_HOME", &[".local", "share"])?,
        state_dir: xdg("XDG_STATE_HOME", &[".local", "state"])?,
    })
}

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        resolve_dirs_with(non_empty_var)
    }

    fn api_key_from_env(&self) -> Option<String> {
        non_empty_var("OMDB_API_KEY")
    }
}
