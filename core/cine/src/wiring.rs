//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, StdEnvResolver, StdFileSystem, StderrEchoLog};
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem, Log, LogLevel, LogRecord};

use crate::adapter::{FileConfigLoader, FileKeyValueStore, OmdbClient, StdinInput, TerminalView};
use crate::cli::Config;
use crate::ports::outbound::{ConfigLoader, MovieMetadataClient, SearchView};
use crate::usecase::history_store::HistoryStore;
use crate::usecase::search_controller::{SearchController, SearchDeps};
use crate::usecase::session::InteractiveSession;

/// 描画先を作る（本番は端末、テストは記録用）
pub type ViewFactory = Arc<dyn Fn() -> Box<dyn SearchView> + Send + Sync>;

/// main から使う組み立て済みの部品
pub struct App {
    pub logger: Arc<dyn Log>,
    pub history: Arc<HistoryStore>,
    pub client: Arc<dyn MovieMetadataClient>,
    pub placeholder_poster: String,
    pub view: ViewFactory,
}

impl App {
    pub fn new_view(&self) -> Box<dyn SearchView> {
        (self.view)()
    }

    pub fn search_controller(&self) -> SearchController {
        let deps = SearchDeps {
            client: Arc::clone(&self.client),
            history: Arc::clone(&self.history),
            log: Arc::clone(&self.logger),
            placeholder_poster: self.placeholder_poster.clone(),
        };
        SearchController::new(deps, self.new_view())
    }

    /// 標準入力から読む対話画面を作る
    pub fn interactive_session(&self) -> InteractiveSession {
        InteractiveSession::new(self.search_controller(), Box::new(StdinInput::new()))
    }
}

/// 配線: ディレクトリ・設定を解決し、標準アダプタで App を組み立てる
///
/// 設定の優先順位は CLI > OMDB_API_KEY > config.json > 既定値。
pub fn wire_cine(config: &Config) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver = StdEnvResolver;
    let dirs = env_resolver.resolve_dirs()?;

    let file_log: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), dirs.log_file()));
    let logger: Arc<dyn Log> = if config.verbose {
        Arc::new(StderrEchoLog::new(file_log))
    } else {
        file_log
    };

    let settings = FileConfigLoader::new(Arc::clone(&fs), dirs.config_file())
        .load()?
        .with_overrides(env_resolver.api_key_from_env(), None)
        .with_overrides(config.api_key.clone(), config.endpoint.clone());
    let _ = logger.log(
        &LogRecord::now(LogLevel::Debug, "wiring", "config", "configuration resolved")
            .with_field("endpoint", serde_json::json!(settings.endpoint))
            .with_field("data_dir", serde_json::json!(dirs.data_dir.display().to_string())),
    );

    let client: Arc<dyn MovieMetadataClient> =
        Arc::new(OmdbClient::new(settings.endpoint.clone(), settings.api_key.clone())?);
    let kv = Arc::new(FileKeyValueStore::new(fs, dirs.data_dir.clone()));
    let history = Arc::new(HistoryStore::new(kv, Arc::clone(&logger)));

    Ok(App {
        logger,
        history,
        client,
        placeholder_poster: settings.placeholder_poster,
        view: Arc::new(|| Box::new(TerminalView::stdout()) as Box<dyn SearchView>),
    })
}
