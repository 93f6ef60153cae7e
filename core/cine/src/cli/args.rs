use crate::domain::CineCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    /// --history: 最近の検索を表示して終了
    pub show_history: bool,
    /// --clear-history: 最近の検索を消去して終了
    pub clear_history: bool,
    /// -k / --api-key: OMDb の API キー（OMDB_API_KEY・config.json より優先）
    pub api_key: Option<String>,
    /// --endpoint: OMDb のエンドポイント URL
    pub endpoint: Option<String>,
    /// タイトル（空白区切りの語を結合する）。空なら対話画面。
    pub title_words: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("cine")
        .about("Look up a movie by title on OMDb and keep a short list of recent searches")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Echo log records to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("history")
                .long("history")
                .help("Print recent searches and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("clear-history")
                .long("clear-history")
                .help("Forget recent searches and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("key")
                .help("OMDb API key (overrides OMDB_API_KEY and config.json)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("endpoint")
                .long("endpoint")
                .value_name("url")
                .help("OMDb endpoint URL")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("title")
                .index(1)
                .help("Movie title to look up once (omit for the interactive screen)")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        show_history: matches.get_flag("history"),
        clear_history: matches.get_flag("clear-history"),
        api_key: matches.get_one::<String>("api-key").cloned(),
        endpoint: matches.get_one::<String>("endpoint").cloned(),
        title_words: matches
            .get_many::<String>("title")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "cine", &mut std::io::stdout());
}

/// Config を CineCommand に変換する
pub fn config_to_command(config: Config) -> CineCommand {
    if config.help {
        return CineCommand::Help;
    }

    if config.clear_history {
        return CineCommand::ClearHistory;
    }

    if config.show_history {
        return CineCommand::ShowHistory;
    }

    if config.title_words.is_empty() {
        return CineCommand::Interactive;
    }

    CineCommand::Search {
        title: config.title_words.join(" "),
    }
}
