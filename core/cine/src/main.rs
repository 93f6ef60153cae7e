mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::CineCommand;
use ports::inbound::UseCaseRunner;
use usecase::search_controller::SubmitOutcome;
use wiring::{wire_cine, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::now(LogLevel::Info, "cli", "lifecycle", "command started")
                .with_field("command", serde_json::json!(command_name)),
        );

        let result = match cmd {
            CineCommand::Help => {
                print_help();
                Ok(0)
            }
            CineCommand::Interactive => self.app.interactive_session().run(),
            CineCommand::Search { title } => {
                let mut controller = self.app.search_controller();
                controller.start();
                controller.set_input(&title);
                match controller.submit() {
                    SubmitOutcome::Found { .. } => Ok(0),
                    SubmitOutcome::Failed(_) | SubmitOutcome::Busy => Ok(1),
                }
            }
            CineCommand::ShowHistory => {
                let history = self.app.history.load();
                let mut view = self.app.new_view();
                if history.is_empty() {
                    view.show_notice("No recent searches.");
                } else {
                    view.render_history(history.entries());
                }
                Ok(0)
            }
            CineCommand::ClearHistory => self.app.history.clear().map(|()| {
                self.app.new_view().show_notice("Recent searches cleared.");
                0
            }),
        };

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(
            &LogRecord::now(LogLevel::Info, "cli", "lifecycle", "command finished")
                .with_field("command", serde_json::json!(command_name))
                .with_field("exit_code", serde_json::json!(code)),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::now(LogLevel::Error, "cli", "error", e.to_string()));
        }
        result
    }
}

fn cmd_name_for_log(cmd: &CineCommand) -> &'static str {
    match cmd {
        CineCommand::Help => "help",
        CineCommand::Interactive => "interactive",
        CineCommand::Search { .. } => "search",
        CineCommand::ShowHistory => "history",
        CineCommand::ClearHistory => "clear-history",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("cine: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_cine(&config)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: cine [options] [title...]");
}

fn print_help() {
    println!("Usage: cine [options] [title...]");
    println!("Options:");
    println!("  -h, --help                Show this help message");
    println!("  -k, --api-key <key>       OMDb API key (overrides OMDB_API_KEY and config.json)");
    println!("      --endpoint <url>      OMDb endpoint URL (default: https://www.omdbapi.com/)");
    println!("  -v, --verbose             Echo log records to stderr");
    println!("      --history             Print recent searches and exit");
    println!("      --clear-history       Forget recent searches and exit");
    println!("      --generate <shell>    Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  CINE_HOME       Base directory for config/, data/ and state/.");
    println!("                  If unset, XDG_CONFIG_HOME / XDG_DATA_HOME / XDG_STATE_HOME are used.");
    println!("  OMDB_API_KEY    OMDb API key.");
    println!();
    println!("Description:");
    println!("  With a title, look it up once and print the result.");
    println!("  Without a title, open the interactive screen (type :help there).");
    println!("  The last 5 successful searches are remembered across runs.");
    println!();
    println!("Examples:");
    println!("  cine Inception");
    println!("  cine --history");
    println!("  cine");
}
